use crate::core::session::UiAction;
use crate::domain::ports::RenderTarget;
use crate::domain::view::{Card, LiveClock, RenderedView, ViewContent};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const HELP: &str = "Commands:
  search <text>   search destinations (beach, temple, country or any name)
  <text>          same as search
  clear           clear the search and show featured destinations
  view <n>        show details for result n
  clocks          show the local time of every destination on screen
  help            show this help
  quit            exit";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(UiAction),
    Clocks,
    Help,
    Quit,
    Invalid(String),
}

/// Parse a prompt line. Anything that is not a command word is a search;
/// `view` takes the one-based position shown next to each card.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word.to_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        "clocks" => Command::Clocks,
        "clear" => Command::Action(UiAction::Clear),
        "search" => Command::Action(UiAction::Search(rest.trim().to_string())),
        "view" => match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => Command::Action(UiAction::ViewDetails(n - 1)),
            _ => Command::Invalid(format!("'{}' is not a result number", rest.trim())),
        },
        _ => Command::Action(UiAction::Search(line.to_string())),
    }
}

/// Text rendering of the results area, plus the input line.
pub struct TerminalView<R: BufRead, W: Write> {
    input: R,
    output: W,
    clocks: Vec<(String, LiveClock)>,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clocks: Vec::new(),
        }
    }

    /// Show `prompt` and read one line. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print the current value of every clock on screen.
    pub fn print_clocks(&mut self) -> Result<()> {
        if self.clocks.is_empty() {
            writeln!(self.output, "No live clocks on screen.")?;
            return Ok(());
        }
        for (name, clock) in &self.clocks {
            writeln!(self.output, "{:<40} {} ({})", name, clock.current(), clock.zone.name())?;
        }
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    fn write_card(&mut self, position: usize, card: &Card) -> Result<()> {
        writeln!(self.output, "[{}] {}", position, card.name)?;
        if let Some(clock) = &card.clock {
            writeln!(self.output, "    Local time: {}", clock.current())?;
        }
        if !card.description.is_empty() {
            writeln!(self.output, "    {}", card.description)?;
        }
        writeln!(self.output, "    Image: {}", card.image.src)?;
        writeln!(self.output, "    (view {} for more)", position)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> RenderTarget for TerminalView<R, W> {
    fn clear(&mut self) -> Result<()> {
        self.clocks.clear();
        Ok(())
    }

    fn show(&mut self, view: &RenderedView) -> Result<()> {
        if let Some(heading) = &view.heading {
            writeln!(self.output, "== {} ==", heading)?;
        }

        match &view.content {
            ViewContent::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    self.write_card(i + 1, card)?;
                    if let Some(clock) = &card.clock {
                        self.clocks.push((card.name.clone(), clock.clone()));
                    }
                }
                writeln!(self.output, "{} result(s)", cards.len())?;
            }
            ViewContent::NoResults(message) | ViewContent::Error(message) => {
                writeln!(self.output, "{}", message)?;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "*** {} ***", message)?;
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;

        let mut ack = String::new();
        self.input.read_line(&mut ack)?;
        Ok(())
    }
}
