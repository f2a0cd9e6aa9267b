use clap::Parser;
use travel_finder::adapters::terminal::{parse_command, Command, HELP};
use travel_finder::adapters::{data_source_for, http::HttpImageProbe};
use travel_finder::utils::logger::{self, LogFormat};
use travel_finder::utils::validation::Validate;
use travel_finder::{CliConfig, PassOutcome, TerminalView, TomlConfig, TravelError, TravelSession, UiAction};

fn load_config(cli: &CliConfig) -> Result<TomlConfig, TravelError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    cli.apply_to(&mut config)?;
    config.validate()?;
    Ok(config)
}

async fn run(cli: CliConfig, config: TomlConfig) -> Result<(), TravelError> {
    use travel_finder::domain::ports::ConfigProvider;

    let source = data_source_for(config.data_source());
    let view = TerminalView::new(std::io::stdin().lock(), std::io::stdout());
    let mut session = TravelSession::from_config(source, view, &config)?;
    if config.check_images() {
        session = session.with_image_probe(Box::new(HttpImageProbe::default()));
    }

    if let Some(query) = &cli.query {
        let outcome = session.run_query(query).await?;
        tracing::debug!("One-shot search finished: {:?}", outcome);
        return Ok(());
    }

    session.dispatch(UiAction::Load).await?;
    session.target_mut().println("Type 'help' for commands.")?;

    while let Some(line) = session.target_mut().prompt("search> ")? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => session.target_mut().println(HELP)?,
            Command::Clocks => session.target_mut().print_clocks()?,
            Command::Invalid(message) => session.target_mut().println(&message)?,
            Command::Action(action) => {
                if session.dispatch(action).await? == PassOutcome::NoSuchCard {
                    session.target_mut().println("No result with that number.")?;
                }
            }
        }
    }

    session.reset();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(LogFormat::from_flag(cli.log_json), cli.verbose);

    tracing::info!("Starting travel-finder");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config).await {
        tracing::error!(
            "❌ travel-finder failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let code = e.exit_code();
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
