use chrono_tz::Tz;
use tokio::sync::watch;

/// Image shown on a card. Falls back to a placeholder at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    pub src: String,
    pub alt: String,
    fallback_applied: bool,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            fallback_applied: false,
        }
    }

    /// Handle a load failure. Returns `true` if the source was swapped; once the
    /// placeholder is in place further failures are ignored.
    pub fn on_load_error(&mut self, placeholder: &str) -> bool {
        if self.fallback_applied {
            return false;
        }
        self.fallback_applied = true;
        self.src = placeholder.to_string();
        tracing::debug!("Image for {} failed to load, using placeholder", self.alt);
        true
    }

    pub fn fallback_applied(&self) -> bool {
        self.fallback_applied
    }
}

/// Read side of a running clock. The text is refreshed by the clock task.
#[derive(Debug, Clone)]
pub struct LiveClock {
    pub zone: Tz,
    display: watch::Receiver<String>,
}

impl LiveClock {
    pub fn new(zone: Tz, display: watch::Receiver<String>) -> Self {
        Self { zone, display }
    }

    pub fn current(&self) -> String {
        self.display.borrow().clone()
    }

    /// `false` once the owning clock has been cancelled.
    pub fn is_live(&self) -> bool {
        self.display.has_changed().is_ok()
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    pub name: String,
    pub description: String,
    pub image: ImageSlot,
    pub clock: Option<LiveClock>,
}

impl Card {
    pub fn detail_message(&self) -> String {
        format!("You selected to visit {}!", self.name)
    }
}

#[derive(Debug, Clone)]
pub enum ViewContent {
    Cards(Vec<Card>),
    NoResults(String),
    Error(String),
}

/// Everything one render pass puts in the results area.
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub heading: Option<String>,
    pub content: ViewContent,
}

impl RenderedView {
    pub fn cards(&self) -> &[Card] {
        match &self.content {
            ViewContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self.content, ViewContent::NoResults(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self.content, ViewContent::Error(_))
    }

    pub fn clock_count(&self) -> usize {
        self.cards().iter().filter(|card| card.clock.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fallback_applied_once() {
        let mut image = ImageSlot::new("broken.jpg", "Kyoto");
        assert!(image.on_load_error("placeholder.jpg"));
        assert_eq!(image.src, "placeholder.jpg");
        assert!(image.fallback_applied());

        // a failing placeholder must not loop
        assert!(!image.on_load_error("other.jpg"));
        assert_eq!(image.src, "placeholder.jpg");
    }

    #[test]
    fn test_detail_message_names_destination() {
        let card = Card {
            name: "Bora Bora".to_string(),
            description: String::new(),
            image: ImageSlot::new("", "Bora Bora"),
            clock: None,
        };
        assert_eq!(card.detail_message(), "You selected to visit Bora Bora!");
    }

    #[test]
    fn test_live_clock_reports_closed_sender() {
        let (tx, rx) = watch::channel("1:00:00 PM".to_string());
        let clock = LiveClock::new(chrono_tz::Asia::Tokyo, rx);
        assert!(clock.is_live());
        assert_eq!(clock.current(), "1:00:00 PM");
        drop(tx);
        assert!(!clock.is_live());
    }
}
