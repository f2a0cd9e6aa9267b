use crate::core::clock::{ClockRegistry, DEFAULT_CLOCK_INTERVAL};
use crate::core::timezone::TimeZoneTable;
use crate::domain::model::Destination;
use crate::domain::ports::{SystemTimeSource, TimeSource};
use crate::domain::view::{Card, ImageSlot, RenderedView, ViewContent};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1488646953014-85cb44e25828?q=80&w=800";
pub const DEFAULT_FEATURED_HEADING: &str = "Featured destinations";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load recommendations.";

/// Builds cards from resolved records and starts their clocks.
pub struct RenderPipeline {
    zones: TimeZoneTable,
    time: Arc<dyn TimeSource>,
    clock_interval: Duration,
    placeholder_image: String,
    featured_heading: String,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(TimeZoneTable::default())
    }
}

impl RenderPipeline {
    pub fn new(zones: TimeZoneTable) -> Self {
        Self {
            zones,
            time: Arc::new(SystemTimeSource),
            clock_interval: DEFAULT_CLOCK_INTERVAL,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            featured_heading: DEFAULT_FEATURED_HEADING.to_string(),
        }
    }

    pub fn with_time_source(mut self, time: Arc<dyn TimeSource>) -> Self {
        self.time = time;
        self
    }

    pub fn with_clock_interval(mut self, interval: Duration) -> Self {
        self.clock_interval = interval;
        self
    }

    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    pub fn with_featured_heading(mut self, heading: impl Into<String>) -> Self {
        self.featured_heading = heading.into();
        self
    }

    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    /// Render one pass. The registry is expected to be cleared by the caller
    /// before the pass starts; every clock created here is registered in it.
    ///
    /// # Panics
    ///
    /// Clocks are tokio tasks, so rendering a record with a known time zone
    /// panics outside a tokio runtime. Empty results never spawn anything.
    pub fn render(&self, results: &[Destination], clocks: &mut ClockRegistry) -> RenderedView {
        if results.is_empty() {
            return RenderedView {
                heading: None,
                content: ViewContent::NoResults(NO_RESULTS_MESSAGE.to_string()),
            };
        }

        let cards = results
            .iter()
            .map(|record| self.card(record, clocks))
            .collect::<Vec<_>>();

        tracing::info!(
            "Rendered {} result(s), {} with a live clock",
            cards.len(),
            clocks.len()
        );

        RenderedView {
            heading: None,
            content: ViewContent::Cards(cards),
        }
    }

    /// Same as [`render`](Self::render) with the featured heading on top.
    pub fn render_featured(
        &self,
        results: &[Destination],
        clocks: &mut ClockRegistry,
    ) -> RenderedView {
        let mut view = self.render(results, clocks);
        view.heading = Some(self.featured_heading.clone());
        view
    }

    pub fn render_error(&self) -> RenderedView {
        RenderedView {
            heading: None,
            content: ViewContent::Error(FETCH_ERROR_MESSAGE.to_string()),
        }
    }

    fn card(&self, record: &Destination, clocks: &mut ClockRegistry) -> Card {
        let clock = self
            .zones
            .lookup(&record.name)
            .map(|zone| clocks.start(zone, self.clock_interval, Arc::clone(&self.time)));

        Card {
            name: record.name.clone(),
            description: record.description.clone(),
            image: ImageSlot::new(record.image_url.clone(), record.name.clone()),
            clock,
        }
    }
}
