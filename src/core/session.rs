//! A search session: the dataset cache, the live clocks and the render target,
//! driven by explicit UI actions.

use crate::core::cache::DatasetCache;
use crate::core::classifier::{classify, Classification};
use crate::core::clock::ClockRegistry;
use crate::core::render::RenderPipeline;
use crate::core::resolver::resolve;
use crate::core::timezone::TimeZoneTable;
use crate::domain::ports::{ConfigProvider, DataSource, ImageProbe, RenderTarget};
use crate::domain::view::{RenderedView, ViewContent};
use crate::utils::error::{FetchError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Initial page load: show the featured set.
    Load,
    Search(String),
    Clear,
    /// Detail control of the card at this (zero-based) position.
    ViewDetails(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Rendered { cards: usize, clocks: usize },
    NoResults,
    /// The dataset could not be fetched; an inline error is shown.
    Failed,
    Alerted,
    NoSuchCard,
}

pub struct TravelSession<S: DataSource, T: RenderTarget> {
    cache: DatasetCache<S>,
    clocks: ClockRegistry,
    renderer: RenderPipeline,
    target: T,
    image_probe: Option<Box<dyn ImageProbe>>,
    current: Option<RenderedView>,
    last_fetch_error: Option<FetchError>,
}

impl<S: DataSource, T: RenderTarget> TravelSession<S, T> {
    pub fn new(source: S, target: T, renderer: RenderPipeline) -> Self {
        Self {
            cache: DatasetCache::new(source),
            clocks: ClockRegistry::new(),
            renderer,
            target,
            image_probe: None,
            current: None,
            last_fetch_error: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(source: S, target: T, config: &C) -> Result<Self> {
        let zones = TimeZoneTable::with_overrides(&config.time_zone_overrides())?;
        let renderer = RenderPipeline::new(zones)
            .with_clock_interval(config.clock_interval())
            .with_placeholder_image(config.placeholder_image())
            .with_featured_heading(config.featured_heading());
        Ok(Self::new(source, target, renderer))
    }

    pub fn with_image_probe(mut self, probe: Box<dyn ImageProbe>) -> Self {
        self.image_probe = Some(probe);
        self
    }

    pub async fn dispatch(&mut self, action: UiAction) -> Result<PassOutcome> {
        tracing::debug!("Handling {:?}", action);
        match action {
            UiAction::Load => self.load_featured().await,
            UiAction::Search(input) => self.search(&input).await,
            UiAction::Clear => self.clear().await,
            UiAction::ViewDetails(index) => self.view_details(index),
        }
    }

    pub async fn load_featured(&mut self) -> Result<PassOutcome> {
        self.run_pass(Classification::Featured).await
    }

    /// Empty or whitespace-only input shows the featured set again.
    pub async fn search(&mut self, input: &str) -> Result<PassOutcome> {
        let classification = classify(input);
        tracing::info!("Search for \"{}\" classified as {:?}", input.trim(), classification);
        self.run_pass(classification).await
    }

    /// Search once and report a failed fetch as an error instead of only
    /// rendering it inline. Used by non-interactive runs.
    pub async fn run_query(&mut self, input: &str) -> Result<PassOutcome> {
        let outcome = self.search(input).await?;
        if outcome == PassOutcome::Failed {
            if let Some(e) = self.last_fetch_error.take() {
                return Err(e.into());
            }
        }
        Ok(outcome)
    }

    pub async fn clear(&mut self) -> Result<PassOutcome> {
        self.target.reset_input()?;
        self.run_pass(Classification::Featured).await
    }

    pub fn view_details(&mut self, index: usize) -> Result<PassOutcome> {
        let message = self
            .current
            .as_ref()
            .and_then(|view| view.cards().get(index))
            .map(|card| card.detail_message());

        match message {
            Some(message) => {
                self.target.alert(&message)?;
                Ok(PassOutcome::Alerted)
            }
            None => {
                tracing::warn!("No card at position {}", index + 1);
                Ok(PassOutcome::NoSuchCard)
            }
        }
    }

    async fn run_pass(&mut self, classification: Classification) -> Result<PassOutcome> {
        // clocks from the previous pass go away before anything else happens
        self.clocks.clear_all();
        self.current = None;
        self.last_fetch_error = None;
        self.target.clear()?;

        let dataset = match self.cache.get_data().await {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!("Failed to load destinations: {}", e);
                let view = self.renderer.render_error();
                self.target.show(&view)?;
                self.current = Some(view);
                self.last_fetch_error = Some(e);
                return Ok(PassOutcome::Failed);
            }
        };

        let results = resolve(&dataset, &classification);
        tracing::debug!("Resolved {} record(s)", results.len());

        let mut view = match classification {
            Classification::Featured => self.renderer.render_featured(&results, &mut self.clocks),
            _ => self.renderer.render(&results, &mut self.clocks),
        };
        self.apply_image_fallbacks(&mut view).await;

        self.target.show(&view)?;
        let outcome = match &view.content {
            ViewContent::Cards(cards) => PassOutcome::Rendered {
                cards: cards.len(),
                clocks: self.clocks.len(),
            },
            ViewContent::NoResults(_) => PassOutcome::NoResults,
            ViewContent::Error(_) => PassOutcome::Failed,
        };
        self.current = Some(view);
        Ok(outcome)
    }

    async fn apply_image_fallbacks(&self, view: &mut RenderedView) {
        let Some(probe) = &self.image_probe else {
            return;
        };
        let ViewContent::Cards(cards) = &mut view.content else {
            return;
        };

        for card in cards.iter_mut() {
            if !probe.is_loadable(&card.image.src).await
                && card.image.on_load_error(self.renderer.placeholder_image())
            {
                tracing::info!("Image for {} unavailable, using placeholder", card.name);
            }
        }
    }

    pub fn current_view(&self) -> Option<&RenderedView> {
        self.current.as_ref()
    }

    /// Why the most recent pass failed to load the dataset, if it did.
    pub fn last_fetch_error(&self) -> Option<&FetchError> {
        self.last_fetch_error.as_ref()
    }

    pub fn active_clocks(&self) -> usize {
        self.clocks.len()
    }

    pub fn clocks(&self) -> &ClockRegistry {
        &self.clocks
    }

    pub fn cache(&self) -> &DatasetCache<S> {
        &self.cache
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Stop all clocks and forget the cached dataset.
    pub fn reset(&mut self) {
        self.clocks.clear_all();
        self.cache.reset();
        self.current = None;
        self.last_fetch_error = None;
    }
}
