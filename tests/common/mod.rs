#![allow(dead_code)]

use async_trait::async_trait;
use travel_finder::domain::model::Dataset;
use travel_finder::domain::ports::{DataSource, ImageProbe, RenderTarget};
use travel_finder::domain::view::RenderedView;
use travel_finder::{FetchError, Result};

pub fn fixture_json() -> serde_json::Value {
    serde_json::json!({
        "countries": [
            {
                "name": "Japan",
                "cities": [
                    {"name": "Tokyo", "description": "Neon and shrines", "imageUrl": "https://img.example.com/tokyo.jpg"}
                ]
            }
        ],
        "temples": [
            {"name": "Angkor Wat", "description": "Khmer temple complex", "imageUrl": "https://img.example.com/angkor.jpg"}
        ],
        "beaches": [
            {"name": "Bora Bora", "description": "Turquoise lagoon", "imageUrl": "https://img.example.com/bora.jpg"}
        ]
    })
}

pub fn fixture() -> Dataset {
    serde_json::from_value(fixture_json()).unwrap()
}

/// Serves a fixed dataset from memory.
pub struct StaticSource(pub Dataset);

#[async_trait]
impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> std::result::Result<Dataset, FetchError> {
        Ok(self.0.clone())
    }
}

/// Every image fails to load.
pub struct BrokenImages;

#[async_trait]
impl ImageProbe for BrokenImages {
    async fn is_loadable(&self, _url: &str) -> bool {
        false
    }
}

#[derive(Default)]
pub struct RecordingTarget {
    pub clears: usize,
    pub input_resets: usize,
    pub shown: Vec<RenderedView>,
    pub alerts: Vec<String>,
}

impl RecordingTarget {
    pub fn last(&self) -> &RenderedView {
        self.shown.last().expect("nothing rendered")
    }

    pub fn last_names(&self) -> Vec<String> {
        self.last().cards().iter().map(|c| c.name.clone()).collect()
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn show(&mut self, view: &RenderedView) -> Result<()> {
        self.shown.push(view.clone());
        Ok(())
    }

    fn alert(&mut self, message: &str) -> Result<()> {
        self.alerts.push(message.to_string());
        Ok(())
    }

    fn reset_input(&mut self) -> Result<()> {
        self.input_resets += 1;
        Ok(())
    }
}
