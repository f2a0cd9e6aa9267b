mod common;

use common::RecordingTarget;
use std::path::PathBuf;
use travel_finder::config::toml_config::DEFAULT_DATA_SOURCE;
use travel_finder::domain::ports::DataSource;
use travel_finder::{FileDataSource, PassOutcome, TomlConfig, TravelSession, UiAction};

fn bundled_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_SOURCE)
}

#[tokio::test]
async fn test_bundled_dataset_loads() {
    let dataset = FileDataSource::new(bundled_path()).fetch().await.unwrap();

    assert_eq!(dataset.countries.len(), 3);
    assert_eq!(dataset.all_cities().count(), 6);
    assert_eq!(dataset.temples.len(), 2);
    assert_eq!(dataset.beaches.len(), 2);
    assert!(dataset
        .all_cities()
        .chain(&dataset.temples)
        .chain(&dataset.beaches)
        .all(|d| !d.description.is_empty() && d.image_url.starts_with("https://")));
}

#[tokio::test]
async fn test_every_bundled_destination_has_a_clock() {
    let mut session = TravelSession::from_config(
        FileDataSource::new(bundled_path()),
        RecordingTarget::default(),
        &TomlConfig::default(),
    )
    .unwrap();

    for query in ["country", "temple", "beach"] {
        let outcome = session.search(query).await.unwrap();
        let PassOutcome::Rendered { cards, clocks } = outcome else {
            panic!("expected cards for {}, got {:?}", query, outcome);
        };
        assert_eq!(cards, clocks, "every {} result should carry a clock", query);
    }
}

#[tokio::test]
async fn test_bundled_featured_and_free_text() {
    let mut session = TravelSession::from_config(
        FileDataSource::new(bundled_path()),
        RecordingTarget::default(),
        &TomlConfig::default(),
    )
    .unwrap();

    session.dispatch(UiAction::Load).await.unwrap();
    assert_eq!(
        session.target().last_names(),
        vec![
            "Sydney, Australia",
            "Angkor Wat, Cambodia",
            "Bora Bora, French Polynesia"
        ]
    );

    session.search("Brazil").await.unwrap();
    assert_eq!(
        session.target().last_names(),
        vec![
            "Rio de Janeiro, Brazil",
            "São Paulo, Brazil",
            "Copacabana Beach, Brazil"
        ]
    );
}
