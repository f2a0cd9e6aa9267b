mod common;

use common::{fixture, BrokenImages, RecordingTarget, StaticSource};
use std::time::Duration;
use tokio_test::assert_ok;
use travel_finder::core::render::{RenderPipeline, DEFAULT_PLACEHOLDER_IMAGE};
use travel_finder::core::timezone::TimeZoneTable;
use travel_finder::{PassOutcome, TravelSession};

fn session() -> TravelSession<StaticSource, RecordingTarget> {
    TravelSession::new(
        StaticSource(fixture()),
        RecordingTarget::default(),
        RenderPipeline::default(),
    )
}

#[tokio::test]
async fn test_live_clock_value_changes_over_time() {
    let mut session = session();
    assert_ok!(session.search("angkor").await);

    let clock = session.target().last().cards()[0]
        .clock
        .clone()
        .expect("clock for Angkor Wat");

    let before = clock.current();
    tokio::time::sleep(Duration::from_millis(1200)).await;
    let after = clock.current();

    assert_ne!(before, after);
}

#[tokio::test]
async fn test_destination_without_zone_gets_no_clock() {
    let mut session = TravelSession::new(
        StaticSource(fixture()),
        RecordingTarget::default(),
        RenderPipeline::new(TimeZoneTable::empty()),
    );

    let outcome = session.search("angkor").await.unwrap();

    assert_eq!(outcome, PassOutcome::Rendered { cards: 1, clocks: 0 });
    assert!(session.target().last().cards()[0].clock.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_new_pass_cancels_previous_clocks() {
    let mut session = session();

    session.search("temple").await.unwrap();
    let old_clock = session.target().last().cards()[0].clock.clone().unwrap();
    assert_eq!(session.active_clocks(), 1);

    session.search("country").await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;

    assert!(!old_clock.is_live());
    assert_eq!(session.active_clocks(), 1);
    assert_eq!(session.clocks().zones(), vec![chrono_tz::Asia::Tokyo]);

    session.search("zz-no-match").await.unwrap();
    assert_eq!(session.active_clocks(), 0);
}

#[tokio::test]
async fn test_reset_stops_clocks_and_drops_cache() {
    let mut session = session();
    session.load_featured().await.unwrap();
    assert_eq!(session.active_clocks(), 3);

    session.reset();

    assert_eq!(session.active_clocks(), 0);
    assert!(!session.cache().is_loaded());
    assert!(session.current_view().is_none());
}

#[tokio::test]
async fn test_broken_images_fall_back_to_placeholder() {
    let mut session = session().with_image_probe(Box::new(BrokenImages));

    session.load_featured().await.unwrap();

    for card in session.target().last().cards() {
        assert_eq!(card.image.src, DEFAULT_PLACEHOLDER_IMAGE);
        assert!(card.image.fallback_applied());
    }
}
