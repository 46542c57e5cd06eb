//! Integration tests for alma
//!
//! These tests drive the controller end to end against a temporary sled
//! database, with fake clipboard, share target and clock.

use alma_lux::app::{Action, App, AppBuilder, View};
use alma_lux::capabilities::mock::{RecordingClipboard, StubShare};
use alma_lux::db::{CORRUPT_KEY, Database, FAVORITES_KEY, KeyValueStore, PersistenceStore};
use alma_lux::feedback::{self, ManualClock};
use alma_lux::phrases::{self, CategoryFilter, CategoryTag, Phrase, categorize};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use std::time::Duration;

/// Helper function to build a controller over the sled database at `path`
fn open_app(path: &Path, clipboard: RecordingClipboard, clock: ManualClock) -> App<Database> {
    let db = Database::open(path).unwrap();
    AppBuilder::new(phrases::default_dataset().unwrap(), PersistenceStore::new(db))
        .with_clipboard(clipboard)
        .with_share(StubShare::unavailable())
        .with_clock(clock)
        .with_rng(StdRng::seed_from_u64(11))
        .build()
        .unwrap()
}

#[test]
fn test_favorites_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites");

    let saved = {
        let mut app = open_app(&path, RecordingClipboard::new(), ManualClock::new());
        app.dispatch(Action::Favorite).unwrap();
        app.dispatch(Action::SetCategory(CategoryFilter::Only(CategoryTag::Maria)))
            .unwrap();
        app.dispatch(Action::Favorite).unwrap();
        app.favorites().favorites().to_vec()
    };
    assert_eq!(saved.len(), 2);

    let app = open_app(&path, RecordingClipboard::new(), ManualClock::new());
    assert_eq!(app.favorites().favorites(), saved.as_slice());
}

#[test]
fn test_add_then_remove_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites");
    let mut app = open_app(&path, RecordingClipboard::new(), ManualClock::new());

    app.dispatch(Action::Favorite).unwrap();
    assert_eq!(app.favorites().favorites(), &[app.current().clone()]);

    app.dispatch(Action::ToggleView).unwrap();
    app.dispatch(Action::RemoveFavorite(0)).unwrap();

    assert!(app.favorites().is_empty());
    assert_eq!(app.feedback().text(), Some(feedback::FAVORITE_REMOVED));
    assert_eq!(app.state().view, View::Favorites);
}

#[test]
fn test_every_category_can_be_browsed() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = open_app(
        &dir.path().join("favorites"),
        RecordingClipboard::new(),
        ManualClock::new(),
    );

    let categories = app.categories();
    assert_eq!(categories[0], CategoryFilter::All);
    assert_eq!(categories.len(), 6);

    for filter in categories {
        app.dispatch(Action::SetCategory(filter)).unwrap();
        for _ in 0..20 {
            app.dispatch(Action::NewPhrase).unwrap();
            assert!(filter.matches(app.current().category));
        }
    }
}

#[test]
fn test_copy_and_share_fallback_use_clipboard() {
    let dir = tempfile::tempdir().unwrap();
    let clipboard = RecordingClipboard::new();
    let mut app = open_app(
        &dir.path().join("favorites"),
        clipboard.clone(),
        ManualClock::new(),
    );

    app.dispatch(Action::Copy).unwrap();
    assert_eq!(app.feedback().text(), Some(feedback::COPIED));

    app.dispatch(Action::Share).unwrap();
    assert_eq!(app.feedback().text(), Some(feedback::LINK_COPIED));

    let expected = app.current().formatted();
    assert_eq!(clipboard.writes(), vec![expected.clone(), expected]);
}

#[test]
fn test_feedback_timer_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new();
    let mut app = open_app(
        &dir.path().join("favorites"),
        RecordingClipboard::new(),
        clock.clone(),
    );

    app.dispatch(Action::Copy).unwrap();
    clock.advance(Duration::from_millis(500));
    app.dispatch(Action::Favorite).unwrap();

    clock.advance(Duration::from_millis(2500));
    app.tick();
    assert_eq!(app.feedback().text(), Some(feedback::FAVORITE_ADDED));

    clock.advance(Duration::from_millis(500));
    app.tick();
    assert!(app.feedback().current().is_none());
}

#[test]
fn test_search_then_remove_by_visible_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites");

    let favorites: Vec<_> = [
        ("Deus é amor.", "1 João 4:8"),
        ("Tenha coragem de ser quem você é.", "Autor desconhecido"),
        ("A paz começa com um sorriso.", "Madre Teresa de Calcutá"),
    ]
    .into_iter()
    .map(|(f, a)| categorize(Phrase::new(f, a)))
    .collect();
    PersistenceStore::new(Database::open(&path).unwrap())
        .save(&favorites)
        .unwrap();

    let mut app = open_app(&path, RecordingClipboard::new(), ManualClock::new());
    app.dispatch(Action::Search("TERESA".into())).unwrap();
    let visible: Vec<&str> = app.visible_favorites().map(|f| f.frase.as_str()).collect();
    assert_eq!(visible, vec!["A paz começa com um sorriso."]);

    app.dispatch(Action::RemoveFavorite(0)).unwrap();
    app.dispatch(Action::Search(String::new())).unwrap();

    let left: Vec<&str> = app.visible_favorites().map(|f| f.frase.as_str()).collect();
    assert_eq!(left, vec!["Deus é amor.", "Tenha coragem de ser quem você é."]);
}

#[test]
fn test_corrupt_store_is_replaced_by_next_write_and_kept_aside() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites");
    {
        let db = Database::open(&path).unwrap();
        db.set(FAVORITES_KEY, b"{\"frase\": 1").unwrap();
    }

    let mut app = open_app(&path, RecordingClipboard::new(), ManualClock::new());
    assert!(app.favorites().is_empty());
    assert_eq!(app.feedback().text(), Some(feedback::FAVORITES_CORRUPT));

    let store = app.favorites().store().inner();
    assert_eq!(store.get(FAVORITES_KEY).unwrap(), Some(b"{\"frase\": 1".to_vec()));
    assert_eq!(store.get(CORRUPT_KEY).unwrap(), Some(b"{\"frase\": 1".to_vec()));

    app.dispatch(Action::Favorite).unwrap();
    let expected = vec![app.current().clone()];
    let store = app.favorites().store();
    assert_eq!(store.load().unwrap(), expected);
    assert_eq!(store.inner().get(CORRUPT_KEY).unwrap(), Some(b"{\"frase\": 1".to_vec()));
    drop(app);

    let app = open_app(&path, RecordingClipboard::new(), ManualClock::new());
    assert_eq!(app.favorites().favorites(), expected.as_slice());
    assert_eq!(app.feedback().current(), None);
}
