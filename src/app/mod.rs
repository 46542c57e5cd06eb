//! Interaction controller
//!
//! [`App`] is the composition root. It owns the phrase selector, the favorites
//! manager, the session's [`SelectionState`] and the current feedback message,
//! and maps each user [`Action`] to a state transition through [`App::dispatch`].
//!
//! # Actions
//!
//! | Action            | Effect                                         | Feedback                                    |
//! |-------------------|------------------------------------------------|---------------------------------------------|
//! | `NewPhrase`       | random phrase in the active category           | only if the category is empty               |
//! | `Copy`            | `"<frase>" - <autor>` to the clipboard          | "Copiado!"                                  |
//! | `Favorite`        | add the current phrase to favorites            | "Adicionado aos favoritos!" / "Já está..."  |
//! | `RemoveFavorite`  | remove by position in the visible favorites    | "Removido dos favoritos!"                   |
//! | `Share`           | native share, clipboard fallback               | silent / "Link copiado!" / "Erro ao..."     |
//! | `SetCategory`     | change filter, then pick a new phrase          | only if the category is empty               |
//! | `Search`          | set the favorites query                        | none                                        |
//! | `ToggleView`      | home ⇄ favorites                                | none                                        |
//! | `DismissFeedback` | clear the message and cancel its expiry        | none                                        |

pub mod error;

pub use error::AppError;

use crate::capabilities::{Clipboard, NoShare, Share, ShareOutcome, ShareRequest, SystemClipboard};
use crate::db::{KeyValueStore, PersistenceStore};
use crate::favorites::{AddOutcome, FavoritesError, FavoritesManager};
use crate::feedback::{self, Clock, Feedback, SystemClock};
use crate::phrases::{CategoryFilter, PhraseError, TaggedPhrase};
use crate::selector::{PhraseSelector, SelectionError};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Duration;

type Result<T> = std::result::Result<T, AppError>;

/// Which screen the presentation layer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Favorites,
}

impl View {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Home => Self::Favorites,
            Self::Favorites => Self::Home,
        }
    }
}

/// Ephemeral per-session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Canonical index of the displayed phrase
    pub index: usize,
    pub category: CategoryFilter,
    pub view: View,
    pub query: String,
}

/// User actions accepted by [`App::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewPhrase,
    Copy,
    Favorite,
    /// Position in the currently visible (searched) favorites list
    RemoveFavorite(usize),
    Share,
    SetCategory(CategoryFilter),
    Search(String),
    ToggleView,
    DismissFeedback,
}

/// Builder wiring the controller to its capabilities
pub struct AppBuilder<S> {
    phrases: Vec<TaggedPhrase>,
    store: PersistenceStore<S>,
    clipboard: Box<dyn Clipboard>,
    share: Box<dyn Share>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
    feedback_ttl: Duration,
    share_url: Option<String>,
}

impl<S: KeyValueStore> AppBuilder<S> {
    /// Start from the system clipboard, no native share and the wall clock
    #[must_use]
    pub fn new(phrases: Vec<TaggedPhrase>, store: PersistenceStore<S>) -> Self {
        Self {
            phrases,
            store,
            clipboard: Box::new(SystemClipboard),
            share: Box::new(NoShare),
            clock: Box::new(SystemClock),
            rng: Box::new(StdRng::from_entropy()),
            feedback_ttl: feedback::DEFAULT_TTL,
            share_url: None,
        }
    }

    #[must_use]
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    #[must_use]
    pub fn with_share(mut self, share: impl Share + 'static) -> Self {
        self.share = Box::new(share);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    #[must_use]
    pub const fn with_feedback_ttl(mut self, ttl: Duration) -> Self {
        self.feedback_ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_share_url(mut self, url: Option<String>) -> Self {
        self.share_url = url;
        self
    }

    /// Load favorites and build the controller
    ///
    /// The first phrase of the dataset is displayed initially. A corrupt
    /// favorites payload does not fail the build: the session starts with an
    /// empty collection and a feedback message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Phrase(PhraseError::EmptyDataset)` if there are no
    /// phrases, or `AppError::Favorites` if the store cannot be read.
    pub fn build(self) -> Result<App<S>> {
        let selector = PhraseSelector::new(self.phrases);
        if selector.is_empty() {
            return Err(PhraseError::EmptyDataset.into());
        }

        let (favorites, load_error) = FavoritesManager::load_or_recover(self.store)?;
        let mut feedback = Feedback::new(self.feedback_ttl);
        if load_error.is_some() {
            feedback.set(feedback::FAVORITES_CORRUPT, self.clock.now());
        }

        tracing::debug!(
            phrases = selector.len(),
            favorites = favorites.len(),
            "Session started"
        );

        Ok(App {
            selector,
            favorites,
            state: SelectionState::default(),
            feedback,
            clipboard: self.clipboard,
            share: self.share,
            clock: self.clock,
            rng: self.rng,
            share_url: self.share_url,
        })
    }
}

/// The interaction controller
pub struct App<S> {
    selector: PhraseSelector,
    favorites: FavoritesManager<S>,
    state: SelectionState,
    feedback: Feedback,
    clipboard: Box<dyn Clipboard>,
    share: Box<dyn Share>,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
    share_url: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    /// Apply one user action
    ///
    /// # Errors
    ///
    /// - `AppError::UnknownCategory` if `SetCategory` names a category no phrase has;
    ///   the "empty category" feedback is shown as well
    /// - `AppError::Favorites` with `IndexOutOfRange` for a bad removal index
    /// - `AppError::Favorites` with a storage error if persisting favorites failed
    ///
    /// State is left unchanged on error. Clipboard and share failures are not
    /// errors; they only set feedback.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::debug!(?action, "Dispatching action");
        match action {
            Action::NewPhrase => {
                // The active category always has phrases, it was drawn from when set.
                let _ = self.select(self.state.category);
            }
            Action::Copy => self.copy(),
            Action::Favorite => self.favorite()?,
            Action::RemoveFavorite(index) => self.remove_favorite(index)?,
            Action::Share => self.share(),
            Action::SetCategory(filter) => {
                self.select(filter).map_err(|_| AppError::UnknownCategory(filter))?;
                self.state.category = filter;
            }
            Action::Search(query) => self.state.query = query,
            Action::ToggleView => self.state.view = self.state.view.toggled(),
            Action::DismissFeedback => self.feedback.dismiss(),
        }
        Ok(())
    }

    /// Expire the feedback message if its time has come
    ///
    /// Returns `true` if a message was cleared.
    pub fn tick(&mut self) -> bool {
        self.feedback.tick(self.clock.now())
    }

    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The displayed phrase
    #[must_use]
    pub fn current(&self) -> &TaggedPhrase {
        // Non-empty dataset and canonical indices keep this in range.
        &self.selector.phrases()[self.state.index]
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesManager<S> {
        &self.favorites
    }

    /// Favorites matching the active search query, in insertion order
    pub fn visible_favorites(&self) -> impl Iterator<Item = &TaggedPhrase> {
        self.favorites.search(&self.state.query)
    }

    /// `todas` followed by every category present in the dataset
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        self.selector.categories()
    }

    fn notify(&mut self, text: &str) {
        let now = self.clock.now();
        self.feedback.set(text, now);
    }

    fn select(&mut self, filter: CategoryFilter) -> std::result::Result<(), SelectionError> {
        match self.selector.select_random(filter, &mut *self.rng) {
            Ok(index) => {
                self.state.index = index;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Selection left unchanged");
                self.notify(feedback::EMPTY_CATEGORY);
                Err(e)
            }
        }
    }

    fn copy(&mut self) {
        let text = self.current().formatted();
        match self.clipboard.write_text(&text) {
            Ok(()) => self.notify(feedback::COPIED),
            Err(e) => {
                tracing::warn!(error = %e, "Copy failed");
                self.notify(feedback::COPY_FAILED);
            }
        }
    }

    fn favorite(&mut self) -> std::result::Result<(), FavoritesError> {
        let phrase = self.current().clone();
        match self.favorites.add(&phrase) {
            Ok(AddOutcome::Added) => self.notify(feedback::FAVORITE_ADDED),
            Ok(AddOutcome::AlreadyPresent) => self.notify(feedback::FAVORITE_EXISTS),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save favorite");
                self.notify(feedback::SAVE_FAILED);
                return Err(e);
            }
        }
        Ok(())
    }

    fn remove_favorite(&mut self, index: usize) -> std::result::Result<(), FavoritesError> {
        match self.favorites.remove_visible(&self.state.query, index) {
            Ok(_) => {
                self.notify(feedback::FAVORITE_REMOVED);
                Ok(())
            }
            Err(e @ FavoritesError::IndexOutOfRange { .. }) => {
                tracing::warn!(error = %e, "Ignoring removal");
                Err(e)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save favorites");
                self.notify(feedback::SAVE_FAILED);
                Err(e)
            }
        }
    }

    fn share(&mut self) {
        let request = ShareRequest::new(self.current().formatted(), self.share_url.clone());
        match self.share.share(&request) {
            Ok(ShareOutcome::Shared) => {}
            Ok(ShareOutcome::Unavailable) => match self.clipboard.write_text(&request.text) {
                Ok(()) => self.notify(feedback::LINK_COPIED),
                Err(e) => {
                    tracing::warn!(error = %e, "Share fallback failed");
                    self.notify(feedback::SHARE_FAILED);
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Share failed");
                self.notify(feedback::SHARE_FAILED);
            }
        }
    }
}
