//! Short-lived feedback messages
//!
//! Each message schedules a single fire-once expiry task. Setting a new
//! message, or dismissing the current one, cancels the pending task, so a
//! stale expiry can never clear a newer message.

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::time::{Duration, Instant};

pub const COPIED: &str = "Copiado!";
pub const FAVORITE_ADDED: &str = "Adicionado aos favoritos!";
pub const FAVORITE_EXISTS: &str = "Já está nos favoritos";
pub const FAVORITE_REMOVED: &str = "Removido dos favoritos!";
pub const LINK_COPIED: &str = "Link copiado!";
pub const SHARE_FAILED: &str = "Erro ao compartilhar";
pub const COPY_FAILED: &str = "Erro ao copiar";
pub const SAVE_FAILED: &str = "Erro ao salvar favoritos";
pub const EMPTY_CATEGORY: &str = "Nenhuma frase nesta categoria";
pub const FAVORITES_CORRUPT: &str = "Erro ao carregar favoritos";

/// Default lifetime of a message
pub const DEFAULT_TTL: Duration = Duration::from_millis(3000);

/// Visual class of a message, derived from its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
    Info,
}

impl FeedbackKind {
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.contains("Copiado") || text.contains("Adicionado") {
            Self::Success
        } else if text.contains("Removido") || text.contains("Erro") {
            Self::Error
        } else {
            Self::Info
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub kind: FeedbackKind,
}

/// Identifier of a scheduled expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryId(u64);

#[derive(Debug, Clone, Copy)]
struct ExpiryTask {
    id: ExpiryId,
    deadline: Instant,
}

/// The current feedback message and its pending expiry
#[derive(Debug)]
pub struct Feedback {
    current: Option<FeedbackMessage>,
    pending: Option<ExpiryTask>,
    next_id: u64,
    ttl: Duration,
}

impl Feedback {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            pending: None,
            next_id: 0,
            ttl,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&FeedbackMessage> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    /// When the pending expiry will fire, if any
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|task| task.deadline)
    }

    /// Replace the message and schedule its expiry, cancelling any earlier one
    pub fn set(&mut self, text: impl Into<String>, now: Instant) -> ExpiryId {
        let text = text.into();
        let id = ExpiryId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = self.pending.take() {
            tracing::trace!(cancelled = previous.id.0, "Cancelled pending feedback expiry");
        }
        self.pending = Some(ExpiryTask {
            id,
            deadline: now + self.ttl,
        });
        self.current = Some(FeedbackMessage {
            kind: FeedbackKind::classify(&text),
            text,
        });
        id
    }

    /// Clear the message now and cancel its expiry
    pub fn dismiss(&mut self) {
        self.current = None;
        self.pending = None;
    }

    /// Run the expiry task `id`
    ///
    /// A cancelled or already-fired task is a no-op. Returns `true` if the
    /// message was cleared.
    pub fn fire(&mut self, id: ExpiryId) -> bool {
        match self.pending {
            Some(task) if task.id == id => {
                self.pending = None;
                self.current = None;
                tracing::trace!(id = id.0, "Feedback expired");
                true
            }
            _ => false,
        }
    }

    /// Fire the pending expiry if its deadline has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(task) if now >= task.deadline => self.fire(task.id),
            _ => false,
        }
    }
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_expires_after_ttl() {
        let clock = ManualClock::new();
        let mut feedback = Feedback::default();

        feedback.set(COPIED, clock.now());
        clock.advance(Duration::from_millis(2999));
        assert!(!feedback.tick(clock.now()));
        assert_eq!(feedback.text(), Some(COPIED));

        clock.advance(Duration::from_millis(1));
        assert!(feedback.tick(clock.now()));
        assert!(feedback.current().is_none());
    }

    #[test]
    fn test_newer_message_governs_expiry() {
        let clock = ManualClock::new();
        let mut feedback = Feedback::default();

        feedback.set(COPIED, clock.now());
        clock.advance(Duration::from_millis(1000));
        feedback.set(FAVORITE_ADDED, clock.now());

        clock.advance(Duration::from_millis(2000));
        assert!(!feedback.tick(clock.now()));
        assert_eq!(feedback.text(), Some(FAVORITE_ADDED));

        clock.advance(Duration::from_millis(1000));
        assert!(feedback.tick(clock.now()));
        assert!(feedback.text().is_none());
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let clock = ManualClock::new();
        let mut feedback = Feedback::default();

        let first = feedback.set(COPIED, clock.now());
        let second = feedback.set(LINK_COPIED, clock.now());

        assert!(!feedback.fire(first));
        assert_eq!(feedback.text(), Some(LINK_COPIED));
        assert!(feedback.fire(second));
        assert!(!feedback.fire(second));
    }

    #[test]
    fn test_dismiss_cancels_expiry() {
        let clock = ManualClock::new();
        let mut feedback = Feedback::default();

        let id = feedback.set(COPIED, clock.now());
        feedback.dismiss();

        assert!(feedback.current().is_none());
        assert!(feedback.deadline().is_none());
        assert!(!feedback.fire(id));
    }

    #[test]
    fn test_custom_ttl() {
        let clock = ManualClock::new();
        let mut feedback = Feedback::new(Duration::from_millis(500));

        feedback.set(COPIED, clock.now());
        assert_eq!(feedback.deadline(), Some(clock.now() + Duration::from_millis(500)));
    }

    #[test]
    fn test_classify() {
        assert_eq!(FeedbackKind::classify(COPIED), FeedbackKind::Success);
        assert_eq!(FeedbackKind::classify(FAVORITE_ADDED), FeedbackKind::Success);
        assert_eq!(FeedbackKind::classify(FAVORITE_REMOVED), FeedbackKind::Error);
        assert_eq!(FeedbackKind::classify(SHARE_FAILED), FeedbackKind::Error);
        assert_eq!(FeedbackKind::classify(FAVORITE_EXISTS), FeedbackKind::Info);
        assert_eq!(FeedbackKind::classify(LINK_COPIED), FeedbackKind::Info);
    }
}
