//! Fake capabilities for testing
//!
//! The recording fakes share their logs between clones, so a test can keep one
//! handle and give another to the controller.

use super::{CapabilityError, Clipboard, Share, ShareOutcome, ShareRequest};
use std::cell::RefCell;
use std::rc::Rc;

/// Clipboard that remembers everything written to it
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl RecordingClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), CapabilityError> {
        Err(CapabilityError::Clipboard("denied".to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StubBehavior {
    Shared,
    Unavailable,
    Fail,
}

/// Share target with a fixed behavior that records requests
#[derive(Debug, Clone)]
pub struct StubShare {
    behavior: StubBehavior,
    requests: Rc<RefCell<Vec<ShareRequest>>>,
}

impl StubShare {
    fn with(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            requests: Rc::default(),
        }
    }

    #[must_use]
    pub fn shared() -> Self {
        Self::with(StubBehavior::Shared)
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self::with(StubBehavior::Unavailable)
    }

    #[must_use]
    pub fn failing() -> Self {
        Self::with(StubBehavior::Fail)
    }

    #[must_use]
    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.borrow().clone()
    }
}

impl Share for StubShare {
    fn share(&self, request: &ShareRequest) -> Result<ShareOutcome, CapabilityError> {
        self.requests.borrow_mut().push(request.clone());
        match self.behavior {
            StubBehavior::Shared => Ok(ShareOutcome::Shared),
            StubBehavior::Unavailable => Ok(ShareOutcome::Unavailable),
            StubBehavior::Fail => Err(CapabilityError::Share("cancelled".to_string())),
        }
    }
}
