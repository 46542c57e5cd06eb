//! External capabilities: clipboard and native share
//!
//! Both are ports injected into the controller so that tests can swap in the
//! fakes from [`mock`].

pub mod error;
pub mod mock;

pub use error::CapabilityError;

use std::io::Write;
use std::process::{Command, Stdio};

/// Title attached to every share request
pub const SHARE_TITLE: &str = "Frase Alma Lux";

/// Clipboard write capability
pub trait Clipboard {
    /// Put `text` on the clipboard
    ///
    /// # Errors
    ///
    /// Returns `CapabilityError` if the clipboard is unavailable or rejects the write.
    fn write_text(&self, text: &str) -> Result<(), CapabilityError>;
}

/// System clipboard via arboard
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), CapabilityError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| CapabilityError::Clipboard(format!("unavailable: {e}")))?;
        clipboard
            .set_text(text)
            .map_err(|e| CapabilityError::Clipboard(e.to_string()))
    }
}

/// Payload handed to a share target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl ShareRequest {
    #[must_use]
    pub fn new(text: impl Into<String>, url: Option<String>) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: text.into(),
            url,
        }
    }
}

/// What a share target did with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The target accepted the request
    Shared,
    /// No share target exists; the caller should fall back
    Unavailable,
}

/// Native share capability
pub trait Share {
    /// Offer `request` to the share target
    ///
    /// # Errors
    ///
    /// Returns `CapabilityError` if a share target exists but fails.
    fn share(&self, request: &ShareRequest) -> Result<ShareOutcome, CapabilityError>;
}

/// No native share target
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShare;

impl Share for NoShare {
    fn share(&self, _request: &ShareRequest) -> Result<ShareOutcome, CapabilityError> {
        Ok(ShareOutcome::Unavailable)
    }
}

/// Share through a user-configured shell command
///
/// The command runs under `sh -c`. The phrase text is written to its stdin and
/// also exported as `ALMA_SHARE_TEXT`, alongside `ALMA_SHARE_TITLE` and
/// `ALMA_SHARE_URL`. Nothing is interpolated into the command line.
#[derive(Debug, Clone)]
pub struct CommandShare {
    command: String,
}

impl CommandShare {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Share for CommandShare {
    fn share(&self, request: &ShareRequest) -> Result<ShareOutcome, CapabilityError> {
        tracing::debug!(command = %self.command, "Running share command");
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .env("ALMA_SHARE_TITLE", &request.title)
            .env("ALMA_SHARE_TEXT", &request.text)
            .env("ALMA_SHARE_URL", request.url.as_deref().unwrap_or_default())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A command that ignores stdin may close it early.
            if let Err(e) = stdin.write_all(request.text.as_bytes())
                && e.kind() != std::io::ErrorKind::BrokenPipe
            {
                return Err(e.into());
            }
        }

        let status = child.wait()?;
        if status.success() {
            Ok(ShareOutcome::Shared)
        } else {
            Err(CapabilityError::Share(format!("command exited with status {status}")))
        }
    }
}
