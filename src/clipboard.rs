use copypasta_ext::prelude::*;
use tracing::{ debug, info };

use crate::errors::ClipboardError;
use crate::password::GeneratedPassword;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Whatever provider copypasta-ext finds for the current session (X11, Wayland, ...).
pub struct SystemClipboard {
    context: Box<dyn ClipboardProviderExt>,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let context = copypasta_ext::try_context().ok_or(ClipboardError::Unavailable)?;

        Ok(Self { context })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.context
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Connects on the first copy, so sessions that never copy never touch the display.
/// A failed connection is retried on the next copy.
pub struct LazyClipboard<F> {
    connect: F,
    inner: Option<Box<dyn Clipboard>>,
}

impl<F> LazyClipboard<F>
where
    F: FnMut() -> Result<Box<dyn Clipboard>, ClipboardError>,
{
    pub fn new(connect: F) -> Self {
        Self { connect, inner: None }
    }
}

impl<F> Clipboard for LazyClipboard<F>
where
    F: FnMut() -> Result<Box<dyn Clipboard>, ClipboardError>,
{
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => (self.connect)().inspect_err(|e| debug!(error = %e, "clipboard connect failed"))?,
        };

        self.inner.insert(clipboard).set_text(text)
    }
}

pub fn copy_password(clipboard: &mut dyn Clipboard, password: &GeneratedPassword) -> Result<(), ClipboardError> {
    clipboard.set_text(password.as_str())?;
    info!(length = password.length(), "password copied to clipboard");

    Ok(())
}
