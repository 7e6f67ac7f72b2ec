use tracing::{ debug, info };

use crate::errors::{ Error, GenerationError };
use crate::generators::{ CharClass, ClassSet };
use crate::password::{ validate_length, GeneratedPassword, GenerationRequest };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generated,
}

/// Local state of the password form: the length field, the four toggles,
/// the inline error and the last generated password.
#[derive(Debug, Default, Clone)]
pub struct Form {
    length_input: String,
    touched: bool,
    classes: ClassSet,
    error: Option<String>,
    result: Option<GeneratedPassword>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from configured defaults. Prefilled values are not "touched".
    pub fn with_defaults(length_input: Option<String>, classes: ClassSet) -> Self {
        Self {
            length_input: length_input.unwrap_or_default(),
            classes,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.result.is_some() {
            Phase::Generated
        } else {
            Phase::Idle
        }
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn result(&self) -> Option<&GeneratedPassword> {
        self.result.as_ref()
    }

    /// Inline error, shown only once the length field has been edited or submitted.
    pub fn error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }

    pub fn set_length_input(&mut self, input: impl Into<String>) {
        self.length_input = input.into();
        self.touched = true;
        self.error = validate_length(&self.length_input)
            .err()
            .map(|e| e.to_string());
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.classes.toggle(class);
        debug!(class = class.label(), enabled = self.classes.contains(class), "toggled");

        let no_class = GenerationError::NoClassSelected.to_string();
        if !self.classes.is_empty() && self.error.as_deref() == Some(no_class.as_str()) {
            self.error = None;
        }
    }

    /// Generate is only enabled while the length field is valid.
    pub fn can_submit(&self) -> bool {
        validate_length(&self.length_input).is_ok()
    }

    /// Validates the length, then generates. On failure the error is kept inline,
    /// the previous result is left alone and the phase does not change.
    pub fn submit(&mut self) -> Result<&GeneratedPassword, Error> {
        self.touched = true;

        let request = match GenerationRequest::from_input(&self.length_input, self.classes) {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        match request.generate() {
            Ok(password) => {
                self.error = None;
                Ok(self.result.insert(password))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    pub fn reset(&mut self) {
        info!(from = ?self.phase(), "form reset");
        *self = Self::new();
    }
}
