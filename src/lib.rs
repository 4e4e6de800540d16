//! Generate random passwords from a set of user-chosen character classes.
//!
//! A run collects [`Criteria`] through a [`CriteriaInput`], then generates candidates until one
//! passes validation. See [`flow::run`].

use std::io;

pub mod collector;
mod criteria;
pub mod flow;
pub mod password_generation;
pub mod validation;

pub use collector::{CriteriaInput, ScriptedInput};
pub use criteria::{default_classes, CharacterClass, Criteria, LengthRange};
pub use flow::Outcome;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Error(ErrorRepr);

impl From<ErrorRepr> for Error {
    fn from(err: ErrorRepr) -> Error {
        Error(err)
    }
}

impl Error {
    /// Whether this error came from the input provider failing to answer a prompt.
    pub fn is_prompt_failure(&self) -> bool {
        matches!(self.0, ErrorRepr::Prompt(_))
    }
}

#[derive(Debug, thiserror::Error)]
enum ErrorRepr {
    #[error("the character class {0:?} has no characters, so a password could never contain one")]
    EmptyCharacterClass(String),
    #[error("invalid length range {min}..={max}: the minimum must be at least 1 and no more than the maximum")]
    InvalidLengthRange { min: usize, max: usize },
    #[error("failed to read an answer to a prompt: {0}")]
    Prompt(#[source] io::Error),
}

/// A generated password. The `Debug` output never shows the contents.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
