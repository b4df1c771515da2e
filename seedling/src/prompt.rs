//! Interactive question/answer capability
//!
//! The scaffolding flow never talks to a terminal directly. It describes what
//! it wants to know as a [`Question`] and hands it to a [`Prompt`]. The CLI
//! provides a dialoguer-backed implementation; tests use
//! [`ScriptedPrompt`](crate::testing::ScriptedPrompt).

use thiserror::Error;

/// Validation callback for text questions
///
/// Returns the message to show when the input is rejected.
pub type Validator = fn(&str) -> Result<(), String>;

/// Colour hint for a choice, rendered however the prompt sees fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    /// No colour
    #[default]
    Plain,
    /// Yellow
    Yellow,
    /// Green
    Green,
    /// Cyan
    Cyan,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
}

/// One entry of a single-choice menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the user
    pub label: String,
    /// Colour hint for the label
    pub accent: Accent,
}

/// A question the flow needs answered
#[derive(Debug, Clone)]
pub enum Question {
    /// Free-form text, optionally validated
    Text {
        /// Prompt message
        message: String,
        /// Answer used when the user submits nothing
        default: Option<String>,
        /// Rejects non-conforming input
        validator: Option<Validator>,
    },
    /// Yes/no
    Confirm {
        /// Prompt message
        message: String,
        /// Answer used when the user just presses enter
        default: bool,
    },
    /// Pick exactly one of `choices`
    Select {
        /// Prompt message
        message: String,
        /// Menu entries, in display order
        choices: Vec<Choice>,
    },
}

impl Question {
    /// Text question without a default or validator
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text {
            message: message.into(),
            default: None,
            validator: None,
        }
    }

    /// Set the default answer of a text question
    #[must_use]
    pub fn with_default(self, value: impl Into<String>) -> Self {
        match self {
            Self::Text {
                message, validator, ..
            } => Self::Text {
                message,
                default: Some(value.into()),
                validator,
            },
            other => other,
        }
    }

    /// Set the validator of a text question
    #[must_use]
    pub fn with_validator(self, check: Validator) -> Self {
        match self {
            Self::Text {
                message, default, ..
            } => Self::Text {
                message,
                default,
                validator: Some(check),
            },
            other => other,
        }
    }

    /// Prompt message, whatever the question kind
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Text { message, .. }
            | Self::Confirm { message, .. }
            | Self::Select { message, .. } => message,
        }
    }
}

/// The user's answer to a [`Question`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answer to [`Question::Text`]
    Text(String),
    /// Answer to [`Question::Confirm`]
    Confirm(bool),
    /// Index into the choices of [`Question::Select`]
    Select(usize),
}

impl Answer {
    /// Unwrap a text answer
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::UnexpectedAnswer`] for any other kind of answer.
    pub fn into_text(self) -> Result<String, PromptError> {
        match self {
            Self::Text(value) => Ok(value),
            other => Err(PromptError::UnexpectedAnswer(format!("{other:?}"))),
        }
    }

    /// Unwrap a confirm answer
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::UnexpectedAnswer`] for any other kind of answer.
    pub fn into_confirm(self) -> Result<bool, PromptError> {
        match self {
            Self::Confirm(value) => Ok(value),
            other => Err(PromptError::UnexpectedAnswer(format!("{other:?}"))),
        }
    }

    /// Unwrap a select answer
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::UnexpectedAnswer`] for any other kind of answer.
    pub fn into_select(self) -> Result<usize, PromptError> {
        match self {
            Self::Select(index) => Ok(index),
            other => Err(PromptError::UnexpectedAnswer(format!("{other:?}"))),
        }
    }
}

/// Prompt failure
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user backed out of the question
    #[error("operation cancelled")]
    Cancelled,

    /// Terminal I/O failed
    #[error("prompt failed: {0}")]
    Io(#[from] std::io::Error),

    /// A scripted prompt ran out of answers
    #[error("no scripted answer left")]
    Exhausted,

    /// The answer does not fit the question that was asked
    #[error("unexpected answer: {0}")]
    UnexpectedAnswer(String),
}

/// Something that can put a [`Question`] to the user
pub trait Prompt {
    /// Ask `question` and block until it is answered
    ///
    /// # Errors
    ///
    /// Returns an error if the user cancels or the underlying terminal fails.
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        (**self).ask(question)
    }
}
