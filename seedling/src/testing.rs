//! Testing utilities for the scaffolding flow
//!
//! [`ScriptedPrompt`] answers questions from a queue instead of a terminal:
//!
//! ```rust
//! use seedling::prompt::{Prompt, Question};
//! use seedling::testing::ScriptedPrompt;
//!
//! let mut prompt = ScriptedPrompt::new().text("my-app").confirm(true);
//! let name = prompt.ask(&Question::text("Project name:")).unwrap();
//! assert_eq!(name.into_text().unwrap(), "my-app");
//! ```

use std::collections::VecDeque;

use crate::prompt::{Answer, Prompt, PromptError, Question};

/// A scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
enum Scripted {
    Answer(Answer),
    Cancel,
}

/// [`Prompt`] that replays a fixed list of answers
///
/// Behaves like the terminal prompt where it matters for the flow:
/// - an empty text answer takes the question's default
/// - text answers rejected by the question's validator are recorded in
///   [`rejections`](Self::rejections) and the next scripted answer is tried
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Scripted>,
    asked: Vec<String>,
    rejections: Vec<String>,
}

impl ScriptedPrompt {
    /// Create a prompt with no answers queued
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text answer (`""` accepts the default)
    #[must_use]
    pub fn text(mut self, value: impl Into<String>) -> Self {
        self.answers
            .push_back(Scripted::Answer(Answer::Text(value.into())));
        self
    }

    /// Queue a confirm answer
    #[must_use]
    pub fn confirm(mut self, value: bool) -> Self {
        self.answers.push_back(Scripted::Answer(Answer::Confirm(value)));
        self
    }

    /// Queue a menu selection by index
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.answers.push_back(Scripted::Answer(Answer::Select(index)));
        self
    }

    /// Queue a cancellation
    #[must_use]
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(Scripted::Cancel);
        self
    }

    /// Messages of every question asked so far, in order
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Validator messages for rejected text answers, in order
    #[must_use]
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Number of answers not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self) -> Result<Answer, PromptError> {
        match self.answers.pop_front() {
            Some(Scripted::Answer(answer)) => Ok(answer),
            Some(Scripted::Cancel) => Err(PromptError::Cancelled),
            None => Err(PromptError::Exhausted),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        self.asked.push(question.message().to_string());

        let Question::Text {
            default, validator, ..
        } = question
        else {
            return self.next();
        };

        loop {
            let mut value = self.next()?.into_text()?;
            if value.is_empty() {
                if let Some(default) = default {
                    value.clone_from(default);
                }
            }

            match validator.map_or(Ok(()), |check| check(&value)) {
                Ok(()) => return Ok(Answer::Text(value)),
                Err(message) => self.rejections.push(message),
            }
        }
    }
}
