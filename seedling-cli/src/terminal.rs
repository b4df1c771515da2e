//! Terminal prompt backed by dialoguer

use console::{style, Color};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use seedling::prompt::{Accent, Answer, Prompt, PromptError, Question};

/// [`Prompt`] that asks on the controlling terminal
///
/// Esc (or `q`) on a confirm or menu question cancels the run.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    /// Create a prompt using dialoguer's colourful theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &Question) -> Result<Answer, PromptError> {
        match question {
            Question::Text {
                message,
                default,
                validator,
            } => {
                let mut input = Input::<String>::with_theme(&self.theme).with_prompt(message);
                if let Some(default) = default {
                    input = input.default(default.clone());
                }
                if let Some(check) = *validator {
                    input = input.validate_with(move |value: &String| check(value));
                }
                input
                    .interact_text()
                    .map(Answer::Text)
                    .map_err(into_prompt_error)
            }
            Question::Confirm { message, default } => Confirm::with_theme(&self.theme)
                .with_prompt(message)
                .default(*default)
                .interact_opt()
                .map_err(into_prompt_error)?
                .map(Answer::Confirm)
                .ok_or(PromptError::Cancelled),
            Question::Select { message, choices } => {
                let items: Vec<String> = choices
                    .iter()
                    .map(|choice| paint(&choice.label, choice.accent))
                    .collect();
                Select::with_theme(&self.theme)
                    .with_prompt(message)
                    .items(&items)
                    .default(0)
                    .interact_opt()
                    .map_err(into_prompt_error)?
                    .map(Answer::Select)
                    .ok_or(PromptError::Cancelled)
            }
        }
    }
}

fn into_prompt_error(err: dialoguer::Error) -> PromptError {
    let dialoguer::Error::IO(io) = err;
    if io.kind() == std::io::ErrorKind::Interrupted {
        PromptError::Cancelled
    } else {
        PromptError::Io(io)
    }
}

/// Colour `label` according to `accent`
#[must_use]
pub fn paint(label: &str, accent: Accent) -> String {
    let color = match accent {
        Accent::Plain => return label.to_string(),
        Accent::Yellow => Color::Yellow,
        Accent::Green => Color::Green,
        Accent::Cyan => Color::Cyan,
        Accent::Blue => Color::Blue,
        Accent::Magenta => Color::Magenta,
    };
    style(label).fg(color).to_string()
}
