//! Package name validation
//!
//! Names follow the npm registry grammar: lowercase alphanumerics plus
//! `-._~`, optionally prefixed by an `@scope/` segment drawn from the same
//! class. The first character of each segment may not be `.` or `_`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::prompt::{Prompt, Question};

/// Message shown when a typed package name is rejected
pub const INVALID_NAME_MESSAGE: &str = "Invalid package.json name";

/// Used when sanitizing leaves nothing behind
pub const FALLBACK_NAME: &str = "package";

static VALID_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-~][a-z0-9\-._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name grammar is a valid regex")
});
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));
static LEADING_DOT_OR_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[._]").expect("leading pattern is a valid regex"));
static DISALLOWED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\-~]+").expect("disallowed pattern is a valid regex"));

/// Check `name` against the package name grammar
#[must_use]
pub fn is_valid_package_name(name: &str) -> bool {
    VALID_NAME.is_match(name)
}

/// Derive a conforming name from arbitrary input
///
/// Trims, lowercases, turns whitespace runs into `-`, drops one leading `.`
/// or `_`, then turns every run of characters outside `[a-z0-9-~]` into `-`.
/// The result always satisfies [`is_valid_package_name`].
#[must_use]
pub fn to_valid_package_name(candidate: &str) -> String {
    let lowered = candidate.trim().to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let stripped = LEADING_DOT_OR_UNDERSCORE.replace(&hyphenated, "");
    let sanitized = DISALLOWED_RUN.replace_all(&stripped, "-");

    if sanitized.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        sanitized.into_owned()
    }
}

fn validate_package_name(name: &str) -> std::result::Result<(), String> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err(INVALID_NAME_MESSAGE.to_string())
    }
}

/// Turn `candidate` into a valid package name
///
/// A conforming candidate is returned as-is without asking anything. Otherwise
/// the user is asked for a name, with the sanitized candidate as the default,
/// until the answer conforms.
///
/// # Errors
///
/// Returns an error only if the prompt fails or is cancelled.
pub fn resolve(candidate: &str, prompt: &mut dyn Prompt) -> Result<String> {
    if is_valid_package_name(candidate) {
        return Ok(candidate.to_string());
    }

    let suggestion = to_valid_package_name(candidate);
    tracing::debug!(candidate, %suggestion, "candidate is not a valid package name");

    let question = Question::text("Package name:")
        .with_default(suggestion)
        .with_validator(validate_package_name);

    loop {
        let answer = prompt.ask(&question)?.into_text()?;
        if is_valid_package_name(&answer) {
            return Ok(answer);
        }
        tracing::warn!(%answer, "{INVALID_NAME_MESSAGE}");
    }
}
