//! seedling: template materialization for new projects
//!
//! Turns a template directory into a fresh project folder:
//!
//! 1. settle on a target directory and a valid package name
//! 2. make sure the destination is absent, empty, or explicitly wiped
//! 3. pick a template from the built-in catalog
//! 4. copy it over, renaming reserved files and injecting the package name
//!    into `package.json`
//! 5. report the commands to run next
//!
//! All interaction goes through the [`Prompt`](prompt::Prompt) trait, so the
//! whole flow runs unchanged against a terminal or a script.
//!
//! # Example
//!
//! ```rust,no_run
//! use seedling::config::SeedlingConfig;
//! use seedling::orchestrator::{ScaffoldOptions, ScaffoldOrchestrator, ScaffoldOutcome};
//! use seedling::testing::ScriptedPrompt;
//!
//! # fn main() -> seedling::Result<()> {
//! let orchestrator = ScaffoldOrchestrator::new(SeedlingConfig::load(None)?, ".");
//! let options = ScaffoldOptions {
//!     target_dir: Some("demo".to_string()),
//!     template: Some("vite".to_string()),
//! };
//!
//! let outcome = orchestrator.run(&options, &mut ScriptedPrompt::new())?;
//! if let ScaffoldOutcome::Created(report) = outcome {
//!     println!("created {}", report.root.display());
//! }
//! # Ok(())
//! # }
//! ```

// Lint configuration is handled at the workspace level in Cargo.toml
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod materializer;
pub mod observability;
pub mod orchestrator;
pub mod package_name;
pub mod prompt;
pub mod testing;

pub use catalog::{Template, TemplateCatalog};
pub use config::SeedlingConfig;
pub use error::{Result, SeedlingError};
pub use orchestrator::{
    NextSteps, ScaffoldOptions, ScaffoldOrchestrator, ScaffoldOutcome, ScaffoldReport,
    ScaffoldRequest,
};
pub use prompt::{Answer, Prompt, PromptError, Question};
