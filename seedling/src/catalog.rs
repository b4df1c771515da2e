//! Template catalog
//!
//! The set of templates is fixed at build time. Each template lives on disk
//! as `<templates root>/template-<name>/`; the root is resolved once at
//! startup (see [`TemplateCatalog::discover_root`]) and never validated here.
//! A missing template directory surfaces as an I/O error when it is copied.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::prompt::{Accent, Choice, Prompt, Question};

/// A project skeleton the user can pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Identifier used on the command line and in the directory name
    pub name: &'static str,
    /// Label shown in the selection menu
    pub display: &'static str,
    /// Colour of the label
    pub accent: Accent,
    /// The generated project has no dependencies to install
    pub skip_install: bool,
}

impl Template {
    const fn new(name: &'static str, display: &'static str, accent: Accent) -> Self {
        Self {
            name,
            display,
            accent,
            skip_install: false,
        }
    }

    const fn without_install(mut self) -> Self {
        self.skip_install = true;
        self
    }
}

/// Built-in templates, in menu order
pub const TEMPLATES: &[Template] = &[
    Template::new("vanilla", "Vanilla", Accent::Yellow),
    Template::new("vanilla-ts", "Vanilla + TypeScript", Accent::Blue),
    Template::new("vite", "Vite + Vue", Accent::Cyan),
    Template::new("vite-lib", "Vite + Vue library", Accent::Magenta),
    Template::new("static", "Static HTML (no build step)", Accent::Green).without_install(),
];

/// Directory name prefix of every template under the templates root
const TEMPLATE_DIR_PREFIX: &str = "template-";

/// Ordered template registry bound to a templates root directory
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
    templates: &'static [Template],
}

impl TemplateCatalog {
    /// Catalog of the built-in templates stored under `root`
    #[must_use]
    pub fn builtin(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            templates: TEMPLATES,
        }
    }

    /// Directory containing the `template-*` trees
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All templates, in menu order
    #[must_use]
    pub const fn list(&self) -> &'static [Template] {
        self.templates
    }

    /// Look a template up by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static Template> {
        self.templates.iter().find(|template| template.name == name)
    }

    /// Filesystem path of a template's root directory
    ///
    /// The path is not checked for existence.
    #[must_use]
    pub fn resolve(&self, template: &Template) -> PathBuf {
        self.root.join(template_dir_name(template))
    }

    /// Pick a template
    ///
    /// A `hint` naming a catalog entry is taken as-is. An unknown hint is
    /// reported and ignored; the user then picks from the menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or is cancelled.
    pub fn select(
        &self,
        hint: Option<&str>,
        prompt: &mut dyn Prompt,
    ) -> Result<&'static Template> {
        let mut message = "Select a template:".to_string();

        if let Some(hint) = hint {
            if let Some(template) = self.find(hint) {
                return Ok(template);
            }
            tracing::warn!(template = hint, "unknown template, falling back to selection");
            message = format!("\"{hint}\" isn't a valid template. Please choose from below:");
        }

        let question = Question::Select {
            message,
            choices: self
                .templates
                .iter()
                .map(|template| Choice {
                    label: template.display.to_string(),
                    accent: template.accent,
                })
                .collect(),
        };

        loop {
            let index = prompt.ask(&question)?.into_select()?;
            match self.templates.get(index) {
                Some(template) => return Ok(template),
                None => tracing::warn!(index, "selection out of range"),
            }
        }
    }

    /// Locate the shipped templates directory
    ///
    /// Search order: `templates/` beside the executable, then up the cargo
    /// `target/<profile>` layout, then the workspace directory this crate was
    /// built from. Falls back to the workspace path even if it is missing.
    #[must_use]
    pub fn discover_root() -> PathBuf {
        let workspace_templates = Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .map_or_else(|| PathBuf::from("templates"), |root| root.join("templates"));

        std::env::current_exe()
            .ok()
            .and_then(|exe| find_templates_near(&exe))
            .unwrap_or(workspace_templates)
    }
}

/// First `templates/` in the four directories above `exe` that holds a
/// catalog entry
///
/// An unrelated `templates/` folder (say `~/templates` for a binary in
/// `~/.cargo/bin`) is skipped.
fn find_templates_near(exe: &Path) -> Option<PathBuf> {
    exe.ancestors()
        .skip(1)
        .take(4)
        .map(|dir| dir.join("templates"))
        .find(|candidate| holds_templates(candidate))
}

fn holds_templates(dir: &Path) -> bool {
    TEMPLATES
        .iter()
        .any(|template| dir.join(template_dir_name(template)).is_dir())
}

fn template_dir_name(template: &Template) -> String {
    format!("{TEMPLATE_DIR_PREFIX}{}", template.name)
}
