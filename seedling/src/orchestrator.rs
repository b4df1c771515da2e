//! Top-level scaffolding flow
//!
//! A linear sequence: pick the target directory, settle the package name,
//! make sure the destination is usable, pick a template, write it out and
//! work out what the user should run next. The only branch back out is the
//! user declining to wipe a non-empty destination, which ends the run
//! cleanly with nothing changed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Template, TemplateCatalog};
use crate::config::SeedlingConfig;
use crate::error::{Result, SeedlingError};
use crate::materializer::{self, MaterializeRules};
use crate::package_name;
use crate::prompt::{Prompt, Question};

/// Values supplied up front, typically from the command line
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Target directory name; asked for when absent
    pub target_dir: Option<String>,
    /// Template name; an unknown name falls back to the menu
    pub template: Option<String>,
}

/// Everything needed to write a project, gathered by [`ScaffoldOrchestrator::prepare`]
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Target directory as given by the user, normalized
    pub target_dir: String,
    /// Absolute destination directory
    pub root: PathBuf,
    /// Validated package name
    pub package_name: String,
    /// Chosen template
    pub template: &'static Template,
}

/// Commands the user should run after scaffolding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NextSteps {
    /// `cd` target, when the project is not the working directory
    pub cd: Option<String>,
    /// Dependency install command
    pub install: Option<String>,
    /// Dev-server command
    pub run: Option<String>,
}

/// Result of a successful materialization
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Destination directory
    pub root: PathBuf,
    /// Package name written to the manifest
    pub package_name: String,
    /// Template that was written
    pub template: &'static Template,
    /// What to run next
    pub next_steps: NextSteps,
}

/// How a scaffolding run ended
#[derive(Debug, Clone)]
pub enum ScaffoldOutcome {
    /// Project written
    Created(ScaffoldReport),
    /// User declined to overwrite the destination; nothing was written
    Aborted,
}

/// Runs the scaffolding flow
#[derive(Debug, Clone)]
pub struct ScaffoldOrchestrator {
    config: SeedlingConfig,
    catalog: TemplateCatalog,
    rules: MaterializeRules,
    cwd: PathBuf,
}

impl ScaffoldOrchestrator {
    /// Create an orchestrator rooted at `cwd`
    ///
    /// The template root comes from `config.templates_dir`, or is discovered
    /// next to the executable when unset.
    #[must_use]
    pub fn new(config: SeedlingConfig, cwd: impl Into<PathBuf>) -> Self {
        let root = config
            .templates_dir
            .clone()
            .unwrap_or_else(TemplateCatalog::discover_root);

        Self {
            config,
            catalog: TemplateCatalog::builtin(root),
            rules: MaterializeRules::default(),
            cwd: cwd.into(),
        }
    }

    /// Use a different catalog
    #[must_use]
    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// The template catalog in use
    #[must_use]
    pub const fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Run the whole flow
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt fails or is cancelled, or on any file
    /// system error. Nothing is cleaned up on failure.
    pub fn run(
        &self,
        options: &ScaffoldOptions,
        prompt: &mut dyn Prompt,
    ) -> Result<ScaffoldOutcome> {
        match self.prepare(options, prompt)? {
            Some(request) => self.materialize(&request).map(ScaffoldOutcome::Created),
            None => Ok(ScaffoldOutcome::Aborted),
        }
    }

    /// Gather the target, package name and template, and ready the destination
    ///
    /// Returns `None` when the user declines to wipe a non-empty destination.
    /// The destination exists and is empty when a request is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt fails or is cancelled, or the destination
    /// cannot be inspected, created or emptied.
    pub fn prepare(
        &self,
        options: &ScaffoldOptions,
        prompt: &mut dyn Prompt,
    ) -> Result<Option<ScaffoldRequest>> {
        let target_dir = self.acquire_target_name(options.target_dir.as_deref(), prompt)?;
        let root = self.cwd.join(&target_dir);

        let candidate = if target_dir == "." {
            self.cwd
                .file_name()
                .map_or_else(|| self.config.default_project_name.clone(), |name| {
                    name.to_string_lossy().into_owned()
                })
        } else {
            target_dir.clone()
        };
        let package_name = package_name::resolve(&candidate, prompt)?;

        if !Self::check_destination(&target_dir, &root, prompt)? {
            tracing::info!(root = %root.display(), "overwrite declined, nothing written");
            return Ok(None);
        }

        let template = self.catalog.select(options.template.as_deref(), prompt)?;
        tracing::info!(
            target = %root.display(),
            package = %package_name,
            template = template.name,
            "scaffold request ready"
        );

        Ok(Some(ScaffoldRequest {
            target_dir,
            root,
            package_name,
            template,
        }))
    }

    /// Write the requested template and work out the next steps
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be read or any output cannot
    /// be written.
    pub fn materialize(&self, request: &ScaffoldRequest) -> Result<ScaffoldReport> {
        let template_root = self.catalog.resolve(request.template);
        tracing::info!(
            from = %template_root.display(),
            to = %request.root.display(),
            "materializing template"
        );

        materializer::materialize(
            &template_root,
            &request.root,
            &self.rules,
            &request.package_name,
        )?;

        Ok(ScaffoldReport {
            root: request.root.clone(),
            package_name: request.package_name.clone(),
            template: request.template,
            next_steps: self.next_steps(&request.root, request.template),
        })
    }

    fn acquire_target_name(&self, given: Option<&str>, prompt: &mut dyn Prompt) -> Result<String> {
        let default = &self.config.default_project_name;

        if let Some(target) = given.map(format_target_dir).filter(|t| !t.is_empty()) {
            return Ok(target);
        }

        let question = Question::text("Project name:").with_default(default.as_str());
        let answer = format_target_dir(&prompt.ask(&question)?.into_text()?);
        Ok(if answer.is_empty() { default.clone() } else { answer })
    }

    /// Returns `false` if the user declined to wipe a non-empty destination
    fn check_destination(target_dir: &str, root: &Path, prompt: &mut dyn Prompt) -> Result<bool> {
        if !root.exists() {
            fs::create_dir_all(root)
                .map_err(|e| SeedlingError::io("failed to create directory", root, e))?;
            return Ok(true);
        }

        if materializer::is_empty_dir(root)? {
            return Ok(true);
        }

        let location = if target_dir == "." {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{target_dir}\"")
        };
        let question = Question::Confirm {
            message: format!("{location} is not empty. Remove existing files and continue?"),
            default: false,
        };

        if !prompt.ask(&question)?.into_confirm()? {
            return Ok(false);
        }

        tracing::info!(root = %root.display(), "emptying destination");
        materializer::empty_dir(root)?;
        Ok(true)
    }

    fn next_steps(&self, root: &Path, template: &Template) -> NextSteps {
        let cd = (root != self.cwd).then(|| {
            let shown = root
                .strip_prefix(&self.cwd)
                .map_or_else(|_| root.display().to_string(), |rel| rel.display().to_string());
            if shown.contains(' ') {
                format!("\"{shown}\"")
            } else {
                shown
            }
        });

        if template.skip_install {
            return NextSteps {
                cd,
                ..NextSteps::default()
            };
        }

        let (install, run) = self.config.package_manager_commands();
        NextSteps {
            cd,
            install: Some(install),
            run: Some(run),
        }
    }
}

/// Trim whitespace and trailing path separators
fn format_target_dir(raw: &str) -> String {
    raw.trim().trim_end_matches(['/', '\\']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompt;
    use tempfile::TempDir;

    fn orchestrator(cwd: &Path, templates: &Path) -> ScaffoldOrchestrator {
        ScaffoldOrchestrator::new(SeedlingConfig::default(), cwd)
            .with_catalog(TemplateCatalog::builtin(templates))
    }

    #[test]
    fn test_format_target_dir() {
        assert_eq!(format_target_dir("  demo  "), "demo");
        assert_eq!(format_target_dir("demo///"), "demo");
        assert_eq!(format_target_dir("apps\\demo\\"), "apps\\demo");
        assert_eq!(format_target_dir("   "), "");
    }

    #[test]
    fn test_prompts_for_target_with_default() {
        let temp = TempDir::new().unwrap();
        let mut prompt = ScriptedPrompt::new().text("").select(2);
        let request = orchestrator(temp.path(), temp.path())
            .prepare(&ScaffoldOptions::default(), &mut prompt)
            .unwrap()
            .unwrap();

        assert_eq!(request.target_dir, "vite-project");
        assert_eq!(request.package_name, "vite-project");
        assert_eq!(request.template.name, "vite");
        assert!(request.root.is_dir());
        assert_eq!(prompt.asked(), ["Project name:", "Select a template:"]);
    }

    #[test]
    fn test_dot_target_uses_cwd_name() {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path().join("My Project");
        fs::create_dir_all(&cwd).unwrap();

        let mut prompt = ScriptedPrompt::new().text("");
        let options = ScaffoldOptions {
            target_dir: Some(".".to_string()),
            template: Some("static".to_string()),
        };
        let request = orchestrator(&cwd, temp.path())
            .prepare(&options, &mut prompt)
            .unwrap()
            .unwrap();

        assert_eq!(request.package_name, "my-project");
        assert_eq!(request.root, cwd.join("."));
        assert_eq!(prompt.asked(), ["Package name:"]);
    }

    #[test]
    fn test_empty_existing_destination_needs_no_confirmation() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("demo")).unwrap();

        let mut prompt = ScriptedPrompt::new();
        let options = ScaffoldOptions {
            target_dir: Some("demo".to_string()),
            template: Some("vite".to_string()),
        };
        let request = orchestrator(temp.path(), temp.path())
            .prepare(&options, &mut prompt)
            .unwrap();

        assert!(request.is_some());
        assert!(prompt.asked().is_empty());
    }

    #[test]
    fn test_confirmed_overwrite_empties_destination() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("demo");
        fs::create_dir_all(dest.join("old/nested")).unwrap();
        fs::write(dest.join("old/nested/file.txt"), "stale").unwrap();

        let mut prompt = ScriptedPrompt::new().confirm(true);
        let options = ScaffoldOptions {
            target_dir: Some("demo".to_string()),
            template: Some("vite".to_string()),
        };
        let request = orchestrator(temp.path(), temp.path())
            .prepare(&options, &mut prompt)
            .unwrap();

        assert!(request.is_some());
        assert!(materializer::is_empty_dir(&dest).unwrap());
        assert_eq!(
            prompt.asked(),
            ["Target directory \"demo\" is not empty. Remove existing files and continue?"]
        );
    }

    #[test]
    fn test_next_steps() {
        let temp = TempDir::new().unwrap();
        let orchestrator = orchestrator(temp.path(), temp.path());
        let vite = orchestrator.catalog().find("vite").unwrap();
        let static_html = orchestrator.catalog().find("static").unwrap();

        let steps = orchestrator.next_steps(&temp.path().join("demo"), vite);
        assert_eq!(
            steps,
            NextSteps {
                cd: Some("demo".to_string()),
                install: Some("npm install".to_string()),
                run: Some("npm run dev".to_string()),
            }
        );

        let steps = orchestrator.next_steps(&temp.path().join("my demo"), static_html);
        assert_eq!(steps.cd.as_deref(), Some("\"my demo\""));
        assert_eq!(steps.install, None);
        assert_eq!(steps.run, None);

        let steps = orchestrator.next_steps(temp.path(), vite);
        assert_eq!(steps.cd, None);
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let temp = TempDir::new().unwrap();
        let mut prompt = ScriptedPrompt::new();
        let options = ScaffoldOptions {
            target_dir: Some("demo".to_string()),
            template: Some("vite".to_string()),
        };
        let err = orchestrator(temp.path(), &temp.path().join("no-templates"))
            .run(&options, &mut prompt)
            .unwrap_err();
        assert!(matches!(err, SeedlingError::Io { .. }));
    }
}
