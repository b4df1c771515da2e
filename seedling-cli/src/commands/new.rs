//! Project scaffolding command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use seedling::prompt::Prompt;
use seedling::{NextSteps, ScaffoldOptions, ScaffoldOrchestrator, ScaffoldReport};

/// Create a new project from a template
pub struct NewCommand {
    orchestrator: ScaffoldOrchestrator,
    options: ScaffoldOptions,
}

impl NewCommand {
    /// Create a new command instance
    #[must_use]
    pub const fn new(orchestrator: ScaffoldOrchestrator, options: ScaffoldOptions) -> Self {
        Self {
            orchestrator,
            options,
        }
    }

    /// Execute the command
    ///
    /// A declined overwrite ends the command successfully without writing
    /// anything.
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt fails or is cancelled, or the template
    /// cannot be written to the destination.
    pub fn execute(&self, prompt: &mut dyn Prompt) -> Result<()> {
        let Some(request) = self
            .orchestrator
            .prepare(&self.options, prompt)
            .context("Failed to prepare project")?
        else {
            return Ok(());
        };

        println!();
        println!(
            "{} {}",
            style("Scaffolding project in").green().bold(),
            style(request.root.display()).cyan().bold()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Copying template {}...", request.template.name));

        let report = self.orchestrator.materialize(&request);
        spinner.finish_and_clear();
        let report = report.with_context(|| {
            format!(
                "Failed to write template {} from {}",
                request.template.name,
                self.orchestrator.catalog().root().display()
            )
        })?;

        print_success(&report);
        Ok(())
    }
}

/// Shell commands to show after a successful run
fn next_step_commands(steps: &NextSteps) -> Vec<String> {
    [
        steps.cd.as_ref().map(|dir| format!("cd {dir}")),
        steps.install.clone(),
        steps.run.clone(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Print success message with next steps
fn print_success(report: &ScaffoldReport) {
    println!();
    println!("{}", style("✓ Done.").green().bold());

    let commands = next_step_commands(&report.next_steps);
    if commands.is_empty() {
        return;
    }

    println!("{}", style("Now run:").bold());
    println!();
    for command in commands {
        println!("  {} {}", style("$").dim(), style(command).cyan());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedling::catalog::TemplateCatalog;
    use seedling::testing::ScriptedPrompt;
    use seedling::SeedlingConfig;
    use std::fs;
    use tempfile::TempDir;

    fn command(cwd: &std::path::Path, templates: &std::path::Path, target: &str) -> NewCommand {
        let orchestrator = ScaffoldOrchestrator::new(SeedlingConfig::default(), cwd)
            .with_catalog(TemplateCatalog::builtin(templates));
        NewCommand::new(
            orchestrator,
            ScaffoldOptions {
                target_dir: Some(target.to_string()),
                template: Some("static".to_string()),
            },
        )
    }

    #[test]
    fn test_next_step_commands() {
        let steps = NextSteps {
            cd: Some("demo".to_string()),
            install: Some("npm install".to_string()),
            run: Some("npm run dev".to_string()),
        };
        assert_eq!(
            next_step_commands(&steps),
            ["cd demo", "npm install", "npm run dev"]
        );
        assert!(next_step_commands(&NextSteps::default()).is_empty());
    }

    #[test]
    fn test_execute_writes_project() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("templates/template-static");
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("index.html"), "<h1>hi</h1>").unwrap();

        let mut prompt = ScriptedPrompt::new();
        command(temp.path(), &temp.path().join("templates"), "site")
            .execute(&mut prompt)
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("site/index.html")).unwrap(),
            "<h1>hi</h1>"
        );
    }

    #[test]
    fn test_missing_template_names_templates_root() {
        let temp = TempDir::new().unwrap();
        let templates = temp.path().join("empty-templates");

        let mut prompt = ScriptedPrompt::new();
        let err = command(temp.path(), &templates, "site")
            .execute(&mut prompt)
            .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("Failed to write template static"), "{message}");
        assert!(message.contains(&templates.display().to_string()), "{message}");
    }

    #[test]
    fn test_execute_declined_is_ok() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("site")).unwrap();
        fs::write(temp.path().join("site/existing.txt"), "keep").unwrap();

        let mut prompt = ScriptedPrompt::new().confirm(false);
        command(temp.path(), temp.path(), "site")
            .execute(&mut prompt)
            .unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("site/existing.txt")).unwrap(),
            "keep"
        );
    }
}
