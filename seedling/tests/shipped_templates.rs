//! Checks the templates shipped in the workspace `templates/` directory

use std::fs;
use std::path::PathBuf;

use seedling::catalog::{TemplateCatalog, TEMPLATES};
use seedling::materializer::MANIFEST_FILE;
use seedling::testing::ScriptedPrompt;
use seedling::{ScaffoldOptions, ScaffoldOrchestrator, ScaffoldOutcome, SeedlingConfig};
use serde_json::Value;
use tempfile::TempDir;

fn workspace_templates() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("templates")
}

#[test]
fn test_every_catalog_entry_is_shipped() {
    let catalog = TemplateCatalog::builtin(workspace_templates());
    for template in TEMPLATES {
        let dir = catalog.resolve(template);
        assert!(dir.is_dir(), "missing {}", dir.display());
        assert!(dir.join("_gitignore").is_file(), "{} has no _gitignore", template.name);

        let manifest = dir.join(MANIFEST_FILE);
        if template.skip_install {
            assert!(!manifest.exists(), "{} should not need installing", template.name);
            continue;
        }
        let value: Value = serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
        assert!(value["scripts"]["dev"].is_string(), "{} has no dev script", template.name);
    }
}

/// `vite` with no root argument serves `index.html` from the project root
#[test]
fn test_dev_server_has_an_entry_page() {
    let catalog = TemplateCatalog::builtin(workspace_templates());
    for template in TEMPLATES.iter().filter(|t| !t.skip_install) {
        let dir = catalog.resolve(template);
        let manifest: Value =
            serde_json::from_str(&fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap()).unwrap();
        if manifest["scripts"]["dev"] == "vite" {
            assert!(
                dir.join("index.html").is_file(),
                "{} serves a root without index.html",
                template.name
            );
        }
    }
}

#[test]
fn test_discovered_root_contains_templates() {
    let root = TemplateCatalog::discover_root();
    assert!(root.join("template-vanilla").is_dir(), "{}", root.display());
}

#[test]
fn test_scaffold_vite_lib_from_shipped_template() {
    let cwd = TempDir::new().unwrap();
    let orchestrator = ScaffoldOrchestrator::new(SeedlingConfig::default(), cwd.path())
        .with_catalog(TemplateCatalog::builtin(workspace_templates()));
    let options = ScaffoldOptions {
        target_dir: Some("widgets".to_string()),
        template: Some("vite-lib".to_string()),
    };

    let outcome = orchestrator
        .run(&options, &mut ScriptedPrompt::new())
        .unwrap();
    let ScaffoldOutcome::Created(report) = outcome else {
        panic!("expected project to be created");
    };

    let root = cwd.path().join("widgets");
    assert_eq!(report.root, root);
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("lib/index.ts").is_file());
    assert!(root.join("vite.config.ts").is_file());

    let manifest: Value =
        serde_json::from_str(&fs::read_to_string(root.join(MANIFEST_FILE)).unwrap()).unwrap();
    assert_eq!(manifest["name"], "widgets");
    let keys: Vec<_> = manifest.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.first().map(String::as_str), Some("name"));
}

#[test]
fn test_static_template_has_no_install_step() {
    let cwd = TempDir::new().unwrap();
    let orchestrator = ScaffoldOrchestrator::new(SeedlingConfig::default(), cwd.path())
        .with_catalog(TemplateCatalog::builtin(workspace_templates()));
    let options = ScaffoldOptions {
        target_dir: Some("site".to_string()),
        template: Some("static".to_string()),
    };

    let ScaffoldOutcome::Created(report) = orchestrator
        .run(&options, &mut ScriptedPrompt::new())
        .unwrap()
    else {
        panic!("expected project to be created");
    };
    assert!(report.next_steps.install.is_none());
    assert!(report.next_steps.run.is_none());
    assert!(cwd.path().join("site/index.html").is_file());
}
