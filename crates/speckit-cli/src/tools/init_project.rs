use super::{optional, parse_args, require, run, SpecKitTool};
use serde::Deserialize;
use speckit_core::{io, paths, AiAssistant, SpecKit, SpecifyCommand};

pub struct InitProjectTool;

#[derive(Debug, Default, Deserialize)]
struct InitProjectArgs {
    project_name: Option<String>,
    ai_assistant: Option<String>,
}

impl SpecKitTool for InitProjectTool {
    fn name(&self) -> &str {
        "init_project"
    }

    fn description(&self) -> &str {
        "Initialize a new spec-kit project"
    }

    fn schema(&self) -> serde_json::Value {
        let assistants: Vec<&str> = AiAssistant::ALL.iter().map(|a| a.as_str()).collect();
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_name": {
                    "type": "string",
                    "description": "Name of the project to initialize"
                },
                "ai_assistant": {
                    "type": "string",
                    "description": "AI assistant to configure the project for (default: claude)",
                    "enum": assistants
                }
            },
            "required": ["project_name"]
        })
    }

    fn call(&self, args: serde_json::Value, kit: &SpecKit<'_>) -> Result<String, String> {
        let args: InitProjectArgs = parse_args(args)?;
        let project_name = require("project_name", args.project_name)?;
        let ai_assistant = match optional(args.ai_assistant) {
            Some(name) => name.parse::<AiAssistant>().map_err(|e| format!("Error: {e}"))?,
            None => AiAssistant::default(),
        };

        let project_dir = paths::project_dir(&kit.config().working_dir, &project_name)
            .map_err(|e| format!("Error: {e}"))?;
        io::ensure_dir(&project_dir)
            .map_err(|e| format!("Error creating project directory: {e}"))?;

        let output = run(
            kit,
            &SpecifyCommand::Init {
                project_name: project_name.clone(),
                ai_assistant,
            },
        )?
        .text();

        Ok(format!(
            "✅ Initialized spec-kit project '{project_name}' with {ai_assistant} assistant\n\n{output}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::FakeRunner;
    use speckit_core::Config;
    use tempfile::TempDir;

    #[test]
    fn init_creates_directory_and_defaults_to_claude() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let runner = FakeRunner::succeed("scaffolded\n").watching(dir.path().join("shop"));
        let kit = SpecKit::new(&config, &runner);

        let text = InitProjectTool
            .call(serde_json::json!({"project_name": "shop"}), &kit)
            .unwrap();

        assert!(text.starts_with("✅ Initialized spec-kit project 'shop' with claude assistant"));
        assert!(text.ends_with("scaffolded\n"));

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "specify");
        assert_eq!(calls[0].args, ["init", "shop", "--ai-assistant", "claude"]);
        assert_eq!(calls[0].cwd, dir.path());
        // The project directory already existed when the program started.
        assert_eq!(calls[0].watched_existed, Some(true));
    }

    #[test]
    fn init_rejects_absolute_project_name() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let target = elsewhere.path().join("escaped");
        let config = Config::new(dir.path());
        let runner = FakeRunner::succeed("");
        let kit = SpecKit::new(&config, &runner);

        let err = InitProjectTool
            .call(
                serde_json::json!({"project_name": target.display().to_string()}),
                &kit,
            )
            .unwrap_err();

        assert!(err.starts_with("Error: invalid project_name"), "{err}");
        assert!(!target.exists());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn init_rejects_parent_traversal() {
        let dir = TempDir::new().unwrap();
        let work = dir.path().join("work");
        std::fs::create_dir(&work).unwrap();
        let config = Config::new(&work);
        let runner = FakeRunner::succeed("");
        let kit = SpecKit::new(&config, &runner);

        let err = InitProjectTool
            .call(serde_json::json!({"project_name": "../escaped"}), &kit)
            .unwrap_err();

        assert!(err.starts_with("Error: invalid project_name"), "{err}");
        assert!(!dir.path().join("escaped").exists());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn init_passes_chosen_assistant() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let runner = FakeRunner::succeed("");
        let kit = SpecKit::new(&config, &runner);

        let text = InitProjectTool
            .call(
                serde_json::json!({"project_name": "shop", "ai_assistant": "cursor"}),
                &kit,
            )
            .unwrap();

        assert!(text.contains("with cursor assistant"));
        assert_eq!(runner.calls()[0].args[3], "cursor");
    }

    #[test]
    fn init_empty_assistant_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let runner = FakeRunner::succeed("");
        let kit = SpecKit::new(&config, &runner);

        InitProjectTool
            .call(
                serde_json::json!({"project_name": "shop", "ai_assistant": ""}),
                &kit,
            )
            .unwrap();
        assert_eq!(runner.calls()[0].args[3], "claude");
    }

    #[test]
    fn init_rejects_unknown_assistant_before_side_effects() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let runner = FakeRunner::succeed("");
        let kit = SpecKit::new(&config, &runner);

        let err = InitProjectTool
            .call(
                serde_json::json!({"project_name": "shop", "ai_assistant": "emacs"}),
                &kit,
            )
            .unwrap_err();

        assert!(err.starts_with("Error:"));
        assert!(err.contains("emacs"));
        assert!(!dir.path().join("shop").exists());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn init_directory_failure_skips_invocation() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("shop"), "a file, not a directory").unwrap();
        let config = Config::new(dir.path());
        let runner = FakeRunner::succeed("");
        let kit = SpecKit::new(&config, &runner);

        let err = InitProjectTool
            .call(serde_json::json!({"project_name": "shop"}), &kit)
            .unwrap_err();

        assert!(err.starts_with("Error creating project directory:"));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn init_program_failure_embeds_output() {
        let dir = TempDir::new().unwrap();
        let config = Config::new(dir.path());
        let runner = FakeRunner::fail(2, "template download failed\n");
        let kit = SpecKit::new(&config, &runner);

        let err = InitProjectTool
            .call(serde_json::json!({"project_name": "shop"}), &kit)
            .unwrap_err();

        assert_eq!(
            err,
            "Error running spec-kit init: template download failed\n"
        );
        // Directory is created before the program runs.
        assert!(dir.path().join("shop").is_dir());
    }
}
