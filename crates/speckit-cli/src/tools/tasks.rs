use super::{parse_args, require, run, SpecKitTool};
use serde::Deserialize;
use speckit_core::{SpecKit, SpecifyCommand};

pub struct TasksTool;

#[derive(Debug, Default, Deserialize)]
struct TasksArgs {
    spec_file: Option<String>,
}

impl SpecKitTool for TasksTool {
    fn name(&self) -> &str {
        "tasks"
    }

    fn description(&self) -> &str {
        "Break down work into actionable tasks"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "spec_file": {
                    "type": "string",
                    "description": "Path to the specification file"
                }
            },
            "required": ["spec_file"]
        })
    }

    fn call(&self, args: serde_json::Value, kit: &SpecKit<'_>) -> Result<String, String> {
        let args: TasksArgs = parse_args(args)?;
        let spec_file = require("spec_file", args.spec_file)?;
        let tasks = run(kit, &SpecifyCommand::Tasks { spec_file })?.text();
        Ok(format!("✅ Generated actionable tasks\n\n**Tasks:**\n{tasks}"))
    }
}
