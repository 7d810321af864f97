use super::{parse_args, require, run, SpecKitTool};
use serde::Deserialize;
use speckit_core::{SpecKit, SpecifyCommand};

pub struct AnalyzeTool;

#[derive(Debug, Default, Deserialize)]
struct AnalyzeArgs {
    project_path: Option<String>,
}

impl SpecKitTool for AnalyzeTool {
    fn name(&self) -> &str {
        "analyze"
    }

    fn description(&self) -> &str {
        "Analyze project state and provide insights"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "project_path": {
                    "type": "string",
                    "description": "Path to the project directory"
                }
            },
            "required": ["project_path"]
        })
    }

    fn call(&self, args: serde_json::Value, kit: &SpecKit<'_>) -> Result<String, String> {
        let args: AnalyzeArgs = parse_args(args)?;
        let project_path = require("project_path", args.project_path)?;
        let analysis = run(kit, &SpecifyCommand::Analyze { project_path })?.text();
        Ok(format!("✅ Analyzed project state\n\n**Analysis:**\n{analysis}"))
    }
}
