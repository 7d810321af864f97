use super::{parse_args, require, run, SpecKitTool};
use serde::Deserialize;
use speckit_core::{SpecKit, SpecifyCommand};

pub struct PlanTool;

#[derive(Debug, Default, Deserialize)]
struct PlanArgs {
    spec_file: Option<String>,
}

impl SpecKitTool for PlanTool {
    fn name(&self) -> &str {
        "plan"
    }

    fn description(&self) -> &str {
        "Generate implementation plan from specification"
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
        let args: PlanArgs = parse_args(args)?;
        let spec_file = require("spec_file", args.spec_file)?;
        let plan = run(kit, &SpecifyCommand::Plan { spec_file })?.text();
        Ok(format!("✅ Generated implementation plan\n\n**Plan:**\n{plan}"))
    }
}
