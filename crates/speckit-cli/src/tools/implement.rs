use super::{optional, parse_args, require, run, SpecKitTool};
use serde::Deserialize;
use speckit_core::{paths, SpecKit, SpecifyCommand};
use std::path::PathBuf;

pub struct ImplementTool;

#[derive(Debug, Default, Deserialize)]
struct ImplementArgs {
    spec_file: Option<String>,
    output_dir: Option<String>,
}

impl SpecKitTool for ImplementTool {
    fn name(&self) -> &str {
        "implement"
    }

    fn description(&self) -> &str {
        "Generate code from specification"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "spec_file": {
                    "type": "string",
                    "description": "Path to the specification file"
                },
                "output_dir": {
                    "type": "string",
                    "description": "Directory to output generated code (default: <working dir>/generated)"
                }
            },
            "required": ["spec_file"]
        })
    }

    fn call(&self, args: serde_json::Value, kit: &SpecKit<'_>) -> Result<String, String> {
        let args: ImplementArgs = parse_args(args)?;
        let spec_file = require("spec_file", args.spec_file)?;
        let output_dir = optional(args.output_dir)
            .map(PathBuf::from)
            .unwrap_or_else(|| paths::default_output_dir(&kit.config().working_dir));

        let output = run(
            kit,
            &SpecifyCommand::Implement {
                spec_file,
                output_dir: output_dir.clone(),
            },
        )?
        .text();

        Ok(format!(
            "✅ Generated code from specification\n\n**Output:**\n{output}\n\n**Generated files in:** {}",
            output_dir.display()
        ))
    }
}
