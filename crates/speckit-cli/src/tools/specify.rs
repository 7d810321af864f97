use super::{parse_args, require, run, SpecKitTool};
use serde::Deserialize;
use speckit_core::{io, paths, SpecKit, SpecifyCommand};

pub struct SpecifyTool;

#[derive(Debug, Default, Deserialize)]
struct SpecifyArgs {
    feature_description: Option<String>,
}

impl SpecKitTool for SpecifyTool {
    fn name(&self) -> &str {
        "specify"
    }

    fn description(&self) -> &str {
        "Create feature specification from natural language"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "feature_description": {
                    "type": "string",
                    "description": "Natural language description of the feature"
                }
            },
            "required": ["feature_description"]
        })
    }

    fn call(&self, args: serde_json::Value, kit: &SpecKit<'_>) -> Result<String, String> {
        let args: SpecifyArgs = parse_args(args)?;
        let feature_description = require("feature_description", args.feature_description)?;

        let outcome = run(
            kit,
            &SpecifyCommand::Specify {
                feature_description,
            },
        )?;
        let spec = outcome.text();

        // Persist the raw bytes; only the response text is decoded.
        let spec_path = paths::temp_spec_path(&kit.config().working_dir);
        if let Err(e) = io::atomic_write(&spec_path, &outcome.output) {
            tracing::warn!("could not save specification: {e}");
            // The specification was produced; hand it back even though saving failed.
            return Err(format!(
                "Error saving spec file: {e}\n\n**Specification:**\n{spec}"
            ));
        }

        Ok(format!(
            "✅ Created specification from description\n\n**Specification:**\n{spec}\n\n**Saved to:** {}",
            spec_path.display()
        ))
    }
}
