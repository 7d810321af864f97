use crate::cmd::mcp::ToolCallResult;
use crate::output::print_json;
use crate::tools::{all_tools, find};
use anyhow::{bail, Context};
use speckit_core::SpecKit;

/// Invoke a single tool outside of an MCP session.
pub fn run(kit: &SpecKit<'_>, name: &str, args: Option<&str>, json: bool) -> anyhow::Result<()> {
    let tools = all_tools();
    let Some(tool) = find(&tools, name) else {
        bail!("unknown tool: {name}");
    };

    let args = match args {
        Some(raw) => serde_json::from_str(raw).context("--args must be a JSON object")?,
        None => serde_json::Value::Null,
    };

    let result = ToolCallResult::from_outcome(tool.call(args, kit));
    if json {
        print_json(&result)?;
    } else {
        for block in &result.content {
            println!("{}", block.text);
        }
    }

    if result.is_error {
        bail!("tool '{name}' reported an error");
    }
    Ok(())
}
