use crate::tools::{self, SpecKitTool};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use speckit_core::SpecKit;
use std::io::{BufRead, Write};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "spec-kit";
pub const SERVER_TITLE: &str = "Spec-Kit MCP Server";

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 protocol types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    fn ok(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToolContent {
    pub r#type: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Fold a tool's outcome into the single text block every call returns.
    pub fn from_outcome(outcome: Result<String, String>) -> Self {
        let (text, is_error) = match outcome {
            Ok(text) => (text, false),
            Err(text) => (text, true),
        };
        Self {
            content: vec![ToolContent {
                r#type: "text",
                text,
            }],
            is_error,
        }
    }
}

// ---------------------------------------------------------------------------
// Server loop
// ---------------------------------------------------------------------------

pub fn run(kit: &SpecKit<'_>) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    tracing::info!(
        working_dir = %kit.config().working_dir.display(),
        "starting spec-kit MCP server on stdio"
    );
    serve(stdin.lock(), stdout.lock(), &tools::all_tools(), kit)?;
    tracing::info!("stdin closed, shutting down");
    Ok(())
}

/// Answer newline-delimited JSON-RPC requests until `input` reaches EOF.
pub fn serve<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    tools: &[Box<dyn SpecKitTool>],
    kit: &SpecKit<'_>,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let raw: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                let resp = JsonRpcResponse::err(None, -32700, format!("parse error: {e}"));
                write_response(&mut output, &resp)?;
                continue;
            }
        };

        // Notifications have no "id" key and get no response
        if !raw
            .as_object()
            .map(|o| o.contains_key("id"))
            .unwrap_or(false)
        {
            if let Some(method) = raw.get("method").and_then(Value::as_str) {
                tracing::debug!(method, "notification");
            }
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(r) => r,
            Err(e) => {
                let resp = JsonRpcResponse::err(None, -32600, format!("invalid request: {e}"));
                write_response(&mut output, &resp)?;
                continue;
            }
        };

        let response = handle_request(&request, tools, kit);
        write_response(&mut output, &response)?;
    }

    Ok(())
}

fn write_response<W: Write>(out: &mut W, resp: &JsonRpcResponse) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, resp)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Request dispatch
// ---------------------------------------------------------------------------

pub fn handle_request(
    req: &JsonRpcRequest,
    tools: &[Box<dyn SpecKitTool>],
    kit: &SpecKit<'_>,
) -> JsonRpcResponse {
    let id = req.id.clone();
    match req.method.as_str() {
        "initialize" => JsonRpcResponse::ok(
            id,
            serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "title": SERVER_TITLE,
                    "version": env!("CARGO_PKG_VERSION")
                }
            }),
        ),

        "ping" => JsonRpcResponse::ok(id, serde_json::json!({})),

        "tools/list" => {
            let tool_list: Vec<Value> = tools
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "name": t.name(),
                        "description": t.description(),
                        "inputSchema": t.schema()
                    })
                })
                .collect();
            JsonRpcResponse::ok(id, serde_json::json!({ "tools": tool_list }))
        }

        "tools/call" => {
            let Some(params) = &req.params else {
                return JsonRpcResponse::err(id, -32602, "missing params");
            };
            let Some(tool_name) = params["name"].as_str() else {
                return JsonRpcResponse::err(id, -32602, "missing tool name in params");
            };
            let Some(tool) = tools::find(tools, tool_name) else {
                return JsonRpcResponse::err(id, -32601, format!("tool not found: {tool_name}"));
            };

            let args = params.get("arguments").cloned().unwrap_or(Value::Null);
            tracing::info!(tool = tool_name, "tools/call");
            let call_result = ToolCallResult::from_outcome(tool.call(args, kit));
            if call_result.is_error {
                tracing::warn!(tool = tool_name, "tool reported an error");
            }

            match serde_json::to_value(&call_result) {
                Ok(v) => JsonRpcResponse::ok(id, v),
                Err(e) => JsonRpcResponse::err(id, -32603, format!("serialization error: {e}")),
            }
        }

        other => JsonRpcResponse::err(id, -32601, format!("method not found: {other}")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
