use serde::de::DeserializeOwned;
use speckit_core::{ProcessOutcome, SpecKit, SpecifyCommand};

pub mod analyze;
pub mod implement;
pub mod init_project;
pub mod plan;
pub mod specify;
pub mod tasks;

/// A remote-callable operation backed by one `specify` subcommand.
///
/// `call` never panics and never fails at the protocol level: `Ok` carries the
/// success text, `Err` carries a human-readable error text. Both end up as a
/// single text block in the `tools/call` result.
pub trait SpecKitTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> serde_json::Value;
    fn call(&self, args: serde_json::Value, kit: &SpecKit<'_>) -> Result<String, String>;
}

/// The registry, in listing order.
pub fn all_tools() -> Vec<Box<dyn SpecKitTool>> {
    vec![
        Box::new(init_project::InitProjectTool),
        Box::new(specify::SpecifyTool),
        Box::new(plan::PlanTool),
        Box::new(implement::ImplementTool),
        Box::new(analyze::AnalyzeTool),
        Box::new(tasks::TasksTool),
    ]
}

pub fn find<'a>(tools: &'a [Box<dyn SpecKitTool>], name: &str) -> Option<&'a dyn SpecKitTool> {
    tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
}

/// Names listed under `required` in a tool's input schema.
pub fn required_fields(tool: &dyn SpecKitTool) -> Vec<String> {
    tool.schema()["required"]
        .as_array()
        .map(|a| {
            a.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Decode tool arguments. Absent or `null` arguments decode as defaults so the
/// caller gets a "required" message rather than a parse error.
pub(crate) fn parse_args<T: DeserializeOwned + Default>(
    args: serde_json::Value,
) -> Result<T, String> {
    if args.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(args).map_err(|e| format!("Error parsing arguments: {e}"))
}

/// Return the field's value, or the "required" error when it is missing or blank.
pub(crate) fn require(field: &str, value: Option<String>) -> Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("Error: {field} is required")),
    }
}

/// Treat blank optional values as unset.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Execute `cmd` and return the successful outcome, or the error text to report.
pub(crate) fn run(kit: &SpecKit<'_>, cmd: &SpecifyCommand) -> Result<ProcessOutcome, String> {
    let sub = cmd.subcommand();
    match kit.execute(cmd) {
        Ok(outcome) if outcome.success => Ok(outcome),
        Ok(outcome) => Err(format!("Error running spec-kit {sub}: {}", outcome.text())),
        Err(e) => Err(format!("Error running spec-kit {sub}: {e}")),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use speckit_core::{CommandRunner, ProcessOutcome, SpecKitError};
    use std::ffi::OsString;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    pub enum Script {
        Succeed(Vec<u8>),
        Fail(i32, Vec<u8>),
        SpawnFail,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Call {
        pub program: String,
        pub args: Vec<String>,
        pub cwd: PathBuf,
        /// Whether the watched path existed when the program was started.
        pub watched_existed: Option<bool>,
    }

    /// Records every invocation and answers with a fixed script.
    pub struct FakeRunner {
        script: Script,
        watch: Option<PathBuf>,
        pub calls: Mutex<Vec<Call>>,
    }

    impl FakeRunner {
        pub fn succeed(output: impl Into<Vec<u8>>) -> Self {
            Self::new(Script::Succeed(output.into()))
        }

        pub fn fail(status: i32, output: impl Into<Vec<u8>>) -> Self {
            Self::new(Script::Fail(status, output.into()))
        }

        /// Check, at invocation time, whether `path` exists.
        pub fn watching(mut self, path: impl Into<PathBuf>) -> Self {
            self.watch = Some(path.into());
            self
        }

        pub fn spawn_fail() -> Self {
            Self::new(Script::SpawnFail)
        }

        fn new(script: Script) -> Self {
            Self {
                script,
                watch: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(
            &self,
            program: &str,
            args: &[OsString],
            cwd: &Path,
        ) -> speckit_core::Result<ProcessOutcome> {
            self.calls.lock().unwrap().push(Call {
                program: program.to_string(),
                args: args
                    .iter()
                    .map(|a| a.to_string_lossy().into_owned())
                    .collect(),
                cwd: cwd.to_path_buf(),
                watched_existed: self.watch.as_ref().map(|p| p.exists()),
            });
            match &self.script {
                Script::Succeed(out) => Ok(ProcessOutcome::success(out.clone())),
                Script::Fail(code, out) => Ok(ProcessOutcome::failure(*code, out.clone())),
                Script::SpawnFail => Err(SpecKitError::Spawn {
                    program: program.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                }),
            }
        }
    }
}
