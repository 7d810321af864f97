//! Subprocess invocation for the external `specify` program.
//!
//! The program is opaque: it is run once per tool call, to completion, with
//! stdout and stderr captured together and returned as text. There is no
//! timeout and no streaming; a hung child blocks only the call that spawned it.

use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::command::SpecifyCommand;
use crate::config::Config;
use crate::error::{Result, SpecKitError};

/// Captured result of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Combined stdout and stderr bytes, in the order the child wrote them.
    pub output: Vec<u8>,
    /// Exit code, `None` when terminated by a signal.
    pub status: Option<i32>,
    pub success: bool,
}

impl ProcessOutcome {
    pub fn success(output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
            status: Some(0),
            success: true,
        }
    }

    pub fn failure(status: i32, output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
            status: Some(status),
            success: false,
        }
    }

    /// Output decoded for display; invalid UTF-8 becomes U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Seam between tool handlers and the operating system.
///
/// `Err` is reserved for failures to start the program at all; a program that
/// runs and exits non-zero is an `Ok` outcome with `success == false`.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> Result<ProcessOutcome>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[OsString], cwd: &Path) -> Result<ProcessOutcome> {
        let spawn_err = |source| SpecKitError::Spawn {
            program: program.to_string(),
            source,
        };

        // One pipe shared by stdout and stderr keeps the interleaving intact.
        let (reader, writer) = std::io::pipe().map_err(spawn_err)?;
        let writer_err = writer.try_clone().map_err(spawn_err)?;

        let mut cmd = Command::new(program);
        cmd.args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_err);

        let mut child = cmd.spawn().map_err(spawn_err)?;
        // The Command still owns write ends; EOF only arrives once they are gone.
        drop(cmd);

        let (output, status) = drain(&mut child, reader)?;
        Ok(ProcessOutcome {
            output,
            status: status.code(),
            success: status.success(),
        })
    }
}

/// Read `reader` to EOF, then wait for `child`. On a read failure the child is
/// killed and reaped before the error is returned.
fn drain(child: &mut Child, mut reader: impl Read) -> Result<(Vec<u8>, ExitStatus)> {
    let mut raw = Vec::new();
    if let Err(e) = reader.read_to_end(&mut raw) {
        let _ = child.kill();
        let _ = child.wait();
        return Err(e.into());
    }
    let status = child.wait()?;
    Ok((raw, status))
}

/// Binds the immutable server [`Config`] to a [`CommandRunner`].
pub struct SpecKit<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
}

impl<'a> SpecKit<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Run `cmd` once in the configured working directory.
    pub fn execute(&self, cmd: &SpecifyCommand) -> Result<ProcessOutcome> {
        tracing::info!(
            program = %self.config.program,
            subcommand = cmd.subcommand(),
            cwd = %self.config.working_dir.display(),
            "invoking external program"
        );
        let outcome = self
            .runner
            .run(&self.config.program, &cmd.args(), &self.config.working_dir)
            .inspect_err(|e| tracing::warn!(subcommand = cmd.subcommand(), "{e}"))?;
        if outcome.success {
            tracing::debug!(subcommand = cmd.subcommand(), "external program succeeded");
        } else {
            tracing::warn!(
                subcommand = cmd.subcommand(),
                status = ?outcome.status,
                "external program failed"
            );
        }
        Ok(outcome)
    }
}
