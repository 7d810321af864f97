//! Typed model of the `specify` command line.
//!
//! Each tool maps onto exactly one [`SpecifyCommand`] variant, and each
//! variant knows the literal subcommand and argument layout the external
//! program expects:
//!
//! ```text
//! specify init <project_name> --ai-assistant <assistant>
//! specify specify <feature_description>
//! specify plan <spec_file>
//! specify implement <spec_file> --output <output_dir>
//! specify analyze <project_path>
//! specify tasks <spec_file>
//! ```

use crate::error::SpecKitError;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// AI assistant a new project is scaffolded for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AiAssistant {
    #[default]
    Claude,
    Gemini,
    Copilot,
    Cursor,
}

impl AiAssistant {
    pub const ALL: [AiAssistant; 4] = [
        AiAssistant::Claude,
        AiAssistant::Gemini,
        AiAssistant::Copilot,
        AiAssistant::Cursor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AiAssistant::Claude => "claude",
            AiAssistant::Gemini => "gemini",
            AiAssistant::Copilot => "copilot",
            AiAssistant::Cursor => "cursor",
        }
    }
}

impl fmt::Display for AiAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiAssistant {
    type Err = SpecKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| SpecKitError::InvalidAssistant(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecifyCommand {
    Init {
        project_name: String,
        ai_assistant: AiAssistant,
    },
    Specify {
        feature_description: String,
    },
    Plan {
        spec_file: String,
    },
    Implement {
        spec_file: String,
        output_dir: PathBuf,
    },
    Analyze {
        project_path: String,
    },
    Tasks {
        spec_file: String,
    },
}

impl SpecifyCommand {
    /// The subcommand literal passed as the first argument.
    pub fn subcommand(&self) -> &'static str {
        match self {
            SpecifyCommand::Init { .. } => "init",
            SpecifyCommand::Specify { .. } => "specify",
            SpecifyCommand::Plan { .. } => "plan",
            SpecifyCommand::Implement { .. } => "implement",
            SpecifyCommand::Analyze { .. } => "analyze",
            SpecifyCommand::Tasks { .. } => "tasks",
        }
    }

    /// Full argument vector following the program name, subcommand first.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = vec![OsString::from(self.subcommand())];
        match self {
            SpecifyCommand::Init {
                project_name,
                ai_assistant,
            } => {
                args.push(project_name.into());
                args.push("--ai-assistant".into());
                args.push(ai_assistant.as_str().into());
            }
            SpecifyCommand::Specify {
                feature_description,
            } => args.push(feature_description.into()),
            SpecifyCommand::Plan { spec_file } | SpecifyCommand::Tasks { spec_file } => {
                args.push(spec_file.into())
            }
            SpecifyCommand::Implement {
                spec_file,
                output_dir,
            } => {
                args.push(spec_file.into());
                args.push("--output".into());
                args.push(output_dir.clone().into_os_string());
            }
            SpecifyCommand::Analyze { project_path } => args.push(project_path.into()),
        }
        args
    }
}
