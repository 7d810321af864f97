pub mod command;
pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod runner;

pub use command::{AiAssistant, SpecifyCommand};
pub use config::Config;
pub use error::{Result, SpecKitError};
pub use runner::{CommandRunner, ProcessOutcome, SpecKit, SystemRunner};
