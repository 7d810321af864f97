mod cmd;
mod output;
mod tools;

use clap::{Parser, Subcommand};
use speckit_core::{paths, Config, SpecKit, SystemRunner};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spec-kit-mcp",
    about = "MCP server exposing the spec-kit `specify` CLI as tools",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory projects are created in and `specify` runs from (default: current dir)
    #[arg(long, global = true, env = paths::WORKING_DIR_ENV)]
    working_dir: Option<PathBuf>,

    /// Executable to invoke for every tool
    #[arg(long, global = true, env = paths::PROGRAM_ENV)]
    program: Option<String>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as an MCP stdio server (default)
    Serve,

    /// List the available tools and their required fields
    Tools,

    /// Invoke one tool once and print its result
    Call {
        /// Tool name, e.g. `plan`
        name: String,

        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);

    let default_level = match command {
        Commands::Serve => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::resolve(cli.working_dir.as_deref(), cli.program.as_deref());
    if !config.program_available() {
        tracing::warn!(
            program = %config.program,
            "program not found on PATH; tool calls will report spawn errors"
        );
    }
    let runner = SystemRunner;
    let kit = SpecKit::new(&config, &runner);

    let result = match command {
        Commands::Serve => cmd::mcp::run(&kit),
        Commands::Tools => cmd::tools::run(cli.json),
        Commands::Call { name, args } => cmd::call::run(&kit, &name, args.as_deref(), cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
