//! CLI Adapter.

mod settings;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::adapters::TerminalHost;
use crate::app::CommandId;
use crate::app::api::{self, RunOptions};
use crate::domain::{AppError, NewAppSettings, RenderOptions};
use crate::ports::DialogOutcome;

#[derive(Parser)]
#[command(name = "dapp")]
#[command(version)]
#[command(about = "Run docker-app against the current project with stored settings", long_about = None)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    project_dir: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Cancel docker-app after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy the selected application, streaming output
    #[clap(visible_alias = "d")]
    Deploy {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Render the selected application
    #[clap(visible_alias = "r")]
    Render {
        /// Pass the stored override parameters
        #[arg(short = 's', long)]
        with_parameters: bool,
        /// Write the rendered output to a file
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Show metadata, services and parameters of the selected application
    Inspect {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Check the selected application for errors
    Validate {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Create a new application with `docker-app init`
    #[clap(visible_alias = "n")]
    New {
        /// Application name (prompts for all fields when omitted)
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Maintainer as name:email (repeatable)
        #[arg(long = "maintainer")]
        maintainers: Vec<String>,
        /// Create a single-file application
        #[arg(long)]
        single_file: bool,
    },
    /// Edit or show the stored deploy settings
    #[clap(visible_alias = "s")]
    Settings(settings::SettingsArgs),
    /// Select the application the other commands operate on
    Select {
        /// Application file, directory or metadata file
        #[arg(conflicts_with = "unset")]
        path: Option<PathBuf>,
        /// Clear the stored selection
        #[arg(long)]
        unset: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project_dir = cli.project_dir;
    let result: Result<i32, AppError> = match cli.command {
        Commands::Deploy { run } => {
            run_command(project_dir, CommandId::Deploy, TerminalHost::new(), options(&run, None))
        }
        Commands::Render { with_parameters, output, run } => run_command(
            project_dir,
            CommandId::Render,
            TerminalHost::new(),
            options(&run, Some(RenderOptions { with_parameters, output })),
        ),
        Commands::Inspect { run } => {
            run_command(project_dir, CommandId::Inspect, TerminalHost::new(), options(&run, None))
        }
        Commands::Validate { run } => {
            run_command(project_dir, CommandId::Validate, TerminalHost::new(), options(&run, None))
        }
        Commands::New { name, description, maintainers, single_file } => {
            let host = match name {
                Some(name) => TerminalHost::new().with_new_app(NewAppSettings {
                    name,
                    description,
                    maintainers: (!maintainers.is_empty()).then(|| maintainers.join("\n")),
                    single_file,
                }),
                None => TerminalHost::new(),
            };
            run_command(project_dir, CommandId::NewApp, host, RunOptions::default())
        }
        Commands::Settings(args) => settings::run_settings(project_dir, args),
        Commands::Select { path, unset } => {
            let host = match (path, unset) {
                (Some(path), _) => {
                    TerminalHost::new().with_file_choice(DialogOutcome::Confirmed(path))
                }
                (None, true) => TerminalHost::new().with_file_choice(DialogOutcome::Cancelled),
                (None, false) => TerminalHost::new(),
            };
            run_command(project_dir, CommandId::SelectApp, host, RunOptions::default())
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(filter).init();
}

/// Options for commands that run docker-app: Ctrl+C cancels the run instead of killing `dapp`.
fn options(run: &RunArgs, render: Option<RenderOptions>) -> RunOptions {
    RunOptions {
        render: render.unwrap_or_default(),
        timeout: run.timeout.map(Duration::from_secs),
        cancel_on_interrupt: true,
    }
}

fn run_command(
    project_dir: Option<PathBuf>,
    id: CommandId,
    host: TerminalHost,
    options: RunOptions,
) -> Result<i32, AppError> {
    match project_dir {
        Some(dir) => api::run_at(dir, id, host, options),
        None => api::run(id, host, options),
    }
}
