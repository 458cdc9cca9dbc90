//! # ek CLI Entry Point
//!
//! Parses CLI arguments with clap and routes commands into the library.
//! Paths given to every command must be absolute; the library rejects
//! anything else with a typed error, and this layer turns errors into a
//! logged message and a non-zero exit.
//!
//! ## Command Structure
//!
//! - **Project**: `init`, `info`, `modules`
//! - **Generation**: `generate`
//! - **Build**: `build`, `prebuild`, `postmodule`, `postbuild`
//! - **Maintenance**: `clean`, `completion`

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use inquire::Text;
use std::path::PathBuf;

use enkit::build;
use enkit::clean;
use enkit::config::{EngineConfig, WINDOWS_PLATFORM};
use enkit::descriptor;
use enkit::error::Error;
use enkit::generate as project_files;
use enkit::modules;
use enkit::scaffold;
use enkit::stage;
use enkit::ui;

#[derive(Parser)]
#[command(name = "ek")]
#[command(about = "Project manager for C++ game-engine workspaces", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project against an engine checkout
    Init {
        /// Absolute path to the project root
        project: PathBuf,
        /// Absolute path to the engine root
        #[arg(long)]
        engine: PathBuf,
        /// Project name (prompted interactively when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Show the parsed project descriptor
    Info {
        /// Absolute path to the project root
        project: PathBuf,
    },
    /// List discovered modules and plugins
    Modules {
        /// Absolute path to the project root
        project: PathBuf,
    },
    /// Generate the Visual Studio solution and module projects
    Generate {
        /// Absolute path to the project root
        project: PathBuf,
    },
    /// Remove intermediate folders and generated files
    Clean {
        /// Absolute path to the project root
        project: PathBuf,
    },
    /// Build project modules with MSBuild
    Build {
        /// Absolute path to the project root
        project: PathBuf,
        /// Absolute path to MSBuild.exe
        #[arg(long)]
        msbuild: PathBuf,
        /// Modules to build, relative to Source/ (default: all discovered)
        #[arg(long, num_args = 0.., value_delimiter = ';')]
        modules: Vec<String>,
    },
    /// Stage the Build/ directory before a full project build
    Prebuild {
        /// Absolute path to the project root
        project: PathBuf,
        /// Platform token (Windows or Linux)
        #[arg(long, default_value = WINDOWS_PLATFORM)]
        platform: String,
    },
    /// Sweep linker side-products after one module build
    Postmodule {
        /// Absolute path to the project root
        project: PathBuf,
    },
    /// Final hook after a full project build
    Postbuild {
        /// Absolute path to the project root
        project: PathBuf,
        /// Platform token (Windows or Linux)
        #[arg(long, default_value = WINDOWS_PLATFORM)]
        platform: String,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EngineConfig::default();

    match cli.command {
        Commands::Init {
            project,
            engine,
            name,
        } => {
            let name = match name {
                Some(name) => name,
                None => Text::new("Project name:")
                    .with_default(
                        &project
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default(),
                    )
                    .prompt()
                    .context("Failed to read project name")?,
            };
            scaffold::init_project(&project, &engine, &name).map_err(report)
        }

        Commands::Info { project } => {
            let parsed = descriptor::scan(&project).map_err(report)?;
            let mut table = ui::Table::new(&["Field", "Value"]);
            table.add_row(vec!["ProjectName".into(), parsed.project_name.clone()]);
            table.add_row(vec!["PathToEngine".into(), parsed.engine_root.clone()]);
            table.add_row(vec![
                "Engine root (absolute)".into(),
                parsed.absolute_engine_root().display().to_string(),
            ]);
            table.add_row(vec![
                "Engine project".into(),
                parsed.is_engine_project.to_string(),
            ]);
            table.add_row(vec!["ShowConsole".into(), parsed.show_console.to_string()]);
            table.print();
            Ok(())
        }

        Commands::Modules { project } => {
            let found = modules::discover(&project, &config).map_err(report)?;
            if found.is_empty() {
                println!("{} No modules found under Source/", "!".yellow());
                return Ok(());
            }
            let mut table = ui::Table::new(&["Module", "Kind", "Headers", "Sources"]);
            for module in &found {
                let kind = if module.is_plugin {
                    "plugin"
                } else if module.is_engine_module {
                    "engine"
                } else {
                    "module"
                };
                table.add_row(vec![
                    module.name.clone(),
                    kind.to_string(),
                    module.public_files.len().to_string(),
                    module.private_files.len().to_string(),
                ]);
            }
            table.print();
            Ok(())
        }

        Commands::Generate { project } => {
            project_files::generate_project(&project, &config).map_err(report)
        }

        Commands::Clean { project } => {
            clean::clear_intermediate(&project, &config).map(|_| ()).map_err(report)
        }

        Commands::Build {
            project,
            msbuild,
            modules: module_args,
        } => {
            let parsed = descriptor::scan(&project).map_err(report)?;
            let engine = parsed.absolute_engine_root();
            let tokens = if module_args.is_empty() {
                let found = modules::discover(&project, &config).map_err(report)?;
                build::module_build_tokens(&found)
            } else {
                module_args
            };
            build::build_project_windows(&project, &engine, &msbuild, &tokens, &config)
                .map_err(report)
        }

        Commands::Prebuild { project, platform } => {
            check_platform(&platform, &config)?;
            let parsed = descriptor::scan(&project).map_err(report)?;
            stage::pre_project_build(
                &project,
                &parsed.absolute_engine_root(),
                &platform,
                &config,
            )
            .map_err(report)
        }

        Commands::Postmodule { project } => stage::post_module_build(&project).map_err(report),

        Commands::Postbuild { project, platform } => {
            check_platform(&platform, &config)?;
            let parsed = descriptor::scan(&project).map_err(report)?;
            stage::post_project_build(
                &project,
                &parsed.absolute_engine_root(),
                &platform,
                &config,
            )
            .map_err(report)
        }

        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Validate a platform token at the CLI boundary, before any work starts.
fn check_platform(platform: &str, config: &EngineConfig) -> Result<()> {
    if config.is_supported_platform(platform) {
        Ok(())
    } else {
        Err(report(Error::UnsupportedPlatform(platform.to_string())))
    }
}

/// Log a library error the way every command reports failure, then hand it
/// to anyhow for the exit code.
fn report(err: Error) -> anyhow::Error {
    println!("{} {}", "x".red(), err);
    anyhow::Error::new(err)
}
