//! # enkit - C++ Game-Engine Workspace Manager
//!
//! enkit (binary: `ek`) automates the developer workflow around a C++
//! game-engine project tree: it discovers buildable modules under
//! `Source/`, generates Visual Studio solution/project files, clears
//! intermediate build artifacts, stages third-party binaries, and drives
//! module builds through MSBuild.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a project against an engine checkout
//! ek init /abs/path/MyGame --engine /abs/path/NordEngine
//!
//! # Emit the solution and per-module .vcxproj files
//! ek generate /abs/path/MyGame
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Static tables (platforms, reserved names, engine libs)
//! - [`descriptor`] - `ProjectConfig.txt` parsing
//! - [`modules`] - Module/plugin discovery under `Source/`
//! - [`generate`] - Solution and `.vcxproj` emission
//! - [`build`] - MSBuild orchestration
//! - [`stage`] - Pre/post build file staging

/// MSBuild orchestration for module builds.
pub mod build;

/// Intermediate artifact cleanup.
pub mod clean;

/// Static workspace configuration tables.
pub mod config;

/// Project descriptor parsing (`ProjectConfig.txt`).
pub mod descriptor;

/// Error taxonomy for the library.
pub mod error;

/// Replace-semantics copy/move helpers.
pub mod fsutil;

/// Visual Studio solution and project generation.
pub mod generate;

/// Module and plugin discovery.
pub mod modules;

/// New-project scaffolding and default files.
pub mod scaffold;

/// Build staging (engine DLLs, content, third-party binaries).
pub mod stage;

/// Terminal UI utilities (tables).
pub mod ui;
