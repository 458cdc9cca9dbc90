//! Project descriptor parsing (`ProjectConfig.txt`).
//!
//! The descriptor is a plain `Key = Value` file at the project root. Lines
//! that don't split into exactly two parts on `=` are skipped, which is how
//! blank lines and trailing comments are tolerated; surrounding tooling
//! relies on that, so the parser must not get stricter.
//!
//! ## Recognized keys
//!
//! - `PathToEngine` - absolute, or relative to the project root (required)
//! - `ProjectName` - project identifier (required)
//! - `ShowConsole` - truthy token, defaults to false

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DESCRIPTOR_FILE_NAME: &str = "ProjectConfig.txt";

/// Parsed contents of `ProjectConfig.txt`. Built once per invocation by
/// [`scan`], read-only afterward.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    /// Absolute path to the project root.
    pub project_root: PathBuf,
    /// Engine root as written in the descriptor; absolute or relative.
    pub engine_root: String,
    /// True when `engine_root` starts with a relative-path marker.
    pub is_engine_relative: bool,
    /// True when this project is the engine itself (`PathToEngine = .`).
    pub is_engine_project: bool,
    pub project_name: String,
    pub show_console: bool,
}

impl ProjectDescriptor {
    /// Absolute engine root: joined onto the project root when the
    /// descriptor used a relative path, otherwise taken verbatim.
    pub fn absolute_engine_root(&self) -> PathBuf {
        if self.is_engine_relative {
            self.project_root.join(&self.engine_root)
        } else {
            PathBuf::from(&self.engine_root)
        }
    }
}

/// `true` for the exact token set the descriptor format recognizes.
/// Lowercase "yes" is deliberately not in it.
pub fn str_to_bool(s: &str) -> bool {
    matches!(s, "1" | "Yes" | "YES" | "On" | "true" | "True" | "TRUE")
}

/// Check that a path argument is absolute and exists on disk.
pub fn check_abs_path(path: &Path) -> Result<()> {
    if path.is_absolute() && path.exists() {
        Ok(())
    } else {
        Err(Error::InvalidPath(path.to_path_buf()))
    }
}

/// Read the project descriptor from `<project_root>/ProjectConfig.txt`.
pub fn scan(project_root: &Path) -> Result<ProjectDescriptor> {
    check_abs_path(project_root)?;

    let descriptor_path = project_root.join(DESCRIPTOR_FILE_NAME);
    if !descriptor_path.exists() {
        return Err(Error::MissingDescriptorFile(project_root.to_path_buf()));
    }

    let mut engine_root = String::new();
    let mut is_engine_relative = false;
    let mut is_engine_project = false;
    let mut project_name = String::new();
    let mut show_console = false;

    let content = fs::read_to_string(&descriptor_path)?;
    for line in content.lines() {
        let parts: Vec<&str> = line.split('=').collect();
        if parts.len() != 2 {
            continue;
        }

        match parts[0].trim() {
            "PathToEngine" => {
                engine_root = parts[1].trim().to_string();
                if engine_root == "." {
                    is_engine_project = true;
                    is_engine_relative = true;
                } else if engine_root.starts_with('.') {
                    is_engine_relative = true;
                }
            }
            "ProjectName" => project_name = parts[1].trim().to_string(),
            "ShowConsole" => show_console = str_to_bool(parts[1].trim()),
            // Unknown keys are ignored.
            _ => {}
        }
    }

    if engine_root.trim().is_empty() {
        return Err(Error::IncompleteDescriptor {
            key: "PathToEngine",
        });
    }
    if project_name.trim().is_empty() {
        return Err(Error::IncompleteDescriptor { key: "ProjectName" });
    }

    Ok(ProjectDescriptor {
        project_root: project_root.to_path_buf(),
        engine_root,
        is_engine_relative,
        is_engine_project,
        project_name,
        show_console,
    })
}
