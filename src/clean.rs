//! Intermediate artifact cleanup.
//!
//! `ek clean` walks the whole project tree and removes build leftovers:
//! intermediate folders (`Intermediate`, `.vs`, `.vscode`, ...) are deleted
//! recursively, and files with intermediate extensions (`.obj`, `.sln`,
//! `.vcxproj`, ...) are deleted individually. Everything else is left
//! untouched.

use std::fs;
use std::path::Path;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::config::EngineConfig;
use crate::descriptor::check_abs_path;
use crate::error::Result;

/// Outcome counters for one cleanup pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed_folders: usize,
    pub removed_files: usize,
}

pub fn clear_intermediate(project_root: &Path, config: &EngineConfig) -> Result<CleanReport> {
    check_abs_path(project_root)?;

    let total = WalkDir::new(project_root).into_iter().count() as u64;
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let report = clear_intermediate_walk(project_root, config, |entry_name| {
        pb.inc(1);
        pb.set_message(entry_name.to_string());
    })?;

    pb.finish_and_clear();
    println!(
        "{} Removed {} folder(s) and {} file(s)",
        "✓".green(),
        report.removed_folders,
        report.removed_files
    );
    Ok(report)
}

/// The actual walk, parameterized over progress reporting so tests can run
/// it without a terminal.
pub(crate) fn clear_intermediate_walk(
    project_root: &Path,
    config: &EngineConfig,
    mut on_entry: impl FnMut(&str),
) -> Result<CleanReport> {
    let mut report = CleanReport::default();

    let mut walker = WalkDir::new(project_root).into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            // Already-deleted children of a removed folder.
            Err(_) => continue,
        };
        let name = entry.file_name().to_string_lossy().to_string();
        on_entry(&name);

        if entry.file_type().is_dir() {
            if config.is_intermediate_folder(&name) {
                fs::remove_dir_all(entry.path())?;
                walker.skip_current_dir();
                report.removed_folders += 1;
            }
        } else if config.is_intermediate_extension(entry.path()) {
            fs::remove_file(entry.path())?;
            report.removed_files += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn removes_intermediate_folders_and_files_only() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Intermediate").join("x.obj"));
        touch(&dir.path().join(".vs").join("cache.bin"));
        touch(&dir.path().join("Source").join("Game").join("main.cpp"));
        touch(&dir.path().join("Source").join("Game").join("main.obj"));
        touch(&dir.path().join("Demo.sln"));

        let config = EngineConfig::default();
        let report = clear_intermediate_walk(dir.path(), &config, |_| {}).unwrap();

        assert_eq!(report.removed_folders, 2);
        assert_eq!(report.removed_files, 2);
        assert!(!dir.path().join("Intermediate").exists());
        assert!(!dir.path().join(".vs").exists());
        assert!(!dir.path().join("Demo.sln").exists());
        assert!(!dir.path().join("Source/Game/main.obj").exists());
        assert!(dir.path().join("Source/Game/main.cpp").exists());
    }

    #[test]
    fn clean_tree_reports_nothing_removed() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Source").join("Game").join("main.cpp"));

        let config = EngineConfig::default();
        let report = clear_intermediate_walk(dir.path(), &config, |_| {}).unwrap();

        assert_eq!(report, CleanReport::default());
    }

    #[test]
    fn nested_intermediate_folders_are_removed_recursively() {
        let dir = TempDir::new().unwrap();
        touch(
            &dir.path()
                .join("Source")
                .join("Game")
                .join("Intermediate")
                .join("deep")
                .join("junk.o"),
        );

        let config = EngineConfig::default();
        let report = clear_intermediate_walk(dir.path(), &config, |_| {}).unwrap();

        assert_eq!(report.removed_folders, 1);
        assert_eq!(report.removed_files, 0);
        assert!(!dir.path().join("Source/Game/Intermediate").exists());
    }
}
