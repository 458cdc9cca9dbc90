//! Module discovery.
//!
//! Walks a project's `Source/` tree, classifies its subdirectories into
//! modules and plugins, and collects each module's public (header) and
//! private (source) file manifests. The result feeds the project-file
//! generators.
//!
//! Discovery runs two passes: direct children of `Source/` first, then
//! children of `Source/Plugins/`. Within a pass, order follows the
//! filesystem listing and is not guaranteed stable.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;
use walkdir::WalkDir;

use crate::config::EngineConfig;
use crate::descriptor::check_abs_path;
use crate::error::Result;

/// One buildable unit under `Source/`. Created fresh on every discovery
/// run; the id is not stable across runs.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    /// Last path segment of the module directory.
    pub name: String,
    /// Absolute path to the module root.
    pub module_path: PathBuf,
    /// Per-run unique id, used as the MSBuild project GUID.
    pub module_id: Uuid,
    /// Header files, in walk order.
    pub public_files: Vec<PathBuf>,
    /// Source files, in walk order.
    pub private_files: Vec<PathBuf>,
    pub is_engine_module: bool,
    pub is_plugin: bool,
}

/// Find all modules and plugins in a project.
///
/// A project without a `Source/` directory is a normal pre-generation
/// state and yields an empty set.
pub fn discover(project_root: &Path, config: &EngineConfig) -> Result<Vec<ModuleDescriptor>> {
    check_abs_path(project_root)?;

    let mut modules = Vec::new();
    collect_modules(
        &project_root.join("Source"),
        config,
        false,
        &mut modules,
    )?;
    collect_modules(
        &project_root.join("Source").join("Plugins"),
        config,
        true,
        &mut modules,
    )?;
    Ok(modules)
}

fn collect_modules(
    parent: &Path,
    config: &EngineConfig,
    is_plugin: bool,
    out: &mut Vec<ModuleDescriptor>,
) -> Result<()> {
    if !parent.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(parent)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if config.is_reserved_folder_name(&name) {
            continue;
        }
        let mut module = fill_module(&entry.path(), config)?;
        module.is_plugin = is_plugin;
        out.push(module);
    }
    Ok(())
}

/// Build one module descriptor by walking every file under `module_path`.
///
/// Only `.h` counts as public and only `.cpp`/`.c` as private; anything
/// else (including `.hpp`) is ignored.
pub fn fill_module(module_path: &Path, config: &EngineConfig) -> Result<ModuleDescriptor> {
    check_abs_path(module_path)?;

    let name = module_path
        .file_name()
        .map(|segment| segment.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut module = ModuleDescriptor {
        is_engine_module: name == config.engine_module_name,
        name,
        module_path: module_path.to_path_buf(),
        module_id: Uuid::new_v4(),
        public_files: Vec::new(),
        private_files: Vec::new(),
        is_plugin: false,
    };

    for entry in WalkDir::new(module_path).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        match path.extension().map(|ext| ext.to_string_lossy()) {
            Some(ext) if ext == "h" => module.public_files.push(path.to_path_buf()),
            Some(ext) if ext == "cpp" || ext == "c" => {
                module.private_files.push(path.to_path_buf())
            }
            _ => {}
        }
    }

    Ok(module)
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
    fn classifies_files_by_exact_extension() {
        let dir = TempDir::new().unwrap();
        let module_dir = dir.path().join("Source").join("Game");
        touch(&module_dir.join("Public").join("a.h"));
        touch(&module_dir.join("Public").join("b.hpp"));
        touch(&module_dir.join("Private").join("c.cpp"));
        touch(&module_dir.join("Private").join("d.c"));
        touch(&module_dir.join("e.txt"));

        let config = EngineConfig::default();
        let module = fill_module(&module_dir, &config).unwrap();

        assert_eq!(module.name, "Game");
        assert_eq!(module.public_files.len(), 1);
        assert!(module.public_files[0].ends_with("a.h"));
        let mut private: Vec<_> = module
            .private_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        private.sort();
        assert_eq!(private, ["c.cpp", "d.c"]);
    }

    #[test]
    fn reserved_folders_are_never_modules() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("Source");
        touch(&source.join("Public").join("stray.h"));
        touch(&source.join("Intermediate").join("junk.cpp"));
        touch(&source.join("Game").join("main.cpp"));

        let config = EngineConfig::default();
        let modules = discover(dir.path(), &config).unwrap();

        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Game"]);
    }

    #[test]
    fn plugins_are_found_after_modules() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("Source");
        touch(&source.join("Game").join("main.cpp"));
        touch(&source.join("Plugins").join("Audio").join("audio.cpp"));
        touch(&source.join("Plugins").join("Physics").join("physics.cpp"));

        let config = EngineConfig::default();
        let modules = discover(dir.path(), &config).unwrap();

        assert_eq!(modules.len(), 3);
        assert!(!modules[0].is_plugin);
        assert!(modules.iter().filter(|m| m.is_plugin).count() == 2);
        // Plugin pass runs strictly after the module pass.
        assert!(modules[1].is_plugin && modules[2].is_plugin);
    }

    #[test]
    fn engine_module_is_flagged_by_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Source").join("Engine").join("core.cpp"));

        let config = EngineConfig::default();
        let modules = discover(dir.path(), &config).unwrap();

        assert_eq!(modules.len(), 1);
        assert!(modules[0].is_engine_module);
    }

    #[test]
    fn missing_source_dir_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let config = EngineConfig::default();
        let modules = discover(dir.path(), &config).unwrap();
        assert!(modules.is_empty());
    }

    #[test]
    fn discovery_is_idempotent_up_to_ids() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("Source");
        touch(&source.join("Game").join("Public").join("game.h"));
        touch(&source.join("Game").join("Private").join("game.cpp"));
        touch(&source.join("Plugins").join("Audio").join("audio.cpp"));

        let config = EngineConfig::default();
        let first = discover(dir.path(), &config).unwrap();
        let second = discover(dir.path(), &config).unwrap();

        let summarize = |modules: &[ModuleDescriptor]| {
            let mut names: Vec<_> = modules
                .iter()
                .map(|m| {
                    (
                        m.name.clone(),
                        m.public_files.len(),
                        m.private_files.len(),
                        m.is_plugin,
                    )
                })
                .collect();
            names.sort();
            names
        };
        assert_eq!(summarize(&first), summarize(&second));

        // Ids are ephemeral: fresh every run.
        let first_ids: Vec<_> = first.iter().map(|m| m.module_id).collect();
        let second_ids: Vec<_> = second.iter().map(|m| m.module_id).collect();
        assert!(first_ids.iter().all(|id| !second_ids.contains(id)));
    }
}
