//! Build staging steps.
//!
//! `pre_project_build` prepares a fresh `Build/` tree before any module
//! compiles: engine shared libraries, `Content/`, and third-party runtime
//! files are all staged into it. `post_module_build` runs after each module
//! and sweeps linker side-products out of `Build/` into `Build/lib`.
//! `post_project_build` is the final hook; it currently only validates its
//! arguments, matching the shipped workflow.

use std::fs;
use std::path::Path;

use colored::*;

use crate::config::{EngineConfig, LINUX_PLATFORM, WINDOWS_PLATFORM};
use crate::descriptor::check_abs_path;
use crate::error::{Error, Result};
use crate::fsutil;

fn check_platform(platform: &str, config: &EngineConfig) -> Result<()> {
    if config.is_supported_platform(platform) {
        Ok(())
    } else {
        Err(Error::UnsupportedPlatform(platform.to_string()))
    }
}

/// Prepare `Build/` before a full project build.
pub fn pre_project_build(
    solution_dir: &Path,
    engine_dir: &Path,
    platform: &str,
    config: &EngineConfig,
) -> Result<()> {
    check_abs_path(solution_dir)?;
    check_abs_path(engine_dir)?;
    check_platform(platform, config)?;

    let build_dir = solution_dir.join("Build");
    if build_dir.exists() {
        fs::remove_dir_all(&build_dir)?;
    }

    fsutil::create_dir_if_missing(&solution_dir.join("Intermediate"))?;
    fsutil::create_dir_if_missing(&build_dir)?;
    fsutil::create_dir_if_missing(&build_dir.join("lib"))?;

    // Stage engine runtime libraries unless this project is the engine.
    if solution_dir != engine_dir {
        let engine_build = engine_dir.join("Build");
        if platform == WINDOWS_PLATFORM {
            fsutil::copy_files_with_extension_replacing(&engine_build, &build_dir, ".dll")?;
        } else if platform == LINUX_PLATFORM {
            fsutil::copy_files_with_extension_replacing(&engine_build, &build_dir, ".so")?;
        }
    }

    let content_dir = solution_dir.join("Content");
    let staged_content = build_dir.join("Content");
    if content_dir.exists() {
        copy_dir_recursive(&content_dir, &staged_content)?;
    } else {
        fsutil::create_dir_if_missing(&staged_content)?;
    }

    stage_third_party(solution_dir, &build_dir, platform)?;

    println!("{} Build directory staged", "✓".green());
    Ok(())
}

/// Stage each third-party package's `bin/<Platform>` and `lib/<Platform>`
/// contents into `Build/` and `Build/lib`.
fn stage_third_party(solution_dir: &Path, build_dir: &Path, platform: &str) -> Result<()> {
    let third_party = solution_dir.join("Source").join("ThirdParty");
    if !third_party.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(&third_party)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let package = entry.path();
        fsutil::copy_all_files_replacing(&package.join("bin").join(platform), build_dir)?;
        fsutil::copy_all_files_replacing(
            &package.join("lib").join(platform),
            &build_dir.join("lib"),
        )?;
    }
    Ok(())
}

/// Sweep linker side-products out of `Build/` after one module build.
pub fn post_module_build(solution_dir: &Path) -> Result<()> {
    check_abs_path(solution_dir)?;

    let build_dir = solution_dir.join("Build");
    let lib_dir = build_dir.join("lib");
    fsutil::create_dir_if_missing(&build_dir)?;
    fsutil::create_dir_if_missing(&lib_dir)?;

    for ext in [".lib", ".exp", ".pdb", ".a"] {
        fsutil::move_files_with_extension_replacing(&build_dir, &lib_dir, ext)?;
    }
    Ok(())
}

/// Final hook after the whole project build.
pub fn post_project_build(
    solution_dir: &Path,
    engine_dir: &Path,
    platform: &str,
    config: &EngineConfig,
) -> Result<()> {
    check_abs_path(solution_dir)?;
    check_abs_path(engine_dir)?;
    check_platform(platform, config)?;
    Ok(())
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn pre_build_wipes_build_and_stages_engine_dlls() {
        let root = TempDir::new().unwrap();
        let project = root.path().join("Game");
        let engine = root.path().join("Engine");
        touch(&project.join("Build").join("stale.exe"), "old");
        touch(&engine.join("Build").join("Engine.dll"), "dll");
        touch(&engine.join("Build").join("Engine.lib"), "lib");

        let config = EngineConfig::default();
        pre_project_build(&project, &engine, "Windows", &config).unwrap();

        let build = project.join("Build");
        assert!(!build.join("stale.exe").exists());
        assert!(build.join("Engine.dll").exists());
        // Import libs are not runtime files; only .dll is staged on Windows.
        assert!(!build.join("Engine.lib").exists());
        assert!(build.join("lib").is_dir());
        assert!(build.join("Content").is_dir());
        assert!(project.join("Intermediate").is_dir());
    }

    #[test]
    fn engine_project_skips_self_staging() {
        let root = TempDir::new().unwrap();
        let engine = root.path().join("Engine");
        fs::create_dir_all(&engine).unwrap();

        let config = EngineConfig::default();
        pre_project_build(&engine, &engine, "Linux", &config).unwrap();

        assert!(engine.join("Build").is_dir());
    }

    #[test]
    fn content_tree_is_copied_recursively() {
        let root = TempDir::new().unwrap();
        let project = root.path().join("Game");
        touch(
            &project.join("Content").join("Maps").join("level1.map"),
            "map",
        );
        fs::create_dir_all(root.path().join("Engine")).unwrap();

        let config = EngineConfig::default();
        pre_project_build(&project, &root.path().join("Engine"), "Windows", &config).unwrap();

        assert!(
            project
                .join("Build")
                .join("Content")
                .join("Maps")
                .join("level1.map")
                .exists()
        );
    }

    #[test]
    fn third_party_binaries_are_staged_per_platform() {
        let root = TempDir::new().unwrap();
        let project = root.path().join("Game");
        let sfml = project.join("Source").join("ThirdParty").join("SFML");
        touch(&sfml.join("bin").join("Windows").join("sfml.dll"), "");
        touch(&sfml.join("lib").join("Windows").join("sfml.lib"), "");
        touch(&sfml.join("bin").join("Linux").join("sfml.so"), "");
        fs::create_dir_all(root.path().join("Engine")).unwrap();

        let config = EngineConfig::default();
        pre_project_build(&project, &root.path().join("Engine"), "Windows", &config).unwrap();

        let build = project.join("Build");
        assert!(build.join("sfml.dll").exists());
        assert!(build.join("lib").join("sfml.lib").exists());
        assert!(!build.join("sfml.so").exists());
    }

    #[test]
    fn post_module_build_sweeps_linker_products() {
        let root = TempDir::new().unwrap();
        let project = root.path().join("Game");
        touch(&project.join("Build").join("Engine.lib"), "");
        touch(&project.join("Build").join("Engine.exp"), "");
        touch(&project.join("Build").join("Engine.pdb"), "");
        touch(&project.join("Build").join("Game.exe"), "");

        post_module_build(&project).unwrap();

        let build = project.join("Build");
        assert!(build.join("lib").join("Engine.lib").exists());
        assert!(build.join("lib").join("Engine.exp").exists());
        assert!(build.join("lib").join("Engine.pdb").exists());
        assert!(build.join("Game.exe").exists());
        assert!(!build.join("Engine.lib").exists());
    }

    #[test]
    fn unsupported_platform_is_rejected() {
        let root = TempDir::new().unwrap();
        let config = EngineConfig::default();
        let err =
            pre_project_build(root.path(), root.path(), "windows", &config).unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform(_)));
    }
}
