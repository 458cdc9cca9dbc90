//! Visual Studio project-file generation.
//!
//! `ek generate` reads the project descriptor, discovers modules, and
//! emits a `<ProjectName>.sln` at the root plus a `<Module>.vcxproj` and
//! `.vcxproj.user` inside each module directory. The emitted text follows
//! the engine's stock MSBuild layout: v143 toolset, x64 only, Debug and
//! Release, outputs under `Build/` and intermediates under
//! `Intermediate/`.

pub mod solution;
pub mod vcxproj;

use std::fs;
use std::path::Path;

use colored::*;

use crate::config::EngineConfig;
use crate::descriptor::{self, ProjectDescriptor};
use crate::error::Result;
use crate::modules;
use crate::scaffold;

/// Generate solution and project files for the project at `project_root`.
pub fn generate_project(project_root: &Path, config: &EngineConfig) -> Result<()> {
    let project = descriptor::scan(project_root)?;
    scaffold::ensure_base_structure(project_root, &project)?;

    let found = modules::discover(project_root, config)?;

    let solution_path = project_root.join(format!("{}.sln", project.project_name));
    fs::write(&solution_path, solution::solution_text(&found))?;
    println!("{} Wrote {}.sln", "+".green(), project.project_name);

    let include_paths = engine_include_paths(&project, config);
    let libs_dir = libs_dir(&project);

    for module in &found {
        let using_libs = using_libs(config, module.is_engine_module);
        let vcxproj_path = module.module_path.join(format!("{}.vcxproj", module.name));
        fs::write(
            &vcxproj_path,
            vcxproj::vcxproj_text(&project, module, &include_paths, &libs_dir, &using_libs),
        )?;
        fs::write(
            module
                .module_path
                .join(format!("{}.vcxproj.user", module.name)),
            vcxproj::user_file_text(),
        )?;
        println!("{} Wrote {}.vcxproj", "+".green(), module.name);
    }

    println!(
        "{} Generated {} project(s) for '{}'",
        "✓".green(),
        found.len(),
        project.project_name.bold()
    );
    Ok(())
}

/// Semicolon-joined include list for `AdditionalIncludeDirectories`.
///
/// The engine project addresses its own tree through `$(SolutionDir)` so
/// the files stay relocatable; game projects bake in the absolute engine
/// root from the descriptor.
pub fn engine_include_paths(project: &ProjectDescriptor, config: &EngineConfig) -> String {
    let mut joined = String::new();
    for include in &config.engine_include_paths {
        if project.is_engine_project {
            joined.push_str(&format!("$(SolutionDir){};", include.display()));
        } else {
            joined.push_str(&format!(
                "{};",
                project.absolute_engine_root().join(include).display()
            ));
        }
    }
    joined
}

/// Semicolon-joined library search path list.
pub fn libs_dir(project: &ProjectDescriptor) -> String {
    if project.is_engine_project {
        format!(
            "$(SolutionDir){};$(SolutionDir){};",
            Path::new("Source")
                .join("ThirdParty")
                .join("SFML")
                .join("lib")
                .join("Windows")
                .display(),
            Path::new("Build").join("lib").display()
        )
    } else {
        format!(
            "{};",
            project
                .absolute_engine_root()
                .join("Build")
                .join("lib")
                .display()
        )
    }
}

/// Semicolon-joined `.lib` list for `AdditionalDependencies`.
pub fn using_libs(config: &EngineConfig, is_engine_module: bool) -> String {
    let mut joined = String::new();
    for lib in config.using_libs(is_engine_module) {
        joined.push_str(lib);
        joined.push_str(".lib;");
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn descriptor(is_engine: bool) -> ProjectDescriptor {
        ProjectDescriptor {
            project_root: PathBuf::from("/work/Demo"),
            engine_root: if is_engine { ".".into() } else { "/opt/nord".into() },
            is_engine_relative: is_engine,
            is_engine_project: is_engine,
            project_name: "Demo".into(),
            show_console: false,
        }
    }

    #[test]
    fn engine_project_uses_solution_dir_macro() {
        let config = EngineConfig::default();
        let paths = engine_include_paths(&descriptor(true), &config);
        assert!(paths.starts_with("$(SolutionDir)"));
        assert_eq!(paths.matches(';').count(), config.engine_include_paths.len());
    }

    #[test]
    fn game_project_bakes_in_engine_root() {
        let config = EngineConfig::default();
        let paths = engine_include_paths(&descriptor(false), &config);
        assert!(!paths.contains("$(SolutionDir)"));
        assert!(paths.contains("/opt/nord"));
    }

    #[test]
    fn using_libs_are_suffixed() {
        let config = EngineConfig::default();
        let libs = using_libs(&config, false);
        assert!(libs.starts_with("Engine.lib;"));
        let engine_libs = using_libs(&config, true);
        assert!(!engine_libs.contains("Engine.lib;"));
        assert!(engine_libs.contains("sfml-graphics.lib;"));
    }
}
