//! Module build orchestration.
//!
//! `ek build` wraps MSBuild: stage the `Build/` tree, compile each module
//! project in order, sweep linker side-products, and run the final
//! post-build hook. Compiler invocation itself is delegated entirely to
//! MSBuild; this module only shells out.

use std::path::{Path, PathBuf};
use std::process::Command;

use colored::*;

use crate::config::{EngineConfig, WINDOWS_PLATFORM};
use crate::descriptor::check_abs_path;
use crate::error::Result;
use crate::stage;

/// Build the named modules of a Windows project with MSBuild.
///
/// Module tokens are paths relative to `Source/`; plugins are addressed as
/// `Plugins/<Name>`. Empty tokens are skipped so callers can pass
/// semicolon-joined lists with trailing separators.
pub fn build_project_windows(
    solution_dir: &Path,
    engine_dir: &Path,
    msbuild_path: &Path,
    modules: &[String],
    config: &EngineConfig,
) -> Result<()> {
    check_abs_path(solution_dir)?;
    check_abs_path(engine_dir)?;
    check_abs_path(msbuild_path)?;

    stage::pre_project_build(solution_dir, engine_dir, WINDOWS_PLATFORM, config)?;

    let mut failed = 0usize;
    for module in modules {
        if module.trim().is_empty() {
            continue;
        }

        println!("{} Building {}", "⚙".blue(), module.bold());
        let args = msbuild_args(solution_dir, module);
        let status = Command::new(msbuild_path).args(&args).status();
        match status {
            Ok(status) if status.success() => {}
            Ok(_) => {
                println!("{} Build failed for module '{}'", "x".red(), module);
                failed += 1;
            }
            Err(err) => {
                println!("{} Could not run MSBuild: {}", "x".red(), err);
                failed += 1;
            }
        }
    }

    stage::post_module_build(solution_dir)?;
    stage::post_project_build(solution_dir, engine_dir, WINDOWS_PLATFORM, config)?;

    if failed == 0 {
        println!("{} Build finished", "✓".green());
    } else {
        println!("{} Build finished with {} failed module(s)", "!".yellow(), failed);
    }
    Ok(())
}

/// MSBuild argument list for one module project.
fn msbuild_args(solution_dir: &Path, module: &str) -> Vec<String> {
    let module_project: PathBuf = solution_dir.join("Source").join(module);
    vec![
        "/verbosity:minimal".to_string(),
        "/nologo".to_string(),
        module_project.display().to_string(),
        format!("/property:SolutionDir={}", solution_dir.display()),
        "/property:Configuration=Release".to_string(),
        "/property:Platform=x64".to_string(),
    ]
}

/// Module tokens for a discovery result, in build order. Plugins are
/// addressed relative to `Source/`.
pub fn module_build_tokens(modules: &[crate::modules::ModuleDescriptor]) -> Vec<String> {
    modules
        .iter()
        .map(|module| {
            if module.is_plugin {
                format!("Plugins/{}", module.name)
            } else {
                module.name.clone()
            }
        })
        .collect()
}
