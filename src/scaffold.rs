//! New-project scaffolding.
//!
//! `ek init` writes a fresh `ProjectConfig.txt` pointing at an engine
//! checkout, and `ensure_base_structure` (also run by `ek generate`)
//! creates the standard directory layout around it. Every default file is
//! written only when missing, so re-running against an existing project
//! never clobbers local edits.

use std::fs;
use std::path::Path;

use colored::*;

use crate::descriptor::{self, ProjectDescriptor, DESCRIPTOR_FILE_NAME};
use crate::error::{Error, Result};
use crate::fsutil;

/// Initialize a new project directory against an engine checkout.
///
/// Refuses to run when the project *is* the engine; the engine tree ships
/// its own descriptor.
pub fn init_project(project_path: &Path, engine_path: &Path, project_name: &str) -> Result<()> {
    descriptor::check_abs_path(project_path)?;
    descriptor::check_abs_path(engine_path)?;
    if project_path == engine_path {
        return Err(Error::InvalidPath(project_path.to_path_buf()));
    }

    write_if_missing(
        &project_path.join(DESCRIPTOR_FILE_NAME),
        &default_project_config(engine_path, project_name),
    )?;

    let project = descriptor::scan(project_path)?;
    ensure_base_structure(project_path, &project)?;

    println!(
        "{} Initialized '{}' (run {} to emit project files)",
        "✓".green(),
        project_name.bold(),
        "ek generate".cyan()
    );
    Ok(())
}

/// Create the standard project layout and default files where missing.
pub fn ensure_base_structure(project_root: &Path, project: &ProjectDescriptor) -> Result<()> {
    descriptor::check_abs_path(project_root)?;

    fsutil::create_dir_if_missing(&project_root.join("Source"))?;
    fsutil::create_dir_if_missing(&project_root.join("Content"))?;
    fsutil::create_dir_if_missing(&project_root.join("Docs"))?;
    fsutil::create_dir_if_missing(&project_root.join("Tools"))?;

    if !project.is_engine_project {
        let module_dir = project_root.join("Source").join(&project.project_name);
        fsutil::create_dir_if_missing(&module_dir)?;
        fsutil::create_dir_if_missing(&module_dir.join("Public"))?;
        fsutil::create_dir_if_missing(&module_dir.join("Private"))?;
    }
    fsutil::create_dir_if_missing(&project_root.join("Source").join("Plugins"))?;
    fsutil::create_dir_if_missing(&project_root.join("Source").join("ThirdParty"))?;

    write_if_missing(&project_root.join(".gitignore"), DEFAULT_GITIGNORE)?;
    write_if_missing(&project_root.join(".gitattributes"), DEFAULT_GITATTRIBUTES)?;
    write_if_missing(&project_root.join(".clang-format"), DEFAULT_CLANG_FORMAT)?;
    write_if_missing(&project_root.join("README.md"), "//TODO\n")?;
    write_if_missing(&project_root.join("LICENSE.md"), "//TODO\n")?;
    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if !path.exists() {
        fs::write(path, content)?;
    }
    Ok(())
}

fn default_project_config(engine_path: &Path, project_name: &str) -> String {
    format!(
        "PathToEngine = {}\nProjectName = {}\nShowConsole = false\n",
        engine_path.display(),
        project_name
    )
}

const DEFAULT_GITIGNORE: &str = r"# Engine intermediate folders
**Build
**Intermediate

**.vs
**.Trash-*

# Generated files
*.user
*.generated*
*.gen
*.lnk

# Compiled object files
*.slo
*.lo
*.o
*.ko
*.obj
*.elf

# Precompiled headers
*.gch
*.pch

# Executables
*.exe
*.out
*.app

# Linker output
*.ilk
*.map
*.exp

# IDE files
*.vscode
*.code-workspace
*.vcxproj
*.sln
*.idea
*.VC.db
*.suo
";

const DEFAULT_GITATTRIBUTES: &str = r"# Auto detect text files and perform LF normalization
* text=auto

# Images
*.jpg filter=lfs diff=lfs merge=lfs -text
*.jpeg filter=lfs diff=lfs merge=lfs -text
*.png filter=lfs diff=lfs merge=lfs -text
*.psd filter=lfs diff=lfs merge=lfs -text
*.tga filter=lfs diff=lfs merge=lfs -text

# Audio
*.mp3 filter=lfs diff=lfs merge=lfs -text
*.wav filter=lfs diff=lfs merge=lfs -text
*.ogg filter=lfs diff=lfs merge=lfs -text

# Video
*.mp4 filter=lfs diff=lfs merge=lfs -text
*.mov filter=lfs diff=lfs merge=lfs -text

# 3D objects
*.fbx filter=lfs diff=lfs merge=lfs -text
*.blend filter=lfs diff=lfs merge=lfs -text
*.obj filter=lfs diff=lfs merge=lfs -text
";

const DEFAULT_CLANG_FORMAT: &str = r"BasedOnStyle: Microsoft
IndentWidth: 4
TabWidth: 4
UseTab: ForIndentation
ColumnLimit: 180
AllowShortFunctionsOnASingleLine: Inline
BreakBeforeBraces: Allman
";
