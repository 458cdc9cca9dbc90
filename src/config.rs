//! Static workspace configuration.
//!
//! One immutable `EngineConfig` value holds every fixed table the tool
//! consults: supported platform names, reserved folder names, intermediate
//! artifact patterns, engine include paths, and the engine link-library
//! list. It is built once at startup and passed by reference; nothing in
//! here mutates after construction.

use std::path::{Path, PathBuf};

pub const WINDOWS_PLATFORM: &str = "Windows";
pub const LINUX_PLATFORM: &str = "Linux";

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Platform tokens accepted by build/staging commands.
    pub supported_platforms: Vec<&'static str>,
    /// Folder names that are never interpreted as module names.
    pub reserved_folder_names: Vec<&'static str>,
    /// Folders removed wholesale by `ek clean`.
    pub intermediate_folders: Vec<&'static str>,
    /// File extensions removed by `ek clean` (with leading dot).
    pub intermediate_extensions: Vec<&'static str>,
    /// Include directories, relative to the engine root.
    pub engine_include_paths: Vec<PathBuf>,
    /// Libraries linked by generated projects. First entry is the engine
    /// import library itself, which engine modules must not link against.
    pub engine_libs: Vec<&'static str>,
    /// Name of the engine's own module under `Source/`.
    pub engine_module_name: &'static str,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let engine_include_paths: Vec<PathBuf> = vec![
            ["Source", "ThirdParty", "SFML", "include"].iter().collect(),
            ["Source", "Engine", "Core", "Containers", "Public"].iter().collect(),
            ["Source", "Engine", "Core", "Delegate", "Public"].iter().collect(),
            ["Source", "Engine", "Core", "Files", "Public"].iter().collect(),
            ["Source", "Engine", "Core", "GenericPlatform", "Public"].iter().collect(),
            ["Source", "Engine", "Core", "Macros"].iter().collect(),
            ["Source", "Engine", "Core", "Math", "Public"].iter().collect(),
            ["Source", "Engine", "Core", "Memory", "Public"].iter().collect(),
            ["Source", "Engine", "Core", "Misc"].iter().collect(),
            ["Source", "Engine", "Core", "Path", "Public"].iter().collect(),
            ["Source", "Engine", "Core", "Templates"].iter().collect(),
            ["Source", "Engine", "Core", "Time", "Public"].iter().collect(),
            ["Source", "Engine", "Engine", "CoreGame", "Public"].iter().collect(),
            ["Source", "Engine", "Engine", "Platforms", "Public"].iter().collect(),
            ["Source", "Engine", "Engine", "SubEngines", "Public"].iter().collect(),
            ["Source", "Engine", "Engine", "UObject", "Public"].iter().collect(),
        ];

        Self {
            supported_platforms: vec![WINDOWS_PLATFORM, LINUX_PLATFORM],
            reserved_folder_names: vec![
                "Intermediate",
                "Build",
                "build",
                "Source",
                "source",
                "Src",
                "src",
                "SRC",
                "Content",
                "content",
                "Docs",
                "docs",
                "doc",
                "Tools",
                "tools",
                "Private",
                "private",
                "Public",
                "public",
                "Plugins",
                "plugins",
                "ThirdParty",
            ],
            intermediate_folders: vec!["Intermediate", ".vs", ".vscode", "__pycache__"],
            intermediate_extensions: vec![
                ".user",
                ".generated",
                ".gen",
                ".obj",
                ".o",
                ".sln",
                ".vcxproj",
                ".code-workspace",
            ],
            engine_include_paths,
            engine_libs: vec![
                "Engine",
                "openal32",
                "sfml-graphics",
                "sfml-window",
                "sfml-system",
                "sfml-audio",
                "sfml-network",
            ],
            engine_module_name: "Engine",
        }
    }
}

impl EngineConfig {
    /// Exact, case-sensitive membership test. "windows" is not a platform.
    pub fn is_supported_platform(&self, name: &str) -> bool {
        self.supported_platforms.contains(&name)
    }

    /// Case-sensitive: "Assets" is a valid module name even though
    /// "Content" is reserved.
    pub fn is_reserved_folder_name(&self, name: &str) -> bool {
        self.reserved_folder_names.contains(&name)
    }

    pub fn is_intermediate_folder(&self, name: &str) -> bool {
        self.intermediate_folders.contains(&name)
    }

    pub fn is_intermediate_extension(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let dotted = format!(".{}", ext.to_string_lossy());
                self.intermediate_extensions.contains(&dotted.as_str())
            }
            None => false,
        }
    }

    /// Libraries a generated project links. The engine module links
    /// everything except its own import library.
    pub fn using_libs(&self, is_engine_module: bool) -> &[&'static str] {
        if is_engine_module {
            &self.engine_libs[1..]
        } else {
            &self.engine_libs
        }
    }
}
