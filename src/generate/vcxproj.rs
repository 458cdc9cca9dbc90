//! `.vcxproj` and `.vcxproj.user` text emission.
//!
//! Pass-through templating of the engine's stock MSBuild project layout.
//! Engine modules and plugins build as DynamicLibrary, everything else as
//! Application; the engine module additionally gets the `ENGINE` define.

use std::path::Path;

use crate::descriptor::ProjectDescriptor;
use crate::modules::ModuleDescriptor;

use super::solution::upper;

pub fn vcxproj_text(
    project: &ProjectDescriptor,
    module: &ModuleDescriptor,
    engine_include_paths: &str,
    libs_dir: &str,
    using_libs: &str,
) -> String {
    let mut public_section = String::new();
    for file in &module.public_files {
        public_section.push_str(&format!(
            "\t\t<ClInclude Include=\"{}\" />\n",
            relative_to_module(file, &module.module_path)
        ));
    }
    let mut private_section = String::new();
    for file in &module.private_files {
        private_section.push_str(&format!(
            "\t\t<ClCompile Include=\"{}\" />\n",
            relative_to_module(file, &module.module_path)
        ));
    }

    let mut debug_defines = String::from("_DEBUG;_WINDOWS;WIN32;WIN64;");
    let mut release_defines = String::from("NDEBUG;_WINDOWS;WIN32;WIN64;");
    if module.is_engine_module {
        debug_defines.push_str("ENGINE;");
        release_defines.push_str("ENGINE;");
    }

    let configuration_type = if module.is_engine_module || module.is_plugin {
        "DynamicLibrary"
    } else {
        "Application"
    };

    let subsystem = if project.show_console {
        "Console"
    } else {
        "Windows"
    };

    // The post-build sweep runs through the installed tool, so the hook is
    // the same command for engine and game projects.
    let post_build = "\t\tek postmodule \"$(SolutionDir)\"";

    let module_id = upper(module.module_id);

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
	<ItemGroup Label="ProjectConfigurations">
		<ProjectConfiguration Include="Debug|x64">
			<Configuration>Debug</Configuration>
			<Platform>x64</Platform>
		</ProjectConfiguration>
		<ProjectConfiguration Include="Release|x64">
			<Configuration>Release</Configuration>
			<Platform>x64</Platform>
		</ProjectConfiguration>
	</ItemGroup>
	<PropertyGroup Label="Globals">
		<VCProjectVersion>16.0</VCProjectVersion>
		<Keyword>Win32Proj</Keyword>
		<ProjectGuid>{module_id}</ProjectGuid>
		<RootNamespace>Source</RootNamespace>
		<WindowsTargetPlatformVersion>10.0</WindowsTargetPlatformVersion>
	</PropertyGroup>
	<Import Project="$(VCTargetsPath)\Microsoft.Cpp.Default.props" />
	<PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Debug|x64'" Label="Configuration">
		<ConfigurationType>{configuration_type}</ConfigurationType>
		<UseDebugLibraries>true</UseDebugLibraries>
		<PlatformToolset>v143</PlatformToolset>
		<WholeProgramOptimization>false</WholeProgramOptimization>
		<CharacterSet>Unicode</CharacterSet>
		<PreferredToolArchitecture>x64</PreferredToolArchitecture>
	</PropertyGroup>
	<PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Release|x64'" Label="Configuration">
		<ConfigurationType>{configuration_type}</ConfigurationType>
		<UseDebugLibraries>false</UseDebugLibraries>
		<PlatformToolset>v143</PlatformToolset>
		<WholeProgramOptimization>true</WholeProgramOptimization>
		<CharacterSet>Unicode</CharacterSet>
		<PreferredToolArchitecture>x64</PreferredToolArchitecture>
	</PropertyGroup>
	<Import Project="$(VCTargetsPath)\Microsoft.Cpp.props" />
	<ImportGroup Label="ExtensionSettings">
	</ImportGroup>
	<ImportGroup Label="Shared">
	</ImportGroup>
	<ImportGroup Label="PropertySheets" Condition="'$(Configuration)|$(Platform)'=='Debug|x64'">
		<Import Project="$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props" Condition="exists('$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props')" Label="LocalAppDataPlatform" />
	</ImportGroup>
	<ImportGroup Label="PropertySheets" Condition="'$(Configuration)|$(Platform)'=='Release|x64'">
		<Import Project="$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props" Condition="exists('$(UserRootDir)\Microsoft.Cpp.$(Platform).user.props')" Label="LocalAppDataPlatform" />
	</ImportGroup>
	<PropertyGroup Label="UserMacros" />
	<PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Debug|x64'">
		<OutDir>$(SolutionDir)Build\</OutDir>
		<IntDir>$(SolutionDir)Intermediate\$(Platform)\$(Configuration)\</IntDir>
	</PropertyGroup>
	<PropertyGroup Condition="'$(Configuration)|$(Platform)'=='Release|x64'">
		<OutDir>$(SolutionDir)Build\</OutDir>
		<IntDir>$(SolutionDir)Intermediate\$(Platform)\$(Configuration)\</IntDir>
	</PropertyGroup>
	<ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Debug|x64'">
		<ClCompile>
			<WarningLevel>Level3</WarningLevel>
			<SDLCheck>true</SDLCheck>
			<PreprocessorDefinitions>{debug_defines}%(PreprocessorDefinitions)</PreprocessorDefinitions>
			<ConformanceMode>true</ConformanceMode>
			<PrecompiledHeader>NotUsing</PrecompiledHeader>
			<LanguageStandard>stdcpp17</LanguageStandard>
			<LanguageStandard_C>stdc17</LanguageStandard_C>
			<AdditionalIncludeDirectories>Public;{engine_include_paths}%(AdditionalIncludeDirectories)</AdditionalIncludeDirectories>
			<MultiProcessorCompilation>true</MultiProcessorCompilation>
		</ClCompile>
		<Link>
			<SubSystem>{subsystem}</SubSystem>
			<GenerateDebugInformation>true</GenerateDebugInformation>
			<AdditionalLibraryDirectories>{libs_dir}%(AdditionalLibraryDirectories)</AdditionalLibraryDirectories>
			<AdditionalDependencies>{using_libs}%(AdditionalDependencies)</AdditionalDependencies>
		</Link>
		<PostBuildEvent>
		<Command>
{post_build}
		exit 0
		</Command>
		</PostBuildEvent>
	</ItemDefinitionGroup>
	<ItemDefinitionGroup Condition="'$(Configuration)|$(Platform)'=='Release|x64'">
		<ClCompile>
			<WarningLevel>Level3</WarningLevel>
			<FunctionLevelLinking>true</FunctionLevelLinking>
			<IntrinsicFunctions>true</IntrinsicFunctions>
			<SDLCheck>true</SDLCheck>
			<PreprocessorDefinitions>{release_defines}%(PreprocessorDefinitions)</PreprocessorDefinitions>
			<ConformanceMode>true</ConformanceMode>
			<PrecompiledHeader>NotUsing</PrecompiledHeader>
			<LanguageStandard>stdcpp17</LanguageStandard>
			<LanguageStandard_C>stdc17</LanguageStandard_C>
			<AdditionalIncludeDirectories>Public;{engine_include_paths}%(AdditionalIncludeDirectories)</AdditionalIncludeDirectories>
			<MultiProcessorCompilation>true</MultiProcessorCompilation>
		</ClCompile>
		<Link>
			<SubSystem>{subsystem}</SubSystem>
			<EnableCOMDATFolding>true</EnableCOMDATFolding>
			<OptimizeReferences>true</OptimizeReferences>
			<GenerateDebugInformation>false</GenerateDebugInformation>
			<AdditionalLibraryDirectories>{libs_dir}%(AdditionalLibraryDirectories)</AdditionalLibraryDirectories>
			<AdditionalDependencies>{using_libs}%(AdditionalDependencies)</AdditionalDependencies>
		</Link>
		<PostBuildEvent>
		<Command>
{post_build}
		exit 0
		</Command>
		</PostBuildEvent>
	</ItemDefinitionGroup>
	<ItemGroup>
{public_section}	</ItemGroup>
	<ItemGroup>
{private_section}	</ItemGroup>
	<Import Project="$(VCTargetsPath)\Microsoft.Cpp.targets" />
	<ImportGroup Label="ExtensionTargets">
	</ImportGroup>
</Project>
"#
    )
}

pub fn user_file_text() -> String {
    r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="Current" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
	<PropertyGroup>
		<ShowAllFiles>true</ShowAllFiles>
	</PropertyGroup>
</Project>
"#
    .to_string()
}

fn relative_to_module(file: &Path, module_path: &Path) -> String {
    file.strip_prefix(module_path)
        .unwrap_or(file)
        .display()
        .to_string()
}
