//! `.sln` text emission.

use uuid::Uuid;

use crate::modules::ModuleDescriptor;

/// Render the solution file for one discovery result.
///
/// Every project entry is keyed by the module's uppercase UUID; the
/// project-type and solution GUIDs are fresh per generation run.
pub fn solution_text(modules: &[ModuleDescriptor]) -> String {
    let project_type_id = upper(Uuid::new_v4());
    let solution_id = upper(Uuid::new_v4());

    let mut projects_section = String::new();
    let mut configuration_section = String::new();

    for module in modules {
        let module_id = upper(module.module_id);
        projects_section.push_str(&format!(
            "Project(\"{{{project_type_id}}}\") = \"{name}\", \"{path}\\{name}.vcxproj\", \"{{{module_id}}}\" EndProject\n",
            name = module.name,
            path = module.module_path.display(),
        ));
        for (config, action) in [
            ("Debug|x86-64", "ActiveCfg"),
            ("Debug|x86-64", "Build.0"),
            ("Release|x86-64", "ActiveCfg"),
            ("Release|x86-64", "Build.0"),
        ] {
            let target = config.split('|').next().unwrap_or_default();
            configuration_section.push_str(&format!(
                "\t\t{{{module_id}}}.{config}.{action} = {target}|x64\n"
            ));
        }
    }

    format!(
        "Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
VisualStudioVersion = 17
MinimumVisualStudioVersion = 10.0.40219.1
{projects_section}
Global
\tGlobalSection(SolutionConfigurationPlatforms) = preSolution
\t\tDebug|x86-64 = Debug|x86-64
\t\tRelease|x86-64 = Release|x86-64
\tEndGlobalSection
\tGlobalSection(ProjectConfigurationPlatforms) = postSolution
{configuration_section}\tEndGlobalSection
\tGlobalSection(SolutionProperties) = preSolution
\t\tHideSolutionNode = FALSE
\tEndGlobalSection
\tGlobalSection(ExtensibilityGlobals) = postSolution
\t\tSolutionGuid = {{{solution_id}}}
\tEndGlobalSection
EndGlobal
"
    )
}

pub(crate) fn upper(id: Uuid) -> String {
    id.to_string().to_uppercase()
}
