//! Visual Studio solution descriptor.

use crate::domain::{AppError, Configuration, FileDescriptor};

const PROJECT_TYPE_GUID: &str = "{8BC9CEB8-8B4A-11D0-8D11-00A0C91BC942}";
const CRLF: &str = "\r\n";

/// One project row of a solution descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionEntry {
    pub name: String,
    /// Project path relative to the solution, `\` separated.
    pub path: String,
    /// Project GUID without braces.
    pub guid: String,
}

impl SolutionEntry {
    pub fn file_name(&self) -> &str {
        self.path.rsplit('\\').next().unwrap_or(&self.path)
    }
}

/// Render the solution descriptor with CRLF line endings.
pub fn render_solution(config: &Configuration, files: &[&FileDescriptor]) -> String {
    let solution = config.solution_name();
    let alias = config.platform_alias();
    let platform = config.platform_name();

    let mut lines: Vec<String> = vec![
        "Microsoft Visual Studio Solution File, Format Version 12.00".to_string(),
        format!("# {}", config.toolchain.display_name()),
    ];

    for file in files {
        lines.push(format!(
            "Project(\"{}\") = \"{}\", \"{}\\{}\\{}\", \"{{{}}}\"",
            PROJECT_TYPE_GUID,
            file.name(),
            solution,
            file.name(),
            file.file_name(),
            file.guid()
        ));
        lines.push("EndProject".to_string());
    }

    lines.push("Global".to_string());
    lines.push("\tGlobalSection(SolutionConfigurationPlatforms) = preSolution".to_string());
    for build in ["Debug", "Release"] {
        lines.push(format!("\t\t{build}|{alias} = {build}|{alias}"));
    }
    lines.push("\tEndGlobalSection".to_string());

    lines.push("\tGlobalSection(ProjectConfigurationPlatforms) = postSolution".to_string());
    for file in files {
        let guid = file.guid();
        for build in ["Debug", "Release"] {
            lines.push(format!("\t\t{{{guid}}}.{build}|{alias}.ActiveCfg = {build}|{platform}"));
            lines.push(format!("\t\t{{{guid}}}.{build}|{alias}.Build.0 = {build}|{platform}"));
        }
    }
    lines.push("\tEndGlobalSection".to_string());
    lines.push("EndGlobal".to_string());

    let mut out = lines.join(CRLF);
    out.push_str(CRLF);
    out
}

/// Read back the project rows of a solution descriptor.
pub fn parse_solution(content: &str) -> Result<Vec<SolutionEntry>, AppError> {
    let mut entries = Vec::new();
    for line in content.lines().map(|line| line.trim_end_matches('\r')) {
        let Some(rest) = line.strip_prefix("Project(") else {
            continue;
        };
        let fields = quoted_fields(rest);
        let [_, name, path, guid] = fields.as_slice() else {
            return Err(parse_error(line));
        };
        let guid = guid
            .strip_prefix('{')
            .and_then(|g| g.strip_suffix('}'))
            .ok_or_else(|| parse_error(line))?;
        entries.push(SolutionEntry {
            name: name.to_string(),
            path: path.to_string(),
            guid: guid.to_string(),
        });
    }
    Ok(entries)
}

fn quoted_fields(text: &str) -> Vec<&str> {
    text.split('"').skip(1).step_by(2).collect()
}

fn parse_error(line: &str) -> AppError {
    AppError::ParseError { what: "solution project line".into(), details: line.to_string() }
}
