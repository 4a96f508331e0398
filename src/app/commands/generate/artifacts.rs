//! Auxiliary artifacts written after the project files.
//!
//! Missing inputs and unwritable outputs skip the artifact with a warning.
//! Output directories are never created here.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::domain::artifacts::{
    library_stub_name, render_base_config, render_makefile, render_notice, render_threshold_map,
    version_map,
};
use crate::domain::substitution::render_template;
use crate::domain::{AppError, BuildUnit, ComponentRegistry, Configuration, ProjectRoot, VersionMetadata};

const MAGICK_CORE: &str = "MagickCore";

fn read_input(path: &Path, artifact: &str) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(err) => {
            warn!(artifact, path = %path.display(), error = %err, "input unavailable, skipped");
            None
        }
    }
}

fn write_output(path: &Path, content: &str, artifact: &str) -> bool {
    match fs::write(path, content) {
        Ok(()) => {
            debug!(artifact, path = %path.display(), "written");
            true
        }
        Err(err) => {
            warn!(artifact, path = %path.display(), error = %err, "output not writable, skipped");
            false
        }
    }
}

/// `magick-baseconfig.h` from its template and the component config defines.
pub(super) fn write_base_config(
    root: &ProjectRoot,
    config: &Configuration,
    registry: &ComponentRegistry,
    magick_folder: &str,
) {
    let Some(template) = read_input(&root.base_config_template(magick_folder), "base config")
    else {
        return;
    };

    let channel_mask_depth =
        if registry.contains(MAGICK_CORE) { config.channel_mask_depth() } else { None };
    let contributions: Vec<&str> = registry
        .components()
        .iter()
        .filter(|c| !c.files().is_empty() && !c.config_define().is_empty())
        .map(|c| c.config_define())
        .collect();

    let content = render_base_config(&template, config, channel_mask_depth, &contributions);
    write_output(&root.base_config(magick_folder), &content, "base config");
}

/// `threshold-map.h`, only for zero-configuration builds.
pub(super) fn write_threshold_map(root: &ProjectRoot, config: &Configuration, magick_folder: &str) {
    if !config.zero_configuration {
        return;
    }

    let input = root.bin_file(&config.bin_directory, "thresholds.xml");
    let Some(thresholds) = read_input(&input, "threshold map") else {
        return;
    };
    write_output(&root.threshold_map(magick_folder), &render_threshold_map(&thresholds), "threshold map");
}

/// PerlMagick packaging: library stub, `Zip.ps1` and `Makefile.PL`.
///
/// Each part is only attempted when the previous one succeeded.
pub(super) fn write_makefile(root: &ProjectRoot, config: &Configuration, magick_folder: &str) {
    let lib_name = library_stub_name(magick_folder);

    let stub = root.perl_magick_output(&format!("{}.a", lib_name));
    if let Err(err) = File::create(&stub) {
        warn!(path = %stub.display(), error = %err, "library stub not writable, skipped");
        return;
    }

    let zip_source = root.perl_magick_source("Zip.ps1");
    let zip_output = root.perl_magick_output("Zip.ps1");
    if let Err(err) = copy_binary(&zip_source, &zip_output) {
        warn!(path = %zip_source.display(), error = %err, "Zip.ps1 not copied, skipped");
        return;
    }

    let Some(template) = read_input(&root.perl_magick_source("Makefile.PL.in"), "Makefile.PL")
    else {
        return;
    };
    let content = render_makefile(&template, &lib_name, config.platform_alias());
    write_output(&root.perl_magick_output("Makefile.PL"), &content, "Makefile.PL");
}

/// Copy the selected policy profile to `<bin directory>/policy.xml`.
///
/// An unreadable profile fails the run before any output is created.
pub(super) fn write_policy_config(root: &ProjectRoot, config: &Configuration) -> Result<(), AppError> {
    let source = root.policy_source(config.policy.file_name());
    let content = fs::read(&source).map_err(|_| AppError::PolicyFileUnavailable(source.clone()))?;

    let output = root.bin_file(&config.bin_directory, "policy.xml");
    match fs::write(&output, content) {
        Ok(()) => debug!(artifact = "policy config", path = %output.display(), "written"),
        Err(err) => warn!(path = %output.display(), error = %err, "policy config not writable, skipped"),
    }
    Ok(())
}

/// The four version files.
///
/// An unknown keyword in any template fails the run.
pub(super) fn write_version_files(
    root: &ProjectRoot,
    config: &Configuration,
    version: &VersionMetadata,
    magick_folder: &str,
) -> Result<(), AppError> {
    let map = version_map(version, config);
    for (template_path, output) in root.version_templates(magick_folder, &config.bin_directory) {
        let Some(template) = read_input(&template_path, "version") else {
            continue;
        };
        let content: String =
            render_template(&template, &map)?.into_iter().map(|line| line + "\n").collect();
        write_output(&output, &content, "version");
    }
    Ok(())
}

/// `NOTICE.txt` with the product license and every component notice.
pub(super) fn write_notice(
    root: &ProjectRoot,
    config: &Configuration,
    registry: &ComponentRegistry,
    version: &VersionMetadata,
) {
    let license = read_input(&root.product_license(), "notice").unwrap_or_default();
    let notices: Vec<&str> = registry
        .components()
        .iter()
        .filter(|c| !c.notice().is_empty() && !c.should_skip(config))
        .map(|c| c.notice())
        .collect();

    write_output(&root.notice(), &render_notice(version, &license, &notices), "notice");
}

fn copy_binary(source: &Path, destination: &Path) -> io::Result<()> {
    let mut input = File::open(source)?;
    let mut output = File::create(destination)?;
    io::copy(&mut input, &mut output)?;
    Ok(())
}
