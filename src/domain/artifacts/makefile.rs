//! PerlMagick packaging script.

const LIB_NAME_TOKEN: &str = "$$LIB_NAME$$";
const PLATFORM_TOKEN: &str = "$$PLATFORM$$";

/// Base name of the placeholder library PerlMagick links against.
pub fn library_stub_name(magick_folder: &str) -> String {
    format!("CORE_RL_{}_", magick_folder)
}

/// Render `Makefile.PL` from its template.
pub fn render_makefile(template: &str, lib_name: &str, platform_alias: &str) -> String {
    let mut out = String::new();
    for line in template.lines() {
        out.push_str(&line.replace(LIB_NAME_TOKEN, lib_name).replace(PLATFORM_TOKEN, platform_alias));
        out.push('\n');
    }
    out
}
