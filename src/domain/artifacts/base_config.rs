//! `magick-baseconfig.h` rendering.

use crate::domain::Configuration;

/// Line of the template replaced by the generated configuration block.
pub const CONFIG_MARKER: &str = "$$CONFIG$$";

/// Render the base configuration header.
///
/// The marker line is replaced by the feature toggles of `config`, followed by
/// each entry of `contributions` in order. `channel_mask_depth` is emitted when
/// present. Every other line is copied unchanged.
pub fn render_base_config(
    template: &str,
    config: &Configuration,
    channel_mask_depth: Option<&str>,
    contributions: &[&str],
) -> String {
    let mut out = String::new();
    for line in template.lines() {
        if line.trim() != CONFIG_MARKER {
            push_line(&mut out, line);
            continue;
        }

        for block_line in config_block(config, channel_mask_depth) {
            push_line(&mut out, &block_line);
        }
        for contribution in contributions {
            push_line(&mut out, "");
            for contribution_line in contribution.lines() {
                push_line(&mut out, contribution_line);
            }
        }
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn toggle(enabled: bool, symbol: &str) -> String {
    if enabled { format!("#define {}", symbol) } else { format!("#undef {}", symbol) }
}

fn config_block(config: &Configuration, channel_mask_depth: Option<&str>) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let comment = |lines: &mut Vec<String>, text: &[&str]| {
        lines.push("/*".to_string());
        lines.extend(text.iter().map(|t| format!("  {}", t)));
        lines.push("*/".to_string());
    };

    comment(
        &mut lines,
        &[
            "Define to build a ImageMagick which uses registry settings or",
            "hard-coded paths to locate installed components.  This supports",
            "using the \"setup.exe\" style installer, or using hard-coded path",
            "definitions (see below).  If you want to be able to simply copy",
            "the built ImageMagick to any directory on any machine,",
            "then do not use this setting.",
        ],
    );
    lines.push(toggle(config.installed_support, "MAGICKCORE_INSTALLED_SUPPORT"));
    lines.push(String::new());

    comment(
        &mut lines,
        &[
            "Specify size of PixelPacket color Quantums (8, 16, 32 or 64).",
            "A value of 8 uses half the memory than 16 and typically runs 30% faster,",
            "but provides 256 times less color resolution than a value of 16.",
        ],
    );
    lines.push(format!("#define MAGICKCORE_QUANTUM_DEPTH {}", config.quantum_depth.bits()));
    lines.push(String::new());

    if let Some(depth) = channel_mask_depth {
        comment(&mut lines, &["Channel mask depth"]);
        lines.push(format!("#define MAGICKCORE_CHANNEL_MASK_DEPTH {}", depth));
        lines.push(String::new());
    }

    comment(&mut lines, &["Define to enable high dynamic range imagery (HDRI)"]);
    lines.push(format!("#define MAGICKCORE_HDRI_ENABLE {}", u8::from(config.hdri)));
    lines.push(String::new());

    comment(&mut lines, &["Define to enable OpenCL"]);
    lines.push(toggle(config.opencl, "MAGICKCORE_HAVE_CL_CL_H"));
    lines.push(String::new());

    comment(&mut lines, &["Define to enable Distributed Pixel Cache"]);
    lines.push(toggle(config.distributed_cache, "MAGICKCORE_DPC_SUPPORT"));
    lines.push(String::new());

    comment(&mut lines, &["Exclude deprecated methods in MagickCore API"]);
    lines.push(toggle(config.exclude_deprecated, "MAGICKCORE_EXCLUDE_DEPRECATED"));
    lines.push(String::new());

    comment(&mut lines, &["Define to only use the built-in (in-memory) settings."]);
    lines.push(format!(
        "#define MAGICKCORE_ZERO_CONFIGURATION_SUPPORT {}",
        u8::from(config.zero_configuration)
    ));

    lines
}
