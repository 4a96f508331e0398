//! License notice text.

use crate::domain::VersionMetadata;

pub const NOTICE_RULE: &str =
    "* * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *";

/// Notice block of one component: a title line followed by its license texts.
pub fn component_notice(title: &str, licenses: &[String]) -> String {
    let mut notice = format!("[ {} ] copyright:\n\n", title);
    for license in licenses {
        notice.push_str(license);
        if !license.ends_with('\n') {
            notice.push('\n');
        }
    }
    notice
}

/// Aggregate notice: the product license first, then every component notice,
/// each block closed by a rule line.
pub fn render_notice(version: &VersionMetadata, product_license: &str, notices: &[&str]) -> String {
    let mut out = String::new();
    out.push_str(NOTICE_RULE);
    out.push_str("\n\n");
    out.push_str(&format!(
        "[ ImageMagick {}{} ] copyright:\n\n",
        version.version, version.lib_addendum
    ));
    out.push_str(product_license);
    if !product_license.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(NOTICE_RULE);
    out.push_str("\n\n");

    for notice in notices.iter().filter(|notice| !notice.is_empty()) {
        out.push_str(notice);
        out.push_str(NOTICE_RULE);
        out.push_str("\n\n");
    }
    out
}
