//! Built-in threshold map header for zero-configuration builds.

/// Render `thresholds.xml` as a C string literal table.
///
/// Blank lines are dropped and double quotes escaped.
pub fn render_threshold_map(thresholds: &str) -> String {
    let mut out = String::from("static const char *const BuiltinMap=\n");
    for line in thresholds.lines().filter(|line| !line.trim().is_empty()) {
        out.push('"');
        out.push_str(&line.replace('"', "\\\""));
        out.push_str("\"\n");
    }
    out.push(';');
    out
}
