//! Line-oriented `@TOKEN@` substitution with a closed keyword vocabulary.
//!
//! Direct tokens are replaced from a [`DirectMap`]. A line that still carries a
//! token afterwards is dropped when the token is a known placeholder of another
//! build system, and is a hard error otherwise.

use crate::domain::AppError;

/// Token delimiter.
pub const DELIMITER: char = '@';

/// Tokens allowed to stay unresolved; lines carrying them are dropped.
pub const SKIPPABLE_KEYWORDS: [&str; 24] = [
    "CODER_PATH",
    "CONFIGURE_ARGS",
    "CONFIGURE_PATH",
    "CXXFLAGS",
    "DEFS",
    "DISTCHECK_CONFIG_FLAGS",
    "EXEC_PREFIX_DIR",
    "EXECUTABLE_PATH",
    "FILTER_PATH",
    "host",
    "INCLUDE_PATH",
    "LIBRARY_PATH",
    "MAGICK_CFLAGS",
    "MAGICK_CPPFLAGS",
    "MAGICK_DELEGATES",
    "MAGICK_FEATURES",
    "MAGICK_LDFLAGS",
    "MAGICK_LIBS",
    "MAGICK_PCFLAGS",
    "MAGICK_SECURITY_POLICY",
    "MAGICK_TARGET_VENDOR",
    "PREFIX_DIR",
    "SHARE_PATH",
    "SHAREARCH_PATH",
];

/// Ordered token name to value replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectMap {
    entries: Vec<(String, String)>,
}

impl DirectMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a replacement for `@name@`.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, v)| v.as_str())
    }
}

/// Result of rendering one template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Line to write.
    Emit(String),
    /// Line carried a known unresolved keyword and is left out.
    Drop { keyword: String },
}

pub fn is_skippable_keyword(keyword: &str) -> bool {
    SKIPPABLE_KEYWORDS.contains(&keyword)
}

/// Render a single template line.
///
/// Fails with [`AppError::InvalidKeyword`] naming the first remaining token
/// (left to right) when it is not a skippable keyword.
pub fn render_line(line: &str, map: &DirectMap) -> Result<LineOutcome, AppError> {
    let mut rendered = line.to_string();
    for (name, value) in &map.entries {
        let token = format!("{0}{1}{0}", DELIMITER, name);
        if rendered.contains(&token) {
            rendered = rendered.replace(&token, value);
        }
    }

    match find_token(&rendered) {
        None => Ok(LineOutcome::Emit(rendered)),
        Some(keyword) if is_skippable_keyword(keyword) => {
            Ok(LineOutcome::Drop { keyword: keyword.to_string() })
        }
        Some(keyword) => Err(AppError::InvalidKeyword(keyword.to_string())),
    }
}

/// Render a whole template, keeping only emitted lines.
pub fn render_template(template: &str, map: &DirectMap) -> Result<Vec<String>, AppError> {
    let mut lines = Vec::new();
    for line in template.lines() {
        if let LineOutcome::Emit(rendered) = render_line(line, map)? {
            lines.push(rendered);
        }
    }
    Ok(lines)
}

/// First `@NAME@` token of `line`, where NAME is ASCII alphanumerics or `_`.
pub fn find_token(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut start = 0;
    while let Some(offset) = line[start..].find(DELIMITER) {
        let open = start + offset;
        let name_start = open + 1;
        let name_len = bytes[name_start..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count();
        let close = name_start + name_len;
        if name_len > 0 && bytes.get(close) == Some(&(DELIMITER as u8)) {
            return Some(&line[name_start..close]);
        }
        start = open + 1;
    }
    None
}
