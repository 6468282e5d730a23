//! Key patterns for bulk delete matching.

use regex::Regex;
use std::fmt;

/// Match-pattern passed to a bulk delete.
///
/// Gives `delete_matched` an explicit matching contract instead of implicit
/// string/regex duck typing: a key counts as deleted when it structurally
/// matches any recorded pattern.
#[derive(Debug, Clone)]
pub enum KeyPattern {
    /// Matches exactly one key.
    Exact(String),
    /// Shell-style glob: `*` matches any run of characters, `?` one character.
    Glob { source: String, re: Regex },
    /// Anchored regular expression.
    Regex(Regex),
}

impl KeyPattern {
    pub fn exact(key: impl Into<String>) -> Self {
        KeyPattern::Exact(key.into())
    }

    /// Compiles a glob pattern. `*` crosses path separators.
    pub fn glob(pattern: impl Into<String>) -> Self {
        let source = pattern.into();
        let re = compile_glob(&source);
        KeyPattern::Glob { source, re }
    }

    /// Compiles a regular expression pattern, anchored at both ends.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(&format!("^(?:{pattern})$")).map(KeyPattern::Regex)
    }

    /// Reports whether `key` structurally matches this pattern.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            KeyPattern::Exact(pattern) => pattern == key,
            KeyPattern::Glob { re, .. } => re.is_match(key),
            KeyPattern::Regex(re) => re.is_match(key),
        }
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPattern::Exact(pattern) => f.write_str(pattern),
            KeyPattern::Glob { source, .. } => f.write_str(source),
            KeyPattern::Regex(re) => f.write_str(re.as_str()),
        }
    }
}

/// Translates a glob into an anchored regex. All regex metacharacters in the
/// glob source are escaped, so compilation cannot fail.
fn compile_glob(glob: &str) -> Regex {
    let mut pattern = String::with_capacity(glob.len() + 4);
    pattern.push('^');
    for ch in glob.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            ch => {
                let mut buf = [0u8; 4];
                pattern.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
            }
        }
    }
    pattern.push('$');
    Regex::new(&pattern).expect("escaped glob is a valid regex")
}
