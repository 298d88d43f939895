//! Construction options for [`TokenList`](crate::TokenList).

use std::sync::LazyLock;

use regex::Regex;

/// Unix line ending, the default for synthesized line breaks.
pub const LINE_ENDING_LF: &str = "\n";

/// Windows line ending.
pub const LINE_ENDING_CRLF: &str = "\r\n";

/// Classic Mac line ending.
pub const LINE_ENDING_CR: &str = "\r";

#[expect(clippy::expect_used, reason = "literal pattern always compiles")]
static DEFAULT_NEW_LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]").expect("default newline pattern is valid"));

/// Options controlling how whitespace is synthesized during construction.
#[derive(Clone, Debug)]
pub struct TokenListOptions {
    /// Value of every synthesized line-break token, whatever the source used.
    /// Defaults to `"\n"`.
    pub line_endings: String,

    /// Collapse mid-line whitespace runs to a single space. Indents are
    /// always kept verbatim. Defaults to `true`.
    pub collapse_whitespace: bool,

    /// Which characters terminate a line. Tested against one character at
    /// a time; a `\r` directly followed by `\n` is consumed as one unit.
    /// Defaults to `[\r\n]`.
    pub new_line_pattern: Regex,
}

impl Default for TokenListOptions {
    fn default() -> Self {
        Self {
            line_endings: LINE_ENDING_LF.to_owned(),
            collapse_whitespace: true,
            new_line_pattern: DEFAULT_NEW_LINE_PATTERN.clone(),
        }
    }
}

impl TokenListOptions {
    #[must_use]
    pub fn with_line_endings(mut self, line_endings: impl Into<String>) -> Self {
        self.line_endings = line_endings.into();
        self
    }

    #[must_use]
    pub fn with_collapse_whitespace(mut self, collapse_whitespace: bool) -> Self {
        self.collapse_whitespace = collapse_whitespace;
        self
    }

    #[must_use]
    pub fn with_new_line_pattern(mut self, new_line_pattern: Regex) -> Self {
        self.new_line_pattern = new_line_pattern;
        self
    }

    /// Whether `c` starts a line break under the configured pattern.
    pub fn is_new_line(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.new_line_pattern.is_match(c.encode_utf8(&mut buf))
    }
}
