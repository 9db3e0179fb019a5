//! Highlight categories assigned to rendered characters

use serde::{Deserialize, Serialize};

/// Lexical class of one rendered character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    #[default]
    Normal,
    /// Single-line comment, runs to end of line
    Comment,
    /// Block comment, may span lines
    BlockComment,
    /// Primary keyword (`if`, `return`)
    Keyword,
    /// Type-like keyword, declared with a trailing `|` marker
    KeywordSecondary,
    String,
    Number,
    /// Transient search match overlay
    Match,
}

impl Highlight {
    /// All categories, in declaration order
    pub const ALL: [Highlight; 8] = [
        Highlight::Normal,
        Highlight::Comment,
        Highlight::BlockComment,
        Highlight::Keyword,
        Highlight::KeywordSecondary,
        Highlight::String,
        Highlight::Number,
        Highlight::Match,
    ];

    /// Stable name used in theme files
    pub fn name(self) -> &'static str {
        match self {
            Highlight::Normal => "normal",
            Highlight::Comment => "comment",
            Highlight::BlockComment => "block_comment",
            Highlight::Keyword => "keyword",
            Highlight::KeywordSecondary => "keyword_secondary",
            Highlight::String => "string",
            Highlight::Number => "number",
            Highlight::Match => "match",
        }
    }

    /// Look up a category by its theme name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|h| h.name() == name)
    }

    /// Whether the category is either kind of comment
    pub fn is_comment(self) -> bool {
        matches!(self, Highlight::Comment | Highlight::BlockComment)
    }
}
