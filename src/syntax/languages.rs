//! Language definitions and filename-based rule selection
//!
//! Rules are static and read-only. One rule (or none) is selected per open
//! file by testing the filename against each entry's match patterns.

use std::path::Path;

/// Feature switches for a language rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightFlags {
    pub numbers: bool,
    pub strings: bool,
}

impl HighlightFlags {
    pub const NONE: Self = Self {
        numbers: false,
        strings: false,
    };
    pub const ALL: Self = Self {
        numbers: true,
        strings: true,
    };
}

/// Marker that flags a keyword as secondary (type-like)
pub const SECONDARY_KEYWORD_MARKER: u8 = b'|';

/// A language definition for the lexical classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxRule {
    /// Name shown in the status bar
    pub filetype: &'static str,
    /// Patterns starting with `.` match the extension exactly, others match as substrings
    pub filename_patterns: &'static [&'static str],
    /// Keywords in match order; a trailing `|` marks a secondary keyword
    pub keywords: &'static [&'static str],
    pub single_line_comment: Option<&'static str>,
    /// Block comment start and end markers
    pub block_comment: Option<(&'static str, &'static str)>,
    pub flags: HighlightFlags,
}

impl SyntaxRule {
    /// Whether this rule applies to `filename`
    pub fn matches_filename(&self, filename: &str) -> bool {
        let extension = filename.rfind('.').map(|pos| &filename[pos..]);

        self.filename_patterns.iter().any(|pattern| {
            if pattern.starts_with('.') {
                extension == Some(*pattern)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "#include", "#define", "#ifdef", "#ifndef",
    "int|", "long|", "double|", "float|", "char|", "unsigned|", "signed|", "void|",
];

const RUST_KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "if", "else", "match", "while", "loop", "for", "in", "return", "break",
    "continue", "struct", "enum", "impl", "trait", "pub", "use", "mod", "const", "static",
    "where", "as", "ref", "move", "unsafe", "crate", "super", "self", "Self", "true", "false",
    "i8|", "i16|", "i32|", "i64|", "i128|", "isize|", "u8|", "u16|", "u32|", "u64|", "u128|",
    "usize|", "f32|", "f64|", "bool|", "char|", "str|", "String|", "Vec|", "Option|", "Result|",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "return", "import", "from", "as",
    "with", "try", "except", "finally", "raise", "pass", "break", "continue", "lambda", "yield",
    "global", "nonlocal", "in", "is", "not", "and", "or", "None", "True", "False",
    "int|", "float|", "str|", "bool|", "list|", "dict|", "tuple|", "set|", "bytes|",
];

const SHELL_KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "until", "do", "done", "case", "esac",
    "function", "return", "in", "local", "export", "readonly", "echo|", "exit|", "set|",
    "unset|", "shift|",
];

/// Built-in language table, tested in order
pub const HIGHLIGHT_DATABASE: &[SyntaxRule] = &[
    SyntaxRule {
        filetype: "c",
        filename_patterns: &[".c", ".h", ".cpp", ".cc"],
        keywords: C_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: HighlightFlags::ALL,
    },
    SyntaxRule {
        filetype: "rust",
        filename_patterns: &[".rs"],
        keywords: RUST_KEYWORDS,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        flags: HighlightFlags::ALL,
    },
    SyntaxRule {
        filetype: "python",
        filename_patterns: &[".py"],
        keywords: PYTHON_KEYWORDS,
        single_line_comment: Some("#"),
        block_comment: None,
        flags: HighlightFlags::ALL,
    },
    SyntaxRule {
        filetype: "shell",
        filename_patterns: &[".sh", ".bash", "bashrc"],
        keywords: SHELL_KEYWORDS,
        single_line_comment: Some("#"),
        block_comment: None,
        flags: HighlightFlags {
            numbers: false,
            strings: true,
        },
    },
];

/// Select the first rule in table order whose patterns match `filename`
pub fn select_rule(filename: &str) -> Option<&'static SyntaxRule> {
    HIGHLIGHT_DATABASE
        .iter()
        .find(|rule| rule.matches_filename(filename))
}

/// Select a rule from a path, matching against its file name
pub fn select_rule_for_path(path: &Path) -> Option<&'static SyntaxRule> {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(select_rule)
}

/// Look up a rule by its filetype name
pub fn rule_by_filetype(filetype: &str) -> Option<&'static SyntaxRule> {
    HIGHLIGHT_DATABASE
        .iter()
        .find(|rule| rule.filetype.eq_ignore_ascii_case(filetype))
}
