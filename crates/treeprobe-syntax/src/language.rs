//! Language registry and Tree-sitter grammar selection.
//!
//! The registry is a fixed table built into the binary. Command-line names
//! and file extensions both resolve to a [`SupportedLanguage`], which in turn
//! knows how to produce its compiled grammar.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Languages whose grammars are compiled into treeprobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SupportedLanguage {
    /// Bash scripts.
    Bash,
    /// C sources and headers.
    C,
    /// C++ sources and headers.
    Cpp,
    /// Cascading style sheets.
    Css,
    /// Go sources.
    Go,
    /// HTML documents.
    Html,
    /// Java sources.
    Java,
    /// JavaScript sources, including JSX.
    JavaScript,
    /// PHP sources.
    Php,
    /// Python sources.
    Python,
    /// Ruby sources.
    Ruby,
    /// Rust sources.
    Rust,
    /// TypeScript with JSX.
    Tsx,
    /// Plain TypeScript.
    TypeScript,
    /// YAML documents.
    Yaml,
}

/// Names accepted on the command line, keyed to the language they select.
const LANGUAGE_NAMES: &[(&str, SupportedLanguage)] = &[
    ("bash", SupportedLanguage::Bash),
    ("c", SupportedLanguage::C),
    ("cpp", SupportedLanguage::Cpp),
    ("css", SupportedLanguage::Css),
    ("go", SupportedLanguage::Go),
    ("html", SupportedLanguage::Html),
    ("java", SupportedLanguage::Java),
    ("javascript", SupportedLanguage::JavaScript),
    ("js", SupportedLanguage::JavaScript),
    ("php", SupportedLanguage::Php),
    ("py", SupportedLanguage::Python),
    ("python", SupportedLanguage::Python),
    ("rs", SupportedLanguage::Rust),
    ("ruby", SupportedLanguage::Ruby),
    ("rust", SupportedLanguage::Rust),
    ("ts", SupportedLanguage::TypeScript),
    ("tsx", SupportedLanguage::Tsx),
    ("typescript", SupportedLanguage::TypeScript),
    ("yaml", SupportedLanguage::Yaml),
    ("yml", SupportedLanguage::Yaml),
];

impl SupportedLanguage {
    /// Detects the language from a file extension.
    ///
    /// Returns `None` if the extension is not recognised.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let normalised = ext.to_ascii_lowercase();
        match normalised.as_str() {
            "sh" | "bash" => Some(Self::Bash),
            "c" | "h" => Some(Self::C),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some(Self::Cpp),
            "css" => Some(Self::Css),
            "go" => Some(Self::Go),
            "html" | "htm" => Some(Self::Html),
            "java" => Some(Self::Java),
            "js" | "mjs" | "cjs" | "jsx" => Some(Self::JavaScript),
            "php" => Some(Self::Php),
            "py" | "pyi" => Some(Self::Python),
            "rb" => Some(Self::Ruby),
            "rs" => Some(Self::Rust),
            "tsx" => Some(Self::Tsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detects the language from a file path by examining its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the Tree-sitter language grammar for this language.
    #[must_use]
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Self::Bash => tree_sitter_bash::LANGUAGE.into(),
            Self::C => tree_sitter_c::LANGUAGE.into(),
            Self::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Self::Css => tree_sitter_css::LANGUAGE.into(),
            Self::Go => tree_sitter_go::LANGUAGE.into(),
            Self::Html => tree_sitter_html::LANGUAGE.into(),
            Self::Java => tree_sitter_java::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::Php => tree_sitter_php::LANGUAGE_PHP.into(),
            Self::Python => tree_sitter_python::LANGUAGE.into(),
            Self::Ruby => tree_sitter_ruby::LANGUAGE.into(),
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Yaml => tree_sitter_yaml::LANGUAGE.into(),
        }
    }

    /// Returns the canonical lower-case identifier for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::Css => "css",
            Self::Go => "go",
            Self::Html => "html",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Php => "php",
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::Rust => "rust",
            Self::Tsx => "tsx",
            Self::TypeScript => "typescript",
            Self::Yaml => "yaml",
        }
    }

    /// Returns every name accepted by [`FromStr`], in ascending order.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = LANGUAGE_NAMES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names
    }

    /// Returns all supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Bash,
            Self::C,
            Self::Cpp,
            Self::Css,
            Self::Go,
            Self::Html,
            Self::Java,
            Self::JavaScript,
            Self::Php,
            Self::Python,
            Self::Ruby,
            Self::Rust,
            Self::Tsx,
            Self::TypeScript,
            Self::Yaml,
        ]
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when a language identifier is not in the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language '{0}'")]
pub struct LanguageParseError(String);

impl LanguageParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for SupportedLanguage {
    type Err = LanguageParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        LANGUAGE_NAMES
            .iter()
            .find(|(name, _)| *name == normalised)
            .map(|(_, language)| *language)
            .ok_or_else(|| LanguageParseError(input.trim().to_owned()))
    }
}
