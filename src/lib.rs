//! Shell script language detection, tokenization, and highlighting.
//!
//! A heuristic classifier and single-pass tokenizer for shell-like
//! scripts (bash, sh, PowerShell, batch), with renderers that map
//! token kinds to terminal colors or HTML spans.
//!
//! # Quick start
//!
//! ## Detect a language and tokenize
//!
//! ```
//! use scriptlex::{classify, tokenize, ScriptLanguage, TokenKind};
//!
//! let script = "@echo off\necho %GREETING%\n";
//! assert_eq!(classify(script), ScriptLanguage::Batch);
//!
//! let tokens = tokenize(script, ScriptLanguage::Auto);
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::Variable));
//!
//! // Token values always reassemble the input exactly.
//! let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(joined, script);
//! ```
//!
//! ## Highlight for a terminal
//!
//! ```
//! use scriptlex::highlight_str;
//!
//! let out = highlight_str("if true; then ls; fi\n");
//! assert!(out.contains("ls"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod classifier;
pub mod highlight;
pub mod language;
pub mod patterns;
pub mod token;
pub mod tokenizer;

pub use classifier::classify;
pub use highlight::{ansi_color, css_class, to_ansi, to_html};
pub use language::{ParseLanguageError, ScriptLanguage};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;

/// Detect the language of `input`, tokenize it, and render it with
/// ANSI colors in one step.
#[must_use]
pub fn highlight_str(input: &str) -> String {
    to_ansi(&tokenize(input, ScriptLanguage::Auto))
}
