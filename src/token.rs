/// Token kinds produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Language keyword (`if`, `fi`, `foreach`, `goto`, ...).
    Keyword,
    /// Quoted string literal, quotes included.
    String,
    /// Comment up to the end of the line.
    Comment,
    /// Variable reference (`$name`, `${name}`, `%NAME%`).
    Variable,
    /// Run of operator/punctuation characters.
    Operator,
    /// Integer or decimal literal.
    Number,
    /// Well-known command name (`ls`, `Get-Process`, `xcopy`).
    Function,
    /// Anything else, including whitespace.
    Text,
}

/// A classified contiguous span of source text.
///
/// Token values are exact slices of the input: concatenating the
/// values of a token sequence in order reproduces the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
