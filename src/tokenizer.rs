//! Single-pass script tokenizer.
//!
//! Scans left to right, consuming the longest match at the current
//! position, trying rule classes in fixed priority order: comment,
//! double-quoted string, single-quoted string, variable, number,
//! word, operator run, then a one-character fallback. The fallback
//! guarantees forward progress, so tokenization is total: it never
//! fails, and the concatenated token values always reproduce the
//! input exactly.

use crate::classifier::classify;
use crate::language::ScriptLanguage;
use crate::patterns::{is_keyword, is_well_known_command};
use crate::token::{Token, TokenKind};

/// Characters grouped into operator tokens.
const OPERATOR_CHARS: &str = r"|&;<>=!+-*/%\(){}[]@^";

/// Tokenize a script into classified spans.
///
/// `ScriptLanguage::Auto` is resolved via [`classify`] before
/// scanning. The function is pure and cannot fail; malformed input
/// (for example an unterminated quote) degrades to operator and text
/// tokens instead of an error.
#[must_use]
pub fn tokenize(input: &str, language: ScriptLanguage) -> Vec<Token> {
    let language = if language.is_concrete() {
        language
    } else {
        classify(input)
    };
    Tokenizer::new(input, language).run()
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    language: ScriptLanguage,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    const fn new(input: &'a str, language: ScriptLanguage) -> Self {
        Self {
            input,
            pos: 0,
            language,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.pos < self.input.len() {
            if self.comment()
                || self.double_quoted()
                || self.single_quoted()
                || self.variable()
                || self.number()
                || self.word()
                || self.operator_run()
            {
                continue;
            }
            self.fallback();
        }
        self.tokens
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Emit a token covering the next `len` bytes of input.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        let value = &self.input[self.pos..self.pos + len];
        self.tokens.push(Token::new(kind, value));
        self.pos += len;
    }

    /// Comment to end of line: `::` or a standalone `rem` word for
    /// batch, `#` for bash/sh/PowerShell. The newline is not part of
    /// the comment.
    fn comment(&mut self) -> bool {
        let rest = self.rest();
        let starts_comment = match self.language {
            ScriptLanguage::Batch => rest.starts_with("::") || starts_with_rem(rest),
            _ => rest.starts_with('#'),
        };
        if !starts_comment {
            return false;
        }
        let len = rest.find('\n').unwrap_or(rest.len());
        self.emit(TokenKind::Comment, len);
        true
    }

    /// Double-quoted string with backslash-escaped quotes. Matches
    /// only when a closing quote exists; otherwise falls through so
    /// the scanner degrades to per-character tokens.
    fn double_quoted(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with('"') {
            return false;
        }
        let mut chars = rest.char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => {
                    self.emit(TokenKind::String, i + 1);
                    return true;
                }
                _ => {}
            }
        }
        false
    }

    /// Single-quoted string, no escapes. Same fall-through semantics
    /// as `double_quoted` when unterminated.
    fn single_quoted(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with('\'') {
            return false;
        }
        let Some(close) = rest[1..].find('\'') else {
            return false;
        };
        self.emit(TokenKind::String, close + 2);
        true
    }

    fn variable(&mut self) -> bool {
        match self.language {
            ScriptLanguage::Batch => self.batch_variable(),
            ScriptLanguage::PowerShell => self.dollar_name(),
            // Auto is resolved in `tokenize`; treated as bash here.
            ScriptLanguage::Auto | ScriptLanguage::Bash | ScriptLanguage::Sh => {
                self.braced_expansion() || self.dollar_name()
            }
        }
    }

    /// `${...}` parameter expansion. Requires the closing brace.
    fn braced_expansion(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with("${") {
            return false;
        }
        let Some(close) = rest[2..].find('}') else {
            return false;
        };
        self.emit(TokenKind::Variable, close + 3);
        true
    }

    /// `$name` (also `$_` and friends via the underscore).
    fn dollar_name(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with('$') {
            return false;
        }
        let name_len = ident_len(&rest[1..]);
        if name_len == 0 {
            return false;
        }
        self.emit(TokenKind::Variable, 1 + name_len);
        true
    }

    /// `%%x` loop variables and `%NAME%` expansions. A lone `%`
    /// falls through to the operator rule.
    fn batch_variable(&mut self) -> bool {
        let rest = self.rest();
        if !rest.starts_with('%') {
            return false;
        }
        if rest.starts_with("%%") {
            return match rest[2..].chars().next() {
                Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
                    self.emit(TokenKind::Variable, 2 + c.len_utf8());
                    true
                }
                _ => false,
            };
        }
        let name_len = ident_len(&rest[1..]);
        if name_len > 0 && rest[1 + name_len..].starts_with('%') {
            self.emit(TokenKind::Variable, name_len + 2);
            return true;
        }
        false
    }

    /// Integer or decimal literal.
    fn number(&mut self) -> bool {
        let rest = self.rest();
        let digits = digit_len(rest);
        if digits == 0 {
            return false;
        }
        let mut len = digits;
        if rest[len..].starts_with('.') {
            let frac = digit_len(&rest[len + 1..]);
            if frac > 0 {
                len += 1 + frac;
            }
        }
        self.emit(TokenKind::Number, len);
        true
    }

    /// Identifier/word, classified as keyword, well-known command,
    /// or plain text. PowerShell words may contain `-` so cmdlet
    /// names like `Get-Process` lex as one word.
    fn word(&mut self) -> bool {
        let rest = self.rest();
        let Some(first) = rest.chars().next() else {
            return false;
        };
        if !(first.is_alphabetic() || first == '_') {
            return false;
        }
        let allow_dash = self.language == ScriptLanguage::PowerShell;
        let len: usize = rest
            .chars()
            .take_while(|&c| c.is_alphanumeric() || c == '_' || (allow_dash && c == '-'))
            .map(char::len_utf8)
            .sum();
        let word = &rest[..len];
        let kind = if is_keyword(self.language, word) {
            TokenKind::Keyword
        } else if is_well_known_command(self.language, word) {
            TokenKind::Function
        } else {
            TokenKind::Text
        };
        self.emit(kind, len);
        true
    }

    /// Maximal run of operator/punctuation characters.
    fn operator_run(&mut self) -> bool {
        let len: usize = self
            .rest()
            .chars()
            .take_while(|&c| OPERATOR_CHARS.contains(c))
            .map(char::len_utf8)
            .sum();
        if len == 0 {
            return false;
        }
        self.emit(TokenKind::Operator, len);
        true
    }

    /// Consume exactly one character as text. Guarantees forward
    /// progress and total coverage.
    fn fallback(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.emit(TokenKind::Text, c.len_utf8());
        }
    }
}

/// `rem` as a standalone word (case-insensitive), followed by
/// whitespace or end of input.
fn starts_with_rem(rest: &str) -> bool {
    rest.get(..3).is_some_and(|w| w.eq_ignore_ascii_case("rem"))
        && rest[3..].chars().next().is_none_or(char::is_whitespace)
}

/// Byte length of the leading ASCII identifier run.
fn ident_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

/// Byte length of the leading ASCII digit run.
fn digit_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
