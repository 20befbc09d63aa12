#![allow(dead_code)]

use scriptlex::{ScriptLanguage, Token, TokenKind, tokenize};

/// Tokenize `input` under `language` and assert the concatenated
/// token values reproduce the input exactly.
pub fn coverage(input: &str, language: ScriptLanguage) -> Vec<Token> {
    let tokens = tokenize(input, language);
    let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        joined, input,
        "coverage mismatch under {language}:\n--- input ---\n{input}\n--- rebuilt ---\n{joined}"
    );
    tokens
}

/// Find the kind assigned to the first token with the given value.
pub fn kind_of(tokens: &[Token], value: &str) -> TokenKind {
    tokens
        .iter()
        .find(|t| t.value == value)
        .unwrap_or_else(|| panic!("no token with value {value:?} in {tokens:?}"))
        .kind
}
