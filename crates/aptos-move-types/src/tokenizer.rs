//! Tokenizer for struct tag strings.
//!
//! Matchers are tried in a fixed order at each position; the first one that
//! consumes input wins. Whitespace is skipped. Any other character fails.

use crate::error::{MoveTypeError, MoveTypeResult};

/// A lexical token of a struct tag string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// `::`
    Namespace,
    /// `<`
    StartGeneric,
    /// `>`
    EndGeneric,
    /// `,`
    Comma,
    /// A run of word characters: an address, module or struct name.
    Ident(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Namespace,
    StartGeneric,
    EndGeneric,
    Comma,
    Ident,
    Whitespace,
}

/// Returns the number of bytes matched at the start of the input, 0 for no match.
type Matcher = fn(&str) -> usize;

const TOKEN_MATCHERS: &[(TokenKind, Matcher)] = &[
    (TokenKind::Namespace, match_namespace),
    (TokenKind::StartGeneric, match_start_generic),
    (TokenKind::EndGeneric, match_end_generic),
    (TokenKind::Comma, match_comma),
    (TokenKind::Ident, match_ident),
    (TokenKind::Whitespace, match_whitespace),
];

fn match_namespace(s: &str) -> usize {
    if s.starts_with("::") {
        2
    } else {
        0
    }
}

fn match_start_generic(s: &str) -> usize {
    usize::from(s.starts_with('<'))
}

fn match_end_generic(s: &str) -> usize {
    usize::from(s.starts_with('>'))
}

fn match_comma(s: &str) -> usize {
    usize::from(s.starts_with(','))
}

fn match_ident(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

fn match_whitespace(s: &str) -> usize {
    s.chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum()
}

/// Splits a struct tag string into tokens.
///
/// # Errors
///
/// Returns [`MoveTypeError::MalformedStructTag`] at the first character that
/// no matcher accepts.
pub(crate) fn tokenize(input: &str) -> MoveTypeResult<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    'scan: while offset < input.len() {
        let rest = &input[offset..];
        for &(kind, matcher) in TOKEN_MATCHERS {
            let len = matcher(rest);
            if len == 0 {
                continue;
            }
            match kind {
                TokenKind::Namespace => tokens.push(Token::Namespace),
                TokenKind::StartGeneric => tokens.push(Token::StartGeneric),
                TokenKind::EndGeneric => tokens.push(Token::EndGeneric),
                TokenKind::Comma => tokens.push(Token::Comma),
                TokenKind::Ident => tokens.push(Token::Ident(&rest[..len])),
                TokenKind::Whitespace => {}
            }
            offset += len;
            continue 'scan;
        }

        let unexpected = rest.chars().next().unwrap_or_default();
        return Err(MoveTypeError::malformed(format!(
            "unexpected character {unexpected:?} at offset {offset}"
        )));
    }

    Ok(tokens)
}
