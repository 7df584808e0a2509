//! logos-based tokenizer for theme declaration blocks.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `#fff` as HexColor beats a lexing error on `#`)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Ordering ensures `-5` is a [`Token::Number`] rather than an identifier and
//! `scroll-step` stays a single [`Token::Ident`].

use logos::Logos;

/// Theme token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Hex color: `#f00`, `#ff0000`.
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Identifier: property names, color names, block name.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,
}

/// A token with its source text and byte offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token kind, or `None` for input the lexer could not match.
    pub token: Option<Token>,
    pub text: String,
    pub offset: usize,
}

/// Tokenize a theme string.
///
/// Unlike a lossy tokenizer, unrecognized input is kept as a `None` token so
/// the parser can report where it is.
pub fn tokenize(input: &str) -> Vec<Spanned> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| Spanned {
            token: result.ok(),
            text: input[span.clone()].to_string(),
            offset: span.start,
        })
        .collect()
}
