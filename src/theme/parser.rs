//! Recursive descent parser for theme declaration blocks.
//!
//! Accepts a list of `name: value;` declarations, optionally wrapped in a
//! single `Name { ... }` block. The trailing semicolon of the last declaration
//! may be omitted. Properties that are not mentioned keep their defaults.

use tracing::debug;

use super::tokenizer::{tokenize, Spanned, Token};
use super::{Color, Theme};

/// Errors from theme parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at byte {offset}: {message}")]
    UnexpectedToken { offset: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid color for {property}: {value}")]
    InvalidColor { property: String, value: String },
    #[error("invalid number for {property}: {value}")]
    InvalidNumber { property: String, value: String },
}

/// Parse a theme string on top of [`Theme::default`].
pub fn parse_theme(input: &str) -> Result<Theme, ParseError> {
    let mut theme = Theme::default();
    apply_theme(&mut theme, input).inspect_err(|err| debug!(%err, "theme rejected"))?;
    Ok(theme)
}

/// Apply the declarations in `input` to an existing theme.
///
/// On error the theme may have been partially updated.
pub fn apply_theme(theme: &mut Theme, input: &str) -> Result<(), ParseError> {
    let mut parser = Parser {
        tokens: tokenize(input),
        cursor: 0,
    };

    let wrapped = parser.peek_is(&Token::Ident) && parser.peek_nth_is(1, &Token::BraceOpen);
    if wrapped {
        parser.advance();
        parser.advance();
    }

    while let Some(tok) = parser.peek() {
        if wrapped && tok.token == Some(Token::BraceClose) {
            break;
        }
        let (name, value) = parser.parse_declaration()?;
        set_property(theme, &name, &value)?;
    }

    if wrapped {
        parser.expect(&Token::BraceClose)?;
        if let Some(tok) = parser.peek() {
            return Err(unexpected(tok, "trailing input after theme block"));
        }
    }

    Ok(())
}

fn unexpected(tok: &Spanned, message: &str) -> ParseError {
    ParseError::UnexpectedToken {
        offset: tok.offset,
        message: format!("{message}, got '{}'", tok.text),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    fn peek_is(&self, expected: &Token) -> bool {
        self.peek_nth_is(0, expected)
    }

    fn peek_nth_is(&self, n: usize, expected: &Token) -> bool {
        self.tokens
            .get(self.cursor + n)
            .is_some_and(|t| t.token.as_ref() == Some(expected))
    }

    fn advance(&mut self) -> Option<Spanned> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn expect(&mut self, expected: &Token) -> Result<Spanned, ParseError> {
        match self.advance() {
            Some(tok) if tok.token.as_ref() == Some(expected) => Ok(tok),
            Some(tok) => Err(unexpected(&tok, &format!("expected {expected:?}"))),
            None => Err(ParseError::UnexpectedEof(format!("expected {expected:?}"))),
        }
    }

    /// `name : value [;]`
    fn parse_declaration(&mut self) -> Result<(String, Spanned), ParseError> {
        let name = self.expect(&Token::Ident)?;
        self.expect(&Token::Colon)?;
        let value = match self.advance() {
            Some(tok)
                if matches!(
                    tok.token,
                    Some(Token::HexColor) | Some(Token::Ident) | Some(Token::Number)
                ) =>
            {
                tok
            }
            Some(tok) => return Err(unexpected(&tok, "expected a value")),
            None => {
                return Err(ParseError::UnexpectedEof(format!(
                    "expected a value for {}",
                    name.text
                )))
            }
        };
        if self.peek_is(&Token::Semicolon) {
            self.advance();
        } else if let Some(tok) = self.peek() {
            if tok.token != Some(Token::BraceClose) {
                return Err(unexpected(tok, "expected ';'"));
            }
        }
        Ok((name.text, value))
    }
}

fn set_property(theme: &mut Theme, name: &str, value: &Spanned) -> Result<(), ParseError> {
    let slot = match name {
        "idle" => &mut theme.idle,
        "hover" => &mut theme.hover,
        "pressed" => &mut theme.pressed,
        "accent" => &mut theme.accent,
        "track" => &mut theme.track,
        "thumb" => &mut theme.thumb,
        "text-color" => &mut theme.text,
        "caret" => &mut theme.caret,
        "scroll-step" => return set_metric(&mut theme.scroll_step, name, value, false),
        "text-padding" => return set_metric(&mut theme.text_padding, name, value, true),
        "step-button" => return set_metric(&mut theme.step_button, name, value, true),
        other => return Err(ParseError::UnknownProperty(other.to_string())),
    };

    let color = match value.token {
        Some(Token::HexColor) => Color::from_hex(&value.text),
        Some(Token::Ident) => Color::from_name(&value.text),
        _ => None,
    };
    *slot = color.ok_or_else(|| ParseError::InvalidColor {
        property: name.to_string(),
        value: value.text.clone(),
    })?;
    Ok(())
}

/// Parse a pixel metric. Negative values are rejected, and so is zero unless
/// `allow_zero` is set.
fn set_metric(
    slot: &mut f64,
    name: &str,
    value: &Spanned,
    allow_zero: bool,
) -> Result<(), ParseError> {
    let parsed = match value.token {
        Some(Token::Number) => value
            .text
            .parse::<f64>()
            .ok()
            .filter(|n| *n > 0.0 || (allow_zero && *n == 0.0)),
        _ => None,
    };
    *slot = parsed.ok_or_else(|| ParseError::InvalidNumber {
        property: name.to_string(),
        value: value.text.clone(),
    })?;
    Ok(())
}
