use super::SignatureHeader;
use logos::{Logos, Span, SpannedIter};
use miette::{Diagnostic, SourceSpan};
use std::collections::{btree_map::Entry, BTreeMap};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Logos, PartialEq)]
#[logos(skip r"[ \t]+")]
enum TokenTy {
    #[regex(r"[A-Za-z0-9_-]+")]
    Key,

    #[token("=")]
    Equals,

    #[regex(r#""[^"]*""#)]
    Value,

    #[token(",")]
    Comma,
}

/// Signature header parsing error
#[derive(Debug, Diagnostic, Error)]
pub enum ParseError {
    /// Header didn't contain a single parameter
    #[error("Empty signature header")]
    Empty,

    /// Same key appeared twice
    #[error("Duplicate key \"{key}\"")]
    DuplicateKey {
        /// Name of the duplicated key
        key: String,

        /// Location of the second occurrence
        #[label("defined again here")]
        span: SourceSpan,
    },

    /// Input ended in the middle of a parameter
    #[error("Unexpected end of header, expected {expected}")]
    UnexpectedEnd {
        /// Description of the expected token
        expected: &'static str,
    },

    /// Illegal character or token in the wrong position
    #[error("Unexpected token, expected {expected}")]
    UnexpectedToken {
        /// Description of the expected token
        expected: &'static str,

        /// Location of the offending token
        #[label("unexpected")]
        span: SourceSpan,
    },
}

struct Parser<'a> {
    /// Reference to the original input that was fed to the lexer
    input: &'a str,

    /// Stream of tokens
    tokens: SpannedIter<'a, TokenTy>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: TokenTy::lexer(input).spanned(),
        }
    }

    fn expect(&mut self, expected_ty: TokenTy, expected: &'static str) -> Result<Span, ParseError> {
        match self.tokens.next() {
            Some((Ok(ty), span)) if ty == expected_ty => Ok(span),
            Some((_, span)) => Err(ParseError::UnexpectedToken {
                expected,
                span: span.into(),
            }),
            None => Err(ParseError::UnexpectedEnd { expected }),
        }
    }

    /// Parse a single `key="value"` pair
    fn pair(&mut self) -> Result<(Span, &'a str), ParseError> {
        let key = self.expect(TokenTy::Key, "a key")?;
        let equals = self.expect(TokenTy::Equals, "'='")?;
        if key.end != equals.start {
            return Err(ParseError::UnexpectedToken {
                expected: "'=' directly after the key",
                span: (key.end..equals.start).into(),
            });
        }

        let value = self.expect(TokenTy::Value, "a quoted value")?;
        if equals.end != value.start {
            return Err(ParseError::UnexpectedToken {
                expected: "a quoted value directly after '='",
                span: (equals.end..value.start).into(),
            });
        }

        // The lexer guarantees the span starts and ends with a quote
        Ok((key, &self.input[value.start + 1..value.end - 1]))
    }

    /// Returns whether another pair follows
    fn separator(&mut self) -> Result<bool, ParseError> {
        match self.tokens.next() {
            None => Ok(false),
            Some((Ok(TokenTy::Comma), _)) => Ok(true),
            Some((_, span)) => Err(ParseError::UnexpectedToken {
                expected: "','",
                span: span.into(),
            }),
        }
    }
}

/// Parse a parameterised signature header (`key1="value1", key2="value2"`) into its key/value pairs
///
/// All-or-nothing: a single malformed segment invalidates the whole header.
/// Values are taken verbatim from between the quotes.
#[inline]
pub fn parse(input: &str) -> Result<SignatureHeader<'_>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser::new(input);
    let mut fields = BTreeMap::new();

    loop {
        let (key_span, value) = parser.pair()?;
        let key = &input[key_span.clone()];

        match fields.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
            Entry::Occupied(..) => {
                return Err(ParseError::DuplicateKey {
                    key: key.to_string(),
                    span: key_span.into(),
                });
            }
        }

        if !parser.separator()? {
            break;
        }
    }

    Ok(SignatureHeader { fields })
}
