//! Required-attribute constraint grammar.
//!
//! The `Attributes` argument of a target-element annotation is a
//! comma-separated list of entries:
//!
//! ```text
//! asp-for                 presence of `asp-for`
//! route-*                 presence of any attribute starting with `route-`
//! [type]                  presence, bracketed form
//! [type=text]             value equals `text`
//! [src^='https:']         value starts with `https:`
//! [src$=".png"]           value ends with `.png`
//! ```
//!
//! Malformed input yields no predicates at all. The rule that carried it
//! still exists; it simply requires no attributes.

use logos::Logos;
use smol_str::SmolStr;
use thiserror::Error;

use crate::descriptor::{NameComparison, RequiredAttribute, ValueComparison};

/// Lexer tokens of the constraint grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum ConstraintToken {
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token("^=")]
    PrefixEq,
    #[token("$=")]
    SuffixEq,
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,
    #[regex(r"'[^']*'")]
    SingleQuoted,
    #[regex(r#"[^ \t\r\n\f,\[\]='"^$*]+"#)]
    Name,
}

/// Why a constraint string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum ConstraintParseError {
    #[error("unrecognized input at offset {0}")]
    Lex(usize),
    #[error("expected {expected} at offset {offset}")]
    Expected { expected: &'static str, offset: usize },
    #[error("unexpected end of input, expected {0}")]
    UnexpectedEnd(&'static str),
}

struct Lexed<'a> {
    token: ConstraintToken,
    text: &'a str,
    offset: usize,
}

fn tokenize(input: &str) -> Result<Vec<Lexed<'_>>, ConstraintParseError> {
    let mut lexer = ConstraintToken::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let offset = lexer.span().start;
        let token = result.map_err(|()| ConstraintParseError::Lex(offset))?;
        tokens.push(Lexed {
            token,
            text: lexer.slice(),
            offset,
        });
    }
    Ok(tokens)
}

/// Recursive-descent parser over the token list.
struct ConstraintParser<'a> {
    tokens: Vec<Lexed<'a>>,
    pos: usize,
}

impl<'a> ConstraintParser<'a> {
    fn peek(&self) -> Option<ConstraintToken> {
        self.tokens.get(self.pos).map(|t| t.token)
    }

    fn bump(&mut self) -> Option<&Lexed<'a>> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: ConstraintToken, expected: &'static str) -> Result<&'a str, ConstraintParseError> {
        match self.tokens.get(self.pos) {
            Some(t) if t.token == kind => {
                let text = t.text;
                self.pos += 1;
                Ok(text)
            }
            Some(t) => Err(ConstraintParseError::Expected {
                expected,
                offset: t.offset,
            }),
            None => Err(ConstraintParseError::UnexpectedEnd(expected)),
        }
    }

    fn parse(mut self) -> Result<Vec<RequiredAttribute>, ConstraintParseError> {
        let mut attributes = Vec::new();
        if self.tokens.is_empty() {
            return Ok(attributes);
        }
        loop {
            attributes.push(self.entry()?);
            match self.bump() {
                None => return Ok(attributes),
                Some(t) if t.token == ConstraintToken::Comma => continue,
                Some(t) => {
                    return Err(ConstraintParseError::Expected {
                        expected: "','",
                        offset: t.offset,
                    });
                }
            }
        }
    }

    fn entry(&mut self) -> Result<RequiredAttribute, ConstraintParseError> {
        if self.peek() != Some(ConstraintToken::LBracket) {
            let (name, name_comparison) = self.name()?;
            return Ok(RequiredAttribute {
                name,
                name_comparison,
                value: None,
                value_comparison: ValueComparison::None,
            });
        }

        self.pos += 1;
        let (name, name_comparison) = self.name()?;
        let value_comparison = match self.peek() {
            Some(ConstraintToken::Eq) => ValueComparison::FullMatch,
            Some(ConstraintToken::PrefixEq) => ValueComparison::PrefixMatch,
            Some(ConstraintToken::SuffixEq) => ValueComparison::SuffixMatch,
            _ => ValueComparison::None,
        };
        let value = if value_comparison == ValueComparison::None {
            None
        } else {
            self.pos += 1;
            Some(self.value()?)
        };
        self.expect(ConstraintToken::RBracket, "']'")?;

        Ok(RequiredAttribute {
            name,
            name_comparison,
            value,
            value_comparison,
        })
    }

    fn name(&mut self) -> Result<(SmolStr, NameComparison), ConstraintParseError> {
        let name = self.expect(ConstraintToken::Name, "attribute name")?;
        if self.peek() == Some(ConstraintToken::Star) {
            self.pos += 1;
            return Ok((SmolStr::new(name), NameComparison::PrefixMatch));
        }
        Ok((SmolStr::new(name), NameComparison::FullMatch))
    }

    fn value(&mut self) -> Result<SmolStr, ConstraintParseError> {
        match self.bump() {
            Some(t) if t.token == ConstraintToken::Name => Ok(SmolStr::new(t.text)),
            Some(t)
                if matches!(
                    t.token,
                    ConstraintToken::DoubleQuoted | ConstraintToken::SingleQuoted
                ) =>
            {
                Ok(SmolStr::new(&t.text[1..t.text.len() - 1]))
            }
            Some(t) => Err(ConstraintParseError::Expected {
                expected: "attribute value",
                offset: t.offset,
            }),
            None => Err(ConstraintParseError::UnexpectedEnd("attribute value")),
        }
    }
}

pub(crate) fn try_parse_required_attributes(
    input: &str,
) -> Result<Vec<RequiredAttribute>, ConstraintParseError> {
    let tokens = tokenize(input)?;
    ConstraintParser { tokens, pos: 0 }.parse()
}

/// Parse a constraint string into required-attribute predicates.
///
/// Malformed strings produce an empty list.
pub fn parse_required_attributes(input: &str) -> Vec<RequiredAttribute> {
    match try_parse_required_attributes(input) {
        Ok(attributes) => attributes,
        Err(error) => {
            tracing::debug!("[REQUIRED_ATTRS] ignoring malformed constraint {:?}: {}", input, error);
            Vec::new()
        }
    }
}
