//! Typed placement specifications and their string form
//!
//! Grammar:
//!
//! ```text
//! placement := ["auto"] [axis ["-" alignment]]
//! axis      := "top" | "bottom" | "left" | "right" | "center"
//! alignment := "left" | "center" | "right"
//! ```
//!
//! A missing alignment means `center`; a bare `auto` desires `bottom`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::lexer::{describe, lex, Span, Token};
use crate::error::PlacementError;

const AXIS_TOKENS: &[&str] = &["'top'", "'bottom'", "'left'", "'right'", "'center'"];
const ALIGNMENT_TOKENS: &[&str] = &["'left'", "'center'", "'right'"];

/// Side of the anchor the panel is placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Axis {
    pub const ALL: [Axis; 5] = [Axis::Top, Axis::Bottom, Axis::Left, Axis::Right, Axis::Center];

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Top => "top",
            Axis::Bottom => "bottom",
            Axis::Left => "left",
            Axis::Right => "right",
            Axis::Center => "center",
        }
    }

    /// The side across the anchor; `center` is its own opposite
    pub fn opposite(&self) -> Axis {
        match self {
            Axis::Top => Axis::Bottom,
            Axis::Bottom => Axis::Top,
            Axis::Left => Axis::Right,
            Axis::Right => Axis::Left,
            Axis::Center => Axis::Center,
        }
    }

    /// Whether the panel sits beside the anchor rather than above, below or over it
    pub fn is_side(&self) -> bool {
        matches!(self, Axis::Left | Axis::Right)
    }

    fn from_token(token: &Token) -> Option<Axis> {
        match token {
            Token::Top => Some(Axis::Top),
            Token::Bottom => Some(Axis::Bottom),
            Token::Left => Some(Axis::Left),
            Token::Right => Some(Axis::Right),
            Token::Center => Some(Axis::Center),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lateral alignment of the panel along the anchor's edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    pub fn opposite(&self) -> Alignment {
        match self {
            Alignment::Left => Alignment::Right,
            Alignment::Center => Alignment::Center,
            Alignment::Right => Alignment::Left,
        }
    }

    fn from_token(token: &Token) -> Option<Alignment> {
        match token {
            Token::Left => Some(Alignment::Left),
            Token::Center => Some(Alignment::Center),
            Token::Right => Some(Alignment::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed placement request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementSpec {
    /// Let the resolver flip the axis on viewport overflow
    pub auto: bool,
    /// Desired axis
    pub axis: Axis,
    pub alignment: Alignment,
}

impl Default for PlacementSpec {
    fn default() -> Self {
        Self::new(Axis::Bottom, Alignment::Center)
    }
}

impl PlacementSpec {
    /// An explicit placement that is never flipped
    pub fn new(axis: Axis, alignment: Alignment) -> Self {
        Self {
            auto: false,
            axis,
            alignment,
        }
    }

    /// An auto placement that prefers `axis`
    pub fn auto(axis: Axis) -> Self {
        Self {
            auto: true,
            axis,
            alignment: Alignment::Center,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Parse a placement string such as `"bottom-left"` or `"auto top"`
    pub fn parse(input: &str) -> Result<Self, PlacementError> {
        Parser::new(input).parse()
    }
}

impl FromStr for PlacementSpec {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlacementSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.auto {
            write!(f, "auto ")?;
        }
        write!(f, "{}-{}", self.axis, self.alignment)
    }
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<(Result<Token, ()>, Span)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: lex(input).collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&(Result<Token, ()>, Span)> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<(Result<Token, ()>, Span)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn end_span(&self) -> Span {
        self.input.len()..self.input.len()
    }

    fn error(&self, span: Span, reason: impl Into<String>, expected: &[&str]) -> PlacementError {
        PlacementError::invalid(self.input, span, reason, expected)
    }

    fn unexpected(&self, item: &(Result<Token, ()>, Span), expected: &[&str]) -> PlacementError {
        let (token, span) = item;
        let found = match token {
            Ok(token) => describe(token),
            Err(()) => format!("character '{}'", &self.input[span.clone()]),
        };
        self.error(span.clone(), format!("unexpected {}", found), expected)
    }

    fn parse(mut self) -> Result<PlacementSpec, PlacementError> {
        let mut auto = false;
        if let Some((Ok(Token::Auto), _)) = self.peek() {
            auto = true;
            self.pos += 1;
        }

        let axis = match self.next() {
            None if auto => return Ok(PlacementSpec::auto(Axis::Bottom)),
            None => {
                return Err(self.error(self.end_span(), "empty placement", AXIS_TOKENS));
            }
            Some(item) => match &item.0 {
                Ok(token) => match Axis::from_token(token) {
                    Some(axis) => axis,
                    None => {
                        return Err(self.error(
                            item.1.clone(),
                            format!("unknown axis {}", describe(token)),
                            AXIS_TOKENS,
                        ))
                    }
                },
                Err(()) => return Err(self.unexpected(&item, AXIS_TOKENS)),
            },
        };

        let mut alignment = Alignment::Center;
        if let Some((Ok(Token::Dash), _)) = self.peek() {
            self.pos += 1;
            alignment = match self.next() {
                None => {
                    return Err(self.error(
                        self.end_span(),
                        "missing alignment after '-'",
                        ALIGNMENT_TOKENS,
                    ))
                }
                Some(item) => match &item.0 {
                    Ok(token) => match Alignment::from_token(token) {
                        Some(alignment) => alignment,
                        None => {
                            return Err(self.error(
                                item.1.clone(),
                                format!("unknown alignment {}", describe(token)),
                                ALIGNMENT_TOKENS,
                            ))
                        }
                    },
                    Err(()) => return Err(self.unexpected(&item, ALIGNMENT_TOKENS)),
                },
            };
        }

        if let Some(item) = self.next() {
            return Err(self.unexpected(&item, &["end of placement"]));
        }

        Ok(PlacementSpec {
            auto,
            axis,
            alignment,
        })
    }
}
