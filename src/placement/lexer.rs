//! Lexer for placement strings using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    #[token("auto")]
    Auto,

    // Axis and alignment keywords
    #[token("top")]
    Top,
    #[token("bottom")]
    Bottom,
    #[token("left")]
    Left,
    #[token("right")]
    Right,
    #[token("center")]
    Center,

    // Separator between axis and alignment
    #[token("-")]
    Dash,

    // Anything word-like that is not a keyword, kept for error messages
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

/// Lex a placement string into tokens with spans.
///
/// Characters no token matches come back as `Err` with their span, so the
/// parser can point at them.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

/// Human-readable form of a token for error messages
pub fn describe(token: &Token) -> String {
    match token {
        Token::Auto => "keyword 'auto'".to_string(),
        Token::Top => "'top'".to_string(),
        Token::Bottom => "'bottom'".to_string(),
        Token::Left => "'left'".to_string(),
        Token::Right => "'right'".to_string(),
        Token::Center => "'center'".to_string(),
        Token::Dash => "'-'".to_string(),
        Token::Word(w) => format!("word '{}'", w),
    }
}
