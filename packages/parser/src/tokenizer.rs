//! Lexer for style blocks using logos

use crate::error::{ParseError, ParseResult};
use logos::Logos;
use std::fmt;

/// Token types for the style block dialect
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum Token<'src> {
    // Custom properties keep their leading dashes (--brand-color)
    #[regex(r"--[a-zA-Z0-9_-]+", |lex| lex.slice())]
    CustomIdent(&'src str),

    // Identifiers (including vendor prefixes like -webkit-box-shadow)
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice())]
    Ident(&'src str),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice())]
    #[regex(r"'([^'\\]|\\.)*'", |lex| lex.slice())]
    String(&'src str),

    #[regex(r"[-+]?([0-9]+(\.[0-9]+)?|\.[0-9]+)", |lex| lex.slice())]
    Number(&'src str),

    // Any alphabetic suffix lexes as a dimension; the parser validates the unit
    #[regex(r"[-+]?([0-9]+(\.[0-9]+)?|\.[0-9]+)([a-zA-Z]+|%)", |lex| lex.slice())]
    Dimension(&'src str),

    #[regex(r"#[0-9a-zA-Z]+", |lex| lex.slice())]
    Hash(&'src str),

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("/")]
    Slash,

    #[token("&")]
    Ampersand,

    // Remaining punctuation inside values and selectors (url(a.png), calc(a - b), :not(.x))
    #[regex(r"[.\-+*!<>=?~|^$@]", |lex| lex.slice())]
    Delim(&'src str),
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::CustomIdent(s) => write!(f, "custom property '{}'", s),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::String(s) => write!(f, "string {}", s),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Dimension(d) => write!(f, "dimension {}", d),
            Token::Hash(h) => write!(f, "hash {}", h),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::Colon => write!(f, "':'"),
            Token::Semicolon => write!(f, "';'"),
            Token::Comma => write!(f, "','"),
            Token::Slash => write!(f, "'/'"),
            Token::Ampersand => write!(f, "'&'"),
            Token::Delim(d) => write!(f, "'{}'", d),
        }
    }
}

/// Tokenize a style block. Unrecognized characters are reported instead of
/// being dropped, so a typo never silently changes the declarations.
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token<'_>, std::ops::Range<usize>)>> {
    let lexer = Token::lexer(source);
    lexer
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, span)),
            Err(()) => Err(ParseError::lex_error(span.clone(), &source[span])),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token<'_>> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_declaration() {
        assert_eq!(
            kinds("font-size: 10px;"),
            vec![
                Token::Ident("font-size"),
                Token::Colon,
                Token::Dimension("10px"),
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_numbers_and_dimensions() {
        assert_eq!(
            kinds("0 -1.5em .5rem 100% 3"),
            vec![
                Token::Number("0"),
                Token::Dimension("-1.5em"),
                Token::Dimension(".5rem"),
                Token::Dimension("100%"),
                Token::Number("3"),
            ]
        );
    }

    #[test]
    fn test_custom_property_and_vendor_prefix() {
        assert_eq!(
            kinds("--brand -webkit-appearance"),
            vec![
                Token::CustomIdent("--brand"),
                Token::Ident("-webkit-appearance"),
            ]
        );
    }

    #[test]
    fn test_nested_block_tokens() {
        let tokens = kinds("&:hover { color: blue }");
        assert_eq!(tokens[0], Token::Ampersand);
        assert_eq!(tokens[1], Token::Colon);
        assert_eq!(tokens[2], Token::Ident("hover"));
        assert_eq!(tokens[3], Token::LBrace);
        assert_eq!(tokens.last(), Some(&Token::RBrace));
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("/* brand */ color /* inline */ : red"),
            vec![Token::Ident("color"), Token::Colon, Token::Ident("red")]
        );
    }

    #[test]
    fn test_delimiters_inside_functions() {
        assert_eq!(
            kinds("calc(100% - 10px) url(a.png)"),
            vec![
                Token::Ident("calc"),
                Token::LParen,
                Token::Dimension("100%"),
                Token::Delim("-"),
                Token::Dimension("10px"),
                Token::RParen,
                Token::Ident("url"),
                Token::LParen,
                Token::Ident("a"),
                Token::Delim("."),
                Token::Ident("png"),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        let err = tokenize("color: red \\").unwrap_err();
        assert_eq!(err.span(), 11..12);
        assert_eq!(err.snippet(), "\\");
    }
}
