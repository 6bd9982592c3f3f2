use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{tokenize, Token};
use std::ops::Range;

/// Parser for style blocks: top-level `property: value;` declarations plus
/// `&:<pseudo> { ... }` blocks one level deep.
pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let tokens = tokenize(source)?;
        Ok(Self {
            source,
            tokens,
            pos: 0,
        })
    }

    /// Parse the whole block. Base declarations come first, followed by every
    /// nested block's declarations in source order.
    pub fn parse_style_block(&mut self) -> ParseResult<Vec<StyleDeclaration>> {
        let mut base = Vec::new();
        let mut nested = Vec::new();

        while !self.is_at_end() {
            match self.peek() {
                Some((Token::Ampersand, _)) => {
                    nested.extend(self.parse_nested_block()?);
                }
                Some((Token::Semicolon, _)) => {
                    self.advance();
                }
                _ => {
                    base.push(self.parse_declaration(None)?);
                }
            }
        }

        base.extend(nested);
        Ok(base)
    }

    /// Parse `&:<selector> { ... }`
    fn parse_nested_block(&mut self) -> ParseResult<Vec<StyleDeclaration>> {
        let amp_span = self.peek_span();
        self.expect(Token::Ampersand)?;

        // Selector text runs from just after '&' up to the opening brace
        loop {
            match self.peek() {
                Some((Token::LBrace, _)) => break,
                Some((Token::RBrace | Token::Semicolon | Token::Ampersand, span)) => {
                    let span = span.clone();
                    return Err(ParseError::unexpected_token(
                        span.clone(),
                        "'{' after selector",
                        &self.source[span],
                    ));
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    return Err(ParseError::unterminated_block(
                        amp_span.start..self.source.len(),
                        self.source[amp_span.start..].trim(),
                    ));
                }
            }
        }

        let brace_span = self.peek_span();
        let selector = self.source[amp_span.end..brace_span.start].trim();
        if !is_pseudo_selector(selector) {
            return Err(ParseError::invalid_syntax(
                amp_span.start..brace_span.end,
                "expected a pseudo-class selector after '&'",
                &self.source[amp_span.start..brace_span.end],
            ));
        }
        let state = selector.to_string();
        self.expect(Token::LBrace)?;

        let mut declarations = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(ParseError::unterminated_block(
                        amp_span.start..self.source.len(),
                        self.source[amp_span.start..].trim(),
                    ));
                }
                Some((Token::RBrace, _)) => {
                    self.advance();
                    break;
                }
                Some((Token::Semicolon, _)) => {
                    self.advance();
                }
                Some((Token::Ampersand, span)) => {
                    let span = span.clone();
                    return Err(ParseError::invalid_syntax(
                        span.clone(),
                        "nested blocks cannot contain further blocks",
                        &self.source[span],
                    ));
                }
                Some(_) => {
                    declarations.push(self.parse_declaration(Some(state.as_str()))?);
                }
            }
        }

        Ok(declarations)
    }

    /// Parse `property: value` with an optional trailing semicolon
    fn parse_declaration(&mut self, state: Option<&str>) -> ParseResult<StyleDeclaration> {
        let name_span = self.peek_span();
        let property = match self.peek() {
            Some((Token::Ident(name), _)) | Some((Token::CustomIdent(name), _)) => {
                camel_case_property(name)
            }
            _ => {
                return Err(ParseError::unexpected_token(
                    name_span.clone(),
                    "property name",
                    &self.source[name_span],
                ));
            }
        };
        self.advance();
        self.expect(Token::Colon)?;

        let value = self.parse_value(name_span.start)?;

        // Semicolon is optional before a closing brace or end of input
        if !self.match_token(Token::Semicolon)
            && !self.check(Token::RBrace)
            && !self.is_at_end()
        {
            let span = self.peek_span();
            return Err(ParseError::unexpected_token(
                span.clone(),
                "';'",
                &self.source[span],
            ));
        }

        Ok(StyleDeclaration {
            state: state.map(str::to_string),
            property,
            value,
        })
    }

    /// Collect value tokens up to `;`, `}` or end of input and type them
    fn parse_value(&mut self, declaration_start: usize) -> ParseResult<StyleValue> {
        let first = self.pos;
        let mut depth = 0usize;

        while let Some((token, span)) = self.peek() {
            match token {
                Token::Semicolon | Token::RBrace if depth == 0 => break,
                Token::LParen => depth += 1,
                Token::RParen => {
                    if depth == 0 {
                        let span = span.clone();
                        return Err(ParseError::invalid_syntax(
                            span.clone(),
                            "unbalanced ')'",
                            &self.source[span],
                        ));
                    }
                    depth -= 1;
                }
                Token::LBrace | Token::Ampersand | Token::RBrace => {
                    let span = span.clone();
                    return Err(ParseError::unexpected_token(
                        span.clone(),
                        "value",
                        &self.source[span],
                    ));
                }
                Token::Colon if depth == 0 => {
                    let span = declaration_start..span.end;
                    return Err(ParseError::invalid_syntax(
                        span.clone(),
                        "malformed declaration, missing ';'?",
                        &self.source[span],
                    ));
                }
                _ => {}
            }
            self.advance();
        }

        let tokens = &self.tokens[first..self.pos];
        let (Some((_, first_span)), Some((_, last_span))) = (tokens.first(), tokens.last()) else {
            let end = self.peek_span().start.max(declaration_start);
            return Err(ParseError::invalid_syntax(
                declaration_start..end,
                "declaration is missing a value",
                self.source[declaration_start..end].trim(),
            ));
        };

        let raw_span = first_span.start..last_span.end;
        if depth > 0 {
            return Err(ParseError::invalid_syntax(
                raw_span.clone(),
                "unclosed '('",
                &self.source[raw_span],
            ));
        }

        let keep_verbatim = tokens.iter().any(|(token, _)| {
            matches!(
                token,
                Token::String(_)
                    | Token::LParen
                    | Token::Comma
                    | Token::Slash
                    | Token::Delim(_)
            )
        });
        if keep_verbatim {
            return Ok(StyleValue::Unparsed {
                value: self.source[raw_span].to_string(),
            });
        }

        let mut values = tokens
            .iter()
            .map(|(token, span)| self.simple_value(token, span))
            .collect::<ParseResult<Vec<_>>>()?;

        if values.len() == 1 {
            Ok(values.remove(0))
        } else {
            Ok(StyleValue::Tuple { value: values })
        }
    }

    fn simple_value(&self, token: &Token<'src>, span: &Range<usize>) -> ParseResult<StyleValue> {
        let text = &self.source[span.clone()];
        match token {
            Token::Ident(keyword) | Token::CustomIdent(keyword) => {
                Ok(StyleValue::keyword(*keyword))
            }
            Token::Number(number) => Ok(StyleValue::unit(
                parse_number(number, span)?,
                Unit::Number,
            )),
            Token::Dimension(dimension) => {
                let split = dimension
                    .find(|c: char| c.is_ascii_alphabetic() || c == '%')
                    .unwrap_or(dimension.len());
                let (number, suffix) = dimension.split_at(split);
                let unit = suffix
                    .parse::<Unit>()
                    .map_err(|_| ParseError::unknown_unit(span.clone(), suffix, text))?;
                Ok(StyleValue::unit(parse_number(number, span)?, unit))
            }
            Token::Hash(hash) => parse_hex_color(hash).ok_or_else(|| {
                ParseError::invalid_syntax(span.clone(), "invalid hex color", text)
            }),
            _ => Err(ParseError::unexpected_token(span.clone(), "value", text)),
        }
    }

    // Helper methods

    fn peek(&self) -> Option<&(Token<'src>, Range<usize>)> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&(Token<'src>, Range<usize>)> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, token: Token) -> bool {
        if let Some((t, _)) = self.peek() {
            std::mem::discriminant(t) == std::mem::discriminant(&token)
        } else {
            false
        }
    }

    fn match_token(&mut self, token: Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token) -> ParseResult<()> {
        if self.check(token.clone()) {
            self.advance();
            return Ok(());
        }
        match self.peek() {
            Some((_, span)) => {
                let span = span.clone();
                Err(ParseError::unexpected_token(
                    span.clone(),
                    token.to_string(),
                    &self.source[span],
                ))
            }
            None => Err(ParseError::unexpected_eof(
                self.source.len(),
                token.to_string(),
            )),
        }
    }

    /// Get the span of the next token, or an empty span at end of input
    fn peek_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map(|(_, span)| span.clone())
            .unwrap_or_else(|| self.source.len()..self.source.len())
    }
}

fn is_pseudo_selector(selector: &str) -> bool {
    let name = selector.trim_start_matches(':');
    selector.starts_with(':')
        && selector.len() - name.len() <= 2
        && name.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn parse_number(number: &str, span: &Range<usize>) -> ParseResult<f64> {
    number
        .parse::<f64>()
        .map_err(|_| ParseError::invalid_syntax(span.clone(), "invalid number", number))
}

fn parse_hex_color(hash: &str) -> Option<StyleValue> {
    let hex = hash.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (r, g, b, a) = match hex.len() {
        3 => (digit(0)?, digit(1)?, digit(2)?, 255),
        4 => (digit(0)?, digit(1)?, digit(2)?, digit(3)?),
        6 => (pair(0)?, pair(2)?, pair(4)?, 255),
        8 => (pair(0)?, pair(2)?, pair(4)?, pair(6)?),
        _ => return None,
    };

    Some(StyleValue::Rgb {
        r,
        g,
        b,
        alpha: f64::from(a) / 255.0,
    })
}

/// Parse a style block into declarations
pub fn parse_style_block(source: &str) -> ParseResult<Vec<StyleDeclaration>> {
    let mut parser = Parser::new(source)?;
    parser.parse_style_block()
}
