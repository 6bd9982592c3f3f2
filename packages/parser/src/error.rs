//! Error types for the style parser

use std::ops::Range;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse error carrying the offending source text and its byte span
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected token at {span:?}: expected {expected}, found {found}")]
    UnexpectedToken {
        span: Range<usize>,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of input at {pos}: expected {expected}")]
    UnexpectedEof { pos: usize, expected: String },

    #[error("Unterminated block at {span:?}: '{snippet}'")]
    UnterminatedBlock { span: Range<usize>, snippet: String },

    #[error("Unrecognized unit '{unit}' in '{snippet}' at {span:?}")]
    UnknownUnit {
        span: Range<usize>,
        unit: String,
        snippet: String,
    },

    #[error("Invalid syntax at {span:?}: {message} ('{snippet}')")]
    InvalidSyntax {
        span: Range<usize>,
        message: String,
        snippet: String,
    },

    #[error("Unrecognized input '{snippet}' at {span:?}")]
    LexError { span: Range<usize>, snippet: String },
}

impl ParseError {
    pub fn unexpected_token(
        span: Range<usize>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedToken {
            span,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unexpected_eof(pos: usize, expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            pos,
            expected: expected.into(),
        }
    }

    pub fn unterminated_block(span: Range<usize>, snippet: impl Into<String>) -> Self {
        Self::UnterminatedBlock {
            span,
            snippet: snippet.into(),
        }
    }

    pub fn unknown_unit(
        span: Range<usize>,
        unit: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self::UnknownUnit {
            span,
            unit: unit.into(),
            snippet: snippet.into(),
        }
    }

    pub fn invalid_syntax(
        span: Range<usize>,
        message: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self::InvalidSyntax {
            span,
            message: message.into(),
            snippet: snippet.into(),
        }
    }

    pub fn lex_error(span: Range<usize>, snippet: impl Into<String>) -> Self {
        Self::LexError {
            span,
            snippet: snippet.into(),
        }
    }

    /// Byte range of the offending input
    pub fn span(&self) -> Range<usize> {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnterminatedBlock { span, .. }
            | ParseError::UnknownUnit { span, .. }
            | ParseError::InvalidSyntax { span, .. }
            | ParseError::LexError { span, .. } => span.clone(),
            ParseError::UnexpectedEof { pos, .. } => *pos..*pos,
        }
    }

    /// Byte offset where the problem starts
    pub fn offset(&self) -> usize {
        self.span().start
    }

    /// The offending substring, as far as it could be isolated
    pub fn snippet(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { found, .. } => found,
            ParseError::UnexpectedEof { .. } => "",
            ParseError::UnterminatedBlock { snippet, .. }
            | ParseError::UnknownUnit { snippet, .. }
            | ParseError::InvalidSyntax { snippet, .. }
            | ParseError::LexError { snippet, .. } => snippet,
        }
    }

    /// Short label for diagnostics
    pub fn label(&self) -> String {
        match self {
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEof { expected, .. } => format!("expected {}", expected),
            ParseError::UnterminatedBlock { .. } => "block is never closed".to_string(),
            ParseError::UnknownUnit { unit, .. } => format!("unit '{}' is not recognized", unit),
            ParseError::InvalidSyntax { message, .. } => message.clone(),
            ParseError::LexError { .. } => "unrecognized input".to_string(),
        }
    }
}

/// Pretty-print an error with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_error(source: &str, filename: &str, error: &ParseError) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let mut span = error.span();
    if span.is_empty() {
        span = span.start.saturating_sub(1)..span.start.max(1).min(source.len());
    }

    let mut output = Vec::new();
    let written = Report::build(ReportKind::Error, filename, span.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span))
                .with_color(Color::Red)
                .with_message(error.label()),
        )
        .finish()
        .write((filename, Source::from(source)), &mut output);

    match written {
        Ok(()) => String::from_utf8(output).unwrap_or_else(|_| error.to_string()),
        Err(_) => error.to_string(),
    }
}
