//! Parser for PHP class source text.
//!
//! This module is organized into submodules by parsing category:
//! - `file`: file-level structure (open tag, namespace, use imports, class header)
//! - `member`: class body members (properties, methods, constants, trait uses)
//!
//! The parser never evaluates anything. It records byte offsets of the parts
//! it understands and slices everything else out of the source verbatim.

mod file;
mod member;

use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

// ==================== PARSER STATE ====================

/// Parser state.
pub struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser from source text.
    pub fn new(input: &'a str) -> ParseResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self {
            src: input,
            tokens,
            pos: 0,
        })
    }
}

// ==================== TOKEN HELPERS ====================

impl<'a> Parser<'a> {
    /// Index of the next non-trivia token at or after `from`.
    fn significant_from(&self, from: usize) -> usize {
        let mut idx = from;
        while idx < self.tokens.len() - 1 && self.tokens[idx].kind.is_trivia() {
            idx += 1;
        }
        idx.min(self.tokens.len() - 1)
    }

    pub(crate) fn peek_index(&self) -> usize {
        self.significant_from(self.pos)
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.peek_index()]
    }

    /// The significant token after the next one.
    pub(crate) fn peek_second(&self) -> &Token {
        let first = self.peek_index();
        &self.tokens[self.significant_from(first + 1)]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let idx = self.peek_index();
        let token = self.tokens[idx].clone();
        if idx < self.tokens.len() - 1 {
            self.pos = idx + 1;
        } else {
            self.pos = idx;
        }
        token
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub(crate) fn check_word(&self, word: &str) -> bool {
        self.peek().kind.is_word(word)
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    pub(crate) fn expect_name(&mut self) -> ParseResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Name(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("name")),
        }
    }

    pub(crate) fn expect_variable(&mut self) -> ParseResult<String> {
        match self.peek().kind.clone() {
            TokenKind::Variable(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("variable")),
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => ParseError::unexpected_eof(token.span, expected),
            _ => ParseError::unexpected_token(token.span, expected, token.text(self.src)),
        }
    }

    /// Source text between two byte offsets.
    pub(crate) fn text(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Doc comment directly above token `idx` (only whitespace in between).
    pub(crate) fn doc_before(&self, idx: usize) -> Option<usize> {
        let mut j = idx;
        while j > 0 {
            j -= 1;
            match self.tokens[j].kind {
                TokenKind::Whitespace => continue,
                TokenKind::DocComment => return Some(j),
                _ => return None,
            }
        }
        None
    }

    /// Consume a bracketed group starting at the next token (`(`, `[`, `{` or
    /// `#[`) up to its matching closer, which is returned.
    pub(crate) fn skip_balanced(&mut self) -> ParseResult<Token> {
        let open = self.advance();
        if !is_opener(&open.kind) {
            return Err(ParseError::unexpected_token(
                open.span,
                "opening bracket",
                open.text(self.src),
            ));
        }
        let mut depth = 1usize;
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::Eof => {
                    return Err(ParseError::unexpected_eof(token.span, "closing bracket"));
                }
                ref k if is_opener(k) => depth += 1,
                ref k if is_closer(k) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(token);
                    }
                }
                _ => {}
            }
        }
    }

    /// Consume an expression up to (not including) one of `stops` at bracket
    /// depth zero. Returns the byte range of the expression.
    pub(crate) fn skip_expression(&mut self, stops: &[TokenKind]) -> ParseResult<(usize, usize)> {
        let start = self.peek().span.start;
        let mut end = start;
        loop {
            let kind = self.peek().kind.clone();
            if stops
                .iter()
                .any(|s| std::mem::discriminant(s) == std::mem::discriminant(&kind))
            {
                return Ok((start, end));
            }
            if kind == TokenKind::Eof || is_closer(&kind) {
                return Err(self.unexpected("end of expression"));
            }
            end = if is_opener(&kind) {
                self.skip_balanced()?.span.end
            } else {
                self.advance().span.end
            };
        }
    }

    /// Consume a statement through its terminating `;`. Returns the end offset.
    pub(crate) fn skip_statement(&mut self) -> ParseResult<usize> {
        self.skip_expression(&[TokenKind::Semicolon])?;
        Ok(self.expect(&TokenKind::Semicolon)?.span.end)
    }

    /// Byte offset just past the line break following `pos`, if only blanks
    /// separate them; `pos` otherwise.
    pub(crate) fn line_end_after(&self, pos: usize) -> usize {
        let rest = &self.src[pos..];
        let blanks = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        let after = &rest[blanks..];
        if after.starts_with("\r\n") {
            pos + blanks + 2
        } else if after.starts_with('\n') {
            pos + blanks + 1
        } else {
            pos
        }
    }
}

fn is_opener(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::AttributeOpen
    )
}

fn is_closer(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
    )
}

// ==================== PUBLIC API ====================

/// Parse a PHP file holding exactly one top-level class.
pub fn parse(input: &str) -> ParseResult<ClassModel> {
    Parser::new(input)?.parse_class_file()
}

// ==================== TESTS ====================
