//! Lexer (tokenizer) for PHP source text.
//!
//! The lexer keeps every byte: whitespace and comments become trivia tokens
//! so the parser can slice verbatim text between any two tokens.

use crate::{ParseError, ParseResult, Span};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Trivia
    Whitespace,
    Comment,
    DocComment,
    /// Text outside `<?php ... ?>`.
    InlineHtml,

    // Tags
    OpenTag,
    CloseTag,

    // Words and literals
    /// Identifier, keyword or (qualified) name. Keywords are not reserved here.
    Name(String),
    /// `$name`, without the dollar sign.
    Variable(String),
    /// Quoted string, heredoc or nowdoc.
    String,
    Number,

    // Symbols
    AttributeOpen, // #[
    LParen,        // (
    RParen,        // )
    LBrace,        // {
    RBrace,        // }
    LBracket,      // [
    RBracket,      // ]
    Comma,         // ,
    Semicolon,     // ;
    Colon,         // :
    DoubleColon,   // ::
    Question,      // ?
    Pipe,          // |
    Amp,           // &
    Ellipsis,      // ...
    Eq,            // =
    Arrow,         // ->
    /// Any other operator (`=>`, `===`, `.`, `??`, ...).
    Operator(String),

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::DocComment => "doc comment",
            TokenKind::InlineHtml => "inline html",
            TokenKind::OpenTag => "<?php",
            TokenKind::CloseTag => "?>",
            TokenKind::Name(_) => "name",
            TokenKind::Variable(_) => "variable",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::AttributeOpen => "#[",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Question => "?",
            TokenKind::Pipe => "|",
            TokenKind::Amp => "&",
            TokenKind::Ellipsis => "...",
            TokenKind::Eq => "=",
            TokenKind::Arrow => "->",
            TokenKind::Operator(_) => "operator",
            TokenKind::Eof => "end of input",
        }
    }

    /// Returns true for tokens that carry no syntax (whitespace, comments).
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Returns true if this is a name equal to `word`, ignoring ASCII case.
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, TokenKind::Name(name) if name.eq_ignore_ascii_case(word))
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }

    /// The token's source text.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}

/// Operators recognised as a unit, longest first.
const OPERATORS: [&str; 24] = [
    "<=>", "===", "!==", "**=", "...", "??=", "?->", "<<=", ">>=", "==", "!=", "<>", "<=", ">=",
    "=>", "->", "::", "??", "++", "--", "&&", "||", ".=", "+=",
];

/// Lexer state.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    in_php: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            src: input,
            pos: 0,
            line: 1,
            column: 1,
            in_php: false,
        }
    }

    /// Tokenize all input into a vector of tokens.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn current_span(&self) -> Span {
        Span::new(self.pos, self.pos, self.line, self.column)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advance over `n` characters.
    fn bump(&mut self, n: usize) {
        for _ in 0..n {
            self.next_char();
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        if self.pos >= self.src.len() {
            return Ok(Token::eof(self.pos, self.line, self.column));
        }

        if !self.in_php {
            let kind = self.scan_inline_html();
            return Ok(Token::new(kind, self.span_from(start, start_line, start_col)));
        }

        let Some(c) = self.peek_char() else {
            return Ok(Token::eof(self.pos, self.line, self.column));
        };

        let kind = match c {
            c if c.is_whitespace() => {
                while self.peek_char().is_some_and(char::is_whitespace) {
                    self.next_char();
                }
                TokenKind::Whitespace
            }
            '?' if self.rest().starts_with("?>") => {
                self.bump(2);
                self.in_php = false;
                TokenKind::CloseTag
            }
            '#' if self.peek_nth(1) == Some('[') => {
                self.bump(2);
                TokenKind::AttributeOpen
            }
            '#' => self.scan_line_comment(),
            '/' if self.peek_nth(1) == Some('/') => self.scan_line_comment(),
            '/' if self.peek_nth(1) == Some('*') => {
                self.scan_block_comment(start, start_line, start_col)?
            }
            '\'' | '"' | '`' => self.scan_quoted(c, start, start_line, start_col)?,
            '<' if self.rest().starts_with("<<<") => {
                self.scan_heredoc(start, start_line, start_col)?
            }
            '$' if self.peek_nth(1).is_some_and(is_ident_start) => {
                self.next_char();
                let name = self.scan_while(is_ident_char);
                TokenKind::Variable(name.to_string())
            }
            '\\' | '_' | 'a'..='z' | 'A'..='Z' => self.scan_name(),
            c if !c.is_ascii() && is_ident_start(c) => self.scan_name(),
            '0'..='9' => {
                self.scan_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
                TokenKind::Number
            }
            '.' if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_while(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
                TokenKind::Number
            }
            _ => self.scan_symbol(),
        };

        Ok(Token::new(kind, self.span_from(start, start_line, start_col)))
    }

    fn scan_inline_html(&mut self) -> TokenKind {
        if let Some(tag_len) = open_tag_len(self.rest()) {
            self.bump(tag_len);
            self.in_php = true;
            return TokenKind::OpenTag;
        }
        let rest = self.rest();
        let html_len = rest
            .find("<?php")
            .or_else(|| rest.find("<?="))
            .unwrap_or(rest.len());
        for _ in rest[..html_len].chars() {
            self.next_char();
        }
        TokenKind::InlineHtml
    }

    fn scan_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek_char().is_some_and(&pred) {
            self.next_char();
        }
        &self.src[start..self.pos]
    }

    fn scan_name(&mut self) -> TokenKind {
        let name = self.scan_while(|c| c == '\\' || is_ident_char(c));
        TokenKind::Name(name.to_string())
    }

    fn scan_line_comment(&mut self) -> TokenKind {
        while let Some(c) = self.peek_char() {
            if c == '\n' || self.rest().starts_with("?>") {
                break;
            }
            self.next_char();
        }
        TokenKind::Comment
    }

    fn scan_block_comment(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        let is_doc = self.rest().starts_with("/**") && !self.rest().starts_with("/**/");
        self.bump(2);
        loop {
            if self.rest().starts_with("*/") {
                self.bump(2);
                break;
            }
            if self.next_char().is_none() {
                return Err(ParseError::new(
                    "unterminated comment",
                    self.span_from(start, start_line, start_col),
                ));
            }
        }
        Ok(if is_doc {
            TokenKind::DocComment
        } else {
            TokenKind::Comment
        })
    }

    fn scan_quoted(
        &mut self,
        quote: char,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        self.next_char();
        loop {
            match self.next_char() {
                None => {
                    return Err(ParseError::new(
                        "unterminated string literal",
                        self.span_from(start, start_line, start_col),
                    ));
                }
                Some('\\') => {
                    if self.next_char().is_none() {
                        return Err(ParseError::new(
                            "unterminated escape sequence",
                            self.current_span(),
                        ));
                    }
                }
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }
        Ok(TokenKind::String)
    }

    fn scan_heredoc(
        &mut self,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        self.bump(3);
        self.scan_while(|c| c == ' ' || c == '\t');
        let quoted = matches!(self.peek_char(), Some('\'') | Some('"'));
        if quoted {
            self.next_char();
        }
        let label = self.scan_while(is_ident_char).to_string();
        if label.is_empty() {
            // `<<<` without a label is not a heredoc; treat `<<` as an operator.
            return Ok(TokenKind::Operator("<<<".to_string()));
        }
        if quoted {
            self.next_char();
        }

        // Skip to the end of the opening line, then look for the closing label
        // at the start of a line (indentation allowed).
        self.scan_while(|c| c != '\n');
        loop {
            if self.next_char().is_none() {
                return Err(ParseError::new(
                    format!("unterminated heredoc `{}`", label),
                    self.span_from(start, start_line, start_col),
                ));
            }
            let line = self.rest();
            let trimmed = line.trim_start_matches([' ', '\t']);
            if let Some(after) = trimmed.strip_prefix(label.as_str()) {
                if !after.chars().next().is_some_and(is_ident_char) {
                    let indent = line.len() - trimmed.len();
                    self.bump(indent + label.chars().count());
                    return Ok(TokenKind::String);
                }
            }
            self.scan_while(|c| c != '\n');
        }
    }

    fn scan_symbol(&mut self) -> TokenKind {
        for op in OPERATORS {
            if self.rest().starts_with(op) {
                self.bump(op.len());
                return match op {
                    "..." => TokenKind::Ellipsis,
                    "->" => TokenKind::Arrow,
                    "::" => TokenKind::DoubleColon,
                    _ => TokenKind::Operator(op.to_string()),
                };
            }
        }

        let Some(c) = self.next_char() else {
            return TokenKind::Eof;
        };
        match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '?' => TokenKind::Question,
            '|' => TokenKind::Pipe,
            '&' => TokenKind::Amp,
            '=' => TokenKind::Eq,
            other => TokenKind::Operator(other.to_string()),
        }
    }
}

fn open_tag_len(rest: &str) -> Option<usize> {
    if rest.get(..5).is_some_and(|tag| tag.eq_ignore_ascii_case("<?php")) {
        Some(5)
    } else if rest.starts_with("<?=") {
        Some(3)
    } else {
        None
    }
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic() || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric() || (!c.is_ascii() && !c.is_whitespace())
}
