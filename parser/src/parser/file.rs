//! File-level parsing: open tag, namespace, use imports and the class header.

use super::Parser;
use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::TokenKind;

/// Byte offsets of the class found while walking the file.
struct ClassParts {
    name: String,
    doc: Option<DocComment>,
    header_start: usize,
    header_end: usize,
    members: Vec<ClassMember>,
    trailing_start: usize,
    close_start: usize,
}

/// Where the use block sits.
struct UseBlock {
    start: usize,
    end: usize,
    contiguous: bool,
}

impl<'a> Parser<'a> {
    /// Parse the whole file into a class model.
    pub fn parse_class_file(&mut self) -> ParseResult<ClassModel> {
        let mut namespace: Option<String> = None;
        let mut imports = Vec::new();
        let mut uses: Option<UseBlock> = None;
        let mut insert_at = 0usize;
        let mut class: Option<ClassParts> = None;

        let mut depth = 0usize;
        let mut top_depth = 0usize;
        let mut decl_start: Option<usize> = None;
        let mut prev: Option<TokenKind> = None;

        loop {
            let idx = self.peek_index();
            let token = self.tokens[idx].clone();
            let at_top = depth == top_depth;

            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::OpenTag => {
                    self.advance();
                    if namespace.is_none() && insert_at == 0 {
                        insert_at = self.line_end_after(token.span.end);
                    }
                }
                TokenKind::LBrace => {
                    self.advance();
                    depth += 1;
                }
                TokenKind::RBrace => {
                    if depth == 0 {
                        return Err(ParseError::unexpected_token(token.span, "statement", "}"));
                    }
                    self.advance();
                    depth -= 1;
                    if depth < top_depth {
                        top_depth = depth;
                    }
                }
                TokenKind::Name(word)
                    if at_top
                        && word.eq_ignore_ascii_case("namespace")
                        && matches!(self.peek_second().kind, TokenKind::Name(_) | TokenKind::LBrace) =>
                {
                    self.advance();
                    if !self.check(&TokenKind::LBrace) {
                        namespace = Some(self.expect_name()?);
                    }
                    if self.check(&TokenKind::LBrace) {
                        let brace = self.advance();
                        depth += 1;
                        top_depth = depth;
                        insert_at = self.line_end_after(brace.span.end);
                    } else {
                        let semi = self.expect(&TokenKind::Semicolon)?;
                        insert_at = self.line_end_after(semi.span.end);
                    }
                    decl_start = None;
                }
                TokenKind::Name(word)
                    if at_top && class.is_none() && word.eq_ignore_ascii_case("use") =>
                {
                    let end = self.parse_use(&mut imports)?;
                    match &mut uses {
                        None => {
                            uses = Some(UseBlock {
                                start: token.span.start,
                                end,
                                contiguous: true,
                            })
                        }
                        Some(block) => {
                            if !self.text(block.end, token.span.start).trim().is_empty() {
                                block.contiguous = false;
                            }
                            block.end = end;
                        }
                    }
                    decl_start = None;
                }
                TokenKind::AttributeOpen if at_top => {
                    decl_start.get_or_insert(idx);
                    self.skip_balanced()?;
                }
                TokenKind::Name(word)
                    if at_top && is_class_modifier(word) && decl_start.is_none() =>
                {
                    decl_start = Some(idx);
                    self.advance();
                }
                TokenKind::Name(word) if at_top && is_class_modifier(word) => {
                    self.advance();
                }
                TokenKind::Name(word)
                    if at_top
                        && word.eq_ignore_ascii_case("class")
                        && !declares_nothing(prev.as_ref())
                        && matches!(self.peek_second().kind, TokenKind::Name(_)) =>
                {
                    if let Some(first) = &class {
                        let second = match &self.peek_second().kind {
                            TokenKind::Name(name) => name.clone(),
                            _ => String::new(),
                        };
                        return Err(ParseError::multiple_classes(token.span, &first.name, &second));
                    }
                    class = Some(self.parse_class(decl_start.unwrap_or(idx))?);
                    decl_start = None;
                    prev = Some(TokenKind::RBrace);
                    continue;
                }
                _ => {
                    self.advance();
                    decl_start = None;
                }
            }
            prev = Some(token.kind);
        }

        if depth != 0 {
            let eof = self.peek().span;
            return Err(ParseError::unexpected_eof(eof, "}"));
        }

        let parts = class.ok_or_else(|| ParseError::no_class(self.peek().span))?;
        Ok(self.assemble(namespace, imports, uses, insert_at, parts))
    }

    /// Parse `use ...;` and return the offset just past the `;`.
    fn parse_use(&mut self, imports: &mut Vec<UseImport>) -> ParseResult<usize> {
        self.advance();
        let kind = self.use_kind();

        loop {
            let name = self.expect_name()?;
            if self.check(&TokenKind::LBrace) {
                let prefix = name.trim_end_matches('\\').to_string();
                self.advance();
                while !self.check(&TokenKind::RBrace) {
                    let item_kind = match self.use_kind() {
                        UseKind::Class => kind,
                        other => other,
                    };
                    let item = self.expect_name()?;
                    let import = self
                        .use_alias(UseImport::class(format!("{}\\{}", prefix, item)))?
                        .with_kind(item_kind);
                    imports.push(import);
                    if self.check(&TokenKind::Comma) {
                        self.advance();
                    } else {
                        break;
                    }
                }
                self.expect(&TokenKind::RBrace)?;
            } else {
                let import = self.use_alias(UseImport::class(name))?.with_kind(kind);
                imports.push(import);
            }

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        Ok(self.expect(&TokenKind::Semicolon)?.span.end)
    }

    /// Optional `function` / `const` after `use`.
    fn use_kind(&mut self) -> UseKind {
        let second_is_name = matches!(self.peek_second().kind, TokenKind::Name(_));
        if second_is_name && self.check_word("function") {
            self.advance();
            UseKind::Function
        } else if second_is_name && self.check_word("const") {
            self.advance();
            UseKind::Const
        } else {
            UseKind::Class
        }
    }

    fn use_alias(&mut self, import: UseImport) -> ParseResult<UseImport> {
        let mut import = import;
        import.existing = true;
        if self.check_word("as") {
            self.advance();
            let alias = self.expect_name()?;
            import = import.with_alias(alias);
        }
        Ok(import)
    }

    /// Parse the class declaration starting at token `start_idx` through its
    /// closing brace.
    fn parse_class(&mut self, start_idx: usize) -> ParseResult<ClassParts> {
        let doc_idx = self.doc_before(start_idx);
        let header_start = doc_idx
            .map(|d| self.tokens[d].span.start)
            .unwrap_or(self.tokens[start_idx].span.start);
        let doc = doc_idx.map(|d| DocComment::parse(self.tokens[d].text(self.src)));

        self.advance();
        let name = self.expect_name()?;

        // extends / implements lists
        while !self.check(&TokenKind::LBrace) {
            if self.check(&TokenKind::Eof) {
                return Err(self.unexpected("{"));
            }
            self.advance();
        }
        let open = self.advance();
        let (members, trailing_start, close_start) = self.parse_members(open.span.end)?;

        Ok(ClassParts {
            name,
            doc,
            header_start,
            header_end: open.span.end,
            members,
            trailing_start,
            close_start,
        })
    }

    fn assemble(
        &self,
        namespace: Option<String>,
        imports: Vec<UseImport>,
        uses: Option<UseBlock>,
        insert_at: usize,
        parts: ClassParts,
    ) -> ClassModel {
        let (prologue, use_block, contiguous, interlude) = match uses {
            Some(block) => (
                self.text(0, block.start),
                Some(self.text(block.start, block.end).to_string()),
                block.contiguous,
                self.text(block.end, parts.header_start),
            ),
            None => {
                let insert = insert_at.min(parts.header_start);
                (
                    self.text(0, insert),
                    None,
                    true,
                    self.text(insert, parts.header_start),
                )
            }
        };

        ClassModel {
            namespace,
            name: parts.name,
            doc_comment: parts.doc,
            imports,
            imports_changed: false,
            members: parts.members,
            layout: ClassLayout {
                prologue: prologue.to_string(),
                use_block,
                use_block_contiguous: contiguous,
                interlude: interlude.to_string(),
                header: self.text(parts.header_start, parts.header_end).to_string(),
                trailing: self.text(parts.trailing_start, parts.close_start).to_string(),
                closing: self.text(parts.close_start, self.src.len()).to_string(),
            },
        }
    }
}

fn is_class_modifier(word: &str) -> bool {
    ["abstract", "final", "readonly"]
        .iter()
        .any(|m| word.eq_ignore_ascii_case(m))
}

/// `Foo::class`, `$x->class` and `new class` do not declare a class.
fn declares_nothing(prev: Option<&TokenKind>) -> bool {
    match prev {
        Some(TokenKind::DoubleColon) | Some(TokenKind::Arrow) => true,
        Some(TokenKind::Operator(op)) => op == "?->",
        Some(kind) => kind.is_word("new"),
        None => false,
    }
}
