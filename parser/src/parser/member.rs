//! Class body parsing: properties, methods and the members kept as text.

use super::Parser;
use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use maker_core::TypeRef;

/// Modifiers collected in front of a member.
#[derive(Default)]
struct Modifiers {
    attributes: Vec<String>,
    visibility: Option<Visibility>,
    is_static: bool,
    readonly: bool,
    is_abstract: bool,
    is_final: bool,
}

impl<'a> Parser<'a> {
    /// Parse members up to and including the class's closing brace.
    ///
    /// Returns the members, the offset where the trailing text starts and the
    /// offset of the closing brace.
    pub(crate) fn parse_members(
        &mut self,
        body_start: usize,
    ) -> ParseResult<(Vec<ClassMember>, usize, usize)> {
        let mut members = Vec::new();
        let mut prev_end = body_start;

        loop {
            let idx = self.peek_index();
            let token = self.tokens[idx].clone();
            match token.kind {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok((members, prev_end, token.span.start));
                }
                TokenKind::Eof => return Err(ParseError::unexpected_eof(token.span, "}")),
                _ => {}
            }

            let doc_idx = self
                .doc_before(idx)
                .filter(|d| self.tokens[*d].span.start >= prev_end);
            let start = doc_idx
                .map(|d| self.tokens[d].span.start)
                .unwrap_or(token.span.start);
            let doc = doc_idx.map(|d| DocComment::parse(self.tokens[d].text(self.src)));

            let (kind, end) = self.parse_member(doc)?;
            let trailing_end = self.trailing_comment_end(end);
            members.push(ClassMember {
                leading: Some(self.text(prev_end, start).to_string()),
                source: Some(self.text(start, end).to_string()),
                trailing: (trailing_end > end).then(|| self.text(end, trailing_end).to_string()),
                kind,
            });
            prev_end = trailing_end;
        }
    }

    /// A comment on the same line as the member's end belongs to it.
    fn trailing_comment_end(&mut self, end: usize) -> usize {
        let mut idx = self.pos;
        if self.tokens[idx].kind == TokenKind::Whitespace
            && !self.tokens[idx].text(self.src).contains('\n')
        {
            idx += 1;
        }
        let token = &self.tokens[idx];
        if token.kind == TokenKind::Comment && !token.text(self.src).contains('\n') {
            self.pos = idx + 1;
            token.span.end
        } else {
            end
        }
    }

    fn parse_member(&mut self, doc: Option<DocComment>) -> ParseResult<(MemberKind, usize)> {
        let mods = self.parse_modifiers()?;

        if self.check_word("function") {
            return self.parse_method(doc, mods);
        }

        let opaque = if self.check_word("const") {
            Some(OpaqueKind::Constant)
        } else if self.check_word("case") {
            Some(OpaqueKind::EnumCase)
        } else if self.check_word("use") {
            Some(OpaqueKind::TraitUse)
        } else {
            None
        };

        match opaque {
            Some(OpaqueKind::TraitUse) => {
                let end = self.skip_trait_use()?;
                Ok((opaque_member(OpaqueKind::TraitUse, Vec::new()), end))
            }
            Some(kind) => {
                let end = self.skip_statement()?;
                Ok((opaque_member(kind, Vec::new()), end))
            }
            None => self.parse_property(doc, mods),
        }
    }

    fn parse_modifiers(&mut self) -> ParseResult<Modifiers> {
        let mut mods = Modifiers::default();
        loop {
            if self.check(&TokenKind::AttributeOpen) {
                let open = self.peek().span.start;
                let close = self.skip_balanced()?.span.end;
                mods.attributes.push(self.text(open, close).to_string());
                continue;
            }
            let TokenKind::Name(word) = self.peek().kind.clone() else {
                return Ok(mods);
            };
            if let Some(visibility) = Visibility::from_keyword(&word) {
                mods.visibility = Some(visibility);
            } else if word.eq_ignore_ascii_case("static") {
                mods.is_static = true;
            } else if word.eq_ignore_ascii_case("readonly") {
                mods.readonly = true;
            } else if word.eq_ignore_ascii_case("abstract") {
                mods.is_abstract = true;
            } else if word.eq_ignore_ascii_case("final") {
                mods.is_final = true;
            } else {
                return Ok(mods);
            }
            self.advance();
        }
    }

    /// `use A, B;` or `use A { ... }` inside a class body.
    fn skip_trait_use(&mut self) -> ParseResult<usize> {
        self.advance();
        loop {
            match self.peek().kind {
                TokenKind::Semicolon => return Ok(self.advance().span.end),
                TokenKind::LBrace => return Ok(self.skip_balanced()?.span.end),
                TokenKind::Eof => return Err(self.unexpected(";")),
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Type tokens in front of a variable, as source text.
    fn parse_type(&mut self) -> Option<String> {
        let start = self.peek().span.start;
        let mut end = None;
        let mut parens = 0usize;
        loop {
            let kind = self.peek().kind.clone();
            let part_of_type = match kind {
                TokenKind::Question | TokenKind::Pipe | TokenKind::Name(_) => true,
                TokenKind::LParen => true,
                TokenKind::RParen => parens > 0,
                TokenKind::Amp => !matches!(
                    self.peek_second().kind,
                    TokenKind::Variable(_) | TokenKind::Ellipsis
                ),
                _ => false,
            };
            if !part_of_type {
                break;
            }
            match kind {
                TokenKind::LParen => parens += 1,
                TokenKind::RParen => parens -= 1,
                _ => {}
            }
            end = Some(self.advance().span.end);
        }
        end.map(|end| self.text(start, end).to_string())
    }

    fn parse_property(
        &mut self,
        doc: Option<DocComment>,
        mods: Modifiers,
    ) -> ParseResult<(MemberKind, usize)> {
        let type_hint = self.parse_type();
        let mut names = vec![self.expect_variable()?];
        let mut default = self.parse_default()?;

        // Property hooks: keep the whole declaration as text.
        if self.check(&TokenKind::LBrace) {
            let end = self.skip_balanced()?.span.end;
            return Ok((opaque_member(OpaqueKind::PropertyGroup, names), end));
        }

        while self.check(&TokenKind::Comma) {
            self.advance();
            names.push(self.expect_variable()?);
            default = self.parse_default()?;
        }
        let end = self.expect(&TokenKind::Semicolon)?.span.end;

        if names.len() > 1 {
            return Ok((opaque_member(OpaqueKind::PropertyGroup, names), end));
        }

        let property = PropertyModel {
            name: names.remove(0),
            visibility: mods.visibility,
            is_static: mods.is_static,
            readonly: mods.readonly,
            declared_type: type_hint.as_deref().map(TypeRef::parse),
            default: default.map(DefaultValue::Raw),
            attributes: mods.attributes,
            doc,
            existing: true,
        };
        Ok((MemberKind::Property(property), end))
    }

    /// `= expr` up to `,` `;` or `)`, as source text.
    fn parse_default(&mut self) -> ParseResult<Option<String>> {
        if !self.check(&TokenKind::Eq) {
            return Ok(None);
        }
        self.advance();
        let (start, end) = self.skip_expression(&[
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::RParen,
            TokenKind::LBrace,
        ])?;
        Ok(Some(self.text(start, end).to_string()))
    }

    fn parse_method(
        &mut self,
        doc: Option<DocComment>,
        mods: Modifiers,
    ) -> ParseResult<(MemberKind, usize)> {
        self.advance();
        let by_ref_return = if self.check(&TokenKind::Amp) {
            self.advance();
            true
        } else {
            false
        };
        let name = self.expect_name()?;
        let open = self.expect(&TokenKind::LParen)?.span.end;
        let (params, close) = self.parse_params()?;
        let param_source = self.param_source(open, close, params.len());

        let return_type = if self.check(&TokenKind::Colon) {
            self.advance();
            let (start, end) = self.skip_expression(&[TokenKind::LBrace, TokenKind::Semicolon])?;
            Some(self.text(start, end).to_string())
        } else {
            None
        };

        let (body, end) = if self.check(&TokenKind::LBrace) {
            let open = self.peek().span.end;
            let close = self.skip_balanced()?.span;
            let text = self.text(open, close.start).to_string();
            (
                MethodBody::Verbatim {
                    text,
                    appended: Vec::new(),
                },
                close.end,
            )
        } else {
            (MethodBody::Abstract, self.expect(&TokenKind::Semicolon)?.span.end)
        };

        let fluent = return_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("self") || t.eq_ignore_ascii_case("static"));

        let method = MethodModel {
            name,
            visibility: mods.visibility,
            is_static: mods.is_static,
            is_abstract: mods.is_abstract,
            is_final: mods.is_final,
            by_ref_return,
            params,
            return_type,
            body,
            doc,
            attributes: mods.attributes,
            fluent,
            param_source: Some(param_source),
        };
        Ok((MemberKind::Method(method), end))
    }

    /// Parameters after `(` through the closing `)`, plus the index of the
    /// `)` token.
    fn parse_params(&mut self) -> ParseResult<(Vec<Parameter>, usize)> {
        let mut params = Vec::new();
        loop {
            if self.check(&TokenKind::RParen) {
                let close = self.peek_index();
                self.advance();
                return Ok((params, close));
            }

            let mods = self.parse_modifiers()?;
            let type_hint = self.parse_type();
            let by_ref = self.check(&TokenKind::Amp);
            if by_ref {
                self.advance();
            }
            let variadic = self.check(&TokenKind::Ellipsis);
            if variadic {
                self.advance();
            }
            let name = self.expect_variable()?;
            let default = self.parse_default()?;

            params.push(Parameter {
                name,
                type_hint,
                default,
                promotion: mods.visibility,
                readonly: mods.readonly,
                by_ref,
                variadic,
                attributes: mods.attributes,
            });

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else if !self.check(&TokenKind::RParen) {
                return Err(self.unexpected(")"));
            }
        }
    }
}

impl<'a> Parser<'a> {
    /// Slice the parameter list between byte offset `open` and the `)` token.
    fn param_source(&self, open: usize, close: usize, count: usize) -> ParamSource {
        let close_start = self.tokens[close].span.start;
        let last = (0..close)
            .rev()
            .find(|&idx| !self.tokens[idx].kind.is_trivia())
            .map(|idx| &self.tokens[idx]);
        let insert_at = match last {
            Some(token) if count > 0 => token.span.end - open,
            _ => 0,
        };
        ParamSource {
            text: self.text(open, close_start).to_string(),
            insert_at,
            count,
            trailing_comma: count > 0 && last.is_some_and(|t| t.kind == TokenKind::Comma),
        }
    }
}

fn opaque_member(kind: OpaqueKind, declared_properties: Vec<String>) -> MemberKind {
    MemberKind::Opaque(OpaqueMember {
        kind,
        declared_properties,
    })
}
