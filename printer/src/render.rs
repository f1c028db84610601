//! Class model to source text.
//!
//! Untouched pieces are copied verbatim. Members without verbatim source are
//! synthesized with four-space indentation and one blank line between them.

use crate::format::{php_literal, INDENT};
use maker_parser::{
    ClassMember, ClassModel, DefaultValue, DocComment, MemberKind, MethodBody, MethodModel,
    ParamSource, Parameter, PropertyModel, UseImport, Visibility,
};

/// Render a whole class file.
pub fn render(class: &ClassModel) -> String {
    let layout = &class.layout;
    let mut out = String::new();

    out.push_str(&layout.prologue);
    render_imports(class, &mut out);
    out.push_str(&layout.interlude);
    out.push_str(&layout.header);

    let mut after_new = false;
    let mut last_synthesized = false;
    for (i, member) in class.members.iter().enumerate() {
        match (&member.leading, &member.source) {
            (Some(leading), Some(source)) => {
                if after_new && leading.matches('\n').count() < 2 {
                    out.push('\n');
                }
                out.push_str(leading);
                out.push_str(source);
                out.push_str(member.trailing.as_deref().unwrap_or(""));
                after_new = false;
                last_synthesized = false;
            }
            (Some(leading), None) => {
                let leading = leading.trim_end_matches([' ', '\t']);
                out.push_str(leading);
                if !leading.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(&render_member(member));
                out.push_str(member.trailing.as_deref().unwrap_or(""));
                after_new = false;
                last_synthesized = true;
            }
            (None, _) => {
                out.push_str(if i == 0 { "\n" } else { "\n\n" });
                out.push_str(&render_member(member));
                after_new = true;
                last_synthesized = true;
            }
        }
    }

    if last_synthesized && !layout.trailing.contains('\n') {
        out.push('\n');
        out.push_str(layout.trailing.trim_start_matches([' ', '\t']));
    } else {
        out.push_str(&layout.trailing);
    }
    out.push_str(&layout.closing);
    out
}

// ==================== IMPORTS ====================

fn render_imports(class: &ClassModel, out: &mut String) {
    let layout = &class.layout;
    match &layout.use_block {
        Some(block) if !class.imports_changed => out.push_str(block),
        Some(_) if layout.use_block_contiguous => out.push_str(&import_lines(&class.imports)),
        Some(block) => {
            out.push_str(block);
            for import in class.imports.iter().filter(|i| !i.existing) {
                out.push('\n');
                out.push_str(&import_line(import));
            }
        }
        None if class.imports.is_empty() => {}
        None => {
            out.push('\n');
            out.push_str(&import_lines(&class.imports));
            out.push('\n');
        }
    }
}

/// Sorted, deduplicated use statements: classes, then functions, then constants.
fn import_lines(imports: &[UseImport]) -> String {
    let mut sorted: Vec<&UseImport> = imports.iter().collect();
    sorted.sort_by_key(|i| (i.kind, i.name.to_ascii_lowercase()));
    sorted.dedup_by(|a, b| a.kind == b.kind && a.name.eq_ignore_ascii_case(&b.name));

    let lines: Vec<String> = sorted.into_iter().map(import_line).collect();
    lines.join("\n")
}

fn import_line(import: &UseImport) -> String {
    let mut line = String::from("use ");
    if let Some(keyword) = import.kind.keyword() {
        line.push_str(keyword);
        line.push(' ');
    }
    line.push_str(&import.name);
    if let Some(alias) = &import.alias {
        line.push_str(" as ");
        line.push_str(alias);
    }
    line.push(';');
    line
}

// ==================== MEMBERS ====================

/// Synthesize one member, indented, without surrounding blank lines.
pub fn render_member(member: &ClassMember) -> String {
    match &member.kind {
        MemberKind::Property(property) => render_property(property),
        MemberKind::Method(method) => render_method(method),
        // Opaque members are never created, so they always carry source.
        MemberKind::Opaque(_) => member.source.clone().unwrap_or_default(),
    }
}

fn render_doc(doc: &Option<DocComment>, out: &mut String) {
    let Some(doc) = doc.as_ref().filter(|d| !d.is_empty()) else {
        return;
    };
    out.push_str(INDENT);
    match &doc.raw {
        Some(raw) => out.push_str(raw),
        None => {
            out.push_str("/**\n");
            for line in &doc.lines {
                if line.is_empty() {
                    out.push_str(INDENT);
                    out.push_str(" *\n");
                } else {
                    out.push_str(INDENT);
                    out.push_str(" * ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            out.push_str(INDENT);
            out.push_str(" */");
        }
    }
    out.push('\n');
}

fn render_attributes(attributes: &[String], out: &mut String) {
    for attribute in attributes {
        out.push_str(INDENT);
        out.push_str(attribute);
        out.push('\n');
    }
}

fn render_property(property: &PropertyModel) -> String {
    let mut out = String::new();
    render_doc(&property.doc, &mut out);
    render_attributes(&property.attributes, &mut out);

    out.push_str(INDENT);
    out.push_str(property.visibility.unwrap_or(Visibility::Public).keyword());
    if property.is_static {
        out.push_str(" static");
    }
    if property.readonly {
        out.push_str(" readonly");
    }
    if let Some(ty) = &property.declared_type {
        out.push(' ');
        out.push_str(&ty.hint());
    }
    out.push_str(" $");
    out.push_str(&property.name);
    if let Some(default) = &property.default {
        out.push_str(" = ");
        match default {
            DefaultValue::Raw(raw) => out.push_str(raw),
            DefaultValue::Literal(literal) => out.push_str(&php_literal(literal)),
        }
    }
    out.push(';');
    out
}

fn render_method(method: &MethodModel) -> String {
    let mut out = String::new();
    render_doc(&method.doc, &mut out);
    render_attributes(&method.attributes, &mut out);

    out.push_str(INDENT);
    if method.is_final {
        out.push_str("final ");
    }
    if method.is_abstract {
        out.push_str("abstract ");
    }
    if let Some(visibility) = method.visibility {
        out.push_str(visibility.keyword());
        out.push(' ');
    }
    if method.is_static {
        out.push_str("static ");
    }
    out.push_str("function ");
    if method.by_ref_return {
        out.push('&');
    }
    out.push_str(&method.name);

    out.push('(');
    out.push_str(&render_params(method));
    out.push(')');
    if let Some(ret) = &method.return_type {
        out.push_str(": ");
        out.push_str(ret);
    }

    match &method.body {
        MethodBody::Abstract => out.push(';'),
        MethodBody::Verbatim { text, appended } if appended.is_empty() => {
            out.push('\n');
            out.push_str(INDENT);
            out.push('{');
            out.push_str(text);
            out.push('}');
        }
        MethodBody::Verbatim { text, appended } => {
            out.push('\n');
            out.push_str(INDENT);
            out.push('{');
            out.push_str(text.trim_end());
            for stmt in appended {
                out.push('\n');
                out.push_str(INDENT);
                out.push_str(INDENT);
                out.push_str(stmt);
            }
            out.push('\n');
            out.push_str(INDENT);
            out.push('}');
        }
        MethodBody::Generated(lines) => {
            out.push('\n');
            out.push_str(INDENT);
            out.push_str("{\n");
            for line in lines {
                if !line.is_empty() {
                    out.push_str(INDENT);
                    out.push_str(INDENT);
                    out.push_str(line);
                }
                out.push('\n');
            }
            out.push_str(INDENT);
            out.push('}');
        }
    }
    out
}

fn render_params(method: &MethodModel) -> String {
    let Some(source) = &method.param_source else {
        let params: Vec<String> = method.params.iter().map(render_param).collect();
        return params.join(", ");
    };
    let added: Vec<String> = method
        .params
        .iter()
        .skip(source.count)
        .map(render_param)
        .collect();
    if added.is_empty() {
        source.text.clone()
    } else if source.count == 0 && source.text.trim().is_empty() {
        added.join(", ")
    } else {
        splice_params(source, &added)
    }
}

/// Insert parameters after the last written one. A multi-line list gets
/// one parameter per line at the indent of the last one.
fn splice_params(source: &ParamSource, added: &[String]) -> String {
    let text = source.text.as_str();
    let comma = if source.trailing_comma { "," } else { "" };

    if !text.contains('\n') {
        let (head, tail) = text.split_at(source.insert_at);
        let sep = match (source.count, source.trailing_comma) {
            (0, _) => "",
            (_, true) => " ",
            (_, false) => ", ",
        };
        return format!("{}{}{}{}{}", head, sep, added.join(", "), comma, tail);
    }

    let at = if source.count == 0 {
        text.trim_end().len()
    } else {
        source.insert_at
    };
    let line_end = text[at..].find('\n').map_or(at, |i| at + i);
    let indent = line_indent(text, at);

    let mut out = String::with_capacity(text.len() + added.len() * 32);
    out.push_str(&text[..at]);
    if source.count > 0 && !source.trailing_comma {
        out.push(',');
    }
    out.push_str(&text[at..line_end]);
    for (i, param) in added.iter().enumerate() {
        out.push('\n');
        out.push_str(indent);
        out.push_str(param);
        if source.trailing_comma || i + 1 < added.len() {
            out.push(',');
        }
    }
    out.push_str(&text[line_end..]);
    out
}

/// Leading blanks of the line holding byte `pos`.
fn line_indent(text: &str, pos: usize) -> &str {
    let start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line = &text[start..];
    &line[..line.len() - line.trim_start_matches([' ', '\t']).len()]
}

fn render_param(param: &Parameter) -> String {
    let mut parts: Vec<String> = param.attributes.clone();
    if let Some(promotion) = param.promotion {
        parts.push(promotion.keyword().to_string());
    }
    if param.readonly {
        parts.push("readonly".to_string());
    }
    if let Some(ty) = &param.type_hint {
        parts.push(ty.clone());
    }

    let mut name = String::new();
    if param.by_ref {
        name.push('&');
    }
    if param.variadic {
        name.push_str("...");
    }
    name.push('$');
    name.push_str(&param.name);
    if let Some(default) = &param.default {
        name.push_str(" = ");
        name.push_str(default);
    }
    parts.push(name);
    parts.join(" ")
}
