//! Class model types.
//!
//! A `ClassModel` is an editable view of one PHP class file. Structured
//! members carry what the manipulator needs to reason about; every byte the
//! parser did not model lives in the layout strings and in each member's
//! verbatim `source`, so an untouched model prints back byte-for-byte.

use maker_core::{short_name, Literal, TypeRef};

/// PHP's constructor method name.
pub const CONSTRUCTOR: &str = "__construct";

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

// ==================== CLASS ====================

/// One class being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassModel {
    pub namespace: Option<String>,
    pub name: String,
    pub doc_comment: Option<DocComment>,
    pub imports: Vec<UseImport>,
    /// Set once an import was added; the printer then rewrites the use block.
    pub imports_changed: bool,
    pub members: Vec<ClassMember>,
    pub layout: ClassLayout,
}

/// Verbatim text surrounding the structured parts of a class file.
///
/// The file is the concatenation of `prologue`, the use block, `interlude`,
/// `header`, the members (each with its leading text), `trailing` and
/// `closing`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassLayout {
    /// Everything before the use block (open tag, file comment, namespace).
    pub prologue: String,
    /// The original use statements, from the first `use` to the last `;`.
    pub use_block: Option<String>,
    /// False when something other than use statements sits inside `use_block`.
    pub use_block_contiguous: bool,
    /// Text between the use block and the class header.
    pub interlude: String,
    /// Class doc comment, attributes, modifiers and declaration up to `{`.
    pub header: String,
    /// Text between the last member and the closing brace.
    pub trailing: String,
    /// The closing brace and everything after it.
    pub closing: String,
}

impl ClassModel {
    /// An empty class, as the skeleton template would produce it.
    pub fn skeleton(fqcn: &str) -> Self {
        let fqcn = maker_core::normalize_fqcn(fqcn);
        let name = short_name(&fqcn).to_string();
        let namespace = fqcn
            .rsplit_once('\\')
            .map(|(ns, _)| ns.to_string())
            .filter(|ns| !ns.is_empty());

        let prologue = match &namespace {
            Some(ns) => format!("<?php\n\nnamespace {};\n", ns),
            None => "<?php\n".to_string(),
        };

        Self {
            namespace,
            name: name.clone(),
            doc_comment: None,
            imports: Vec::new(),
            imports_changed: false,
            members: Vec::new(),
            layout: ClassLayout {
                prologue,
                use_block: None,
                use_block_contiguous: true,
                interlude: "\n".to_string(),
                header: format!("class {}\n{{", name),
                trailing: "\n".to_string(),
                closing: "}\n".to_string(),
            },
        }
    }

    /// Fully-qualified class name.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}\\{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    /// All structured properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyModel> {
        self.members.iter().filter_map(|m| match &m.kind {
            MemberKind::Property(p) => Some(p),
            _ => None,
        })
    }

    /// All methods (constructor included) in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodModel> {
        self.members.iter().filter_map(|m| match &m.kind {
            MemberKind::Method(method) => Some(method),
            _ => None,
        })
    }

    /// Get a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties().find(|p| p.name == name)
    }

    /// Get a method by name (PHP method names are case-insensitive).
    pub fn method(&self, name: &str) -> Option<&MethodModel> {
        self.methods().find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// Get the constructor, if the class declares one.
    pub fn constructor(&self) -> Option<&MethodModel> {
        self.method(CONSTRUCTOR)
    }

    /// Index of the member holding the named property.
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|m| matches!(&m.kind, MemberKind::Property(p) if p.name == name))
    }

    /// Index of the named method.
    pub fn method_index(&self, name: &str) -> Option<usize> {
        self.members.iter().position(
            |m| matches!(&m.kind, MemberKind::Method(method) if method.name.eq_ignore_ascii_case(name)),
        )
    }

    /// Every property name the class declares: plain properties, names in
    /// grouped declarations and promoted constructor parameters.
    pub fn declared_property_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for member in &self.members {
            match &member.kind {
                MemberKind::Property(p) => names.push(p.name.as_str()),
                MemberKind::Opaque(o) => {
                    names.extend(o.declared_properties.iter().map(String::as_str))
                }
                MemberKind::Method(m) if m.is_constructor() => names.extend(
                    m.params
                        .iter()
                        .filter(|p| p.promotion.is_some())
                        .map(|p| p.name.as_str()),
                ),
                MemberKind::Method(_) => {}
            }
        }
        names
    }
}

/// A member slot in the class body.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMember {
    /// Whitespace and comments between the previous member and this one.
    /// `None` for members created in this run.
    pub leading: Option<String>,
    /// Verbatim member text. `None` once the member was created or edited,
    /// which tells the printer to synthesize it.
    pub source: Option<String>,
    /// A comment on the member's last line, with the blanks before it.
    /// Printed after the member whether or not it was edited.
    pub trailing: Option<String>,
    pub kind: MemberKind,
}

impl ClassMember {
    /// A member created in this run.
    pub fn synthesized(kind: MemberKind) -> Self {
        Self {
            leading: None,
            source: None,
            trailing: None,
            kind,
        }
    }

    /// Drop the verbatim text so the member is printed from its model.
    pub fn touch(&mut self) {
        self.source = None;
    }

    pub fn is_new(&self) -> bool {
        self.leading.is_none()
    }

    pub fn is_property(&self) -> bool {
        matches!(self.kind, MemberKind::Property(_))
            || matches!(&self.kind, MemberKind::Opaque(o) if !o.declared_properties.is_empty())
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method(_))
    }
}

/// What a member slot holds.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberKind {
    Property(PropertyModel),
    Method(MethodModel),
    Opaque(OpaqueMember),
}

// ==================== IMPORTS ====================

/// Kind of a `use` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UseKind {
    Class,
    Function,
    Const,
}

impl UseKind {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            UseKind::Class => None,
            UseKind::Function => Some("function"),
            UseKind::Const => Some("const"),
        }
    }
}

/// One imported symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct UseImport {
    /// Fully-qualified name without leading separator.
    pub name: String,
    pub alias: Option<String>,
    pub kind: UseKind,
    /// Present in the source before this run.
    pub existing: bool,
}

impl UseImport {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: maker_core::normalize_fqcn(&name.into()),
            alias: None,
            kind: UseKind::Class,
            existing: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_kind(mut self, kind: UseKind) -> Self {
        self.kind = kind;
        self
    }

    /// The name this import binds in the file.
    pub fn short_alias(&self) -> &str {
        self.alias.as_deref().unwrap_or_else(|| short_name(&self.name))
    }

    /// True if both name the same symbol, ignoring case and leading separator.
    pub fn same_symbol(&self, fqcn: &str) -> bool {
        self.name
            .eq_ignore_ascii_case(&maker_core::normalize_fqcn(fqcn))
    }
}

// ==================== DOC COMMENTS ====================

/// A `/** ... */` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocComment {
    /// Content lines without the `/**`, `*` and `*/` decoration.
    pub lines: Vec<String>,
    /// Original text, kept until the lines are edited.
    pub raw: Option<String>,
}

impl DocComment {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines, raw: None }
    }

    /// Split a doc comment into content lines.
    pub fn parse(raw: &str) -> Self {
        let inner = raw
            .trim()
            .trim_start_matches("/**")
            .trim_end_matches("*/");

        let mut lines: Vec<String> = inner
            .lines()
            .map(|line| {
                let line = line.trim();
                let line = line.strip_prefix('*').unwrap_or(line);
                line.strip_prefix(' ').unwrap_or(line).trim_end().to_string()
            })
            .collect();

        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        Self {
            lines,
            raw: Some(raw.to_string()),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.raw = None;
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.raw.is_none()
    }

    /// True if some line starts with the given tag or annotation (`@var`, `@Assert\NotNull`).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.lines.iter().any(|l| {
            l.strip_prefix(tag)
                .is_some_and(|rest| rest.is_empty() || !rest.starts_with(|c: char| c.is_alphanumeric()))
        })
    }
}

// ==================== PROPERTIES ====================

/// Member visibility keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// Legacy `var` declaration (public).
    Var,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::Var => "var",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "protected" => Some(Visibility::Protected),
            "private" => Some(Visibility::Private),
            "var" => Some(Visibility::Var),
            _ => None,
        }
    }
}

/// Default value of a property or parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Expression text exactly as found in the source.
    Raw(String),
    Literal(Literal),
}

/// A single-name property declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyModel {
    pub name: String,
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub readonly: bool,
    pub declared_type: Option<TypeRef>,
    pub default: Option<DefaultValue>,
    /// `#[...]` attribute groups, verbatim.
    pub attributes: Vec<String>,
    pub doc: Option<DocComment>,
    /// Present in the source before this run.
    pub existing: bool,
}

impl PropertyModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Some(Visibility::Private),
            is_static: false,
            readonly: false,
            declared_type: None,
            default: None,
            attributes: Vec::new(),
            doc: None,
            existing: false,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn with_type(mut self, ty: Option<TypeRef>) -> Self {
        self.declared_type = ty;
        self
    }

    pub fn with_default(mut self, default: Option<DefaultValue>) -> Self {
        self.default = default;
        self
    }

    /// Doc comment, created on first use.
    pub fn doc_mut(&mut self) -> &mut DocComment {
        self.doc.get_or_insert_with(DocComment::default)
    }
}

/// Members the parser keeps as text: constants, trait uses, grouped
/// property declarations, enum cases.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueMember {
    pub kind: OpaqueKind,
    /// Property names declared by a grouped declaration (`private $a, $b;`).
    pub declared_properties: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpaqueKind {
    Constant,
    TraitUse,
    PropertyGroup,
    EnumCase,
}

// ==================== METHODS ====================

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_hint: Option<String>,
    /// Default expression text.
    pub default: Option<String>,
    /// Constructor property promotion (`private string $name`).
    pub promotion: Option<Visibility>,
    pub readonly: bool,
    pub by_ref: bool,
    pub variadic: bool,
    pub attributes: Vec<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_hint: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_hint,
            default: None,
            promotion: None,
            readonly: false,
            by_ref: false,
            variadic: false,
            attributes: Vec::new(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Text between a method's parentheses. Parameters pushed onto the model
/// after parsing are spliced in after the last one written here.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSource {
    pub text: String,
    /// Offset in `text` just past the last parameter, or its trailing comma.
    pub insert_at: usize,
    /// Number of parameters `text` declares.
    pub count: usize,
    pub trailing_comma: bool,
}

/// Method body.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodBody {
    /// Abstract or interface-style method ending in `;`.
    Abstract,
    /// Text between the braces as found in the source, plus statements
    /// appended in this run.
    Verbatim { text: String, appended: Vec<String> },
    /// Statements generated in this run, one per line, unindented.
    /// Empty strings are blank lines.
    Generated(Vec<String>),
}

/// A method, the constructor included.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodModel {
    pub name: String,
    pub visibility: Option<Visibility>,
    pub is_static: bool,
    pub is_abstract: bool,
    pub is_final: bool,
    pub by_ref_return: bool,
    pub params: Vec<Parameter>,
    pub return_type: Option<String>,
    pub body: MethodBody,
    pub doc: Option<DocComment>,
    pub attributes: Vec<String>,
    /// Setter-style method returning its own instance.
    pub fluent: bool,
    /// The parameter list as written, for methods read from source.
    pub param_source: Option<ParamSource>,
}

impl MethodModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Some(Visibility::Public),
            is_static: false,
            is_abstract: false,
            is_final: false,
            by_ref_return: false,
            params: Vec::new(),
            return_type: None,
            body: MethodBody::Generated(Vec::new()),
            doc: None,
            attributes: Vec::new(),
            fluent: false,
            param_source: None,
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn body(mut self, lines: Vec<String>) -> Self {
        self.body = MethodBody::Generated(lines);
        self
    }

    pub fn fluent(mut self, fluent: bool) -> Self {
        self.fluent = fluent;
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.name.eq_ignore_ascii_case(CONSTRUCTOR)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name == name)
    }

    /// The full body text, generated and appended statements included,
    /// as it would be printed between the braces.
    pub fn body_text(&self) -> String {
        match &self.body {
            MethodBody::Abstract => String::new(),
            MethodBody::Verbatim { text, appended } => {
                let mut out = text.clone();
                for stmt in appended {
                    out.push('\n');
                    out.push_str(stmt);
                }
                out
            }
            MethodBody::Generated(lines) => lines.join("\n"),
        }
    }

    /// Append one statement to the end of the body.
    pub fn append_statement(&mut self, stmt: impl Into<String>) {
        let stmt = stmt.into();
        match &mut self.body {
            MethodBody::Abstract => self.body = MethodBody::Generated(vec![stmt]),
            MethodBody::Verbatim { appended, .. } => appended.push(stmt),
            MethodBody::Generated(lines) => lines.push(stmt),
        }
    }
}
