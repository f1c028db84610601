//! Literal formatting utilities.

use maker_core::Literal;

/// One indentation level.
pub const INDENT: &str = "    ";

/// Format a literal as a PHP expression.
pub fn php_literal(v: &Literal) -> String {
    match v {
        Literal::Null => "null".to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Int(i) => i.to_string(),
        Literal::Float(f) => format!("{:?}", f),
        Literal::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        Literal::List(items) => {
            let items: Vec<String> = items.iter().map(php_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Literal::Map(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("{} => {}", php_literal(&Literal::from(k.as_str())), php_literal(v)))
                .collect();
            format!("[{}]", entries.join(", "))
        }
    }
}

/// Format a literal as a Doctrine annotation value.
pub fn annotation_value(v: &Literal) -> String {
    match v {
        Literal::String(s) => format!("\"{}\"", s.replace('"', "\"\"")),
        Literal::List(items) => {
            let items: Vec<String> = items.iter().map(annotation_value).collect();
            format!("{{{}}}", items.join(", "))
        }
        Literal::Map(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(k, v)| format!("\"{}\" = {}", k.replace('"', "\"\""), annotation_value(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        scalar => php_literal(scalar),
    }
}

/// Render `@Name(key=value, ...)`. An empty key is a positional value.
pub fn annotation_line(name: &str, options: &[(String, Literal)]) -> String {
    let name = name.trim();
    let at = if name.starts_with('@') { "" } else { "@" };
    let options: Vec<String> = options
        .iter()
        .map(|(key, value)| {
            if key.is_empty() {
                annotation_value(value)
            } else {
                format!("{}={}", key, annotation_value(value))
            }
        })
        .collect();
    format!("{}{}({})", at, name, options.join(", "))
}
