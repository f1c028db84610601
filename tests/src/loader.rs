//! Loader for case files.
//!
//! A case file holds named PHP sources separated by section markers
//! (`--# section_name`). Lines before the first marker are comments.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{HarnessError, HarnessResult};

/// Directory holding the case files.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// A parsed case file.
#[derive(Debug, Clone)]
pub struct CaseFile {
    /// Name used in error messages.
    pub name: String,
    /// Section name to content.
    pub sections: HashMap<String, String>,
    /// Sections in order of appearance.
    pub section_order: Vec<String>,
}

impl CaseFile {
    /// Parse a case file from a string.
    ///
    /// Section content is kept byte for byte, except that blank lines in
    /// front of the next marker are dropped.
    pub fn parse(name: &str, source: &str) -> HarnessResult<Self> {
        let mut sections = HashMap::new();
        let mut section_order = Vec::new();
        let mut current: Option<String> = None;
        let mut content = String::new();

        for line in source.split_inclusive('\n') {
            if let Some(suffix) = line.trim_end().strip_prefix("--#") {
                if let Some(section) = current.take() {
                    sections.insert(section, finish(&content));
                }
                let section = suffix.trim().to_string();
                if section.is_empty() {
                    return Err(HarnessError::case_parse(name, "empty section name after --#"));
                }
                if section_order.contains(&section) {
                    return Err(HarnessError::case_parse(
                        name,
                        format!("duplicate section '{}'", section),
                    ));
                }
                section_order.push(section.clone());
                current = Some(section);
                content.clear();
            } else if current.is_some() {
                content.push_str(line);
            }
        }
        if let Some(section) = current {
            sections.insert(section, finish(&content));
        }

        Ok(Self {
            name: name.to_string(),
            sections,
            section_order,
        })
    }

    /// Load a case file from the fixtures directory.
    pub fn load(file: &str) -> HarnessResult<Self> {
        let path = fixtures_dir().join(file);
        let source = std::fs::read_to_string(&path).map_err(|e| HarnessError::file_read(&path, e))?;
        Self::parse(file, &source)
    }

    pub fn section(&self, name: &str) -> HarnessResult<&str> {
        self.sections
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| HarnessError::section_not_found(&self.name, name))
    }

    pub fn section_names(&self) -> &[String] {
        &self.section_order
    }
}

fn finish(content: &str) -> String {
    let trimmed = content.trim_end_matches(['\n', '\r']);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_keep_indentation() {
        let source = "-- header comment\n\n--# source\n<?php\nclass A\n{\n    private $a;\n}\n\n--# expected\n<?php\nclass A {}\n";

        let case = CaseFile::parse("inline", source).unwrap();

        assert_eq!(case.section_names(), ["source", "expected"]);
        assert_eq!(
            case.section("source").unwrap(),
            "<?php\nclass A\n{\n    private $a;\n}\n"
        );
        assert_eq!(case.section("expected").unwrap(), "<?php\nclass A {}\n");
    }

    #[test]
    fn test_missing_section() {
        let case = CaseFile::parse("inline", "--# source\n<?php\n").unwrap();
        let err = case.section("expected").unwrap_err();
        assert_eq!(err.to_string(), "section 'expected' not found in inline");
    }

    #[test]
    fn test_empty_and_duplicate_section_names() {
        assert!(CaseFile::parse("inline", "--#\n<?php\n").is_err());
        assert!(CaseFile::parse("inline", "--# a\n--# a\n").is_err());
    }
}
