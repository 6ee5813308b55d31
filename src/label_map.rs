//! Lookup tables between ImageNet synset codes, class names and YOLO class indices.
//!
//! The devkit ships the class table as plain text, one `<code> <index> <name>` row
//! per line, e.g. `n02100735 5 English_setter`. Indices in the file start at 1 and
//! are shifted to start at 0 here, as YOLO expects.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::types::LabelEntry;

/// Immutable code/name/index lookup built once per run.
#[derive(Debug, Clone, Default)]
pub struct LabelMap {
    entries: Vec<LabelEntry>,
    code_to_idx: HashMap<String, usize>,
    code_to_class: HashMap<String, String>,
    class_to_idx: HashMap<String, usize>,
    class_to_code: HashMap<String, String>,
}

impl LabelMap {
    /// Build the lookups from `(code, 1-based index, class name)` rows.
    ///
    /// A code or class name that appears twice keeps its last row.
    pub fn from_entries<I, C, N>(rows: I) -> Self
    where
        I: IntoIterator<Item = (C, usize, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut map = LabelMap::default();
        for (code, idx, class_name) in rows {
            map.insert(LabelEntry {
                code: code.into(),
                index: idx.saturating_sub(1),
                class_name: class_name.into(),
            });
        }
        map
    }

    /// Read a devkit class table such as `map_det.txt` or `map_clsloc.txt`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        Self::parse(&content, path)
    }

    /// Parse the text of a class table. `source` is only used in error messages.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        let invalid = |line: usize, message: String| ConvertError::InvalidLabelMap {
            path: PathBuf::from(source),
            line,
            message,
        };

        let mut map = LabelMap::default();
        for (line_no, line) in content.lines().enumerate() {
            let line_no = line_no + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            let &[code, idx, class_name] = fields.as_slice() else {
                return Err(invalid(
                    line_no,
                    format!("expected 3 fields, found {}", fields.len()),
                ));
            };
            let idx: usize = match idx.parse() {
                Ok(idx) if idx >= 1 => idx,
                _ => {
                    return Err(invalid(
                        line_no,
                        format!("index must be a positive integer, got '{}'", idx),
                    ))
                }
            };
            map.insert(LabelEntry {
                code: code.to_string(),
                index: idx - 1,
                class_name: class_name.to_string(),
            });
        }
        Ok(map)
    }

    fn insert(&mut self, entry: LabelEntry) {
        self.code_to_idx.insert(entry.code.clone(), entry.index);
        self.code_to_class
            .insert(entry.code.clone(), entry.class_name.clone());
        self.class_to_idx
            .insert(entry.class_name.clone(), entry.index);
        self.class_to_code
            .insert(entry.class_name.clone(), entry.code.clone());
        self.entries.push(entry);
    }

    /// Resolve a label that is either a synset code or a class name.
    ///
    /// Codes are tried first, so a class name that happens to equal another
    /// class's code resolves to that code's index.
    pub fn resolve(&self, label: &str) -> Option<usize> {
        self.code_to_idx
            .get(label)
            .or_else(|| self.class_to_idx.get(label))
            .copied()
    }

    pub fn code_to_index(&self, code: &str) -> Option<usize> {
        self.code_to_idx.get(code).copied()
    }

    pub fn code_to_class(&self, code: &str) -> Option<&str> {
        self.code_to_class.get(code).map(String::as_str)
    }

    pub fn class_to_index(&self, class_name: &str) -> Option<usize> {
        self.class_to_idx.get(class_name).copied()
    }

    pub fn class_to_code(&self, class_name: &str) -> Option<&str> {
        self.class_to_code.get(class_name).map(String::as_str)
    }

    /// Rows in table order, duplicates included.
    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    /// Distinct codes in the order they first appear in the table.
    pub fn codes(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .map(|entry| entry.code.as_str())
            .filter(|code| seen.insert(*code))
            .collect()
    }

    /// `(index, class name)` pairs sorted by index, one per distinct class name.
    pub fn names_by_index(&self) -> Vec<(usize, &str)> {
        let mut names: Vec<_> = self
            .class_to_idx
            .iter()
            .map(|(name, idx)| (*idx, name.as_str()))
            .collect();
        names.sort();
        names
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.code_to_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_idx.is_empty()
    }
}
