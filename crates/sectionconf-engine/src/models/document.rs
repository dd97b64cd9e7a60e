use indexmap::IndexMap;

use super::{section::Section, value::Value};

/// The in-memory result of a parse: section name to [`Section`], in
/// insertion order.
///
/// Each parse produces an independently owned `Document`; edits made through
/// the mutation methods below stay local until a writer persists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Section that collects key-value lines appearing before any header.
    /// Header names are never empty, so it cannot clash with a real section.
    pub const IMPLICIT_SECTION: &'static str = "";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Returns the named section, creating an empty one at the end if absent.
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_owned()).or_default()
    }

    /// Replaces the named section with an empty one and returns it.
    ///
    /// An existing section keeps its position but loses its entries.
    pub fn reset_section(&mut self, name: &str) -> &mut Section {
        let section = self.ensure_section(name);
        *section = Section::new();
        section
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section)?.get(key)
    }

    pub fn get_mut(&mut self, section: &str, key: &str) -> Option<&mut Value> {
        self.section_mut(section)?.get_mut(key)
    }

    /// Stores a value, creating the section if needed. Returns the previous
    /// value under that key.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.ensure_section(section).insert(key, value)
    }

    /// Removes a key. The section stays even when it becomes empty.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<Value> {
        self.section_mut(section)?.remove(key)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Section)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Section)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().map(|(k, s)| (k.into(), s)).collect(),
        }
    }
}
