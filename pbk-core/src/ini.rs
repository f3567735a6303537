//! Tolerant sectioned key-value parsing for phonebook dialects.
//!
//! Real phonebook files are not clean INI: keys repeat, section headers
//! repeat, and stray lines appear between entries. Parsing is therefore
//! infallible; anything the grammar does not recognize is skipped.

/// One `[Name]` section and its key-value entries, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct IniSection {
    /// Section label, without brackets, trimmed.
    pub name: String,
    /// Entries in encounter order; duplicates are kept.
    pub entries: Vec<(String, String)>,
}

impl IniSection {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Case-insensitive lookup. The last occurrence of a duplicated key wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Lookup with a fallback for absent keys.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }
}

/// A parsed sectioned key-value document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniDocument {
    /// Sections in encounter order.
    pub sections: Vec<IniSection>,
}

impl IniDocument {
    /// Return the section with the given name, if present.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name == name)
    }
}

/// Parse loosely INI-formatted text.
///
/// - `[Name]` headers open sections; `Key=Value` lines populate them.
/// - Blank lines, comments (`;` or `#`), and lines without `=` are skipped.
/// - Keys and values are trimmed.
/// - A repeated section header merges into the first occurrence.
/// - Key-value lines before any header are dropped; callers wanting to keep
///   header-less leading content prepend a synthetic header first.
pub fn parse_ini(text: &str) -> IniDocument {
    let mut doc = IniDocument::default();
    let mut current: Option<usize> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            let name = line[1..line.len() - 1].trim();
            current = Some(match doc.sections.iter().position(|s| s.name == name) {
                Some(index) => index,
                None => {
                    doc.sections.push(IniSection::new(name));
                    doc.sections.len() - 1
                }
            });
        } else if let Some(split) = line.find('=') {
            let key = line[..split].trim();
            if key.is_empty() {
                continue;
            }
            let value = line[split + 1..].trim();
            if let Some(index) = current {
                doc.sections[index]
                    .entries
                    .push((key.to_string(), value.to_string()));
            }
        }
    }

    doc
}
