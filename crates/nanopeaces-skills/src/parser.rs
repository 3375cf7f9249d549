//! SKILL.md document model.
//!
//! A primary document may start with a metadata header delimited by `---`
//! marker lines, followed by the markdown body:
//!
//! ```text
//! ---
//! name: shadcn-ui
//! version: 1.0.0
//! description: Expert knowledge for shadcn/ui
//! tags: [ui, react]
//! ---
//!
//! # shadcn/ui Skill
//! ```
//!
//! The header is only recognized when the document begins with the marker
//! line and a closing marker line follows. Anything else is treated as a
//! header-less document and left untouched.

const OPENING_MARKER: &str = "---\n";
const CLOSING_MARKER: &str = "\n---\n";

/// A primary document split into its optional header and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDocument<'a> {
    /// The metadata header, if the document carries a well-formed one.
    pub header: Option<Frontmatter<'a>>,

    /// The document body. Trimmed when a header was removed, otherwise
    /// the full original document.
    pub body: &'a str,
}

impl<'a> SkillDocument<'a> {
    /// Parse a document. Never fails: malformed headers leave the whole
    /// document in `body`.
    pub fn parse(content: &'a str) -> Self {
        match split_metadata_header(content) {
            Some((raw, body)) => Self {
                header: Some(Frontmatter::parse(raw)),
                body: body.trim(),
            },
            None => Self {
                header: None,
                body: content,
            },
        }
    }
}

/// The key-value metadata header of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Header text between the marker lines.
    pub raw: &'a str,

    /// Top-level `key: value` pairs in document order. Nested blocks and
    /// list items are not expanded.
    pub fields: Vec<(&'a str, &'a str)>,
}

impl<'a> Frontmatter<'a> {
    fn parse(raw: &'a str) -> Self {
        let fields = raw
            .lines()
            .filter(|line| !line.starts_with([' ', '\t', '#', '-']))
            .filter_map(|line| {
                let (key, value) = line.split_once(':')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key, unquote(value.trim())))
            })
            .collect();

        Self { raw, fields }
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

/// Remove the metadata header from a document.
///
/// Returns the trimmed body when the document starts with a well-formed
/// header, otherwise returns the document unchanged.
pub fn strip_metadata_header(content: &str) -> &str {
    SkillDocument::parse(content).body
}

/// Split a document into `(header, rest)`.
///
/// The header spans from the opening marker to the first closing marker.
fn split_metadata_header(content: &str) -> Option<(&str, &str)> {
    let after_open = content.strip_prefix(OPENING_MARKER)?;
    let end = after_open.find(CLOSING_MARKER)?;
    Some((
        &after_open[..end],
        &after_open[end + CLOSING_MARKER.len()..],
    ))
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
