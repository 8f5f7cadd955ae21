//! Data model for articles extracted from a feed.
//!
//! An [`Article`] is a fixed-shape record where every field is independently
//! optional. It lives only for the duration of one fetch/write pass; only its
//! textual projection ever reaches the disk.

/// One feed entry reduced to the three fields the reader keeps.
///
/// The accessors treat an empty string the same as a missing field, so an
/// entry with `<title></title>` is handled as untitled and an empty
/// description produces no output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    /// The entry title, used to name the output file.
    pub title: Option<String>,
    /// The entry description (RSS `<description>`, Atom `<summary>`).
    pub description: Option<String>,
    /// The body of the entry's first content block.
    pub content: Option<String>,
}

impl Article {
    /// Build an article from its three optional parts.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        content: Option<String>,
    ) -> Self {
        Self {
            title,
            description,
            content,
        }
    }

    /// The title, if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    /// The description, if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// The content, if present and non-empty.
    pub fn content(&self) -> Option<&str> {
        non_empty(&self.content)
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
