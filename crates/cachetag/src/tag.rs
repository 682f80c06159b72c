use crate::value::Value;
use convert_case::{Case, Casing};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Segment separator within a tag.
pub const SEPARATOR: char = '/';

///
/// Namespace
///
/// The declaring context of a descriptor: which serializer produced it.
/// Normalized once at construction so repeated tag formatting stays cheap:
/// `::`-separated path pieces become snake_case joined with `/`, e.g.
/// `PostScope::CommentSerializer` → `post_scope/comment_serializer`.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(snake_path(path.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Namespace {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Namespace {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

///
/// Tag
///
/// An opaque cache-invalidation key: `namespace/name/identifier`. Built by
/// the formatting rules below or taken verbatim from a tagging function;
/// never parsed back.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    /// Verbatim tag, as returned by a caller-supplied tagging function.
    /// No formatting or normalization is applied.
    pub fn raw(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Format a three-segment tag. The name segment is snake-cased (with
    /// `::`-path handling), the identifier is rendered and lowercased.
    #[must_use]
    pub fn from_parts(namespace: &Namespace, name: &str, id: &Value) -> Self {
        let name = snake_path(name);
        let id = id.to_string().to_lowercase();

        Self(format!(
            "{namespace}{SEPARATOR}{name}{SEPARATOR}{id}"
        ))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

///
/// TagList
///
/// Coercion target for tagging-function returns: a single string and a
/// sequence of strings both convert into it.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TagList(Vec<Tag>);

impl TagList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Tag> {
        self.0
    }
}

impl From<Tag> for TagList {
    fn from(tag: Tag) -> Self {
        Self(vec![tag])
    }
}

impl From<&str> for TagList {
    fn from(tag: &str) -> Self {
        Self(vec![Tag::raw(tag)])
    }
}

impl From<String> for TagList {
    fn from(tag: String) -> Self {
        Self(vec![Tag::raw(tag)])
    }
}

impl From<Vec<Tag>> for TagList {
    fn from(tags: Vec<Tag>) -> Self {
        Self(tags)
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags.into_iter().map(Tag::raw).collect())
    }
}

impl From<Vec<&str>> for TagList {
    fn from(tags: Vec<&str>) -> Self {
        Self(tags.into_iter().map(Tag::raw).collect())
    }
}

impl FromIterator<Tag> for TagList {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TagList {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Snake-case every `::`-separated piece of a type path and rejoin with the
/// tag separator. Mirrors how serializer class names become tag prefixes.
fn snake_path(path: &str) -> String {
    path.split("::")
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_case(Case::Snake))
        .collect::<Vec<_>>()
        .join("/")
}
