//! Cache-invalidation tag derivation for resolved serialization trees.
//!
//! Given a [`descriptor::Descriptor`] — an object bound to its declaring
//! namespace plus its declared associations — [`walk::derive_tags`] walks the
//! tree and returns an ordered, duplicate-free list of [`tag::Tag`] strings a
//! cache layer can use as invalidation keys. Descriptors arrive fully
//! resolved; this crate fetches nothing and stores nothing.

pub mod descriptor;
pub mod error;
pub mod tag;
pub mod value;
pub mod walk;

///
/// Prelude
///
/// Domain vocabulary only; errors stay at their module paths.
///

pub mod prelude {
    pub use crate::{
        descriptor::{Association, Descriptor, Root, Tagger, VirtualValue},
        tag::{Namespace, Tag, TagList},
        value::Value,
        walk::{TraversalPolicy, derive_tags, derive_tags_with, self_tag},
    };
}
