
use crate::{
    descriptor::{AssociationTarget, Descriptor, Root},
    error::DeriveError,
    tag::Tag,
};
use std::collections::HashSet;

///
/// TraversalPolicy
///
/// Which declared associations the walker follows. `All` never
/// under-invalidates and is the default; `DeclaredIncludes` restores the
/// older allow-list behavior where a parent association's `includes` list
/// limits which of the child's associations are walked.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TraversalPolicy {
    #[default]
    All,
    DeclaredIncludes,
}

/// Derive the ordered, duplicate-free invalidation tags for a descriptor
/// tree. An absent root yields an empty sequence.
pub fn derive_tags(descriptor: &Descriptor) -> Result<Vec<Tag>, DeriveError> {
    derive_tags_with(descriptor, TraversalPolicy::All)
}

/// [`derive_tags`] with an explicit traversal policy.
pub fn derive_tags_with(
    descriptor: &Descriptor,
    policy: TraversalPolicy,
) -> Result<Vec<Tag>, DeriveError> {
    let mut tags = Vec::new();
    collect(descriptor, policy, None, &mut tags)?;

    Ok(dedup_first(tags))
}

/// The descriptor's own identity tag; `None` when the root is absent.
#[must_use]
pub fn self_tag(descriptor: &Descriptor) -> Option<Tag> {
    descriptor
        .root()
        .map(|root| format_self_tag(descriptor, root))
}

/// Recursive accumulation into one shared buffer. First-occurrence dedup is
/// idempotent and composes over concatenation, so deduplicating once at the
/// top is observably identical to deduplicating per recursion level.
fn collect(
    descriptor: &Descriptor,
    policy: TraversalPolicy,
    filter: Option<&[String]>,
    out: &mut Vec<Tag>,
) -> Result<(), DeriveError> {
    // An absent object cannot be invalidated: no tags, no recursion.
    let Some(root) = descriptor.root() else {
        return Ok(());
    };

    for association in descriptor.associations() {
        if let Some(keys) = filter
            && !keys.iter().any(|key| key == association.key())
        {
            continue;
        }

        let child_filter = match policy {
            TraversalPolicy::All => None,
            TraversalPolicy::DeclaredIncludes => association.includes(),
        };

        match association.target() {
            AssociationTarget::One(child) => collect(child, policy, child_filter, out)?,

            AssociationTarget::Many(children) => {
                for child in children {
                    collect(child, policy, child_filter, out)?;
                }
            }

            AssociationTarget::Virtual { value, tagger } => match tagger {
                Some(tagger) => out.extend(tagger.invoke(value)?),
                None => {
                    let name = strip_id_suffix(association.key()).ok_or_else(|| {
                        DeriveError::MissingTagRule {
                            key: association.key().to_string(),
                        }
                    })?;

                    // A virtual value has no serializer of its own, so it
                    // tags under the referencing descriptor's namespace.
                    for element in value.iter() {
                        out.push(Tag::from_parts(descriptor.namespace(), name, element));
                    }
                }
            },
        }
    }

    out.push(format_self_tag(descriptor, root));

    Ok(())
}

/// `namespace/type/id` for an identified entity; a plain scalar tags its
/// kind label and its own rendering.
fn format_self_tag(descriptor: &Descriptor, root: &Root) -> Tag {
    match root {
        Root::Entity { type_name, id } => Tag::from_parts(descriptor.namespace(), type_name, id),
        Root::Scalar(value) => Tag::from_parts(descriptor.namespace(), value.label(), value),
    }
}

/// `_ids` before `_id`; `None` means the key carries no recognized suffix.
fn strip_id_suffix(key: &str) -> Option<&str> {
    key.strip_suffix("_ids").or_else(|| key.strip_suffix("_id"))
}

fn dedup_first(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = HashSet::with_capacity(tags.len());

    tags.into_iter().filter(|tag| seen.insert(tag.clone())).collect()
}
