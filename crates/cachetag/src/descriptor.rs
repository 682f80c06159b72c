use crate::{
    error::TaggerError,
    tag::{Namespace, TagList},
    value::Value,
};
use std::fmt;

///
/// Root
///
/// The wrapped object at the head of a descriptor. `Entity` carries the
/// runtime type path and identifier of an identified object; `Scalar`
/// supports tagging a plain value with no identity attribute of its own.
///

#[derive(Clone, Debug)]
pub enum Root {
    Entity { type_name: String, id: Value },
    Scalar(Value),
}

impl Root {
    pub fn entity(type_name: impl Into<String>, id: impl Into<Value>) -> Self {
        Self::Entity {
            type_name: type_name.into(),
            id: id.into(),
        }
    }

    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }
}

///
/// Descriptor
///
/// Read-only view binding a root value to its declaring namespace and its
/// declared associations, fully resolved before the walker sees it.
/// Association order is declaration order and is semantically significant.
///

#[derive(Debug)]
pub struct Descriptor {
    namespace: Namespace,
    root: Option<Root>,
    associations: Vec<Association>,
}

impl Descriptor {
    pub fn new(namespace: impl Into<Namespace>, root: Root) -> Self {
        Self {
            namespace: namespace.into(),
            root: Some(root),
            associations: Vec::new(),
        }
    }

    /// A descriptor over an absent object. Contributes no tags at all, not
    /// even a self-tag.
    pub fn absent(namespace: impl Into<Namespace>) -> Self {
        Self {
            namespace: namespace.into(),
            root: None,
            associations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_association(mut self, association: Association) -> Self {
        self.associations.push(association);
        self
    }

    #[must_use]
    pub const fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    #[must_use]
    pub const fn root(&self) -> Option<&Root> {
        self.root.as_ref()
    }

    #[must_use]
    pub fn associations(&self) -> &[Association] {
        &self.associations
    }
}

///
/// Association
///
/// One declared relationship. The kind is decided once, here, and never
/// re-inspected mid-traversal.
///

#[derive(Debug)]
pub struct Association {
    key: String,
    target: AssociationTarget,
    includes: Option<Vec<String>>,
}

impl Association {
    /// Singular nested object.
    pub fn one(key: impl Into<String>, descriptor: Descriptor) -> Self {
        Self {
            key: key.into(),
            target: AssociationTarget::One(descriptor),
            includes: None,
        }
    }

    /// Ordered collection of nested objects.
    pub fn many(key: impl Into<String>, descriptors: Vec<Descriptor>) -> Self {
        Self {
            key: key.into(),
            target: AssociationTarget::Many(descriptors),
            includes: None,
        }
    }

    /// Virtual value with default naming: the key must carry an `_id`/`_ids`
    /// suffix or derivation fails.
    pub fn virtual_value(key: impl Into<String>, value: impl Into<VirtualValue>) -> Self {
        Self {
            key: key.into(),
            target: AssociationTarget::Virtual {
                value: value.into(),
                tagger: None,
            },
            includes: None,
        }
    }

    /// Virtual value whose tags come entirely from `tagger`.
    pub fn virtual_tagged(
        key: impl Into<String>,
        value: impl Into<VirtualValue>,
        tagger: Tagger,
    ) -> Self {
        Self {
            key: key.into(),
            target: AssociationTarget::Virtual {
                value: value.into(),
                tagger: Some(tagger),
            },
            includes: None,
        }
    }

    /// Allow-list of the child descriptor's association keys, honored only
    /// under [`TraversalPolicy::DeclaredIncludes`](crate::walk::TraversalPolicy).
    #[must_use]
    pub fn with_includes<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn target(&self) -> &AssociationTarget {
        &self.target
    }

    #[must_use]
    pub fn includes(&self) -> Option<&[String]> {
        self.includes.as_deref()
    }
}

///
/// AssociationTarget
///

#[derive(Debug)]
pub enum AssociationTarget {
    One(Descriptor),
    Many(Vec<Descriptor>),
    Virtual {
        value: VirtualValue,
        tagger: Option<Tagger>,
    },
}

///
/// VirtualValue
///
/// An association payload that is not an object reference: a scalar or a
/// list of scalars (typically foreign-key identifiers).
///

#[derive(Clone, Debug)]
pub enum VirtualValue {
    Scalar(Value),
    List(Vec<Value>),
}

impl VirtualValue {
    /// A scalar behaves as a one-element sequence.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        match self {
            Self::Scalar(value) => std::slice::from_ref(value).iter(),
            Self::List(values) => values.iter(),
        }
    }
}

impl From<Value> for VirtualValue {
    fn from(value: Value) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<Value>> for VirtualValue {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

///
/// Tagger
///
/// Caller-supplied naming override for a virtual association. Two distinct
/// shapes instead of runtime arity inspection: `WithValue` receives the
/// virtual value, `Fixed` takes nothing and closes over its own context.
/// The returned tags are used verbatim.
///

type WithValueFn = dyn Fn(&VirtualValue) -> Result<TagList, TaggerError> + Send + Sync;
type FixedFn = dyn Fn() -> Result<TagList, TaggerError> + Send + Sync;

pub enum Tagger {
    WithValue(Box<WithValueFn>),
    Fixed(Box<FixedFn>),
}

impl Tagger {
    pub fn with_value<F, T>(f: F) -> Self
    where
        F: Fn(&VirtualValue) -> T + Send + Sync + 'static,
        T: Into<TagList>,
    {
        Self::WithValue(Box::new(move |value| Ok(f(value).into())))
    }

    pub fn try_with_value<F, T>(f: F) -> Self
    where
        F: Fn(&VirtualValue) -> Result<T, TaggerError> + Send + Sync + 'static,
        T: Into<TagList>,
    {
        Self::WithValue(Box::new(move |value| f(value).map(Into::into)))
    }

    pub fn fixed<F, T>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Into<TagList>,
    {
        Self::Fixed(Box::new(move || Ok(f().into())))
    }

    pub fn try_fixed<F, T>(f: F) -> Self
    where
        F: Fn() -> Result<T, TaggerError> + Send + Sync + 'static,
        T: Into<TagList>,
    {
        Self::Fixed(Box::new(move || f().map(Into::into)))
    }

    pub(crate) fn invoke(&self, value: &VirtualValue) -> Result<TagList, TaggerError> {
        match self {
            Self::WithValue(f) => f(value),
            Self::Fixed(f) => f(),
        }
    }
}

impl fmt::Debug for Tagger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithValue(_) => f.write_str("Tagger::WithValue"),
            Self::Fixed(_) => f.write_str("Tagger::Fixed"),
        }
    }
}
