use derive_more::Display;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// Value
///
/// Scalar values that appear in descriptor trees: entity identifiers and the
/// payloads of virtual associations (e.g. a bare foreign-key list).
///
/// `Display` is the tag-segment rendering: decimal integers, verbatim text,
/// canonical ULID. Case normalization happens at tag formatting, not here.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Uint(u64),
    Ulid(Ulid),
}

impl Value {
    /// Stable lowercase kind label, used as the type-name segment when a
    /// plain scalar is the root of a descriptor.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Uint(_) => "uint",
            Self::Ulid(_) => "ulid",
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool   => Bool,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    &str   => Text,
    String => Text,
    u8     => Uint,
    u16    => Uint,
    u32    => Uint,
    u64    => Uint,
    Ulid   => Ulid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(Value::Bool(true).label(), "bool");
        assert_eq!(Value::Int(-1).label(), "int");
        assert_eq!(Value::Text("x".to_string()).label(), "text");
        assert_eq!(Value::Uint(1).label(), "uint");
        assert_eq!(Value::Ulid(Ulid::nil()).label(), "ulid");
    }

    #[test]
    fn display_renders_tag_segments() {
        assert_eq!(Value::from(7_u64).to_string(), "7");
        assert_eq!(Value::from(-42_i64).to_string(), "-42");
        assert_eq!(Value::from("slug").to_string(), "slug");
        assert_eq!(Value::from(true).to_string(), "true");
    }

    #[test]
    fn conversions_pick_the_right_variant() {
        assert_eq!(Value::from(3_u8), Value::Uint(3));
        assert_eq!(Value::from(3_i32), Value::Int(3));
        assert_eq!(Value::from("a".to_string()), Value::Text("a".to_string()));
    }
}
