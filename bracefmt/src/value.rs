//! Argument values supplied to a format call

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One formattable argument
///
/// Sequences and maps hold further arguments, so nested collections render
/// recursively. Map entries keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Argument {
    /// Signed integer
    Int(i64),
    /// Unsigned integer
    UInt(u64),
    /// String-like text, rendered as is
    Str(String),
    /// Ordered sequence: `{a, b, c}`
    Seq(Vec<Argument>),
    /// Ordered key/value pairs: `{k: v, ...}`
    Map(Vec<(Argument, Argument)>),
}

impl Argument {
    /// Build a map from pairs, keeping their order
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<Argument>,
        V: Into<Argument>,
        I: IntoIterator<Item = (K, V)>,
    {
        Argument::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from anything convertible
    pub fn seq<T, I>(items: I) -> Self
    where
        T: Into<Argument>,
        I: IntoIterator<Item = T>,
    {
        Argument::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Short category name for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Argument::Int(_) | Argument::UInt(_) => "integer",
            Argument::Str(_) => "string",
            Argument::Seq(_) => "sequence",
            Argument::Map(_) => "map",
        }
    }

    /// Convert a JSON value
    ///
    /// Objects keep their key order, arrays become sequences and integers
    /// stay integers. Everything else (floats, booleans, null) becomes its
    /// textual form, with null as empty text.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Argument::Str(String::new()),
            serde_json::Value::Bool(b) => Argument::Str(b.to_string()),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Argument::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Argument::UInt(u)
                } else {
                    Argument::Str(n.to_string())
                }
            }
            serde_json::Value::String(s) => Argument::Str(s.clone()),
            serde_json::Value::Array(items) => {
                Argument::Seq(items.iter().map(Argument::from_json).collect())
            }
            serde_json::Value::Object(fields) => Argument::Map(
                fields
                    .iter()
                    .map(|(k, v)| (Argument::Str(k.clone()), Argument::from_json(v)))
                    .collect(),
            ),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::UInt(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Argument {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Argument::Int(value as i64)
    }
}

impl From<usize> for Argument {
    fn from(value: usize) -> Self {
        Argument::UInt(value as u64)
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Argument::Str(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Argument::Str(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Argument::Str(value.clone())
    }
}

impl From<char> for Argument {
    fn from(value: char) -> Self {
        Argument::Str(value.to_string())
    }
}

impl<T: Into<Argument>> From<Vec<T>> for Argument {
    fn from(value: Vec<T>) -> Self {
        Argument::seq(value)
    }
}

impl<T: Into<Argument>, const N: usize> From<[T; N]> for Argument {
    fn from(value: [T; N]) -> Self {
        Argument::seq(value)
    }
}

impl<T: Clone + Into<Argument>> From<&[T]> for Argument {
    fn from(value: &[T]) -> Self {
        Argument::seq(value.iter().cloned())
    }
}

impl<K: Into<Argument>, V: Into<Argument>> From<BTreeMap<K, V>> for Argument {
    fn from(value: BTreeMap<K, V>) -> Self {
        Argument::map(value)
    }
}

impl From<serde_json::Value> for Argument {
    fn from(value: serde_json::Value) -> Self {
        Argument::from_json(&value)
    }
}
