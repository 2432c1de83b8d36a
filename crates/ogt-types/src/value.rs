use std::fmt;

use crate::instance::Instance;

/// A live field value.
///
/// `Value` is the object model's currency: field enumeration yields values,
/// population consumes them. Scalars are owned data; [`Value::Ref`] holds a
/// live [`Instance`] handle and compares by identity, so a value tree with
/// shared or cyclic references still supports equality checks on the scalar
/// parts.
///
/// Maps are ordered pair lists, not hash maps, so keyed collections keep
/// their insertion order through a round trip.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Reference to another instance. Identity, not structure, is the value.
    Ref(Instance),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Convenience constructor for a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Convenience constructor for a reference value.
    pub fn reference(instance: &Instance) -> Self {
        Self::Ref(instance.clone())
    }

    /// Returns `true` if this is a scalar (not a reference or collection).
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::Str(_)
        )
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Ref(a), Self::Ref(b)) => a.same_as(b),
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(v) => write!(f, "Bool({v})"),
            Self::Int(v) => write!(f, "Int({v})"),
            Self::Float(v) => write!(f, "Float({v})"),
            Self::Str(v) => write!(f, "Str({v:?})"),
            Self::Ref(i) => write!(f, "Ref({i:?})"),
            Self::List(v) => f.debug_tuple("List").field(v).finish(),
            Self::Map(v) => f.debug_tuple("Map").field(v).finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::TypeTag;

    #[test]
    fn scalar_classification() {
        assert!(Value::Null.is_scalar());
        assert!(Value::Int(3).is_scalar());
        assert!(Value::str("x").is_scalar());
        assert!(!Value::List(vec![]).is_scalar());
        assert!(!Value::Map(vec![]).is_scalar());
    }

    #[test]
    fn ref_equality_is_identity() {
        let a = Instance::new(TypeTag::new("Node"), vec![]);
        let b = Instance::new(TypeTag::new("Node"), vec![]);
        assert_eq!(Value::reference(&a), Value::reference(&a));
        assert_ne!(Value::reference(&a), Value::reference(&b));
    }

    #[test]
    fn collections_compare_elementwise() {
        let list = Value::List(vec![Value::Int(1), Value::str("a")]);
        assert_eq!(list, Value::List(vec![Value::Int(1), Value::str("a")]));
        assert_ne!(list, Value::List(vec![Value::Int(1)]));

        let map = Value::Map(vec![("k".to_string(), Value::Bool(true))]);
        assert_eq!(map, Value::Map(vec![("k".to_string(), Value::Bool(true))]));
    }

    #[test]
    fn map_order_is_significant() {
        let ab = Value::Map(vec![
            ("a".to_string(), Value::Int(1)),
            ("b".to_string(), Value::Int(2)),
        ]);
        let ba = Value::Map(vec![
            ("b".to_string(), Value::Int(2)),
            ("a".to_string(), Value::Int(1)),
        ]);
        assert_ne!(ab, ba);
    }
}
