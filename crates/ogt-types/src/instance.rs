use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::tag::TypeTag;
use crate::value::Value;

/// Shared handle to one live object.
///
/// An `Instance` is a cheap clone: all clones address the same underlying
/// object, and identity is the storage identity of that object, never value
/// equality. Two structurally identical instances created separately are
/// distinct; every clone of one handle is the same instance.
///
/// Fields are held as an ordered name/value list so declared order survives
/// enumeration. Mutation goes through the handle (interior mutability) so a
/// decoder can allocate first and populate later.
#[derive(Clone)]
pub struct Instance(Rc<RefCell<ObjectCell>>);

struct ObjectCell {
    tag: TypeTag,
    fields: Vec<(String, Value)>,
}

impl Instance {
    /// Create a new instance with the given tag and ordered field values.
    pub fn new(tag: TypeTag, fields: Vec<(String, Value)>) -> Self {
        Self(Rc::new(RefCell::new(ObjectCell { tag, fields })))
    }

    /// The tag of this instance's type.
    pub fn tag(&self) -> TypeTag {
        self.0.borrow().tag.clone()
    }

    /// Snapshot of the fields in declared order.
    pub fn fields(&self) -> Vec<(String, Value)> {
        self.0.borrow().fields.clone()
    }

    /// The current value of a single field, if present.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.0
            .borrow()
            .fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Replace the full field list.
    pub fn set_fields(&self, fields: Vec<(String, Value)>) {
        self.0.borrow_mut().fields = fields;
    }

    /// Set one field by name. Returns `false` if the field does not exist.
    pub fn set_field(&self, name: &str, value: Value) -> bool {
        let mut cell = self.0.borrow_mut();
        match cell.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.0.borrow().fields.len()
    }

    /// A key unique to this instance's storage, valid while any handle lives.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    /// Returns `true` if both handles address the same instance.
    pub fn same_as(&self, other: &Instance) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// Equality is identity, matching `same_as`; comparing field values would not
// terminate on cycles and would contradict the documented identity semantics.
impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Instance {}

// Field values may reference this instance back, so Debug prints tag and
// identity only. Recursing through fields would not terminate on cycles.
impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance({}@{:#x})", self.tag(), self.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(fields: Vec<(String, Value)>) -> Instance {
        Instance::new(TypeTag::new("Node"), fields)
    }

    #[test]
    fn clones_share_identity() {
        let a = node(vec![]);
        let b = a.clone();
        assert!(a.same_as(&b));
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn equal_valued_peers_are_distinct() {
        let a = node(vec![("x".to_string(), Value::Int(1))]);
        let b = node(vec![("x".to_string(), Value::Int(1))]);
        assert!(!a.same_as(&b));
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn set_field_updates_existing_only() {
        let a = node(vec![("x".to_string(), Value::Null)]);
        assert!(a.set_field("x", Value::Int(5)));
        assert!(!a.set_field("y", Value::Int(5)));
        assert_eq!(a.field("x"), Some(Value::Int(5)));
        assert_eq!(a.field("y"), None);
    }

    #[test]
    fn set_fields_replaces_all() {
        let a = node(vec![]);
        a.set_fields(vec![("x".to_string(), Value::Bool(true))]);
        assert_eq!(a.field_count(), 1);
        assert_eq!(a.field("x"), Some(Value::Bool(true)));
    }

    #[test]
    fn debug_terminates_on_self_reference() {
        let a = node(vec![("next".to_string(), Value::Null)]);
        a.set_field("next", Value::Ref(a.clone()));
        let dump = format!("{a:?}");
        assert!(dump.starts_with("Instance(Node@"));
    }
}
