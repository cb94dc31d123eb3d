//! Ordered list parameters.
//!
//! Every edit produces a fresh array; the previous one is never spliced.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::schema::{Primitive, TypeDescriptor};
use crate::value::{AnimationSlot, ColorValue};

/// Edit on a list parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEdit {
    Push(Value),
    Remove(usize),
    Replace(usize, Value),
}

/// Items of a list value. Anything that is not an array reads as empty.
pub fn list_items(value: Option<&Value>) -> Vec<Value> {
    value
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Applies an edit and returns the replacement list. Out-of-range indices
/// leave the items unchanged.
pub fn apply_list_edit(items: &[Value], edit: ListEdit) -> Value {
    let mut next = items.to_vec();
    match edit {
        ListEdit::Push(item) => next.push(item),
        ListEdit::Remove(index) => {
            if index < next.len() {
                next.remove(index);
            }
        }
        ListEdit::Replace(index, item) => {
            if let Some(slot) = next.get_mut(index) {
                *slot = item;
            }
        }
    }
    tracing::debug!("List edited: {} -> {} items", items.len(), next.len());
    Value::Array(next)
}

/// New entry for an animation list: the first legal child animation with
/// no parameters set.
pub fn new_animation_item(child_catalog: &Catalog) -> Value {
    AnimationSlot::empty_value(child_catalog.first_name_or_fallback())
}

/// New entry for a color list.
pub fn new_color_item() -> Value {
    ColorValue::BLACK.to_value()
}

/// Neutral value for a new entry in a list of `element`.
pub fn neutral_value(element: &TypeDescriptor) -> Value {
    match element {
        TypeDescriptor::Primitive(Primitive::Int) => Value::from(0),
        TypeDescriptor::Primitive(Primitive::Float) => Value::from(0.0),
        TypeDescriptor::Primitive(Primitive::Bool) => Value::Bool(false),
        TypeDescriptor::Literal(values) => values
            .first()
            .map_or_else(|| Value::String(String::new()), |v| Value::String(v.clone())),
        TypeDescriptor::Color => new_color_item(),
        _ => Value::String(String::new()),
    }
}
