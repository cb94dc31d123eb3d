//! UI components for the ledpanel client.

mod animation_editor;
mod animation_list;
mod color_inputs;
mod color_list;
mod number_field;
mod param_input;
mod primitive_list;
mod scalar_fields;
mod union_editor;

pub use animation_editor::AnimationEditor;
pub use animation_list::AnimationList;
pub use color_inputs::ColorInputs;
pub use color_list::ColorList;
pub use number_field::NumberField;
pub use param_input::ParamInput;
pub use primitive_list::PrimitiveList;
pub use scalar_fields::{BoolField, LiteralSelect, TextField, TimeField};
pub use union_editor::UnionEditor;
