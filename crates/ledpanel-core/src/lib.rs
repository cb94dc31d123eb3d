//! Ledpanel Core Library
//!
//! Interprets the device's animation catalog and keeps animation slot values
//! in sync with the editing controls of the panel. Everything here is pure
//! and platform independent; the Yew front-end renders what these types decide.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod list;
pub mod numeric;
pub mod schema;
pub mod union;
pub mod validate;
pub mod value;

pub use catalog::{
    AnimationDefinition, Catalog, FALLBACK_ANIMATION, ParameterDescriptor, ParameterKind,
};
pub use color::ColorDraft;
pub use config::{DeviceConfig, PanelSettings};
pub use dispatch::ParamEditor;
pub use editor::{NodeAction, NodeMirror, NodeState, Transition};
pub use error::SchemaError;
pub use list::{ListEdit, apply_list_edit, list_items};
pub use numeric::{NumberKind, NumberSpec};
pub use schema::{Primitive, TypeDescriptor};
pub use union::{UnionMode, infer_union_mode};
pub use validate::{ValidationError, validate_root, validate_slot};
pub use value::{AnimationSlot, ColorChannel, ColorValue};
