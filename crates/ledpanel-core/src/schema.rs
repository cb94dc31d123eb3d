//! Type descriptors for animation parameters.
//!
//! The device describes every parameter with a recursive `{name, args, module}`
//! object. On the Rust side that shape is decoded into a closed sum type so the
//! editor dispatch in [`crate::dispatch`] can match on it exhaustively.

use serde::{Deserialize, Serialize};

/// Tag used by the device for five-channel colors.
pub const COLOR_TAG: &str = "RGBCCT";

/// Tag used by the device for nested animation slots.
pub const ANIMATION_TAG: &str = "Animation";

/// Module value that leaves a nested animation slot unrestricted.
pub const ANY_MODULE: &str = "any";

/// Primitive scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Int,
    Float,
    Bool,
    Str,
}

impl Primitive {
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Float => "float",
            Primitive::Bool => "bool",
            Primitive::Str => "str",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Primitive::Int),
            "float" => Some(Primitive::Float),
            "bool" => Some(Primitive::Bool),
            "str" => Some(Primitive::Str),
            _ => None,
        }
    }
}

/// Shape of a parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawType", into = "RawType")]
pub enum TypeDescriptor {
    Primitive(Primitive),
    /// Ordered sequence; the first argument is the element type.
    List(Vec<TypeDescriptor>),
    Union(Vec<TypeDescriptor>),
    /// Fixed set of allowed string values.
    Literal(Vec<String>),
    /// Nested animation slot, optionally restricted to one catalog module.
    Animation { module: Option<String> },
    /// Five-channel RGBCCT color.
    Color,
    /// Anything the editor has no dedicated control for (`any`, `dict`, ...).
    Other {
        name: String,
        args: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    /// Placeholder for untyped values.
    pub fn any() -> Self {
        TypeDescriptor::Other {
            name: "any".to_string(),
            args: Vec::new(),
        }
    }

    /// Wire tag of this descriptor.
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Primitive(p) => p.name(),
            TypeDescriptor::List(_) => "List",
            TypeDescriptor::Union(_) => "Union",
            TypeDescriptor::Literal(_) => "Literal",
            TypeDescriptor::Animation { .. } => ANIMATION_TAG,
            TypeDescriptor::Color => COLOR_TAG,
            TypeDescriptor::Other { name, .. } => name,
        }
    }

    /// Nested type arguments. Literal values are not types and are not
    /// reported here.
    pub fn args(&self) -> &[TypeDescriptor] {
        match self {
            TypeDescriptor::List(args)
            | TypeDescriptor::Union(args)
            | TypeDescriptor::Other { args, .. } => args,
            TypeDescriptor::Primitive(_)
            | TypeDescriptor::Literal(_)
            | TypeDescriptor::Animation { .. }
            | TypeDescriptor::Color => &[],
        }
    }

    /// Depth-first, pre-order search returning the first descriptor matching
    /// `pred`, starting with `self`.
    pub fn find<F>(&self, pred: &F) -> Option<&TypeDescriptor>
    where
        F: Fn(&TypeDescriptor) -> bool,
    {
        if pred(self) {
            return Some(self);
        }
        self.args().iter().find_map(|arg| arg.find(pred))
    }

    /// First descriptor in this subtree tagged `target`.
    pub fn find_by_name(&self, target: &str) -> Option<&TypeDescriptor> {
        self.find(&|t: &TypeDescriptor| t.name() == target)
    }

    /// `RGBCCT` appears anywhere in the subtree.
    pub fn is_color(&self) -> bool {
        self.find(&|t: &TypeDescriptor| matches!(t, TypeDescriptor::Color))
            .is_some()
    }

    /// An explicit `Animation` leaf appears anywhere in the subtree.
    ///
    /// A bare `Union` without an `Animation` member does not count.
    pub fn is_animation(&self) -> bool {
        self.animation_leaf().is_some()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeDescriptor::List(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, TypeDescriptor::Union(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(Primitive::Bool))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, TypeDescriptor::Primitive(Primitive::Str))
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TypeDescriptor::Primitive(Primitive::Int | Primitive::Float)
        )
    }

    /// Allowed values when this is a `Literal`.
    pub fn literal_values(&self) -> Option<&[String]> {
        match self {
            TypeDescriptor::Literal(values) => Some(values),
            _ => None,
        }
    }

    /// Element type of a `List`. A list declared without arguments has no
    /// element type.
    pub fn list_element(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::List(args) => args.first(),
            _ => None,
        }
    }

    /// First `Animation` leaf in the subtree.
    pub fn animation_leaf(&self) -> Option<&TypeDescriptor> {
        self.find(&|t: &TypeDescriptor| matches!(t, TypeDescriptor::Animation { .. }))
    }

    /// Module restriction of the first `Animation` leaf, if it names one
    /// other than [`ANY_MODULE`].
    pub fn animation_module(&self) -> Option<&str> {
        match self.animation_leaf()? {
            TypeDescriptor::Animation {
                module: Some(module),
            } if module != ANY_MODULE => Some(module),
            _ => None,
        }
    }
}

/// Wire shape of a type descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawType {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<RawType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    module: Option<String>,
}

impl From<RawType> for TypeDescriptor {
    fn from(raw: RawType) -> Self {
        if let Some(primitive) = Primitive::from_name(&raw.name) {
            return TypeDescriptor::Primitive(primitive);
        }
        match raw.name.as_str() {
            COLOR_TAG => TypeDescriptor::Color,
            ANIMATION_TAG => TypeDescriptor::Animation { module: raw.module },
            "Literal" => TypeDescriptor::Literal(raw.args.into_iter().map(|a| a.name).collect()),
            "Union" | "Optional" => {
                let mut members: Vec<TypeDescriptor> =
                    raw.args.into_iter().map(TypeDescriptor::from).collect();
                // Optional[T] arrives as a one-member union once None is dropped.
                if members.len() == 1 {
                    members.remove(0)
                } else {
                    TypeDescriptor::Union(members)
                }
            }
            name if name.eq_ignore_ascii_case("list") => {
                TypeDescriptor::List(raw.args.into_iter().map(TypeDescriptor::from).collect())
            }
            _ => {
                if raw.name.is_empty() {
                    tracing::warn!("Type descriptor without a name, treating as `any`");
                    return TypeDescriptor::any();
                }
                TypeDescriptor::Other {
                    name: raw.name,
                    args: raw.args.into_iter().map(TypeDescriptor::from).collect(),
                }
            }
        }
    }
}

impl From<TypeDescriptor> for RawType {
    fn from(ty: TypeDescriptor) -> Self {
        let name = ty.name().to_string();
        match ty {
            TypeDescriptor::Primitive(_) | TypeDescriptor::Color => RawType {
                name,
                ..RawType::default()
            },
            TypeDescriptor::List(args)
            | TypeDescriptor::Union(args)
            | TypeDescriptor::Other { args, .. } => RawType {
                name,
                args: args.into_iter().map(RawType::from).collect(),
                module: None,
            },
            TypeDescriptor::Literal(values) => RawType {
                name,
                args: values
                    .into_iter()
                    .map(|value| RawType {
                        name: value,
                        ..RawType::default()
                    })
                    .collect(),
                module: None,
            },
            TypeDescriptor::Animation { module } => RawType {
                name,
                args: Vec::new(),
                module,
            },
        }
    }
}
