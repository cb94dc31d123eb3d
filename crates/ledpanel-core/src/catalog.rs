//! Animation catalog as served by the device.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::schema::TypeDescriptor;

/// Animation name used when a new nested slot has to be filled but the
/// child catalog is empty.
pub const FALLBACK_ANIMATION: &str = "static";

/// `inspect.Parameter.VAR_POSITIONAL` as reported by the device.
const VAR_POSITIONAL: i64 = 2;

/// How a parameter binds its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawKind", into = "i64")]
pub enum ParameterKind {
    #[default]
    Ordinary,
    /// Accepts an open-ended list of animations regardless of its declared type.
    Variadic,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKind {
    Code(i64),
    Name(String),
}

impl From<RawKind> for ParameterKind {
    fn from(raw: RawKind) -> Self {
        match raw {
            RawKind::Code(VAR_POSITIONAL) => ParameterKind::Variadic,
            RawKind::Name(name) if name.eq_ignore_ascii_case("var_positional") => {
                ParameterKind::Variadic
            }
            _ => ParameterKind::Ordinary,
        }
    }
}

impl From<ParameterKind> for i64 {
    fn from(kind: ParameterKind) -> Self {
        match kind {
            ParameterKind::Ordinary => 1,
            ParameterKind::Variadic => VAR_POSITIONAL,
        }
    }
}

/// One formal parameter of an animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// `null` on the wire means "no default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default)]
    pub kind: ParameterKind,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
            default: None,
            min: None,
            max: None,
            kind: ParameterKind::Ordinary,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.kind = ParameterKind::Variadic;
        self
    }

    pub fn is_variadic(&self) -> bool {
        self.kind == ParameterKind::Variadic
    }

    /// Human readable `min–max` hint, if any bound is declared.
    pub fn bounds_hint(&self) -> Option<String> {
        match (self.min, self.max) {
            (None, None) => None,
            (Some(min), None) => Some(format!("≥ {min}")),
            (None, Some(max)) => Some(format!("≤ {max}")),
            (Some(min), Some(max)) => Some(format!("{min}–{max}")),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub params: Vec<ParameterDescriptor>,
}

impl AnimationDefinition {
    pub fn new(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            module: module.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: ParameterDescriptor) -> Self {
        self.params.push(param);
        self
    }

    /// Label for selectors: the title when present, otherwise the name.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn param(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Parameter map holding every declared default. Parameters without a
    /// default are left out.
    pub fn default_params(&self) -> Map<String, Value> {
        self.params
            .iter()
            .filter_map(|p| p.default.clone().map(|d| (p.name.clone(), d)))
            .collect()
    }
}

/// Immutable, cheaply clonable list of animation definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Rc<Vec<AnimationDefinition>>,
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl From<Vec<AnimationDefinition>> for Catalog {
    fn from(entries: Vec<AnimationDefinition>) -> Self {
        Self {
            entries: Rc::new(entries),
        }
    }
}

impl Catalog {
    /// Decodes the catalog endpoint's JSON body.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let entries: Vec<AnimationDefinition> =
            serde_json::from_str(json).map_err(SchemaError::Catalog)?;
        Ok(Self::from(entries))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&AnimationDefinition> {
        self.entries.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Name used to fill a freshly added slot: the first entry, or
    /// [`FALLBACK_ANIMATION`] when the catalog is empty.
    pub fn first_name_or_fallback(&self) -> &str {
        match self.entries.first() {
            Some(first) => &first.name,
            None => {
                tracing::warn!("Empty child catalog, falling back to `{FALLBACK_ANIMATION}`");
                FALLBACK_ANIMATION
            }
        }
    }

    /// Entries of one module.
    pub fn by_module(&self, module: &str) -> Catalog {
        self.entries
            .iter()
            .filter(|a| a.module == module)
            .cloned()
            .collect::<Vec<_>>()
            .into()
    }

    /// Catalog slice legal for a nested slot of type `ty`.
    ///
    /// Filters by the module of the first `Animation` leaf unless it is
    /// missing or `any`, in which case the full catalog is shared.
    pub fn resolve_child_catalog(&self, ty: &TypeDescriptor) -> Catalog {
        match ty.animation_module() {
            Some(module) => self.by_module(module),
            None => self.clone(),
        }
    }

    /// Catalog slice for the slots nested in `param`. Lists resolve against
    /// their element type, everything else against the declared type.
    pub fn child_catalog(&self, param: &ParameterDescriptor) -> Catalog {
        let ty = param.ty.list_element().unwrap_or(&param.ty);
        self.resolve_child_catalog(ty)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::fixtures::catalog;
    use super::*;

    #[test]
    fn test_decode_wire_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);

        let strobo = catalog.find("strobo").unwrap();
        let phase = strobo.param("phase").unwrap();
        assert_eq!(phase.default, None);
        assert_eq!(strobo.param("frequency").unwrap().max, Some(1000.0));

        let layers = catalog.find("layers").unwrap();
        assert!(layers.params[0].is_variadic());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = Catalog::from_json(r#"{"name": "static"}"#).unwrap_err();
        assert!(matches!(err, SchemaError::Catalog(_)));
    }

    #[test]
    fn test_default_params_skip_missing_defaults() {
        let def = AnimationDefinition::new("x", "idle")
            .with_param(
                ParameterDescriptor::new("freq", TypeDescriptor::any()).with_default(json!(10)),
            )
            .with_param(ParameterDescriptor::new("phase", TypeDescriptor::any()));
        let params = def.default_params();
        assert_eq!(Value::Object(params), json!({"freq": 10}));
    }

    #[test]
    fn test_label_prefers_title() {
        let catalog = catalog();
        assert_eq!(catalog.find("static").unwrap().label(), "Static color");
        assert_eq!(catalog.find("dot").unwrap().label(), "dot");
    }

    #[test]
    fn test_resolve_child_catalog_filters_by_module() {
        let catalog = catalog();
        let idle = catalog.resolve_child_catalog(&TypeDescriptor::Animation {
            module: Some("idle".to_string()),
        });
        assert_eq!(idle.len(), 4);
        assert!(idle.iter().all(|a| a.module == "idle"));
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_resolve_child_catalog_any_is_unfiltered() {
        let catalog = catalog();
        let any = catalog.resolve_child_catalog(&TypeDescriptor::Animation {
            module: Some("any".to_string()),
        });
        assert_eq!(any, catalog);
        let untyped = catalog.resolve_child_catalog(&TypeDescriptor::any());
        assert_eq!(untyped.len(), catalog.len());
    }

    #[test]
    fn test_resolve_child_catalog_unknown_module_is_empty() {
        let catalog = catalog();
        let none = catalog.resolve_child_catalog(&TypeDescriptor::Animation {
            module: Some("missing".to_string()),
        });
        assert!(none.is_empty());
        assert_eq!(none.first_name_or_fallback(), FALLBACK_ANIMATION);
    }

    #[test]
    fn test_animation_list_scoped_to_element_module() {
        let catalog = catalog();
        let ty = serde_json::from_value(json!({
            "name": "List",
            "args": [{"name": "Animation", "module": "idle"}]
        }))
        .unwrap();
        let param = ParameterDescriptor::new("animations", ty);

        let children = catalog.child_catalog(&param);
        let names: Vec<_> = children.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["alternate", "static", "strobo", "swing"]);
        assert_eq!(
            crate::list::new_animation_item(&children),
            json!({"alternate": {}})
        );
    }

    #[test]
    fn test_variadic_scoped_to_declared_module() {
        let catalog = catalog();
        let layers = catalog.find("layers").unwrap();
        let children = catalog.child_catalog(layers.param("children").unwrap());
        assert_eq!(children.len(), 4);
        assert!(!children.contains("dot"));
    }

    #[test]
    fn test_bounds_hint() {
        let p = ParameterDescriptor::new("r", TypeDescriptor::any())
            .with_bounds(Some(0.0), Some(5.0));
        assert_eq!(p.bounds_hint().as_deref(), Some("0–5"));
        assert_eq!(ParameterDescriptor::new("r", TypeDescriptor::any()).bounds_hint(), None);
    }
}
