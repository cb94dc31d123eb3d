//! Parameters that hold either a color or a nested animation.

use serde_json::Value;

use crate::catalog::Catalog;
use crate::value::{AnimationSlot, ColorValue};

/// Which arm of a color/animation union a value is shown as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionMode {
    Color,
    Animation,
}

impl UnionMode {
    pub fn label(self) -> &'static str {
        match self {
            UnionMode::Color => "Color",
            UnionMode::Animation => "Animation",
        }
    }

    /// Value emitted when switching to this mode. Replaces the previous
    /// value entirely.
    pub fn initial_value(self, child_catalog: &Catalog) -> Value {
        match self {
            UnionMode::Color => ColorValue::WHITE.to_value(),
            UnionMode::Animation => {
                AnimationSlot::empty_value(child_catalog.first_name_or_fallback())
            }
        }
    }
}

/// Infers the mode from the value's shape: an object with a numeric `r` or
/// `g` field is a color, anything else an animation.
pub fn infer_union_mode(value: Option<&Value>) -> UnionMode {
    let is_color = value.and_then(Value::as_object).is_some_and(|object| {
        ["r", "g"]
            .iter()
            .any(|key| object.get(*key).is_some_and(Value::is_number))
    });
    if is_color {
        UnionMode::Color
    } else {
        UnionMode::Animation
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::AnimationDefinition;

    #[test]
    fn test_infer_color_from_channels() {
        let value = json!({"r": 10, "g": 20, "b": 30, "cw": 0, "ww": 0});
        assert_eq!(infer_union_mode(Some(&value)), UnionMode::Color);
        assert_eq!(infer_union_mode(Some(&json!({"g": 1}))), UnionMode::Color);
    }

    #[test]
    fn test_infer_animation_otherwise() {
        assert_eq!(infer_union_mode(Some(&json!({"static": {}}))), UnionMode::Animation);
        assert_eq!(infer_union_mode(Some(&json!({"r": "10"}))), UnionMode::Animation);
        assert_eq!(infer_union_mode(None), UnionMode::Animation);
    }

    #[test]
    fn test_switch_to_animation_replaces_color() {
        let children = Catalog::from(vec![AnimationDefinition::new("rainbow", "idle")]);
        let current = json!({"r": 10, "g": 20, "b": 30, "cw": 0, "ww": 0});
        assert_eq!(infer_union_mode(Some(&current)), UnionMode::Color);
        assert_eq!(UnionMode::Animation.initial_value(&children), json!({"rainbow": {}}));
    }

    #[test]
    fn test_switch_to_color_is_white() {
        assert_eq!(
            UnionMode::Color.initial_value(&Catalog::default()),
            json!({"r": 255, "g": 255, "b": 255, "cw": 0, "ww": 0})
        );
    }
}
