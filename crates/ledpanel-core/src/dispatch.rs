//! Choice of editing control for a parameter.
//!
//! Type shapes overlap (a list of animations is both a list and
//! animation-typed), so the checks in [`ParamEditor::classify`] run in a fixed
//! order and the first match wins.

use crate::catalog::ParameterDescriptor;
use crate::numeric::NumberSpec;
use crate::schema::TypeDescriptor;

/// Control used to edit one parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamEditor {
    /// Open-ended list of nested animations.
    Variadic,
    ColorList,
    AnimationList,
    /// List of anything else, one scalar editor per item.
    PrimitiveList { element: TypeDescriptor },
    /// Toggle between a color and a nested animation.
    ColorOrAnimation,
    Literal { options: Vec<String> },
    Animation,
    Color,
    Bool,
    /// Time-of-day picker for string parameters named like a time.
    Time,
    Number(NumberSpec),
    Text,
}

impl ParamEditor {
    pub fn classify(param: &ParameterDescriptor) -> Self {
        let ty = &param.ty;

        if param.is_variadic() {
            return ParamEditor::Variadic;
        }
        if ty.is_list() {
            let element = ty.list_element().cloned().unwrap_or_else(TypeDescriptor::any);
            return if element.is_color() {
                ParamEditor::ColorList
            } else if element.is_animation() {
                ParamEditor::AnimationList
            } else {
                ParamEditor::PrimitiveList { element }
            };
        }
        if ty.is_color() && ty.is_animation() {
            return ParamEditor::ColorOrAnimation;
        }
        if let Some(options) = ty.literal_values() {
            return ParamEditor::Literal {
                options: options.to_vec(),
            };
        }
        if ty.is_animation() {
            return ParamEditor::Animation;
        }
        if ty.is_color() {
            return ParamEditor::Color;
        }
        if ty.is_bool() {
            return ParamEditor::Bool;
        }
        if ty.is_str() && is_time_like(&param.name) {
            return ParamEditor::Time;
        }
        if let Some(spec) = NumberSpec::of(param) {
            return ParamEditor::Number(spec);
        }
        ParamEditor::Text
    }
}

fn is_time_like(name: &str) -> bool {
    name == "start" || name == "end" || name.contains("time")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::numeric::NumberKind;
    use crate::schema::Primitive;

    fn param(name: &str, ty: serde_json::Value) -> ParameterDescriptor {
        ParameterDescriptor::new(name, serde_json::from_value(ty).unwrap())
    }

    #[test]
    fn test_variadic_wins_over_declared_type() {
        let p = param("children", json!({"name": "int"})).variadic();
        assert_eq!(ParamEditor::classify(&p), ParamEditor::Variadic);
    }

    #[test]
    fn test_list_element_dispatch() {
        let colors = param("colors", json!({"name": "list", "args": [{"name": "RGBCCT"}]}));
        assert_eq!(ParamEditor::classify(&colors), ParamEditor::ColorList);

        let anims = param("animations", json!({"name": "List", "args": [{"name": "Animation"}]}));
        assert_eq!(ParamEditor::classify(&anims), ParamEditor::AnimationList);

        let ints = param("steps", json!({"name": "List", "args": [{"name": "int"}]}));
        assert_eq!(
            ParamEditor::classify(&ints),
            ParamEditor::PrimitiveList {
                element: TypeDescriptor::Primitive(Primitive::Int)
            }
        );
    }

    #[test]
    fn test_color_animation_union() {
        let p = param(
            "primary",
            json!({
                "name": "Union",
                "args": [{"name": "Animation", "module": "any"}, {"name": "RGBCCT"}]
            }),
        );
        assert_eq!(ParamEditor::classify(&p), ParamEditor::ColorOrAnimation);
    }

    #[test]
    fn test_bare_union_falls_through_to_text() {
        let p = param("mode", json!({"name": "Union", "args": [{"name": "int"}, {"name": "str"}]}));
        assert_eq!(ParamEditor::classify(&p), ParamEditor::Text);
    }

    #[test]
    fn test_literal_options() {
        let p = param(
            "direction",
            json!({"name": "Literal", "args": [{"name": "x"}, {"name": "y"}]}),
        );
        assert_eq!(
            ParamEditor::classify(&p),
            ParamEditor::Literal {
                options: vec!["x".to_string(), "y".to_string()]
            }
        );
    }

    #[test]
    fn test_single_animation_and_color() {
        let anim = param("inner", json!({"name": "Animation", "module": "idle"}));
        assert_eq!(ParamEditor::classify(&anim), ParamEditor::Animation);
        let color = param("color", json!({"name": "RGBCCT"}));
        assert_eq!(ParamEditor::classify(&color), ParamEditor::Color);
    }

    #[test]
    fn test_scalars() {
        assert_eq!(ParamEditor::classify(&param("on", json!({"name": "bool"}))), ParamEditor::Bool);
        assert_eq!(
            ParamEditor::classify(&param("start", json!({"name": "str"}))),
            ParamEditor::Time
        );
        assert_eq!(
            ParamEditor::classify(&param("fade_time", json!({"name": "str"}))),
            ParamEditor::Time
        );
        assert_eq!(
            ParamEditor::classify(&param("label", json!({"name": "str"}))),
            ParamEditor::Text
        );
        assert_eq!(
            ParamEditor::classify(&param("end", json!({"name": "int"}))),
            ParamEditor::Number(NumberSpec {
                kind: NumberKind::Int,
                min: None,
                max: None
            })
        );

        let freq = param("freq", json!({"name": "int"})).with_bounds(Some(1.0), Some(10.0));
        assert_eq!(
            ParamEditor::classify(&freq),
            ParamEditor::Number(NumberSpec {
                kind: NumberKind::Int,
                min: Some(1.0),
                max: Some(10.0)
            })
        );
        assert_eq!(ParamEditor::classify(&param("x", json!({"name": "any"}))), ParamEditor::Text);
    }
}
