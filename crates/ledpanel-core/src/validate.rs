//! Validation of animation slots before saving.
//!
//! Mirrors the checks the device applies to an uploaded configuration, plus
//! the editor's own "no valid number yet" marker (`null` in a numeric field).

use serde_json::Value;

use crate::catalog::{Catalog, ParameterDescriptor};
use crate::dispatch::ParamEditor;
use crate::numeric::NumberSpec;
use crate::union::{UnionMode, infer_union_mode};

/// First problem found in a slot, with a dotted path to it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{path}: animation slot must be an object")]
    NotAnObject { path: String },
    #[error("{path}: expected exactly one animation, found {found}")]
    SlotArity { path: String, found: usize },
    #[error("{path}: unknown animation `{name}`")]
    UnknownAnimation { path: String, name: String },
    #[error("{path}: parameters must be an object")]
    ParamsNotObject { path: String },
    #[error("{path}: not a parameter of this animation")]
    UnknownParameter { path: String },
    #[error("{path}: a number is required")]
    MissingNumber { path: String },
    #[error("{path}: expected a number")]
    NotANumber { path: String },
    #[error("{path}: {value} is below the minimum {min}")]
    BelowMinimum { path: String, value: f64, min: f64 },
    #[error("{path}: {value} is above the maximum {max}")]
    AboveMaximum { path: String, value: f64, max: f64 },
    #[error("{path}: expected one of {options:?}")]
    InvalidLiteral { path: String, options: Vec<String> },
    #[error("{path}: expected a list")]
    NotAList { path: String },
    #[error("{path}: expected a color")]
    NotAColor { path: String },
}

/// Validates a root slot. An unset root (`{}`, `null` or missing) is valid.
pub fn validate_root(
    value: Option<&Value>,
    available: &Catalog,
    all: &Catalog,
    path: &str,
) -> Result<(), ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(object)) if object.is_empty() => Ok(()),
        Some(value) => validate_slot(value, available, all, path),
    }
}

/// Validates a set slot and everything nested inside it.
///
/// Names outside `available` are still accepted when they exist in `all`,
/// matching the device.
pub fn validate_slot(
    value: &Value,
    available: &Catalog,
    all: &Catalog,
    path: &str,
) -> Result<(), ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::NotAnObject {
            path: path.to_string(),
        });
    };
    if object.len() != 1 {
        return Err(ValidationError::SlotArity {
            path: path.to_string(),
            found: object.len(),
        });
    }
    let Some((name, params)) = object.iter().next() else {
        return Ok(());
    };
    let path = format!("{path}.{name}");

    let Some(def) = available.find(name).or_else(|| all.find(name)) else {
        return Err(ValidationError::UnknownAnimation {
            path,
            name: name.clone(),
        });
    };
    let params = match params {
        Value::Null => return Ok(()),
        Value::Object(params) => params,
        _ => return Err(ValidationError::ParamsNotObject { path }),
    };

    for (key, value) in params {
        let param_path = format!("{path}.{key}");
        let Some(param) = def.param(key) else {
            return Err(ValidationError::UnknownParameter { path: param_path });
        };
        validate_param(param, value, all, &param_path)?;
    }
    Ok(())
}

fn validate_param(
    param: &ParameterDescriptor,
    value: &Value,
    all: &Catalog,
    path: &str,
) -> Result<(), ValidationError> {
    match ParamEditor::classify(param) {
        ParamEditor::Variadic | ParamEditor::AnimationList => {
            let children = all.child_catalog(param);
            for (i, item) in as_list(value, path)?.iter().enumerate() {
                validate_slot(item, &children, all, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        ParamEditor::ColorList => {
            for (i, item) in as_list(value, path)?.iter().enumerate() {
                expect_color(item, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        ParamEditor::PrimitiveList { element } => {
            for (i, item) in as_list(value, path)?.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                let item_param = ParameterDescriptor::new(item_path.clone(), element.clone());
                validate_param(&item_param, item, all, &item_path)?;
            }
            Ok(())
        }
        ParamEditor::ColorOrAnimation => match (value, infer_union_mode(Some(value))) {
            (Value::Null, _) | (_, UnionMode::Color) => Ok(()),
            (_, UnionMode::Animation) => {
                validate_slot(value, &all.child_catalog(param), all, path)
            }
        },
        ParamEditor::Animation => match value {
            Value::Null => Ok(()),
            value => validate_slot(value, &all.child_catalog(param), all, path),
        },
        ParamEditor::Literal { options } => match value.as_str() {
            Some(chosen) if options.iter().any(|o| o == chosen) => Ok(()),
            _ => Err(ValidationError::InvalidLiteral {
                path: path.to_string(),
                options,
            }),
        },
        ParamEditor::Color => expect_color(value, path),
        ParamEditor::Number(spec) => validate_number(&spec, value, path),
        ParamEditor::Bool | ParamEditor::Time | ParamEditor::Text => Ok(()),
    }
}

fn validate_number(spec: &NumberSpec, value: &Value, path: &str) -> Result<(), ValidationError> {
    let number = match value {
        Value::Null => {
            return Err(ValidationError::MissingNumber {
                path: path.to_string(),
            });
        }
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        _ => {
            return Err(ValidationError::NotANumber {
                path: path.to_string(),
            });
        }
    };
    if let Some(min) = spec.min.filter(|min| number < *min) {
        return Err(ValidationError::BelowMinimum {
            path: path.to_string(),
            value: number,
            min,
        });
    }
    if let Some(max) = spec.max.filter(|max| number > *max) {
        return Err(ValidationError::AboveMaximum {
            path: path.to_string(),
            value: number,
            max,
        });
    }
    Ok(())
}

fn as_list<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, ValidationError> {
    value.as_array().ok_or_else(|| ValidationError::NotAList {
        path: path.to_string(),
    })
}

fn expect_color(value: &Value, path: &str) -> Result<(), ValidationError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(ValidationError::NotAColor {
            path: path.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::fixtures::catalog;

    fn check(value: &Value) -> Result<(), ValidationError> {
        let catalog = catalog();
        validate_root(Some(value), &catalog, &catalog, "animation")
    }

    #[test]
    fn test_unset_root_is_valid() {
        let catalog = catalog();
        assert_eq!(validate_root(None, &catalog, &catalog, "animation"), Ok(()));
        assert_eq!(check(&json!({})), Ok(()));
        assert_eq!(check(&json!(null)), Ok(()));
    }

    #[test]
    fn test_nested_valid_config() {
        let value = json!({
            "alternate": {
                "animations": [
                    {"static": {"color": {"r": 1, "g": 2, "b": 3, "cw": 0, "ww": 0}}},
                    {"dot": {"primary": {"swing": {"direction": "x"}}, "radius": 20}}
                ],
                "length": 4.5
            }
        });
        assert_eq!(check(&value), Ok(()));
    }

    #[test]
    fn test_null_number_blocks_save() {
        let err = check(&json!({"strobo": {"frequency": null}})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingNumber {
                path: "animation.strobo.frequency".to_string()
            }
        );
    }

    #[test]
    fn test_out_of_range_number() {
        let err = check(&json!({"strobo": {"frequency": 5000}})).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::AboveMaximum { max, .. } if (max - 1000.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_unknown_names() {
        assert!(matches!(
            check(&json!({"nope": {}})),
            Err(ValidationError::UnknownAnimation { name, .. }) if name == "nope"
        ));
        assert!(matches!(
            check(&json!({"strobo": {"speed": 1}})),
            Err(ValidationError::UnknownParameter { path }) if path == "animation.strobo.speed"
        ));
    }

    #[test]
    fn test_slot_arity() {
        assert_eq!(
            check(&json!({"static": {}, "strobo": {}})),
            Err(ValidationError::SlotArity {
                path: "animation".to_string(),
                found: 2
            })
        );
    }

    #[test]
    fn test_nested_error_path() {
        let value = json!({"alternate": {"animations": [{"swing": {"direction": "z"}}]}});
        let err = check(&value).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"animation.alternate.animations[0].swing.direction: expected one of ["x", "y"]"#
        );
    }

    #[test]
    fn test_variadic_items_respect_module_fallback() {
        // `layers` accepts idle animations, but any catalog name is tolerated.
        let value = json!({"layers": {"children": [{"static": {}}, {"dot": {}}]}});
        assert_eq!(check(&value), Ok(()));
        let bad = json!({"layers": {"children": {"static": {}}}});
        assert!(matches!(check(&bad), Err(ValidationError::NotAList { .. })));
    }

    #[test]
    fn test_union_color_arm_accepted() {
        let value = json!({"dot": {"primary": {"r": 1, "g": 2, "b": 3, "cw": 0, "ww": 0}}});
        assert_eq!(check(&value), Ok(()));
    }
}
