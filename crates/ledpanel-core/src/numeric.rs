//! Numeric parameter entry.
//!
//! Keystrokes emit whatever currently parses (or `null`), and clamping to the
//! declared bounds happens only when the field loses focus.

use serde_json::Value;

use crate::catalog::ParameterDescriptor;
use crate::schema::{Primitive, TypeDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

impl NumberKind {
    pub fn of(ty: &TypeDescriptor) -> Option<Self> {
        match ty {
            TypeDescriptor::Primitive(Primitive::Int) => Some(NumberKind::Int),
            TypeDescriptor::Primitive(Primitive::Float) => Some(NumberKind::Float),
            _ => None,
        }
    }

    /// `step` attribute of the input.
    pub fn step(self) -> &'static str {
        match self {
            NumberKind::Int => "1",
            NumberKind::Float => "0.1",
        }
    }
}

/// Kind and bounds of a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberSpec {
    pub kind: NumberKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberSpec {
    pub fn of(param: &ParameterDescriptor) -> Option<Self> {
        Some(Self {
            kind: NumberKind::of(&param.ty)?,
            min: param.min,
            max: param.max,
        })
    }

    /// Parses raw input text. Integers truncate at the first non-digit,
    /// floats keep their decimals. Unparsable input yields `null`.
    pub fn parse(&self, text: &str) -> Value {
        let parsed = match self.kind {
            NumberKind::Int => parse_int_prefix(text).map(Value::from),
            NumberKind::Float => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::from),
        };
        parsed.unwrap_or(Value::Null)
    }

    /// Clamps the committed value on blur. Returns the value to re-emit, or
    /// `None` when it is already within bounds or not a number.
    pub fn clamp_on_blur(&self, current: Option<&Value>) -> Option<Value> {
        let current = current?;
        let clamped = match self.kind {
            NumberKind::Int => {
                let raw = current.as_i64()?;
                let mut value = raw;
                if let Some(min) = self.min.and_then(int_bound_ceil) {
                    value = value.max(min);
                }
                if let Some(max) = self.max.and_then(int_bound_floor) {
                    value = value.min(max);
                }
                (value != raw).then(|| Value::from(value))
            }
            NumberKind::Float => {
                let raw = current.as_f64()?;
                let mut value = raw;
                if let Some(min) = self.min {
                    value = value.max(min);
                }
                if let Some(max) = self.max {
                    value = value.min(max);
                }
                #[allow(clippy::float_cmp)]
                let unchanged = value == raw;
                (!unchanged).then(|| Value::from(value))
            }
        };
        if let Some(value) = &clamped {
            tracing::debug!("Clamped {current} to {value}");
        }
        clamped
    }

    /// Text shown in the input for the current value.
    pub fn display(value: Option<&Value>) -> String {
        match value {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        }
    }
}

fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[allow(clippy::cast_possible_truncation)]
fn int_bound_ceil(bound: f64) -> Option<i64> {
    bound.is_finite().then(|| bound.ceil() as i64)
}

#[allow(clippy::cast_possible_truncation)]
fn int_bound_floor(bound: f64) -> Option<i64> {
    bound.is_finite().then(|| bound.floor() as i64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn int_spec(min: Option<f64>, max: Option<f64>) -> NumberSpec {
        NumberSpec {
            kind: NumberKind::Int,
            min,
            max,
        }
    }

    #[test]
    fn test_int_parse_truncates() {
        let spec = int_spec(None, None);
        assert_eq!(spec.parse("42"), json!(42));
        assert_eq!(spec.parse("3.9"), json!(3));
        assert_eq!(spec.parse("-7"), json!(-7));
        assert_eq!(spec.parse(""), Value::Null);
        assert_eq!(spec.parse("abc"), Value::Null);
    }

    #[test]
    fn test_float_parse_keeps_decimals() {
        let spec = NumberSpec {
            kind: NumberKind::Float,
            min: None,
            max: None,
        };
        assert_eq!(spec.parse("0.25"), json!(0.25));
        assert_eq!(spec.parse("-"), Value::Null);
    }

    #[test]
    fn test_keystrokes_do_not_clamp() {
        let spec = int_spec(None, Some(50.0));
        assert_eq!(spec.parse("9"), json!(9));
        assert_eq!(spec.parse("99"), json!(99));
        assert_eq!(spec.clamp_on_blur(Some(&json!(99))), Some(json!(50)));
    }

    #[test]
    fn test_blur_within_bounds_does_not_reemit() {
        let spec = int_spec(Some(0.0), Some(50.0));
        assert_eq!(spec.clamp_on_blur(Some(&json!(40))), None);
        assert_eq!(spec.clamp_on_blur(Some(&Value::Null)), None);
        assert_eq!(spec.clamp_on_blur(None), None);
        assert_eq!(spec.clamp_on_blur(Some(&json!(-3))), Some(json!(0)));
    }

    #[test]
    fn test_float_blur_clamp() {
        let spec = NumberSpec {
            kind: NumberKind::Float,
            min: Some(0.5),
            max: Some(1.5),
        };
        assert_eq!(spec.clamp_on_blur(Some(&json!(0.1))), Some(json!(0.5)));
        assert_eq!(spec.clamp_on_blur(Some(&json!(1.0))), None);
    }

    #[test]
    fn test_int_bounds_round_inward() {
        let spec = int_spec(Some(0.5), Some(9.5));
        assert_eq!(spec.clamp_on_blur(Some(&json!(0))), Some(json!(1)));
        assert_eq!(spec.clamp_on_blur(Some(&json!(10))), Some(json!(9)));
    }

    #[test]
    fn test_display() {
        assert_eq!(NumberSpec::display(Some(&json!(3))), "3");
        assert_eq!(NumberSpec::display(Some(&Value::Null)), "");
        assert_eq!(NumberSpec::display(None), "");
    }
}
