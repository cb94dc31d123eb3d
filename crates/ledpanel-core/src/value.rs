//! Configuration value shapes: animation slots and RGBCCT colors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// An active animation slot, `{ name: params }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationSlot {
    pub name: String,
    pub params: Map<String, Value>,
}

impl AnimationSlot {
    pub fn new(name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Reads a slot value. Anything other than an object with exactly one
    /// key is an unset slot. A non-object parameter value reads as `{}`.
    pub fn from_value(value: Option<&Value>) -> Option<Self> {
        let object = value?.as_object()?;
        if object.len() != 1 {
            return None;
        }
        let (name, params) = object.iter().next()?;
        let params = params.as_object().cloned().unwrap_or_default();
        Some(Self::new(name.clone(), params))
    }

    /// Slot with an animation selected and no parameters set.
    pub fn empty_value(name: &str) -> Value {
        Self::new(name, Map::new()).to_value()
    }

    pub fn to_value(&self) -> Value {
        let mut object = Map::with_capacity(1);
        object.insert(self.name.clone(), Value::Object(self.params.clone()));
        Value::Object(object)
    }
}

/// One channel of an RGBCCT color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    R,
    G,
    B,
    Cw,
    Ww,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 5] = [
        ColorChannel::R,
        ColorChannel::G,
        ColorChannel::B,
        ColorChannel::Cw,
        ColorChannel::Ww,
    ];

    /// JSON key of this channel.
    pub fn key(self) -> &'static str {
        match self {
            ColorChannel::R => "r",
            ColorChannel::G => "g",
            ColorChannel::B => "b",
            ColorChannel::Cw => "cw",
            ColorChannel::Ww => "ww",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorChannel::R => "R",
            ColorChannel::G => "G",
            ColorChannel::B => "B",
            ColorChannel::Cw => "CW",
            ColorChannel::Ww => "WW",
        }
    }

    /// Position in [`ColorChannel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Five-channel color, each channel 0–255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub cw: u8,
    pub ww: u8,
}

impl ColorValue {
    pub const BLACK: ColorValue = ColorValue::new(0, 0, 0, 0, 0);
    /// Opaque white on the RGB channels, whites off.
    pub const WHITE: ColorValue = ColorValue::new(255, 255, 255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, cw: u8, ww: u8) -> Self {
        Self { r, g, b, cw, ww }
    }

    /// Reads a color for display. Non-objects read as black; missing or
    /// non-numeric channels read as 0 and out-of-range channels are clamped.
    pub fn from_value_lenient(value: Option<&Value>) -> Self {
        let Some(object) = value.and_then(Value::as_object) else {
            return Self::BLACK;
        };
        let mut color = Self::BLACK;
        for channel in ColorChannel::ALL {
            let raw = object.get(channel.key()).and_then(number_as_i64).unwrap_or(0);
            color.set(channel, clamp_channel(raw));
        }
        color
    }

    pub fn get(&self, channel: ColorChannel) -> u8 {
        self.channels()[channel.index()]
    }

    pub fn set(&mut self, channel: ColorChannel, value: u8) {
        match channel {
            ColorChannel::R => self.r = value,
            ColorChannel::G => self.g = value,
            ColorChannel::B => self.b = value,
            ColorChannel::Cw => self.cw = value,
            ColorChannel::Ww => self.ww = value,
        }
    }

    fn channels(&self) -> [u8; 5] {
        [self.r, self.g, self.b, self.cw, self.ww]
    }

    /// `#rrggbb` for an RGB color picker.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Replaces r, g, b from a `#rrggbb` string, keeping cw and ww.
    pub fn with_hex(&self, hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
            ..*self
        })
    }

    /// Full five-key JSON object.
    pub fn to_value(&self) -> Value {
        json!({
            "r": self.r,
            "g": self.g,
            "b": self.b,
            "cw": self.cw,
            "ww": self.ww,
        })
    }
}

/// Clamps an integer into the 0–255 channel range.
pub fn clamp_channel(raw: i64) -> u8 {
    u8::try_from(raw.clamp(0, 255)).unwrap_or(u8::MAX)
}

#[allow(clippy::cast_possible_truncation)]
fn number_as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}
