//! Five-channel color entry with in-progress text per channel.

use serde_json::Value;

use crate::value::{ColorChannel, ColorValue, clamp_channel};

/// Per-channel text drafts on top of the last color handed down.
///
/// A channel may hold text that is not a valid channel value yet (an empty
/// field while retyping, or `300`). Such text is kept without emitting until
/// the field loses focus, where it is normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDraft {
    base: ColorValue,
    seen: Option<Value>,
    text: [String; 5],
}

impl Default for ColorDraft {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ColorDraft {
    pub fn new(incoming: Option<&Value>) -> Self {
        let base = ColorValue::from_value_lenient(incoming);
        Self {
            base,
            seen: incoming.cloned(),
            text: ColorChannel::ALL.map(|c| base.get(c).to_string()),
        }
    }

    /// Last color observed from the parent.
    pub fn color(&self) -> ColorValue {
        self.base
    }

    pub fn text(&self, channel: ColorChannel) -> &str {
        &self.text[channel.index()]
    }

    /// Resets the drafts when the parent hands down a different value.
    /// Unchanged values keep in-progress text.
    pub fn observe(&mut self, incoming: Option<&Value>) -> bool {
        if self.seen.as_ref() == incoming {
            return false;
        }
        *self = Self::new(incoming);
        true
    }

    /// Records a keystroke. Emits the full color when the text is a valid
    /// channel value, otherwise keeps the draft and emits nothing.
    pub fn input(&mut self, channel: ColorChannel, text: &str) -> Option<ColorValue> {
        self.text[channel.index()] = text.to_string();
        let parsed = text.trim().parse::<i64>().ok()?;
        let value = u8::try_from(parsed).ok()?;
        self.base.set(channel, value);
        Some(self.base)
    }

    /// Normalizes a channel on blur: empty or invalid text becomes 0 and
    /// numbers are clamped to 0–255. Always emits the full color.
    pub fn blur(&mut self, channel: ColorChannel) -> ColorValue {
        let text = &self.text[channel.index()];
        let value = text.trim().parse::<i64>().map_or(0, clamp_channel);
        self.base.set(channel, value);
        self.text[channel.index()] = value.to_string();
        self.base
    }

    /// Applies a `#rrggbb` pick to r, g, b, keeping cw and ww.
    pub fn pick(&mut self, hex: &str) -> Option<ColorValue> {
        let picked = self.base.with_hex(hex)?;
        self.base = picked;
        for channel in [ColorChannel::R, ColorChannel::G, ColorChannel::B] {
            self.text[channel.index()] = picked.get(channel).to_string();
        }
        Some(picked)
    }
}
