//! Theme color scheme
//!
//! A `<color theme="N" tint="T"/>` reference names one of the twelve slots
//! of the workbook theme's `<a:clrScheme>`. Slot order follows the indices
//! cells use, which swaps the dark/light pairs of the scheme's XML order.

use super::Color;

/// The twelve colors of a workbook theme, indexed the way `theme="N"` counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorScheme {
    colors: [(u8, u8, u8); 12],
}

impl ColorScheme {
    /// `<a:clrScheme>` child element names, in theme index order
    pub const SLOTS: [&'static str; 12] = [
        "lt1", "dk1", "lt2", "dk2", "accent1", "accent2", "accent3", "accent4", "accent5",
        "accent6", "hlink", "folHlink",
    ];

    /// Theme index of a `<a:clrScheme>` child element name
    pub fn slot_index(name: &[u8]) -> Option<usize> {
        Self::SLOTS.iter().position(|slot| slot.as_bytes() == name)
    }

    /// Replace the color of one slot; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, rgb: (u8, u8, u8)) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = rgb;
        }
    }

    /// Base color of a slot, before any tint
    pub fn get(&self, index: usize) -> Option<(u8, u8, u8)> {
        self.colors.get(index).copied()
    }

    /// Opaque color a theme reference resolves to.
    ///
    /// A positive `tint` moves each channel toward white by that fraction, a
    /// negative one toward black. Channels are truncated, not rounded. An
    /// index past the scheme resolves to black.
    pub fn resolve(&self, index: u8, tint: f64) -> Color {
        let (r, g, b) = self.get(index as usize).unwrap_or((0, 0, 0));
        let tint = tint.clamp(-1.0, 1.0);
        let shift = |channel: u8| {
            let c = f64::from(channel);
            let shifted = if tint > 0.0 {
                c + (255.0 - c) * tint
            } else {
                c + c * tint
            };
            shifted.clamp(0.0, 255.0) as u8
        };
        Color::argb(0xFF, shift(r), shift(g), shift(b))
    }
}

impl Default for ColorScheme {
    /// The "Office" scheme new workbooks are saved with
    fn default() -> Self {
        Self {
            colors: [
                (0xFF, 0xFF, 0xFF),
                (0x00, 0x00, 0x00),
                (0xE7, 0xE6, 0xE6),
                (0x44, 0x54, 0x6A),
                (0x44, 0x72, 0xC4),
                (0xED, 0x7D, 0x31),
                (0xA5, 0xA5, 0xA5),
                (0xFF, 0xC0, 0x00),
                (0x5B, 0x9B, 0xD5),
                (0x70, 0xAD, 0x47),
                (0x05, 0x63, 0xC1),
                (0x95, 0x4F, 0x72),
            ],
        }
    }
}
