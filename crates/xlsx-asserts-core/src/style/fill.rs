//! Fill/background style types

use super::Color;

/// Cell background fill.
///
/// `start_color` is the pattern foreground (`fgColor`) and `end_color` the
/// pattern background (`bgColor`). A solid fill paints with `start_color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// Pattern type
    pub pattern: PatternType,
    /// Foreground color
    pub start_color: Color,
    /// Background color
    pub end_color: Color,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            pattern: PatternType::None,
            start_color: Color::rgb(255, 255, 255),
            end_color: Color::rgb(0, 0, 0),
        }
    }
}

impl Fill {
    /// Create a solid fill painting both colors with `color`
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: PatternType::Solid,
            start_color: color,
            end_color: color,
        }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, start_color: Color, end_color: Color) -> Self {
        Self {
            pattern,
            start_color,
            end_color,
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        self.pattern == PatternType::None
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// Horizontal stripe
    DarkHorizontal,
    /// Vertical stripe
    DarkVertical,
    /// Diagonal stripe (down)
    DarkDown,
    /// Diagonal stripe (up)
    DarkUp,
    /// Grid
    DarkGrid,
    /// Trellis
    DarkTrellis,
    /// Thin horizontal stripe
    LightHorizontal,
    /// Thin vertical stripe
    LightVertical,
    /// Thin diagonal stripe (down)
    LightDown,
    /// Thin diagonal stripe (up)
    LightUp,
    /// Thin grid
    LightGrid,
    /// Thin trellis
    LightTrellis,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}

impl PatternType {
    /// Parse the OOXML `patternType` attribute
    pub fn from_xlsx(s: &str) -> Option<Self> {
        Some(match s {
            "none" => PatternType::None,
            "solid" => PatternType::Solid,
            "mediumGray" => PatternType::MediumGray,
            "darkGray" => PatternType::DarkGray,
            "lightGray" => PatternType::LightGray,
            "darkHorizontal" => PatternType::DarkHorizontal,
            "darkVertical" => PatternType::DarkVertical,
            "darkDown" => PatternType::DarkDown,
            "darkUp" => PatternType::DarkUp,
            "darkGrid" => PatternType::DarkGrid,
            "darkTrellis" => PatternType::DarkTrellis,
            "lightHorizontal" => PatternType::LightHorizontal,
            "lightVertical" => PatternType::LightVertical,
            "lightDown" => PatternType::LightDown,
            "lightUp" => PatternType::LightUp,
            "lightGrid" => PatternType::LightGrid,
            "lightTrellis" => PatternType::LightTrellis,
            "gray125" => PatternType::Gray125,
            "gray0625" => PatternType::Gray0625,
            _ => return None,
        })
    }
}
