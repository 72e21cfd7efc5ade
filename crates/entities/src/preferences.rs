//! Display preference definitions.

use serde::{Deserialize, Serialize};

/// Light/dark scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
    /// Follow the operating system.
    System,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

/// Accent color applied to interactive elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::Blue
    }
}

/// Page container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerWidth {
    /// Stretch to the full viewport.
    Full,
    /// Center content in a fixed-width box.
    Boxed,
}

impl Default for ContainerWidth {
    fn default() -> Self {
        Self::Full
    }
}

/// Sidebar presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarStyle {
    /// Expanded sidebar with labels.
    Full,
    /// Icon-only rail.
    Mini,
}

impl Default for SidebarStyle {
    fn default() -> Self {
        Self::Full
    }
}

/// Corner rounding applied across the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerRadius {
    /// No rounding.
    Square,
    /// 4 px.
    Small,
    /// 7 px.
    Medium,
    /// 12 px.
    Large,
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::Medium
    }
}

impl CornerRadius {
    /// The radius in pixels.
    pub fn px(&self) -> u8 {
        match self {
            Self::Square => 0,
            Self::Small => 4,
            Self::Medium => 7,
            Self::Large => 12,
        }
    }
}

/// The full display preference record.
///
/// Independent of users and sessions; there is exactly one record per
/// deployment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Light/dark scheme.
    pub mode: ThemeMode,
    /// Accent color.
    pub color: AccentColor,
    /// Page container width.
    pub container: ContainerWidth,
    /// Sidebar presentation.
    pub sidebar: SidebarStyle,
    /// Corner rounding.
    pub corner_radius: CornerRadius,
}
