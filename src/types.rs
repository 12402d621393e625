//! Core types for folio-cursor.
//!
//! Geometry (Point, Viewport, Rect), colors, the interaction bitflags, and
//! the element model that hit-testing reports.

use crate::error::Error;

// =============================================================================
// Point
// =============================================================================

/// A position on the display surface, in cells (0-indexed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// Size of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether the point lies strictly inside the viewport.
    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Clamp a coordinate pair into the viewport.
    ///
    /// Coordinates past the edge land on the last row/column. An empty
    /// viewport clamps everything to the origin.
    pub fn clamp(&self, x: u16, y: u16) -> Point {
        Point {
            x: x.min(self.width.saturating_sub(1)),
            y: y.min(self.height.saturating_sub(1)),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

// =============================================================================
// Rect
// =============================================================================

/// An axis-aligned rectangle in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && (point.x as u32) < self.x as u32 + self.width as u32
            && (point.y as u32) < self.y as u32 + self.height as u32
    }
}

// =============================================================================
// Colors
// =============================================================================

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(156, 163, 175);
    /// Accent used for interactive hover (`#4f46e5`).
    pub const INDIGO: Self = Self::rgb(0x4f, 0x46, 0xe5);

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Blend this color toward black by `opacity` (0.0 - 1.0).
    ///
    /// Terminals have no per-cell alpha, so opacity is baked into the RGB
    /// channels against a dark page background.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let o = opacity.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * o).round() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), 255)
    }
}

impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Rgba::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Interaction State (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Snapshot of the pointer's interaction flags.
    ///
    /// The three flags are independent: `OVER_INTERACTIVE | PRESSED` is a
    /// press on a button, `SUPPRESSED` alone is a pointer outside the window.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InteractionState: u8 {
        const OVER_INTERACTIVE = 1 << 0;
        const PRESSED = 1 << 1;
        const SUPPRESSED = 1 << 2;
    }
}

impl InteractionState {
    pub fn is_over_interactive(self) -> bool {
        self.contains(Self::OVER_INTERACTIVE)
    }

    pub fn is_pressed(self) -> bool {
        self.contains(Self::PRESSED)
    }

    pub fn is_suppressed(self) -> bool {
        self.contains(Self::SUPPRESSED)
    }
}

// =============================================================================
// Element Model
// =============================================================================

/// Element kind, the terminal counterpart of an HTML tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementTag {
    /// Hyperlink (`<a>`).
    Anchor,
    Button,
    /// Single-line text input.
    Input,
    TextArea,
    Select,
    Heading,
    Paragraph,
    Span,
    Image,
    Div,
    Section,
    Form,
}

/// Explicit role carried by an element (the `role` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
    Link,
    Heading,
    Img,
    Navigation,
    Region,
}

/// What hit-testing reports for a point: the element's tag and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub tag: ElementTag,
    pub role: Option<Role>,
}

impl Target {
    pub const fn new(tag: ElementTag) -> Self {
        Self { tag, role: None }
    }

    pub const fn with_role(tag: ElementTag, role: Role) -> Self {
        Self { tag, role: Some(role) }
    }
}

/// A page element that can occupy hit regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: ElementTag,
    pub role: Option<Role>,
    pub id: Option<String>,
    /// Visible text.
    pub label: String,
}

impl Element {
    pub fn new(tag: ElementTag, label: impl Into<String>) -> Self {
        Self {
            tag,
            role: None,
            id: None,
            label: label.into(),
        }
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn target(&self) -> Target {
        Target {
            tag: self.tag,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_clamp() {
        let vp = Viewport::new(80, 24);
        assert_eq!(vp.clamp(10, 5), Point::new(10, 5));
        assert_eq!(vp.clamp(79, 23), Point::new(79, 23));
        assert_eq!(vp.clamp(200, 100), Point::new(79, 23));

        let empty = Viewport::new(0, 0);
        assert_eq!(empty.clamp(5, 5), Point::new(0, 0));
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 2, 3, 1);
        assert!(rect.contains(Point::new(2, 2)));
        assert!(rect.contains(Point::new(4, 2)));
        assert!(!rect.contains(Point::new(5, 2)));
        assert!(!rect.contains(Point::new(2, 3)));
    }

    #[test]
    fn test_rgba_from_hex() {
        assert_eq!(Rgba::from_hex("#4f46e5").unwrap(), Rgba::INDIGO);
        assert_eq!(Rgba::from_hex("#ffffff80").unwrap(), Rgba::new(255, 255, 255, 128));
        assert!(Rgba::from_hex("4f46e5").is_err());
        assert!(Rgba::from_hex("#4f46").is_err());
        assert!(Rgba::from_hex("#zz46e5").is_err());
    }

    #[test]
    fn test_rgba_with_opacity() {
        assert_eq!(Rgba::WHITE.with_opacity(1.0), Rgba::WHITE);
        assert_eq!(Rgba::WHITE.with_opacity(0.5), Rgba::rgb(128, 128, 128));
        assert_eq!(Rgba::WHITE.with_opacity(0.0), Rgba::BLACK);
    }

    #[test]
    fn test_interaction_state_flags() {
        let state = InteractionState::OVER_INTERACTIVE | InteractionState::PRESSED;
        assert!(state.is_over_interactive());
        assert!(state.is_pressed());
        assert!(!state.is_suppressed());
        assert_eq!(InteractionState::default(), InteractionState::empty());
    }
}
