//! Indicator - Visual parameters of the custom cursor
//!
//! Maps the interaction flags onto the dot and ring that replace the
//! system pointer:
//!
//! | flag             | dot                      | ring                              |
//! |------------------|--------------------------|-----------------------------------|
//! | over interactive | -                        | hover size, hover color/opacity   |
//! | pressed          | scale 0.8, opacity 0.7   | scale 0.8, inner border 0.9       |
//! | suppressed       | hidden                   | hidden                            |

use crate::config::{CursorConfig, GlyphConfig};
use crate::types::{InteractionState, Point, Rgba};

/// The center dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub size: f32,
    pub scale: f32,
    pub opacity: f32,
    pub color: Rgba,
}

/// The outer ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub size: f32,
    pub scale: f32,
    pub inner_scale: f32,
    pub opacity: f32,
    pub border_color: Rgba,
}

/// Everything needed to draw the cursor at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub position: Point,
    pub state: InteractionState,
    pub dot: Dot,
    pub ring: Ring,
}

impl Indicator {
    /// Derive the indicator, or `None` while the pointer is outside the window.
    pub fn derive(position: Point, state: InteractionState, config: &CursorConfig) -> Option<Self> {
        if state.is_suppressed() {
            return None;
        }

        let pressed = state.is_pressed();
        let hovering = state.is_over_interactive();
        let dot_config = &config.dot;
        let ring_config = &config.ring;

        let dot = Dot {
            size: dot_config.size,
            scale: if pressed { dot_config.pressed_scale } else { 1.0 },
            opacity: if pressed { dot_config.pressed_opacity } else { 1.0 },
            color: dot_config.color,
        };

        let ring = Ring {
            size: if hovering { ring_config.hover_size } else { ring_config.size },
            scale: if pressed { ring_config.pressed_scale } else { 1.0 },
            inner_scale: if pressed { ring_config.pressed_inner_scale } else { 1.0 },
            opacity: if hovering { ring_config.hover_opacity } else { ring_config.opacity },
            border_color: if hovering { ring_config.hover_color } else { ring_config.color },
        };

        Some(Self {
            position,
            state,
            dot,
            ring,
        })
    }

    /// Single-cell glyph for terminal rendering.
    pub fn glyph(&self, glyphs: &GlyphConfig) -> char {
        if self.state.is_pressed() {
            glyphs.pressed
        } else if self.state.is_over_interactive() {
            glyphs.hover_ring
        } else {
            glyphs.ring
        }
    }

    /// Terminal color: the ring's border with its opacity baked in.
    ///
    /// While pressed the dot dominates, so its opacity is applied on top.
    pub fn color(&self) -> Rgba {
        let mut opacity = self.ring.opacity;
        if self.state.is_pressed() {
            opacity *= self.dot.opacity;
        }
        self.ring.border_color.with_opacity(opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(state: InteractionState) -> Option<Indicator> {
        Indicator::derive(Point::new(4, 2), state, &CursorConfig::default())
    }

    #[test]
    fn test_idle_indicator() {
        let indicator = derive(InteractionState::empty()).unwrap();

        assert_eq!(indicator.position, Point::new(4, 2));
        assert_eq!(indicator.dot.scale, 1.0);
        assert_eq!(indicator.dot.opacity, 1.0);
        assert_eq!(indicator.ring.size, 32.0);
        assert_eq!(indicator.ring.opacity, 0.5);
        assert_eq!(indicator.ring.border_color, Rgba::WHITE);
        assert_eq!(indicator.glyph(&GlyphConfig::default()), '○');
    }

    #[test]
    fn test_hover_grows_and_recolors_ring() {
        let indicator = derive(InteractionState::OVER_INTERACTIVE).unwrap();

        assert_eq!(indicator.ring.size, 40.0);
        assert_eq!(indicator.ring.opacity, 0.9);
        assert_eq!(indicator.ring.border_color, Rgba::INDIGO);
        assert_eq!(indicator.dot.size, 8.0);
        assert_eq!(indicator.glyph(&GlyphConfig::default()), '◉');
    }

    #[test]
    fn test_press_shrinks_and_fades() {
        let indicator = derive(InteractionState::PRESSED).unwrap();

        assert_eq!(indicator.dot.scale, 0.8);
        assert_eq!(indicator.dot.opacity, 0.7);
        assert_eq!(indicator.ring.scale, 0.8);
        assert_eq!(indicator.ring.inner_scale, 0.9);
        assert_eq!(indicator.ring.size, 32.0);
        assert_eq!(indicator.glyph(&GlyphConfig::default()), '•');
    }

    #[test]
    fn test_suppressed_hides_indicator() {
        assert_eq!(derive(InteractionState::SUPPRESSED), None);
        assert_eq!(derive(InteractionState::all()), None);
    }

    #[test]
    fn test_color_bakes_opacity() {
        let idle = derive(InteractionState::empty()).unwrap();
        assert_eq!(idle.color(), Rgba::rgb(128, 128, 128));

        let hover = derive(InteractionState::OVER_INTERACTIVE).unwrap();
        assert_eq!(hover.color(), Rgba::INDIGO.with_opacity(0.9));
    }
}
