//! # folio-cursor
//!
//! Reactive custom pointer for a terminal portfolio page.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity: pointer position and interaction flags are
//! signals, so a render effect that reads them re-runs on every change.
//!
//! ## Architecture
//!
//! ```text
//! crossterm event → state::input → state::events (bus)
//!                                        │
//!                         CustomCursor listeners (mounted)
//!                          │                        │
//!            PointerTracker::track        classify(HitTester, point)
//!                          │                        │
//!                          └──── signals ───────────┘
//!                                        │
//!                         Indicator::derive → OverlayRenderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, colors, interaction flags, element model
//! - [`state`] - Event bus, input bridge, pointer/interaction state, classifier, scene
//! - [`cursor`] - The mountable custom cursor component
//! - [`indicator`] - Dot/ring parameters derived from the flags
//! - [`renderer`] - Canvas painting and the cursor overlay
//! - [`page`] - Portfolio page model and Taffy layout
//! - [`config`] - TOML cursor configuration

pub mod config;
pub mod cursor;
pub mod error;
pub mod indicator;
pub mod page;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{CursorConfig, DotConfig, GlyphConfig, RingConfig};
pub use cursor::CustomCursor;
pub use error::{Error, Result};
pub use indicator::{Dot, Indicator, Ring};
pub use page::{Page, PageLayout, Row, Section};
pub use renderer::{paint_canvas, Canvas, CanvasCell, OverlayRenderer};

pub use state::{
    classify, HitGrid, HitTester, HostEvent, InteractionTracker, PointerButton, PointerEvent,
    PointerKind, PointerTracker, Scene,
};
