//! Pointer Module - Current pointer coordinates
//!
//! Reactive position state owned by whichever component mounts it. Reads
//! inside an effect track the position, so indicators re-render on movement.
//!
//! # Invariant
//!
//! The stored position always lies within the viewport or on its last
//! row/column. Coordinates reported past the edge are clamped.

use spark_signals::{batch, signal, Signal};

use crate::types::{Point, Viewport};

/// Pointer position tracker.
///
/// Cloning is cheap and shares the underlying signals, which is how event
/// handlers get write access to the component's state.
#[derive(Clone)]
pub struct PointerTracker {
    x: Signal<u16>,
    y: Signal<u16>,
    viewport: Signal<Viewport>,
}

impl PointerTracker {
    /// Create a tracker at the origin.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            x: signal(0),
            y: signal(0),
            viewport: signal(viewport),
        }
    }

    /// Record a pointer movement. Returns the stored (clamped) position.
    ///
    /// Both coordinates change in one batch, so effects never observe a
    /// new X paired with the old Y.
    pub fn track(&self, x: u16, y: u16) -> Point {
        let point = self.viewport.get().clamp(x, y);
        batch(|| {
            self.x.set(point.x);
            self.y.set(point.y);
        });
        point
    }

    /// Current pointer X (reactive).
    pub fn x(&self) -> u16 {
        self.x.get()
    }

    /// Current pointer Y (reactive).
    pub fn y(&self) -> u16 {
        self.y.get()
    }

    /// Current pointer position (reactive).
    pub fn position(&self) -> Point {
        Point::new(self.x.get(), self.y.get())
    }

    /// Current viewport (reactive).
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    /// Resize the viewport, pulling the current position back inside.
    pub fn set_viewport(&self, viewport: Viewport) {
        batch(|| {
            self.viewport.set(viewport);
            let current = self.position();
            self.track(current.x, current.y);
        });
    }
}
