//! Interaction Module - Hover, press and suppression flags
//!
//! Three independent reactive booleans:
//!
//! ```text
//! {idle, hoveringInteractive} × {released, pressed} × {visible, hiddenByLeave}
//! ```
//!
//! There is no transition table; each flag is driven by its own pair of
//! signals (classification, down/up, enter/leave).

use spark_signals::{signal, Signal};

use crate::types::InteractionState;

/// Interaction flag state. Clones share the underlying signals.
#[derive(Clone)]
pub struct InteractionTracker {
    over_interactive: Signal<bool>,
    pressed: Signal<bool>,
    suppressed: Signal<bool>,
}

impl InteractionTracker {
    /// Create a tracker with every flag cleared.
    pub fn new() -> Self {
        Self {
            over_interactive: signal(false),
            pressed: signal(false),
            suppressed: signal(false),
        }
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    /// Set whether the pointer is over an interactive element.
    pub fn set_over_interactive(&self, interactive: bool) {
        self.over_interactive.set(interactive);
    }

    /// Whether the pointer is over an interactive element (reactive).
    pub fn is_over_interactive(&self) -> bool {
        self.over_interactive.get()
    }

    // -------------------------------------------------------------------------
    // Press
    // -------------------------------------------------------------------------

    /// Mark a button as held.
    pub fn press(&self) {
        self.pressed.set(true);
    }

    /// Clear the pressed flag.
    pub fn release(&self) {
        self.pressed.set(false);
    }

    /// Whether a button is held (reactive).
    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    // -------------------------------------------------------------------------
    // Suppression (pointer outside the window)
    // -------------------------------------------------------------------------

    /// Hide the cursor while the pointer is outside the window.
    pub fn suppress(&self) {
        self.suppressed.set(true);
    }

    /// Show the cursor again.
    pub fn reveal(&self) {
        self.suppressed.set(false);
    }

    /// Whether the cursor is hidden (reactive).
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// All three flags at once (reactive on each).
    pub fn snapshot(&self) -> InteractionState {
        let mut state = InteractionState::empty();
        state.set(InteractionState::OVER_INTERACTIVE, self.is_over_interactive());
        state.set(InteractionState::PRESSED, self.is_pressed());
        state.set(InteractionState::SUPPRESSED, self.is_suppressed());
        state
    }
}

impl Default for InteractionTracker {
    fn default() -> Self {
        Self::new()
    }
}
