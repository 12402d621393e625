//! Custom Cursor - Pointer tracking component
//!
//! Mounting subscribes the component to the host's pointer signals; the
//! returned `CustomCursor` owns those registrations and releases them on
//! `unmount()` or drop. Position and interaction state live in signals owned
//! by the component, so an effect reading them re-runs on every change.
//!
//! # Signal handling
//!
//! - **move**: record position, then classify the element under that same
//!   point. A miss (no element) keeps the previous classification. Both
//!   updates are batched, so dependent effects run once per move.
//! - **down / up**: pressed on / off.
//! - **leave / enter**: suppressed on / off.
//! - **resize**: clamp the pointer into the new viewport.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use folio_cursor::{CustomCursor, Viewport};
//!
//! let cursor = CustomCursor::mount(Rc::new(scene), Viewport::new(80, 24));
//!
//! // Drive it from the input loop
//! folio_cursor::state::input::route_event(event);
//!
//! if cursor.interaction().is_over_interactive() { /* ... */ }
//!
//! cursor.unmount();
//! ```

use std::rc::Rc;

use spark_signals::batch;

use crate::config::CursorConfig;
use crate::indicator::Indicator;
use crate::state::classifier::{classify, HitTester};
use crate::state::events;
use crate::state::interaction::InteractionTracker;
use crate::state::pointer::PointerTracker;
use crate::types::{InteractionState, Point, Viewport};

/// A mounted custom cursor.
pub struct CustomCursor {
    pointer: PointerTracker,
    interaction: InteractionTracker,
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl CustomCursor {
    /// Create cursor state and subscribe to pointer signals.
    pub fn mount(hit_tester: Rc<dyn HitTester>, viewport: Viewport) -> Self {
        let pointer = PointerTracker::new(viewport);
        let interaction = InteractionTracker::new();
        let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::with_capacity(6);

        {
            let pointer = pointer.clone();
            let interaction = interaction.clone();
            cleanups.push(Box::new(events::on_pointer_move(move |event| {
                // Position and hover land together: one re-render per move
                batch(|| {
                    let point = pointer.track(event.x, event.y);
                    if let Some(interactive) = classify(&*hit_tester, point) {
                        interaction.set_over_interactive(interactive);
                    }
                });
            })));
        }

        {
            let interaction = interaction.clone();
            cleanups.push(Box::new(events::on_pointer_down(move |_| interaction.press())));
        }
        {
            let interaction = interaction.clone();
            cleanups.push(Box::new(events::on_pointer_up(move |_| interaction.release())));
        }
        {
            let interaction = interaction.clone();
            cleanups.push(Box::new(events::on_pointer_leave(move |_| interaction.suppress())));
        }
        {
            let interaction = interaction.clone();
            cleanups.push(Box::new(events::on_pointer_enter(move |_| interaction.reveal())));
        }
        {
            let pointer = pointer.clone();
            cleanups.push(Box::new(events::on_resize(move |viewport| {
                pointer.set_viewport(viewport)
            })));
        }

        tracing::debug!(width = viewport.width, height = viewport.height, "custom cursor mounted");

        Self {
            pointer,
            interaction,
            cleanups,
        }
    }

    /// Current pointer position (reactive).
    pub fn position(&self) -> Point {
        self.pointer.position()
    }

    /// Current interaction flags (reactive).
    pub fn interaction(&self) -> InteractionState {
        self.interaction.snapshot()
    }

    /// Whether the cursor should be drawn at all.
    pub fn is_visible(&self) -> bool {
        !self.interaction.is_suppressed()
    }

    /// Shared handle to the position signals.
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Shared handle to the interaction signals.
    pub fn interaction_tracker(&self) -> &InteractionTracker {
        &self.interaction
    }

    /// Derive the visual indicator for the current state (reactive).
    pub fn indicator(&self, config: &CursorConfig) -> Option<Indicator> {
        Indicator::derive(self.position(), self.interaction(), config)
    }

    /// Release every listener registration.
    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.cleanups.is_empty() {
            return;
        }
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        tracing::debug!("custom cursor unmounted");
    }
}

impl Drop for CustomCursor {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::events::{PointerButton, PointerEvent};
    use crate::types::{ElementTag, Role, Target};
    use spark_signals::effect;
    use std::cell::{Cell, RefCell};

    fn setup() {
        events::reset_events();
    }

    /// Button in columns 0-9, paragraph in 10-19, div role=button in 20-29,
    /// nothing beyond.
    fn fake_page() -> Rc<dyn HitTester> {
        Rc::new(|point: Point| match point.x {
            0..=9 => Some(Target::new(ElementTag::Button)),
            10..=19 => Some(Target::new(ElementTag::Paragraph)),
            20..=29 => Some(Target::with_role(ElementTag::Div, Role::Button)),
            _ => None,
        })
    }

    fn mount() -> CustomCursor {
        CustomCursor::mount(fake_page(), Viewport::new(80, 24))
    }

    #[test]
    fn test_mount_registers_and_unmount_releases() {
        setup();

        let cursor = mount();
        assert_eq!(events::listener_count(), 6);

        cursor.unmount();
        assert_eq!(events::listener_count(), 0);
    }

    #[test]
    fn test_drop_releases_listeners() {
        setup();

        {
            let _cursor = mount();
            assert_eq!(events::listener_count(), 6);
        }
        assert_eq!(events::listener_count(), 0);
    }

    #[test]
    fn test_move_updates_position() {
        setup();
        let cursor = mount();

        for (x, y) in [(1, 1), (15, 3), (42, 20)] {
            events::dispatch(PointerEvent::move_to(x, y));
            assert_eq!(cursor.position(), Point::new(x, y));
        }
    }

    #[test]
    fn test_move_clamps_to_viewport() {
        setup();
        let cursor = mount();

        events::dispatch(PointerEvent::move_to(300, 300));
        assert_eq!(cursor.position(), Point::new(79, 23));
    }

    #[test]
    fn test_hover_classification() {
        setup();
        let cursor = mount();

        events::dispatch(PointerEvent::move_to(5, 0));
        assert!(cursor.interaction().is_over_interactive());

        events::dispatch(PointerEvent::move_to(15, 0));
        assert!(!cursor.interaction().is_over_interactive());

        events::dispatch(PointerEvent::move_to(25, 0));
        assert!(cursor.interaction().is_over_interactive());
    }

    #[test]
    fn test_miss_keeps_previous_classification() {
        setup();
        let cursor = mount();

        events::dispatch(PointerEvent::move_to(5, 0));
        events::dispatch(PointerEvent::move_to(50, 0));
        assert!(cursor.interaction().is_over_interactive());
        assert_eq!(cursor.position(), Point::new(50, 0));

        events::dispatch(PointerEvent::move_to(12, 0));
        events::dispatch(PointerEvent::move_to(60, 0));
        assert!(!cursor.interaction().is_over_interactive());
    }

    #[test]
    fn test_classifies_event_point_not_previous() {
        setup();
        let cursor = mount();

        // One fast jump from a paragraph onto a button must classify the button
        events::dispatch(PointerEvent::move_to(15, 0));
        events::dispatch(PointerEvent::move_to(3, 0));
        assert!(cursor.interaction().is_over_interactive());
    }

    #[test]
    fn test_press_release() {
        setup();
        let cursor = mount();

        events::dispatch(PointerEvent::down(PointerButton::Left, 5, 0));
        assert!(cursor.interaction().is_pressed());

        events::dispatch(PointerEvent::move_to(6, 0));
        assert!(cursor.interaction().is_pressed());

        events::dispatch(PointerEvent::up(PointerButton::Left, 6, 0));
        assert!(!cursor.interaction().is_pressed());
    }

    #[test]
    fn test_leave_enter() {
        setup();
        let cursor = mount();
        assert!(cursor.is_visible());

        events::dispatch(PointerEvent::leave());
        assert!(cursor.interaction().is_suppressed());
        assert!(!cursor.is_visible());
        assert_eq!(cursor.indicator(&CursorConfig::default()), None);

        events::dispatch(PointerEvent::enter());
        assert!(!cursor.interaction().is_suppressed());
        assert!(cursor.indicator(&CursorConfig::default()).is_some());
    }

    #[test]
    fn test_resize_reclamps() {
        setup();
        let cursor = mount();

        events::dispatch(PointerEvent::move_to(70, 20));
        events::dispatch_resize(Viewport::new(40, 10));
        assert_eq!(cursor.position(), Point::new(39, 9));
        assert_eq!(cursor.pointer().viewport(), Viewport::new(40, 10));
    }

    #[test]
    fn test_unmounted_cursor_ignores_events() {
        setup();
        let cursor = mount();
        let pointer = cursor.pointer().clone();
        let interaction = cursor.interaction_tracker().clone();

        cursor.unmount();

        events::dispatch(PointerEvent::move_to(5, 5));
        events::dispatch(PointerEvent::down(PointerButton::Left, 5, 5));
        assert_eq!(pointer.position(), Point::new(0, 0));
        assert!(!interaction.is_pressed());
    }

    #[test]
    fn test_two_cursors_are_independent() {
        setup();
        let first = mount();
        let second = mount();

        events::dispatch(PointerEvent::move_to(5, 5));
        assert_eq!(first.position(), second.position());

        second.unmount();
        events::dispatch(PointerEvent::move_to(7, 7));
        assert_eq!(first.position(), Point::new(7, 7));
    }

    #[test]
    fn test_hit_tester_called_once_per_move() {
        setup();

        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        let counting: Rc<dyn HitTester> = Rc::new(move |_: Point| -> Option<Target> {
            calls_clone.set(calls_clone.get() + 1);
            None
        });
        let _cursor = CustomCursor::mount(counting, Viewport::new(10, 10));

        events::dispatch(PointerEvent::move_to(1, 1));
        events::dispatch(PointerEvent::down(PointerButton::Left, 1, 1));
        events::dispatch(PointerEvent::leave());
        assert_eq!(calls.get(), 1);
    }

    /// Record `(position, flags)` every time an effect over the cursor runs.
    fn record_frames(
        cursor: &CustomCursor,
    ) -> (Rc<RefCell<Vec<(Point, InteractionState)>>>, impl FnOnce()) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let stop = {
            let frames = frames.clone();
            let pointer = cursor.pointer().clone();
            let interaction = cursor.interaction_tracker().clone();
            effect(move || {
                frames
                    .borrow_mut()
                    .push((pointer.position(), interaction.snapshot()));
            })
        };
        (frames, stop)
    }

    #[test]
    fn test_move_onto_button_renders_once() {
        setup();
        let cursor = mount();
        events::dispatch(PointerEvent::move_to(15, 5));

        let (frames, stop) = record_frames(&cursor);
        assert_eq!(frames.borrow().len(), 1);

        events::dispatch(PointerEvent::move_to(3, 10));
        assert_eq!(
            frames.borrow()[1..],
            [(Point::new(3, 10), InteractionState::OVER_INTERACTIVE)]
        );

        stop();
    }

    #[test]
    fn test_resize_renders_once() {
        setup();
        let cursor = mount();
        events::dispatch(PointerEvent::move_to(70, 20));

        let (frames, stop) = record_frames(&cursor);
        events::dispatch_resize(Viewport::new(40, 10));
        assert_eq!(
            frames.borrow()[1..],
            [(Point::new(39, 9), InteractionState::empty())]
        );

        stop();
    }

    #[test]
    fn test_press_and_release_render_once_each() {
        setup();
        let cursor = mount();
        events::dispatch(PointerEvent::move_to(15, 5));

        let (frames, stop) = record_frames(&cursor);
        events::dispatch(PointerEvent::down(PointerButton::Left, 15, 5));
        events::dispatch(PointerEvent::up(PointerButton::Left, 15, 5));
        assert_eq!(
            frames.borrow()[1..],
            [
                (Point::new(15, 5), InteractionState::PRESSED),
                (Point::new(15, 5), InteractionState::empty()),
            ]
        );

        stop();
    }
}
