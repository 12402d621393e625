//! State Module - Pointer state and the host event plumbing
//!
//! - **Events** - Pointer signal bus, listener registration and cleanup
//! - **Input** - crossterm conversion, polling, routing
//! - **Pointer** - Reactive pointer coordinates
//! - **Interaction** - Hover / press / suppression flags
//! - **Classifier** - Interactive-or-plain decision over an injected hit tester
//! - **Scene** - Element table with an O(1) hit grid

pub mod classifier;
pub mod events;
pub mod input;
pub mod interaction;
pub mod pointer;
pub mod scene;

pub use classifier::{classify, HitTester, INTERACTIVE_TAGS};
pub use events::{PointerButton, PointerEvent, PointerKind};
pub use input::HostEvent;
pub use interaction::InteractionTracker;
pub use pointer::PointerTracker;
pub use scene::{HitGrid, Scene};
