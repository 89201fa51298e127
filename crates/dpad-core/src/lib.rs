//! Core navigation engine for **dpad** — directional focus for
//! remote-control-driven media control bars.
//!
//! On television platforms there is no pointer: every interactive
//! element must be reachable with Up/Down/Left/Right/Enter. This crate
//! implements that focus state machine for a two-row control bar:
//!
//! * [`Control`] — the element model: decorative labels, buttons, and
//!   sliders, with visibility and a navigable marker that together
//!   decide focus eligibility.
//! * [`Row`] — a fixed, ordered row of controls; order defines
//!   Left/Right adjacency, and [`Row::next_eligible`] is the linear,
//!   visibility-aware neighbor scan (no wraparound).
//! * [`NavKey`] — decoding of key events into the D-pad set, including
//!   the transport keys the bar deliberately ignores.
//! * [`ControlBar`] — the engine itself: owns both rows and the
//!   dynamically injected button container, tracks the single active
//!   control, routes key events, and emits [`BarEvent`]s.
//!
//! The engine is synchronous and single-threaded: each key event is
//! fully resolved (classification, scan, visual toggle) before
//! [`ControlBar::handle_keydown`] returns, and navigation never
//! errors — an exhausted scan is a no-op, not a failure.
//!
//! Rendering is out of scope here; see `dpad-widgets` for a ratatui
//! control-bar widget built on this engine.

pub mod bar;
pub mod control;
pub mod layout;
pub mod router;

pub use bar::{BarError, BarEvent, ButtonSpec, ControlBar};
pub use control::{Control, ControlId, ControlKind, Group};
pub use layout::{Row, Scan};
pub use router::NavKey;
