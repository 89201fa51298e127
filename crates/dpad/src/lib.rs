//! **dpad** -- D-pad focus navigation for TV-style media control bars.
//!
//! This is the umbrella crate that re-exports everything you need from
//! a single dependency:
//!
//! ```toml
//! [dependencies]
//! dpad = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from `dpad-core` are available at the crate root
//!   ([`ControlBar`], [`Control`], [`ControlId`], [`NavKey`],
//!   [`BarEvent`], etc.).
//! * The [`widgets`] module re-exports everything from `dpad-widgets`
//!   (the ratatui [`MediaControlBar`](widgets::MediaControlBar)).
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use dpad::widgets::MediaControlBar;
//! use dpad::ControlId;
//!
//! let mut bar = MediaControlBar::standard();
//! bar.on_press(ControlId::Play, || println!("play/pause"));
//! bar.set_active(ControlId::Play);
//!
//! // In the event loop:
//! // bar.handle_key(&key_event, is_showing);
//! // bar.render(frame, area);
//! ```

pub use dpad_core::*;

/// Re-export of the `dpad-widgets` crate.
pub mod widgets {
    pub use dpad_widgets::*;
}

pub use crossterm;
pub use ratatui;
