//! Ratatui widget layer for **dpad**.
//!
//! The navigation engine in `dpad-core` deliberately renders nothing;
//! this crate supplies the visual half:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`control_bar`] | [`MediaControlBar`](control_bar::MediaControlBar): the two-row bar with focus highlight, tooltips, and callback dispatch |

pub mod control_bar;

pub use control_bar::{BarStyle, Callback, CustomButton, MediaControlBar};
