//! CityGuard component library.
//!
//! Every component ships its own `style.css` next to the Rust source and
//! links it with `document::Link`, so pages only import what they render.

pub mod components;
pub mod theme;

pub use components::*;
