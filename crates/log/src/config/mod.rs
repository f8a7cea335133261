//! Configuration types
//!
//! - `base`: core configuration structs (Config, Format, WriterConfig)
//! - `display`: what each event line shows
//! - `presets`: environment, development and production setups

mod base;
mod display;
mod presets;

pub use base::{Config, Format, WriterConfig};
pub use display::DisplayConfig;
