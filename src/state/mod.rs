pub mod viewport;

pub use viewport::{Preset, ViewportError, ViewportField, ViewportState};
