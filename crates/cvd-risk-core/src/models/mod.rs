//! Domain models for the risk engine.

mod input;
mod patient;
mod risk;
mod warning;

pub use input::*;
pub use patient::*;
pub use risk::*;
pub use warning::*;
