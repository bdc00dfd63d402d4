//! Request handlers.

pub mod health;
pub mod transcript;

pub use health::*;
pub use transcript::*;
