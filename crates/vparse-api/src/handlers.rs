//! Request handlers.

pub mod detect;
pub mod health;
pub mod parse;

pub use detect::*;
pub use health::*;
pub use parse::*;
