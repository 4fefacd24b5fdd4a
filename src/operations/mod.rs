//! Operations module
//!
//! Coordinates pattern expansion and removal of every matched path

pub mod delete;
pub mod deleter;
pub mod expand;

pub use delete::*;
pub use deleter::*;
pub use expand::*;
