//! Order sessions hosted by the generic resource actor.

mod actions;
pub mod entity;

pub use actions::*;
