//! Platform-agnostic state and runtime helpers.

pub mod disclosure;
pub mod motion;
pub mod platform;
pub mod scroll;
pub mod subscription;
pub mod timing;
