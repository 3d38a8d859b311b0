//! Items not closely related to other modules.

pub mod log;
pub mod random;
