//! Foundation utilities shared by the workspace crates.

pub mod color;
