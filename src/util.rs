//! Shared utility modules.

pub mod text;
