pub mod builtin;
pub mod catalog;
pub mod level;
pub mod truth;
