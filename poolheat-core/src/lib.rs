//! Core traits and numeric constraints shared by the `poolheat` crates.

mod component;
pub mod constraint;

pub use component::Component;
