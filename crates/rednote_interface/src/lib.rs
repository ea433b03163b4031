//! Trait definitions for the Rednote copy generator.

mod driver;

pub use driver::RednoteDriver;
