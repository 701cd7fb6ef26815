#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod scan;
pub mod unit;

pub use config::{GeneratorConfig, TargetSyntax, DEFAULT_OUTPUT_ROOT};
pub use error::GenerateError;
pub use generator::{generate, GeneratedUnit, ResourceGenerator};
