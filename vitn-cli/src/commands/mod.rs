//! CLI command implementations

pub mod normalize;

pub use normalize::NormalizeArgs;
