//! CLI command implementations

pub mod new;

pub use new::NewCommand;
