//! marq-core: shared types, config schema, and error types for the marquee
//! workspace.
//!
//! The display driver itself lives outside this workspace; it is represented
//! here only by [`DisplayMetrics`], the read-only geometry triple the
//! segment-chain layer needs to size its output.

pub mod config;
pub mod error;
pub mod types;

pub use config::{DisplayConfig, FontConfig, MarqConfig};
pub use error::{MarqError, MarqResult};
pub use types::DisplayMetrics;
