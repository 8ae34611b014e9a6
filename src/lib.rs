//! Generate React PropTypes declarations from OpenAPI v3 / Swagger v2
//! documents.
//!
//! The pipeline has four stages:
//! 1. Load: read a JSON or YAML file into [`document::ApiDocument`]
//! 2. Locate: detect the API version and find the definitions table
//! 3. Normalize: compile every schema into the PropTypes IR
//! 4. Emit: render the IR to module text
//!
//! The library surface is [`generator::generate`]; the binary wraps it with
//! file I/O and argument parsing.

#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod document;
pub mod error;
pub mod generator;
pub mod ir;
pub mod loader;

pub use error::GenerateError;
pub use generator::generate;

/// Initialize stderr logging, filtered by `PROPTYPES_GEN_LOG` (defaults to
/// `info`).
pub fn init_tracing() {
    let filter = std::env::var("PROPTYPES_GEN_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
