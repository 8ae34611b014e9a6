//! Command-line entry point.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::error::GenerateError;
use crate::generator::generate;
use crate::loader::load_document;

/// Generate React PropTypes declarations from an OpenAPI or Swagger
/// document.
#[derive(Parser, Debug, Clone)]
#[command(name = "proptypes-gen", version, about)]
pub struct Cli {
    /// Path to the OpenAPI/Swagger document (JSON or YAML)
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Path to write the generated PropTypes module to
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Only generate declarations for this schema's properties
    #[arg(long, value_name = "NAME")]
    pub schema: Option<String>,
}

/// Run the generator and return a process exit code.
pub fn run(args: &Cli) -> i32 {
    match generate_file(args) {
        Ok(()) => {
            println!("{} created", args.target.display());
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn generate_file(args: &Cli) -> Result<(), GenerateError> {
    let document = load_document(&args.src)?;

    if let Some(info) = &document.info {
        info!(
            "API name: {}, version: {}",
            info.title.as_deref().unwrap_or("unknown"),
            info.version.as_deref().unwrap_or("unknown")
        );
    }

    let output = generate(&document, args.schema.as_deref())?;

    fs::write(&args.target, output).map_err(|source| GenerateError::Write {
        path: args.target.clone(),
        source,
    })
}
