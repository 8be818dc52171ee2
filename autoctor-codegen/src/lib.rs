//! # autoctor Codegen
//!
//! Constructor synthesis and C# source generation.
//!
//! This crate provides:
//! - Constructor planning with base parameter forwarding
//! - Ordered synthesis over a collected type set
//! - C# constructor unit rendering
//! - Writing generated units to disk

pub mod config;
pub mod csharp;
pub mod error;
pub mod generator;
pub mod naming;
pub mod output;
pub mod plan;
pub mod synthesizer;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;
pub use naming::{friendly_name, unit_name};
pub use output::{GeneratedUnit, write_units};
pub use plan::{BaseSource, ConstructorPlan, MemoTable, ParameterList, plan_constructor};
pub use synthesizer::{Synthesizer, partition};
pub use writer::SourceWriter;

use tokio_util::sync::CancellationToken;

/// Generates constructor units from a declaration XML string.
///
/// # Arguments
/// * `xml` - Declaration XML content
///
/// # Returns
/// One generated unit per marked type.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<Vec<GeneratedUnit>, CodegenError> {
    let set = autoctor_model::parse_declarations(xml)?;
    Generator::default().generate(&set, &CancellationToken::new())
}

/// Generates constructor units from a declaration XML file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<Vec<GeneratedUnit>, CodegenError> {
    let set = autoctor_model::parse_declarations_file(path)?;
    Generator::default().generate(&set, &CancellationToken::new())
}
