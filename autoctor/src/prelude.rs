//! Prelude module for convenient imports.
//!
//! ```ignore
//! use autoctor::prelude::*;
//! ```

// Model types
pub use autoctor_model::{
    DeclarationSet, FieldDecl, ModelError, ParseError, TypeDecl, TypeDescriptor, TypeKey,
    TypeKind, collect, parse_declarations, parse_declarations_file, validate_declarations,
};

// Codegen types
pub use autoctor_codegen::{
    CodegenError, GeneratedUnit, Generator, GeneratorConfig, Synthesizer, write_units,
};

pub use tokio_util::sync::CancellationToken;
