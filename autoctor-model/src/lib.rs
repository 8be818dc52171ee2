//! # autoctor Model
//!
//! Declaration model and collection for constructor synthesis.
//!
//! This crate provides:
//! - Type, field and constructor declarations describing a host's type model
//! - XML declaration file parsing
//! - Declaration validation
//! - Marker-based collection into resolved descriptors

pub mod collector;
pub mod descriptor;
pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use collector::{MARKER_NAMES, collect, is_marked};
pub use descriptor::{BaseDescriptor, FieldDescriptor, TypeDescriptor};
pub use error::{ModelError, ParseError};
pub use parser::{parse_declarations, parse_declarations_file};
pub use types::{
    ConstructorDecl, ContainingType, DeclarationSet, FieldDecl, Parameter, TypeDecl, TypeKey,
    TypeKind,
};
pub use validation::validate_declarations;
