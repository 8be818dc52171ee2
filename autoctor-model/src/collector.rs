//! Declaration collector.
//!
//! Selects the declarations that carry the generation marker directly and
//! turns them into [`TypeDescriptor`]s.

use crate::descriptor::TypeDescriptor;
use crate::types::{DeclarationSet, TypeDecl};
use std::collections::HashSet;

/// Attribute names recognised as the generation marker.
pub const MARKER_NAMES: [&str; 2] = ["AutoConstruct", "AutoConstructAttribute"];

/// Returns true if the declaration carries the marker itself (inherited
/// markers do not count).
#[must_use]
pub fn is_marked(decl: &TypeDecl) -> bool {
    MARKER_NAMES.iter().any(|marker| decl.has_attribute(marker))
}

/// Collects descriptors for every marked declaration.
///
/// Declarations are returned in declaration order with duplicate keys
/// removed (first occurrence wins).
#[must_use]
pub fn collect(set: &DeclarationSet) -> Vec<TypeDescriptor> {
    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();

    for decl in set.iter().filter(|d| is_marked(d)) {
        let descriptor = TypeDescriptor::from_decl(decl, set);
        if seen.insert(descriptor.key.clone()) {
            tracing::trace!("collected {}", descriptor.key);
            descriptors.push(descriptor);
        }
    }

    tracing::debug!(
        "collected {} of {} declarations",
        descriptors.len(),
        set.len()
    );
    descriptors
}
