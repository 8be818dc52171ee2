//! Naming helpers for parameters and generated units.

use autoctor_model::TypeDescriptor;

/// Derives a constructor parameter name from a field name.
///
/// One leading underscore is stripped when more characters follow it;
/// every other name is used verbatim.
#[must_use]
pub fn friendly_name(field_name: &str) -> &str {
    match field_name.strip_prefix('_') {
        Some(rest) if !rest.is_empty() => rest,
        _ => field_name,
    }
}

/// Returns the unique unit name for a type.
///
/// The name is the fully qualified display form with generic angle brackets
/// replaced by square brackets, e.g. `Demo.Outer[T].Inner`.
#[must_use]
pub fn unit_name(descriptor: &TypeDescriptor) -> String {
    descriptor
        .qualified_display_name()
        .chars()
        .filter_map(|c| match c {
            '<' => Some('['),
            '>' => Some(']'),
            ' ' => None,
            other => Some(other),
        })
        .collect()
}
