//! Declaration model validation.
//!
//! Validation is an optional pre-pass over a [`DeclarationSet`]; the
//! synthesizer itself never rejects input.

use crate::error::ModelError;
use crate::types::{DeclarationSet, TypeDecl, TypeKey};
use std::collections::HashSet;

/// Validates a declaration set for consistency.
///
/// # Arguments
/// * `set` - The declarations to validate
///
/// # Returns
/// Ok(()) if valid, or ModelError describing the first issue.
///
/// # Errors
/// Returns `ModelError` on duplicate type keys, duplicate field names or a
/// base-type chain that loops.
pub fn validate_declarations(set: &DeclarationSet) -> Result<(), ModelError> {
    validate_keys(set)?;
    for decl in set.iter() {
        validate_fields(decl)?;
        validate_base_chain(set, decl)?;
    }
    Ok(())
}

/// Validates that every declaration has a distinct key.
fn validate_keys(set: &DeclarationSet) -> Result<(), ModelError> {
    let mut seen = HashSet::new();

    for decl in set.iter() {
        let key = decl.key();
        if !seen.insert(key.clone()) {
            return Err(ModelError::duplicate(key.as_str()));
        }
    }

    Ok(())
}

/// Validates field names within a declaration.
fn validate_fields(decl: &TypeDecl) -> Result<(), ModelError> {
    let mut seen_names = HashSet::new();

    for field in &decl.fields {
        if field.name.is_empty() {
            return Err(ModelError::validation(format!(
                "Empty field name in type '{}'",
                decl.key()
            )));
        }

        if !seen_names.insert(field.name.as_str()) {
            return Err(ModelError::validation(format!(
                "Duplicate field name '{}' in type '{}'",
                field.name,
                decl.key()
            )));
        }
    }

    Ok(())
}

/// Walks the base chain of a declaration looking for a cycle.
///
/// Undeclared base types end the walk.
fn validate_base_chain(set: &DeclarationSet, decl: &TypeDecl) -> Result<(), ModelError> {
    let start = decl.key();
    let mut path: Vec<TypeKey> = vec![start.clone()];
    let mut visited: HashSet<TypeKey> = HashSet::from([start]);
    let mut current = decl.base.clone();

    while let Some(key) = current {
        path.push(key.clone());
        if !visited.insert(key.clone()) {
            let path = path
                .iter()
                .map(TypeKey::as_str)
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(ModelError::CircularBase { path });
        }
        current = set.get_type(&key).and_then(|d| d.base.clone());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_declarations;

    #[test]
    fn test_validate_valid_declarations() {
        let xml = r#"<declarations>
            <type name="Base"><field name="_x" type="int" readonly="true"/></type>
            <type name="Derived" base="Base"><field name="_x" type="int" readonly="true"/></type>
            <type name="Other" base="System.Exception"/>
        </declarations>"#;
        let set = parse_declarations(xml).expect("Failed to parse");
        assert!(validate_declarations(&set).is_ok());
    }

    #[test]
    fn test_validate_duplicate_type() {
        let xml = r#"<declarations>
            <namespace name="Demo"><type name="A"/></namespace>
            <namespace name="Demo"><type name="A" kind="struct"/></namespace>
        </declarations>"#;
        let set = parse_declarations(xml).expect("Failed to parse");
        let result = validate_declarations(&set);
        assert!(matches!(result, Err(ModelError::DuplicateType { key }) if key == "Demo.A"));
    }

    #[test]
    fn test_validate_generic_arity_siblings() {
        let xml = r#"<declarations>
            <namespace name="Demo">
                <type name="Box"/>
                <type name="Box" typeParams="T"/>
                <type name="Box" typeParams="K, V"/>
            </namespace>
        </declarations>"#;
        let set = parse_declarations(xml).expect("Failed to parse");
        assert!(validate_declarations(&set).is_ok());
    }

    #[test]
    fn test_validate_duplicate_field() {
        let xml = r#"<declarations>
            <type name="A">
                <field name="_x" type="int"/>
                <field name="_x" type="string"/>
            </type>
        </declarations>"#;
        let set = parse_declarations(xml).expect("Failed to parse");
        assert!(matches!(
            validate_declarations(&set),
            Err(ModelError::Validation { .. })
        ));
    }

    #[test]
    fn test_validate_circular_base() {
        let xml = r#"<declarations>
            <type name="A" base="C"/>
            <type name="B" base="A"/>
            <type name="C" base="B"/>
        </declarations>"#;
        let set = parse_declarations(xml).expect("Failed to parse");
        match validate_declarations(&set) {
            Err(ModelError::CircularBase { path }) => assert_eq!(path, "A -> C -> B -> A"),
            other => panic!("expected circular base error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_self_base() {
        let xml = r#"<declarations><type name="A" base="A"/></declarations>"#;
        let set = parse_declarations(xml).expect("Failed to parse");
        assert!(matches!(
            validate_declarations(&set),
            Err(ModelError::CircularBase { .. })
        ));
    }
}
