//! Resolved descriptors for constructor synthesis.
//!
//! This module provides a read-only, resolved view of the declarations
//! selected for generation: base types are looked up once and carry the
//! constructors they declare, and field flags are folded into a single
//! eligibility rule.

use crate::types::{
    ConstructorDecl, ContainingType, DeclarationSet, FieldDecl, TypeDecl, TypeKey, TypeKind,
    with_type_params,
};

/// Resolved description of a type selected for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Identity key.
    pub key: TypeKey,
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Namespace (None for the global namespace).
    pub namespace: Option<String>,
    /// Enclosing types, outermost first.
    pub containing: Vec<ContainingType>,
    /// Generic type parameters.
    pub type_params: Vec<String>,
    /// Resolved base type.
    pub base: Option<BaseDescriptor>,
    /// Member fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Creates a descriptor from a declaration, resolving its base type
    /// against the declaration set.
    #[must_use]
    pub fn from_decl(decl: &TypeDecl, set: &DeclarationSet) -> Self {
        let base = decl.base.as_ref().map(|key| BaseDescriptor::resolve(key, set));

        Self {
            key: decl.key(),
            name: decl.name.clone(),
            kind: decl.kind,
            namespace: decl.namespace.clone(),
            containing: decl.containing.clone(),
            type_params: decl.type_params.clone(),
            base,
            fields: decl
                .fields
                .iter()
                .map(FieldDescriptor::from_field_decl)
                .collect(),
        }
    }

    /// Returns the name with its generic parameter list.
    #[must_use]
    pub fn display_name(&self) -> String {
        with_type_params(&self.name, &self.type_params)
    }

    /// Returns the fully qualified display form, e.g. `Ns.Outer<U>.Inner<T>`.
    #[must_use]
    pub fn qualified_display_name(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(self.containing.len() + 2);
        if let Some(ns) = &self.namespace {
            parts.push(ns.clone());
        }
        parts.extend(self.containing.iter().map(ContainingType::display_name));
        parts.push(self.display_name());
        parts.join(".")
    }

    /// Returns the fields a generated constructor must assign, in
    /// declaration order.
    pub fn eligible_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_eligible())
    }

    /// Returns the base type key, if any.
    #[must_use]
    pub fn base_key(&self) -> Option<&TypeKey> {
        self.base.as_ref().map(|b| &b.key)
    }
}

/// Resolved base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDescriptor {
    /// Base type key.
    pub key: TypeKey,
    /// Constructors explicitly declared on the base type. Empty when the base
    /// type is not part of the declaration set.
    pub constructors: Vec<ConstructorDecl>,
}

impl BaseDescriptor {
    /// Resolves a base type key against the declaration set.
    #[must_use]
    pub fn resolve(key: &TypeKey, set: &DeclarationSet) -> Self {
        let constructors = set
            .get_type(key)
            .map(|decl| decl.constructors.clone())
            .unwrap_or_default();

        Self {
            key: key.clone(),
            constructors,
        }
    }

    /// Returns the base constructor to forward to.
    ///
    /// Only a base with exactly one instance constructor taking arguments
    /// qualifies; zero or several yield `None`.
    #[must_use]
    pub fn forwarding_constructor(&self) -> Option<&ConstructorDecl> {
        let mut candidates = self.constructors.iter().filter(|c| c.takes_arguments());
        match (candidates.next(), candidates.next()) {
            (Some(ctor), None) => Some(ctor),
            _ => None,
        }
    }

    /// Returns true if more than one constructor could be forwarded to.
    #[must_use]
    pub fn has_ambiguous_constructors(&self) -> bool {
        self.constructors
            .iter()
            .filter(|c| c.takes_arguments())
            .nth(1)
            .is_some()
    }
}

/// Field as seen by the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub type_name: String,
    /// Assignable only during construction.
    pub is_readonly: bool,
    /// Static member.
    pub is_static: bool,
    /// Can be referenced by name from source.
    pub is_nameable: bool,
    /// Has an inline initializer.
    pub has_initializer: bool,
}

impl FieldDescriptor {
    /// Creates a descriptor from a field declaration.
    #[must_use]
    pub fn from_field_decl(field: &FieldDecl) -> Self {
        Self {
            name: field.name.clone(),
            type_name: field.type_name.clone(),
            is_readonly: field.is_readonly,
            is_static: field.is_static,
            is_nameable: !field.is_implicit,
            has_initializer: field.has_initializer,
        }
    }

    /// Returns true if a generated constructor must assign this field.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.is_readonly && !self.is_static && self.is_nameable && !self.has_initializer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Parameter;

    fn field(name: &str) -> FieldDescriptor {
        FieldDescriptor::from_field_decl(&FieldDecl::readonly(name, "int"))
    }

    #[test]
    fn test_field_eligibility() {
        assert!(field("_x").is_eligible());

        let mut mutable = field("x");
        mutable.is_readonly = false;
        assert!(!mutable.is_eligible());

        let mut stat = field("x");
        stat.is_static = true;
        assert!(!stat.is_eligible());

        let mut implicit = field("<X>k__BackingField");
        implicit.is_nameable = false;
        assert!(!implicit.is_eligible());

        let mut initialized = field("x");
        initialized.has_initializer = true;
        assert!(!initialized.is_eligible());
    }

    #[test]
    fn test_forwarding_constructor_single() {
        let base = BaseDescriptor {
            key: "Base".into(),
            constructors: vec![
                ConstructorDecl::default(),
                ConstructorDecl::new(vec![Parameter::new("int", "x")]),
            ],
        };
        assert!(!base.has_ambiguous_constructors());
        let ctor = base.forwarding_constructor().expect("expected a constructor");
        assert_eq!(ctor.parameters[0].name, "x");
    }

    #[test]
    fn test_forwarding_constructor_ambiguous() {
        let base = BaseDescriptor {
            key: "Base".into(),
            constructors: vec![
                ConstructorDecl::new(vec![Parameter::new("int", "x")]),
                ConstructorDecl::new(vec![Parameter::new("string", "s")]),
            ],
        };
        assert!(base.forwarding_constructor().is_none());
        assert!(base.has_ambiguous_constructors());
    }

    #[test]
    fn test_forwarding_constructor_ignores_static() {
        let base = BaseDescriptor {
            key: "Base".into(),
            constructors: vec![ConstructorDecl {
                is_static: true,
                parameters: vec![Parameter::new("int", "x")],
            }],
        };
        assert!(base.forwarding_constructor().is_none());
    }

    #[test]
    fn test_resolve_undeclared_base() {
        let set = DeclarationSet::new();
        let base = BaseDescriptor::resolve(&"System.Exception".into(), &set);
        assert!(base.constructors.is_empty());
    }

    #[test]
    fn test_from_decl() {
        let mut set = DeclarationSet::new();
        let mut base = TypeDecl::new("Base", TypeKind::Class);
        base.add_constructor(ConstructorDecl::new(vec![Parameter::new("int", "x")]));
        set.add_type(base);

        let mut derived = TypeDecl::new("Derived", TypeKind::Class);
        derived.namespace = Some("Demo".to_string());
        derived.base = Some("Base".into());
        derived.add_field(FieldDecl::readonly("_y", "string"));
        derived.add_field(FieldDecl::new("z", "int"));

        let descriptor = TypeDescriptor::from_decl(&derived, &set);
        assert_eq!(descriptor.key.as_str(), "Demo.Derived");
        assert_eq!(descriptor.base_key(), Some(&TypeKey::new("Base")));
        assert_eq!(
            descriptor.base.as_ref().map(|b| b.constructors.len()),
            Some(1)
        );
        assert_eq!(descriptor.eligible_fields().count(), 1);
    }

    #[test]
    fn test_qualified_display_name() {
        let mut decl = TypeDecl::new("Inner", TypeKind::Struct);
        decl.namespace = Some("Demo".to_string());
        decl.containing.push(ContainingType::new("Outer", TypeKind::Class));
        decl.type_params = vec!["T".to_string()];

        let descriptor = TypeDescriptor::from_decl(&decl, &DeclarationSet::new());
        assert_eq!(descriptor.qualified_display_name(), "Demo.Outer.Inner<T>");
        assert_eq!(descriptor.display_name(), "Inner<T>");
    }
}
