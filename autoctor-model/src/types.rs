//! Declaration model types.
//!
//! This module contains the data structures a host (or a declaration file)
//! populates to describe the nominal types visible to a compilation: their
//! fields, base types, declared constructors and attributes.

use std::collections::HashMap;
use std::fmt;

/// Complete set of type declarations visible to one generation run.
#[derive(Debug, Clone, Default)]
pub struct DeclarationSet {
    /// Type declarations in declaration order.
    types: Vec<TypeDecl>,
    /// Key lookup map (built while adding).
    type_map: HashMap<TypeKey, usize>,
}

impl DeclarationSet {
    /// Creates a new empty declaration set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type declaration to the set.
    ///
    /// The first declaration registered under a key is the one lookups
    /// return; later duplicates are kept for iteration so validation can
    /// report them.
    pub fn add_type(&mut self, type_decl: TypeDecl) {
        let key = type_decl.key();
        let index = self.types.len();
        self.types.push(type_decl);
        self.type_map.entry(key).or_insert(index);
    }

    /// Looks up a type by key.
    #[must_use]
    pub fn get_type(&self, key: &TypeKey) -> Option<&TypeDecl> {
        self.type_map.get(key).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given key exists.
    #[must_use]
    pub fn has_type(&self, key: &TypeKey) -> bool {
        self.type_map.contains_key(key)
    }

    /// Iterates over the declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.iter()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the set holds no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Stable identity of a declared type.
///
/// The key is the dotted path `Namespace.Outer.Name` where every generic
/// segment carries its arity, e.g. `Demo.Map`2.Entry` or `Demo.Box`1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(String);

impl TypeKey {
    /// Creates a key from its dotted path, taken verbatim.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Creates a key from a type reference as written in source.
    ///
    /// Generic argument lists are replaced by their arity, so
    /// `Demo.Box<int>`, `Demo.Box<T>` and `Demo.Box<>` all yield
    /// `Demo.Box`1`. References already in key form pass through unchanged.
    #[must_use]
    pub fn from_reference(reference: &str) -> Self {
        let mut path = String::with_capacity(reference.len());
        let mut depth = 0usize;
        let mut arity = 0usize;

        for c in reference.chars() {
            match c {
                '<' => {
                    depth += 1;
                    if depth == 1 {
                        arity = 1;
                    }
                }
                '>' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        push_arity(&mut path, arity);
                        arity = 0;
                    }
                }
                ',' if depth == 1 => arity += 1,
                _ if depth > 0 => {}
                c if c.is_whitespace() => {}
                c => path.push(c),
            }
        }

        Self(path)
    }

    /// Returns the dotted path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// Kind of nominal type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// Reference type.
    #[default]
    Class,
    /// Value type.
    Struct,
    /// Record reference type.
    Record,
    /// Record value type.
    RecordStruct,
}

impl TypeKind {
    /// Parses a type kind from its declaration-file spelling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "class" => Some(Self::Class),
            "struct" => Some(Self::Struct),
            "record" | "record class" => Some(Self::Record),
            "record struct" | "recordStruct" => Some(Self::RecordStruct),
            _ => None,
        }
    }

    /// Returns the keyword used when re-declaring the type.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::RecordStruct => "record struct",
        }
    }
}

/// Enclosing type of a nested declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainingType {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
    /// Generic type parameters.
    pub type_params: Vec<String>,
}

impl ContainingType {
    /// Creates a non-generic containing type.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_params: Vec::new(),
        }
    }

    /// Returns the name with its generic parameter list, e.g. `Outer<T>`.
    #[must_use]
    pub fn display_name(&self) -> String {
        with_type_params(&self.name, &self.type_params)
    }
}

/// Nominal type declaration.
#[derive(Debug, Clone)]
pub struct TypeDecl {
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
    /// Key of the base type, if any.
    pub base: Option<TypeKey>,
    /// Names of attributes written directly on this declaration.
    pub attributes: Vec<String>,
    /// Member fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Explicitly declared constructors.
    pub constructors: Vec<ConstructorDecl>,
}

impl TypeDecl {
    /// Creates a new type declaration in the global namespace.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            namespace: None,
            containing: Vec::new(),
            type_params: Vec::new(),
            base: None,
            attributes: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Returns the identity key of this declaration.
    #[must_use]
    pub fn key(&self) -> TypeKey {
        let mut path = String::new();
        if let Some(ns) = &self.namespace {
            path.push_str(ns);
            path.push('.');
        }
        for outer in &self.containing {
            path.push_str(&outer.name);
            push_arity(&mut path, outer.type_params.len());
            path.push('.');
        }
        path.push_str(&self.name);
        push_arity(&mut path, self.type_params.len());
        TypeKey(path)
    }

    /// Adds an attribute name.
    pub fn add_attribute(&mut self, name: impl Into<String>) {
        self.attributes.push(name.into());
    }

    /// Adds a field.
    pub fn add_field(&mut self, field: FieldDecl) {
        self.fields.push(field);
    }

    /// Adds a constructor.
    pub fn add_constructor(&mut self, ctor: ConstructorDecl) {
        self.constructors.push(ctor);
    }

    /// Returns true if the attribute is written directly on this declaration.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }
}

/// Member field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type, as it should be written in generated code.
    pub type_name: String,
    /// Assignable only during construction.
    pub is_readonly: bool,
    /// Static member.
    pub is_static: bool,
    /// Compiler generated and not nameable from source.
    pub is_implicit: bool,
    /// Has an inline initializer.
    pub has_initializer: bool,
}

impl FieldDecl {
    /// Creates a mutable instance field without an initializer.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_readonly: false,
            is_static: false,
            is_implicit: false,
            has_initializer: false,
        }
    }

    /// Creates a read-only instance field without an initializer.
    #[must_use]
    pub fn readonly(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            is_readonly: true,
            ..Self::new(name, type_name)
        }
    }
}

/// Constructor or method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// Parameter type.
    pub type_name: String,
    /// Parameter name.
    pub name: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.type_name, self.name)
    }
}

/// Explicitly declared constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorDecl {
    /// Static (type) constructor.
    pub is_static: bool,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
}

impl ConstructorDecl {
    /// Creates an instance constructor with the given parameters.
    #[must_use]
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            is_static: false,
            parameters,
        }
    }

    /// Returns true if this is an instance constructor taking parameters.
    #[must_use]
    pub fn takes_arguments(&self) -> bool {
        !self.is_static && !self.parameters.is_empty()
    }
}

/// Appends the arity marker of a generic segment.
fn push_arity(path: &mut String, arity: usize) {
    if arity > 0 {
        path.push('`');
        path.push_str(&arity.to_string());
    }
}

/// Formats a name with its generic parameter list, e.g. `Map<K, V>`.
pub(crate) fn with_type_params(name: &str, type_params: &[String]) -> String {
    if type_params.is_empty() {
        name.to_string()
    } else {
        format!("{}<{}>", name, type_params.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_kind_parse() {
        assert_eq!(TypeKind::parse("class"), Some(TypeKind::Class));
        assert_eq!(TypeKind::parse("struct"), Some(TypeKind::Struct));
        assert_eq!(TypeKind::parse("record"), Some(TypeKind::Record));
        assert_eq!(
            TypeKind::parse("record struct"),
            Some(TypeKind::RecordStruct)
        );
        assert_eq!(TypeKind::parse("interface"), None);
    }

    #[test]
    fn test_type_kind_keyword() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::RecordStruct.keyword(), "record struct");
    }

    #[test]
    fn test_type_key_global_namespace() {
        let decl = TypeDecl::new("Point", TypeKind::Struct);
        assert_eq!(decl.key(), TypeKey::new("Point"));
    }

    #[test]
    fn test_type_key_nested() {
        let mut decl = TypeDecl::new("Inner", TypeKind::Class);
        decl.namespace = Some("Demo.Models".to_string());
        decl.containing.push(ContainingType::new("Outer", TypeKind::Class));
        decl.type_params.push("T".to_string());

        assert_eq!(decl.key().as_str(), "Demo.Models.Outer.Inner`1");
    }

    #[test]
    fn test_type_key_generic_container() {
        let mut decl = TypeDecl::new("Leaf", TypeKind::Record);
        let mut outer = ContainingType::new("Tree", TypeKind::Class);
        outer.type_params = vec!["K".to_string(), "V".to_string()];
        decl.containing.push(outer);

        assert_eq!(decl.key().as_str(), "Tree`2.Leaf");
    }

    #[test]
    fn test_type_key_distinguishes_arity() {
        let mut plain = TypeDecl::new("Box", TypeKind::Class);
        plain.namespace = Some("Demo".to_string());
        let mut generic = plain.clone();
        generic.type_params = vec!["T".to_string()];

        assert_eq!(plain.key().as_str(), "Demo.Box");
        assert_eq!(generic.key().as_str(), "Demo.Box`1");
        assert_ne!(plain.key(), generic.key());
    }

    #[test]
    fn test_type_key_from_reference() {
        assert_eq!(TypeKey::from_reference("Demo.Base").as_str(), "Demo.Base");
        assert_eq!(TypeKey::from_reference("Demo.Box<int>").as_str(), "Demo.Box`1");
        assert_eq!(
            TypeKey::from_reference("Map<string, List<int>>.Entry").as_str(),
            "Map`2.Entry"
        );
        assert_eq!(TypeKey::from_reference("Pair<,>").as_str(), "Pair`2");
        assert_eq!(TypeKey::from_reference("Demo.Box`1").as_str(), "Demo.Box`1");
    }

    #[test]
    fn test_declaration_set_lookup() {
        let mut set = DeclarationSet::new();
        set.add_type(TypeDecl::new("A", TypeKind::Class));
        set.add_type(TypeDecl::new("B", TypeKind::Class));

        assert_eq!(set.len(), 2);
        assert!(set.has_type(&TypeKey::new("A")));
        assert_eq!(
            set.get_type(&"B".into()).map(|t| t.name.as_str()),
            Some("B")
        );
        assert!(set.get_type(&"C".into()).is_none());
    }

    #[test]
    fn test_duplicate_key_first_wins() {
        let mut first = TypeDecl::new("A", TypeKind::Class);
        first.add_field(FieldDecl::readonly("_first", "int"));
        let second = TypeDecl::new("A", TypeKind::Struct);

        let mut set = DeclarationSet::new();
        set.add_type(first);
        set.add_type(second);

        assert_eq!(set.len(), 2);
        let found = set.get_type(&"A".into()).unwrap();
        assert_eq!(found.kind, TypeKind::Class);
        assert_eq!(found.fields.len(), 1);
    }

    #[test]
    fn test_constructor_takes_arguments() {
        let ctor = ConstructorDecl::new(vec![Parameter::new("int", "x")]);
        assert!(ctor.takes_arguments());

        let default_ctor = ConstructorDecl::default();
        assert!(!default_ctor.takes_arguments());

        let static_ctor = ConstructorDecl {
            is_static: true,
            parameters: vec![Parameter::new("int", "x")],
        };
        assert!(!static_ctor.takes_arguments());
    }

    #[test]
    fn test_parameter_display() {
        assert_eq!(Parameter::new("string", "name").to_string(), "string name");
    }

    #[test]
    fn test_field_readonly() {
        let field = FieldDecl::readonly("_x", "int");
        assert!(field.is_readonly);
        assert!(!field.is_static);
        assert!(!field.has_initializer);
    }
}
