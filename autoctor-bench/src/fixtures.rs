//! Synthetic declaration sets.

use autoctor_model::{DeclarationSet, FieldDecl, TypeDecl, TypeKey, TypeKind};
use std::fmt::Write;

const MARKER: &str = "AutoConstruct";

fn marked_type(name: String, base: Option<String>, fields: usize) -> TypeDecl {
    let mut decl = TypeDecl::new(name, TypeKind::Class);
    decl.namespace = Some("Bench".to_string());
    decl.base = base.map(TypeKey::new);
    decl.add_attribute(MARKER);
    for i in 0..fields {
        decl.add_field(FieldDecl::readonly(format!("_f{}", i), "int"));
    }
    decl
}

/// Builds `count` unrelated marked types with `fields` fields each.
#[must_use]
pub fn wide_set(count: usize, fields: usize) -> DeclarationSet {
    let mut set = DeclarationSet::new();
    for i in 0..count {
        set.add_type(marked_type(format!("Wide{}", i), None, fields));
    }
    set
}

/// Builds a single inheritance chain `depth` types long, root first.
#[must_use]
pub fn deep_set(depth: usize, fields: usize) -> DeclarationSet {
    let mut set = DeclarationSet::new();
    for i in 0..depth {
        let base = (i > 0).then(|| format!("Bench.Deep{}", i - 1));
        set.add_type(marked_type(format!("Deep{}", i), base, fields));
    }
    set
}

/// Renders the declaration XML for `count` marked types.
#[must_use]
pub fn wide_xml(count: usize, fields: usize) -> String {
    let mut xml = String::from("<declarations>\n  <namespace name=\"Bench\">\n");
    for i in 0..count {
        let _ = writeln!(xml, "    <type name=\"Wide{}\" kind=\"class\">", i);
        let _ = writeln!(xml, "      <attribute name=\"{}\"/>", MARKER);
        for f in 0..fields {
            let _ = writeln!(
                xml,
                "      <field name=\"_f{}\" type=\"int\" readonly=\"true\"/>",
                f
            );
        }
        xml.push_str("    </type>\n");
    }
    xml.push_str("  </namespace>\n</declarations>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_set() {
        let set = wide_set(10, 3);
        assert_eq!(set.len(), 10);
        assert!(set.iter().all(|t| t.base.is_none() && t.fields.len() == 3));
    }

    #[test]
    fn test_deep_set_chain() {
        let set = deep_set(4, 1);
        let last = set.get_type(&"Bench.Deep3".into()).unwrap();
        assert_eq!(last.base.as_ref().map(|b| b.as_str()), Some("Bench.Deep2"));
        assert!(set.get_type(&"Bench.Deep0".into()).unwrap().base.is_none());
    }

    #[test]
    fn test_wide_xml_parses() {
        let set = autoctor_model::parse_declarations(&wide_xml(5, 2)).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(autoctor_model::collect(&set).len(), 5);
    }
}
