//! # autoctor
//!
//! Constructor synthesis for annotated C# type declarations.
//!
//! Types marked with `[AutoConstruct]` get a generated `public` constructor
//! that assigns every uninitialized read-only field, forwards base-type
//! construction parameters and finally calls a `partial void Initialize()`
//! hook.
//!
//! ## Quick Start
//!
//! ```ignore
//! use autoctor::prelude::*;
//!
//! let set = parse_declarations(xml)?;
//! let units = Generator::default().generate(&set, &CancellationToken::new())?;
//! write_units(Path::new("generated"), &units)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - Declaration model, XML parsing, validation and collection
//! - [`codegen`] - Constructor synthesis and C# rendering

pub mod prelude;

/// Declaration model, parsing, validation and collection.
pub mod model {
    pub use autoctor_model::*;
}

/// Constructor synthesis and source generation.
pub mod codegen {
    pub use autoctor_codegen::*;
}

pub use autoctor_codegen::{
    CodegenError, GeneratedUnit, Generator, GeneratorConfig, generate_from_file,
    generate_from_xml, write_units,
};
pub use autoctor_model::{DeclarationSet, parse_declarations, parse_declarations_file};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_round_trip() {
        let xml = r#"<declarations>
            <type name="Point" kind="struct">
                <attribute name="AutoConstruct"/>
                <field name="_x" type="double" readonly="true"/>
                <field name="_y" type="double" readonly="true"/>
            </type>
        </declarations>"#;

        let set = parse_declarations(xml).unwrap();
        let units = Generator::default()
            .generate(&set, &CancellationToken::new())
            .unwrap();

        assert_eq!(units.len(), 1);
        assert_eq!(units[0].file_name(), "Point.g.cs");
        assert!(units[0].source.contains("public Point(double x, double y)"));
    }
}
