//! Constructor unit rendering.

use crate::config::GeneratorConfig;
use crate::plan::ConstructorPlan;
use crate::writer::SourceWriter;
use autoctor_model::TypeDescriptor;

/// Name of the hook every generated constructor calls last.
pub const POST_CONSTRUCT_HOOK: &str = "Initialize";

/// Renders one generated unit per type.
pub struct ConstructorGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> ConstructorGenerator<'a> {
    /// Creates a new constructor generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Renders the unit holding the constructor of `descriptor`.
    #[must_use]
    pub fn generate(&self, descriptor: &TypeDescriptor, plan: &ConstructorPlan) -> String {
        let mut writer = SourceWriter::with_indent(self.config.indent.as_str());

        if let Some(header) = &self.config.header {
            writer.line(header);
            writer.blank_line();
        }

        if let Some(namespace) = &descriptor.namespace {
            writer.open_block(format!("namespace {}", namespace));
        }

        // Enclosing types are stored outermost first, which is also the
        // order the blocks have to be opened in.
        for outer in &descriptor.containing {
            writer.open_block(format!(
                "partial {} {}",
                outer.kind.keyword(),
                outer.display_name()
            ));
        }

        writer.open_block(format!(
            "partial {} {}",
            descriptor.kind.keyword(),
            descriptor.display_name()
        ));
        self.generate_constructor(&mut writer, descriptor, plan);
        writer.blank_line();
        writer.line(format!("partial void {}();", POST_CONSTRUCT_HOOK));

        writer.close_all();
        writer.finish()
    }

    /// Writes the constructor declaration and body.
    fn generate_constructor(
        &self,
        writer: &mut SourceWriter,
        descriptor: &TypeDescriptor,
        plan: &ConstructorPlan,
    ) {
        let parameters = plan
            .parameters
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = format!("public {}({})", descriptor.name, parameters);
        if let Some(arguments) = &plan.base_arguments {
            signature.push_str(&format!(" : base({})", arguments.join(", ")));
        }

        writer.open_block(signature);
        for assignment in &plan.assignments {
            writer.line(format!(
                "this.{} = {};",
                assignment.field, assignment.parameter
            ));
        }
        writer.line(format!("{}();", POST_CONSTRUCT_HOOK));
        writer.close_block();
    }
}
