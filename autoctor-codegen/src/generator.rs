//! End-to-end generation from a declaration set.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::output::GeneratedUnit;
use crate::synthesizer::Synthesizer;
use autoctor_model::{DeclarationSet, collect, validate_declarations};
use tokio_util::sync::CancellationToken;

/// Validates, collects and synthesizes a declaration set.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    synthesizer: Synthesizer,
}

impl Generator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            synthesizer: Synthesizer::new(config),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        self.synthesizer.config()
    }

    /// Generates one unit per marked type in `set`.
    ///
    /// # Errors
    /// Returns `CodegenError::Model` if validation is enabled and fails, or
    /// `CodegenError::Cancelled` if `cancel` fires during synthesis.
    pub fn generate(
        &self,
        set: &DeclarationSet,
        cancel: &CancellationToken,
    ) -> Result<Vec<GeneratedUnit>, CodegenError> {
        if self.config().validate {
            validate_declarations(set)?;
        }

        let types = collect(set);
        let units = self.synthesizer.synthesize(&types, cancel)?;
        tracing::info!("generated {} units", units.len());
        Ok(units)
    }
}
