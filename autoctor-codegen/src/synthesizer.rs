//! Constructor synthesis over a set of collected types.
//!
//! Types are processed in two buckets: roots (no base, or a base outside the
//! input set) first, then extended types, each bucket in encountered order.
//! A type's final parameter list is memoized right after its constructor is
//! rendered, so direct descendants in the extended bucket pick it up.
//!
//! The two-bucket order only guarantees that roots are ready before their
//! children. In a chain of three or more levels a grandchild listed before
//! its parent sees no memo entry for the parent and falls back to the
//! implicit base construction.

use crate::config::GeneratorConfig;
use crate::csharp::ConstructorGenerator;
use crate::error::CodegenError;
use crate::naming::unit_name;
use crate::output::GeneratedUnit;
use crate::plan::{MemoTable, plan_constructor};
use autoctor_model::{TypeDescriptor, TypeKey};
use std::collections::HashSet;
use tokio_util::sync::CancellationToken;

/// Splits types into roots and extended types, preserving encountered order.
#[must_use]
pub fn partition(types: &[TypeDescriptor]) -> (Vec<&TypeDescriptor>, Vec<&TypeDescriptor>) {
    let keys: HashSet<&TypeKey> = types.iter().map(|t| &t.key).collect();

    types
        .iter()
        .partition(|t| t.base_key().is_none_or(|base| !keys.contains(base)))
}

/// Synthesizes one constructor unit per type.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: GeneratorConfig,
}

impl Synthesizer {
    /// Creates a synthesizer with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Synthesizes constructors for `types`.
    ///
    /// Each call starts from an empty memo table, so repeated calls over the
    /// same input produce identical units.
    ///
    /// # Errors
    /// Returns `CodegenError::Cancelled` if `cancel` fires before the last
    /// type has been processed. No units are returned in that case.
    pub fn synthesize(
        &self,
        types: &[TypeDescriptor],
        cancel: &CancellationToken,
    ) -> Result<Vec<GeneratedUnit>, CodegenError> {
        self.synthesize_with(types, cancel, |_| {})
    }

    /// Synthesizes constructors, calling `on_unit` after each unit is built.
    fn synthesize_with<F>(
        &self,
        types: &[TypeDescriptor],
        cancel: &CancellationToken,
        mut on_unit: F,
    ) -> Result<Vec<GeneratedUnit>, CodegenError>
    where
        F: FnMut(&GeneratedUnit),
    {
        let (roots, extended) = partition(types);
        tracing::debug!(
            "synthesizing {} types ({} roots, {} extended)",
            types.len(),
            roots.len(),
            extended.len()
        );

        let renderer = ConstructorGenerator::new(&self.config);
        let mut memo = MemoTable::new();
        let mut units = Vec::with_capacity(types.len());

        for descriptor in roots.into_iter().chain(extended) {
            if cancel.is_cancelled() {
                tracing::info!("synthesis cancelled after {} units", units.len());
                return Err(CodegenError::Cancelled);
            }

            let plan = plan_constructor(descriptor, &memo);
            tracing::trace!(
                "{}: {} parameters, base {:?}",
                descriptor.key,
                plan.parameters.len(),
                plan.base_source
            );

            let source = renderer.generate(descriptor, &plan);
            memo.record(descriptor.key.clone(), plan.parameters);
            let unit = GeneratedUnit::new(unit_name(descriptor), source);
            on_unit(&unit);
            units.push(unit);
        }

        Ok(units)
    }
}
