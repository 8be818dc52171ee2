//! Per-type constructor planning.
//!
//! A [`ConstructorPlan`] is everything the renderer needs to print one
//! constructor: its final parameter list, the arguments forwarded to the base
//! constructor and the field assignments. Plans are computed against a
//! [`MemoTable`] holding the parameter lists of types planned earlier in the
//! same run.

use crate::naming::friendly_name;
use autoctor_model::{Parameter, TypeDescriptor, TypeKey};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Ordered constructor signature.
pub type ParameterList = Vec<Parameter>;

/// Parameter lists of already synthesized types, keyed by type identity.
///
/// Each entry is written once and never changed afterwards.
#[derive(Debug, Default)]
pub struct MemoTable {
    entries: HashMap<TypeKey, ParameterList>,
}

impl MemoTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the final parameter list of a type.
    ///
    /// Returns false, leaving the table untouched, if the type already has
    /// an entry.
    pub fn record(&mut self, key: TypeKey, parameters: ParameterList) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                tracing::warn!("parameter list for {} already recorded", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(parameters);
                true
            }
        }
    }

    /// Looks up the parameter list of a type.
    #[must_use]
    pub fn get(&self, key: &TypeKey) -> Option<&ParameterList> {
        self.entries.get(key)
    }

    /// Returns the number of recorded types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the base-construction parameters of a plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseSource {
    /// The single argument-taking constructor declared on the base type.
    DeclaredConstructor,
    /// The parameter list synthesized for the base type earlier in the run.
    Memoized,
    /// No forwarding; the implicit default base construction is used.
    Implicit,
}

/// Assignment of one constructor parameter to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    /// Field name.
    pub field: String,
    /// Parameter name.
    pub parameter: String,
}

/// Computed constructor for one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorPlan {
    /// Base parameters first, then one parameter per assigned field.
    pub parameters: ParameterList,
    /// Arguments passed to the base constructor; `None` when the implicit
    /// base construction is used.
    pub base_arguments: Option<Vec<String>>,
    /// Rule that produced the base parameters.
    pub base_source: BaseSource,
    /// Field assignments in field declaration order.
    pub assignments: Vec<FieldAssignment>,
}

impl ConstructorPlan {
    /// Returns the parameters contributed by the base type.
    #[must_use]
    pub fn base_parameters(&self) -> &[Parameter] {
        let own = self.assignments.len();
        &self.parameters[..self.parameters.len() - own]
    }
}

/// Plans the constructor of `descriptor`.
///
/// The base requirement is chosen in priority order: a single
/// argument-taking constructor declared on the base type, then a memoized
/// parameter list for the base type, then nothing. A base declaring several
/// argument-taking constructors is not forwarded to at all.
#[must_use]
pub fn plan_constructor(descriptor: &TypeDescriptor, memo: &MemoTable) -> ConstructorPlan {
    let (base_parameters, base_source) = resolve_base(descriptor, memo);

    let base_arguments = match base_source {
        BaseSource::Implicit => None,
        _ => Some(base_parameters.iter().map(|p| p.name.clone()).collect()),
    };

    let mut parameters = base_parameters;
    let mut assignments = Vec::new();

    for field in descriptor.eligible_fields() {
        let name = friendly_name(&field.name).to_string();
        parameters.push(Parameter::new(field.type_name.clone(), name.clone()));
        assignments.push(FieldAssignment {
            field: field.name.clone(),
            parameter: name,
        });
    }

    ConstructorPlan {
        parameters,
        base_arguments,
        base_source,
        assignments,
    }
}

fn resolve_base(descriptor: &TypeDescriptor, memo: &MemoTable) -> (ParameterList, BaseSource) {
    let Some(base) = &descriptor.base else {
        return (Vec::new(), BaseSource::Implicit);
    };

    if base.has_ambiguous_constructors() {
        tracing::debug!(
            "{} has several base constructors on {}, not forwarding",
            descriptor.key,
            base.key
        );
        return (Vec::new(), BaseSource::Implicit);
    }

    if let Some(ctor) = base.forwarding_constructor() {
        return (ctor.parameters.clone(), BaseSource::DeclaredConstructor);
    }

    if let Some(parameters) = memo.get(&base.key) {
        return (parameters.clone(), BaseSource::Memoized);
    }

    (Vec::new(), BaseSource::Implicit)
}
