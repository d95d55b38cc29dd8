//! The shared mortgage state and the provider slot that owns it.
//!
//! There is exactly one writer path, [`MortgageState::apply_raw`], and every
//! write swaps in a complete new snapshot. Readers copy the snapshot out, so
//! they only ever see the old or the new one.

use tracing::debug;

use crate::{
    error::MortgageError,
    mortgage::{Field, MortgageInputs},
    normalize::normalize,
};

/// A single-field write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldUpdate {
    pub field: Field,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    Committed(f64),
    /// Normalization failed; the previous value is kept.
    Discarded(MortgageError),
}

impl WriteOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

#[derive(Debug, Clone)]
pub struct MortgageState {
    inputs: MortgageInputs,
    revision: u64,
}

impl MortgageState {
    pub fn new(inputs: MortgageInputs) -> Self {
        Self { inputs, revision: 0 }
    }

    pub fn get(&self) -> MortgageInputs {
        self.inputs
    }

    /// Count of committed writes since the session started.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set(&mut self, update: FieldUpdate) {
        self.inputs = self.inputs.with_field(update.field, update.value);
        self.revision += 1;
    }

    /// Normalizes `raw` and commits it to `field`.
    pub fn apply_raw(&mut self, field: Field, raw: &str) -> WriteOutcome {
        match normalize(raw) {
            Ok(value) => {
                self.set(FieldUpdate { field, value });
                debug!(%field, value, revision = self.revision, "committed field");
                WriteOutcome::Committed(value)
            }
            Err(err) => {
                debug!(%field, raw, %err, "discarded write");
                WriteOutcome::Discarded(err)
            }
        }
    }
}

impl Default for MortgageState {
    fn default() -> Self {
        Self::new(MortgageInputs::default())
    }
}

/// Provider slot held by the composition root.
///
/// Consumers reach the state through [`MortgageContext::use_mortgage`]; a
/// context that was never provided answers with
/// [`MortgageError::NoProvider`] instead of a made-up default.
#[derive(Debug, Clone, Default)]
pub struct MortgageContext {
    state: Option<MortgageState>,
}

impl MortgageContext {
    pub fn provide(inputs: MortgageInputs) -> Self {
        Self {
            state: Some(MortgageState::new(inputs)),
        }
    }

    pub fn detached() -> Self {
        Self { state: None }
    }

    pub fn is_provided(&self) -> bool {
        self.state.is_some()
    }

    pub fn use_mortgage(&self) -> Result<&MortgageState, MortgageError> {
        self.state.as_ref().ok_or(MortgageError::NoProvider)
    }

    pub fn use_mortgage_mut(&mut self) -> Result<&mut MortgageState, MortgageError> {
        self.state.as_mut().ok_or(MortgageError::NoProvider)
    }
}
