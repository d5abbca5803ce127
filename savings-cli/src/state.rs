//! Calculator state for the savings calculator front end.
//!
//! Holds the current inputs together with the estimate derived from them.
//! Every accepted edit recomputes the whole estimate, so the two never
//! drift apart.

use savings_core::{
    InputField, SavingsEstimate, SavingsEstimator, SavingsEstimatorError, SavingsInput,
};
use tracing::{debug, warn};

use crate::utils::coerce_whole_number;

/// Callback fired after every recomputation.
pub type OnChange = Box<dyn FnMut(&SavingsInput, &SavingsEstimate)>;

/// Result of feeding raw form text into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The value was stored and the estimate recomputed.
    Applied(i64),
    /// The text was not a number; nothing changed.
    Ignored,
    /// The value could not be estimated; nothing changed.
    Rejected(SavingsEstimatorError),
}

/// The calculator's input/result pair and its estimator.
pub struct CalculatorState {
    estimator: SavingsEstimator,
    initial: SavingsInput,
    inputs: SavingsInput,
    results: SavingsEstimate,
    on_change: Option<OnChange>,
}

impl std::fmt::Debug for CalculatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculatorState")
            .field("estimator", &self.estimator)
            .field("initial", &self.initial)
            .field("inputs", &self.inputs)
            .field("results", &self.results)
            .finish_non_exhaustive()
    }
}

impl CalculatorState {
    /// Creates a state for `inputs`, computing the initial estimate.
    pub fn new(
        estimator: SavingsEstimator,
        inputs: SavingsInput,
    ) -> Result<Self, SavingsEstimatorError> {
        let results = estimator.calculate(&inputs)?;
        Ok(Self {
            estimator,
            initial: inputs,
            inputs,
            results,
            on_change: None,
        })
    }

    /// Registers the callback fired after each recomputation.
    pub fn with_on_change(
        mut self,
        on_change: impl FnMut(&SavingsInput, &SavingsEstimate) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn inputs(&self) -> &SavingsInput {
        &self.inputs
    }

    pub fn results(&self) -> &SavingsEstimate {
        &self.results
    }

    pub fn estimator(&self) -> &SavingsEstimator {
        &self.estimator
    }

    /// Applies raw form text to `field`.
    pub fn handle_input(
        &mut self,
        field: InputField,
        raw: &str,
    ) -> InputOutcome {
        let Some(value) = coerce_whole_number(raw) else {
            return InputOutcome::Ignored;
        };
        match self.set(field, value) {
            Ok(()) => InputOutcome::Applied(value),
            Err(e) => InputOutcome::Rejected(e),
        }
    }

    /// Stores `value` in `field` and recomputes the estimate.
    ///
    /// On error the previous inputs and estimate are kept.
    pub fn set(
        &mut self,
        field: InputField,
        value: i64,
    ) -> Result<(), SavingsEstimatorError> {
        self.replace_inputs(self.inputs.with(field, value))
            .inspect_err(|e| warn!(field = field.as_str(), value, "edit rejected: {e}"))
    }

    /// Restores the inputs the state was created with.
    pub fn reset(&mut self) -> Result<(), SavingsEstimatorError> {
        self.replace_inputs(self.initial)
    }

    fn replace_inputs(
        &mut self,
        inputs: SavingsInput,
    ) -> Result<(), SavingsEstimatorError> {
        let results = self.estimator.calculate(&inputs)?;
        self.inputs = inputs;
        self.results = results;
        debug!(inputs = ?self.inputs, "inputs updated");
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&self.inputs, &self.results);
        }
        Ok(())
    }
}
