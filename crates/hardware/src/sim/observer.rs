//! Step subscription.
//!
//! Renderers and tools register a [`StepObserver`] with the
//! [`Simulator`](super::Simulator) instead of holding references into
//! simulator state. Observers are called after every successful step, in
//! registration order, with the record of what changed.

use super::record::StepRecord;

/// Receives a [`StepRecord`] after each retired instruction.
pub trait StepObserver {
    /// Called once per successful step.
    fn on_step(&mut self, record: &StepRecord);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepRecord),
{
    fn on_step(&mut self, record: &StepRecord) {
        self(record);
    }
}
