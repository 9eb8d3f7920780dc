use crate::component::form::SubmissionId;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The simulated round trip for a submission is over
    SubmissionElapsed { id: SubmissionId },

    /// Tick for UI refresh
    Tick,
}
