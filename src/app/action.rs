use crate::component::form::SubmissionId;
use std::time::Duration;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    ScheduleCompletion { id: SubmissionId, delay: Duration },
    Quit,
}
