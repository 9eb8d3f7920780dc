//! Timers standing in for the server round trip of a form submission.
//!
//! Each submission gets its own sleeping task that posts
//! [`AppEvent::SubmissionElapsed`] back onto the main event queue. Handles are
//! kept so outstanding completions can be cancelled when the form goes away.

use crate::app::event::AppEvent;
use crate::component::form::SubmissionId;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct SubmissionScheduler {
    handles: HashMap<SubmissionId, JoinHandle<()>>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl SubmissionScheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            handles: HashMap::new(),
            event_tx,
        }
    }

    /// Overlapping submissions are not coalesced; each one completes on its own.
    pub fn schedule(&mut self, id: SubmissionId, delay: Duration) {
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::SubmissionElapsed { id });
        });
        tracing::debug!(submission = id, delay_ms = delay.as_millis() as u64, "completion scheduled");
        if let Some(previous) = self.handles.insert(id, handle) {
            previous.abort();
        }
    }

    /// Forget the handle of a completion that has fired.
    pub fn finish(&mut self, id: SubmissionId) {
        self.handles.remove(&id);
    }

    pub fn cancel(&mut self, ids: &[SubmissionId]) {
        for id in ids {
            if let Some(handle) = self.handles.remove(id) {
                handle.abort();
                tracing::debug!(submission = id, "completion cancelled");
            }
        }
    }

    pub fn cancel_all(&mut self) {
        for (id, handle) in self.handles.drain() {
            handle.abort();
            tracing::debug!(submission = id, "completion cancelled");
        }
    }

    pub fn pending(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_completion_fires_after_exact_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = SubmissionScheduler::new(tx);
        let start = tokio::time::Instant::now();
        scheduler.schedule(3, Duration::from_millis(2000));

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await {
            Some(AppEvent::SubmissionElapsed { id }) => assert_eq!(id, 3),
            other => panic!("expected elapsed submission, got {other:?}"),
        }
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(2002));

        scheduler.finish(3);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_complete_independently() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = SubmissionScheduler::new(tx);
        scheduler.schedule(0, Duration::from_millis(2000));
        tokio::time::sleep(Duration::from_millis(500)).await;
        scheduler.schedule(1, Duration::from_millis(2000));
        assert_eq!(scheduler.pending(), 2);

        let mut fired = Vec::new();
        for _ in 0..2 {
            if let Some(AppEvent::SubmissionElapsed { id }) = rx.recv().await {
                fired.push(id);
            }
        }
        assert_eq!(fired, vec![0, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_completion_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = SubmissionScheduler::new(tx);
        scheduler.schedule(0, Duration::from_millis(2000));
        scheduler.schedule(1, Duration::from_millis(2000));
        scheduler.cancel(&[0]);
        assert_eq!(scheduler.pending(), 1);
        scheduler.cancel_all();
        assert_eq!(scheduler.pending(), 0);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}
