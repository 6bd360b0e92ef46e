// SPDX-License-Identifier: MPL-2.0
//! Submission port.
//!
//! The form controller only decides *when* a submission starts and how its
//! result is applied. Delivering the payload is delegated to a [`Submitter`],
//! which the application runs as an Iced `Task`.

use super::Submission;
use crate::error::SubmissionError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Future returned by [`Submitter::submit`].
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmissionError>> + Send>>;

/// Delivers a form submission somewhere.
pub trait Submitter: Send + Sync {
    /// Starts delivering `submission`. The future resolves once the outcome
    /// is known.
    fn submit(&self, submission: Submission) -> SubmitFuture;
}

/// Stand-in for a backend: waits for a fixed delay, then succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, submission: Submission) -> SubmitFuture {
        let delay = self.delay;
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(
                form = %submission.form,
                fields = submission.values.len(),
                "simulated submission delivered"
            );
            Ok(())
        })
    }
}
