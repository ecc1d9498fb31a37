//! Mail Queue Module
//!
//! Producer half of the deferred mail dispatcher: validates submissions,
//! records a job, and pushes onto a bounded channel without waiting for
//! delivery. The registry tracks each job through
//! pending -> processing -> completed | failed.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::sync::RwLock;

use super::message::ContactMessage;

/// Queue-assigned job identity.
pub type JobId = u64;

// == Job State ==
/// Lifecycle state of a mail job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Pending,
    Processing,
    Completed,
    Failed,
}

// == Job Record ==
/// Tracked state of one submitted contact message.
#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub id: JobId,
    pub state: JobState,
    /// Delivery failure text, set only in the Failed state
    pub error: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

// == Enqueue Error Enum ==
/// Errors rejecting a submission synchronously, before any job exists.
#[derive(Error, Debug)]
pub enum EnqueueError {
    /// Missing required field
    #[error("{0}")]
    Validation(String),

    /// Queue at capacity
    #[error("Mail queue is full")]
    QueueFull,

    /// Worker side has shut down
    #[error("Mail queue is shut down")]
    QueueClosed,
}

/// A job as carried on the channel to the worker.
#[derive(Debug)]
pub struct QueuedMail {
    pub id: JobId,
    pub message: ContactMessage,
}

// == Job Registry ==
/// Shared job-id to record map giving submissions failure visibility.
#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    inner: Arc<RwLock<HashMap<JobId, JobRecord>>>,
}

impl JobRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a job record by id.
    pub async fn get(&self, id: JobId) -> Option<JobRecord> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Returns the number of tracked jobs.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns true if no jobs are tracked.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Transitions a job to a new state, recording any failure text.
    pub async fn mark(&self, id: JobId, state: JobState, error: Option<String>) {
        let mut jobs = self.inner.write().await;
        if let Some(record) = jobs.get_mut(&id) {
            record.state = state;
            record.error = error;
        }
    }

    async fn insert(&self, record: JobRecord) {
        self.inner.write().await.insert(record.id, record);
    }

    async fn remove(&self, id: JobId) {
        self.inner.write().await.remove(&id);
    }
}

// == Mail Queue ==
/// Producer handle for the mail dispatcher.
#[derive(Debug, Clone)]
pub struct MailQueue {
    tx: mpsc::Sender<QueuedMail>,
    jobs: JobRegistry,
    next_id: Arc<AtomicU64>,
}

impl MailQueue {
    /// Creates a queue of the given capacity, returning the producer handle
    /// and the receiver to hand to `spawn_mail_worker`.
    pub fn new(depth: usize) -> (Self, mpsc::Receiver<QueuedMail>) {
        let (tx, rx) = mpsc::channel(depth);
        let queue = Self {
            tx,
            jobs: JobRegistry::new(),
            next_id: Arc::new(AtomicU64::new(1)),
        };
        (queue, rx)
    }

    /// Returns the job registry shared with the worker.
    pub fn jobs(&self) -> &JobRegistry {
        &self.jobs
    }

    /// Validates and enqueues a contact message, returning its job id.
    ///
    /// Returns as soon as the job is queued; delivery happens asynchronously.
    /// Validation failures and an unavailable queue reject the submission
    /// here, with no job left behind.
    pub async fn enqueue(&self, message: ContactMessage) -> Result<JobId, EnqueueError> {
        if let Some(msg) = message.validate() {
            return Err(EnqueueError::Validation(msg));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.jobs
            .insert(JobRecord {
                id,
                state: JobState::Pending,
                error: None,
                submitted_at: Utc::now(),
            })
            .await;

        // try_send keeps the enqueue path non-blocking: a saturated queue is
        // a rejected submission, not a silent drop or an indefinite wait
        match self.tx.try_send(QueuedMail { id, message }) {
            Ok(()) => Ok(id),
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.jobs.remove(id).await;
                Err(EnqueueError::QueueFull)
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.jobs.remove(id).await;
                Err(EnqueueError::QueueClosed)
            }
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_enqueue_records_pending_job() {
        let (queue, mut rx) = MailQueue::new(4);

        let id = queue.enqueue(valid_message()).await.unwrap();

        let record = queue.jobs().get(id).await.unwrap();
        assert_eq!(record.state, JobState::Pending);
        assert!(record.error.is_none());

        let queued = rx.recv().await.unwrap();
        assert_eq!(queued.id, id);
        assert_eq!(queued.message, valid_message());
    }

    #[tokio::test]
    async fn test_enqueue_assigns_distinct_ids() {
        let (queue, _rx) = MailQueue::new(4);

        let first = queue.enqueue(valid_message()).await.unwrap();
        let second = queue.enqueue(valid_message()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(queue.jobs().len().await, 2);
    }

    #[tokio::test]
    async fn test_enqueue_rejects_invalid_message_without_job() {
        let (queue, _rx) = MailQueue::new(4);

        let mut message = valid_message();
        message.name = String::new();

        let result = queue.enqueue(message).await;
        assert!(matches!(result, Err(EnqueueError::Validation(_))));

        // No job created for the rejected submission
        assert!(queue.jobs().is_empty().await);
    }

    #[tokio::test]
    async fn test_enqueue_full_queue_rejected() {
        // Capacity 1 and no worker draining
        let (queue, _rx) = MailQueue::new(1);

        queue.enqueue(valid_message()).await.unwrap();
        let result = queue.enqueue(valid_message()).await;

        assert!(matches!(result, Err(EnqueueError::QueueFull)));
        // Only the accepted submission is tracked
        assert_eq!(queue.jobs().len().await, 1);
    }

    #[tokio::test]
    async fn test_enqueue_closed_queue_rejected() {
        let (queue, rx) = MailQueue::new(4);
        drop(rx);

        let result = queue.enqueue(valid_message()).await;
        assert!(matches!(result, Err(EnqueueError::QueueClosed)));
        assert!(queue.jobs().is_empty().await);
    }
}
