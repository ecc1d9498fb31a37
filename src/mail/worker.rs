//! Mail Worker Task
//!
//! Consumer half of the deferred mail dispatcher: drains the queue, invokes
//! the transport, and records the outcome on the job registry. Transport
//! failures are visible on the job record only; the submitting request was
//! acknowledged at enqueue time.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::message::OutboundEmail;
use super::queue::{JobRegistry, JobState, QueuedMail};
use super::transport::MailTransport;

/// Spawns the worker task that delivers queued contact messages.
///
/// Each job is marked `Processing`, handed to the transport as an email
/// addressed to `recipient`, then marked `Completed` or `Failed` with the
/// transport's error text. The task exits once every producer handle has
/// been dropped and the queue is drained.
///
/// # Arguments
/// * `rx` - Receiver side of the queue created by `MailQueue::new`
/// * `transport` - Outbound delivery implementation
/// * `jobs` - Registry shared with the producing `MailQueue`
/// * `recipient` - Configured destination address for contact mail
pub fn spawn_mail_worker(
    mut rx: mpsc::Receiver<QueuedMail>,
    transport: Arc<dyn MailTransport>,
    jobs: JobRegistry,
    recipient: String,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Mail worker started");

        while let Some(job) = rx.recv().await {
            jobs.mark(job.id, JobState::Processing, None).await;

            let email = OutboundEmail::from_contact(&job.message, &recipient);
            match transport.send(&email).await {
                Ok(()) => {
                    jobs.mark(job.id, JobState::Completed, None).await;
                    info!(job_id = job.id, to = %email.to, "contact mail delivered");
                }
                Err(err) => {
                    warn!(job_id = job.id, error = %err, "contact mail delivery failed");
                    jobs.mark(job.id, JobState::Failed, Some(err.to_string())).await;
                }
            }
        }

        info!("Mail worker stopped: queue closed");
    })
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::queue::MailQueue;
    use crate::mail::transport::TransportError;
    use crate::mail::ContactMessage;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Mutex;

    /// Transport that records every email it is asked to deliver.
    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutboundEmail>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, email: &OutboundEmail) -> Result<(), TransportError> {
            self.sent.lock().await.push(email.clone());
            Ok(())
        }
    }

    /// Transport that fails every delivery.
    struct FailingTransport;

    #[async_trait]
    impl MailTransport for FailingTransport {
        async fn send(&self, _email: &OutboundEmail) -> Result<(), TransportError> {
            Err(TransportError::Unavailable("smtp down".to_string()))
        }
    }

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    async fn wait_for_terminal_state(jobs: &JobRegistry, id: u64) -> JobState {
        for _ in 0..100 {
            if let Some(record) = jobs.get(id).await {
                match record.state {
                    JobState::Completed | JobState::Failed => return record.state,
                    _ => {}
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("job {} never reached a terminal state", id);
    }

    #[tokio::test]
    async fn test_worker_delivers_and_completes_job() {
        let (queue, rx) = MailQueue::new(4);
        let transport = Arc::new(RecordingTransport::default());
        let handle = spawn_mail_worker(
            rx,
            transport.clone(),
            queue.jobs().clone(),
            "owner@example.com".to_string(),
        );

        let id = queue.enqueue(valid_message()).await.unwrap();
        let state = wait_for_terminal_state(queue.jobs(), id).await;
        assert_eq!(state, JobState::Completed);

        // Exactly one send, addressed to the configured recipient, subject
        // carrying the sender name
        let sent = transport.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert!(sent[0].subject.contains("Ada"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_transport_failure_marks_job_failed() {
        let (queue, rx) = MailQueue::new(4);
        let handle = spawn_mail_worker(
            rx,
            Arc::new(FailingTransport),
            queue.jobs().clone(),
            "owner@example.com".to_string(),
        );

        // Enqueue succeeds even though delivery will fail
        let id = queue.enqueue(valid_message()).await.unwrap();

        let state = wait_for_terminal_state(queue.jobs(), id).await;
        assert_eq!(state, JobState::Failed);

        let record = queue.jobs().get(id).await.unwrap();
        assert!(record.error.as_deref().unwrap_or("").contains("smtp down"));

        handle.abort();
    }

    #[tokio::test]
    async fn test_worker_exits_when_producers_drop() {
        let (queue, rx) = MailQueue::new(4);
        let handle = spawn_mail_worker(
            rx,
            Arc::new(RecordingTransport::default()),
            queue.jobs().clone(),
            "owner@example.com".to_string(),
        );

        drop(queue);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("worker should exit once the queue closes")
            .expect("worker task should not panic");
    }
}
