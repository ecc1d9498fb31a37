//! Mail Module
//!
//! Deferred contact-mail dispatch: validated submissions are recorded and
//! pushed onto a bounded queue, the caller is acknowledged immediately, and
//! a worker task delivers asynchronously. Delivery failures surface only on
//! the job record, never to the submitting request.

mod message;
mod queue;
mod transport;
mod worker;

// Re-export public types
pub use message::{ContactMessage, OutboundEmail};
pub use queue::{
    EnqueueError, JobId, JobRecord, JobRegistry, JobState, MailQueue, QueuedMail,
};
pub use transport::{LogTransport, MailTransport, TransportError};
pub use worker::spawn_mail_worker;
