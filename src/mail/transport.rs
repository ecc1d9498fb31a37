//! Mail Transport Contract
//!
//! Abstracts the outbound email service. The binary ships with a logging
//! transport; an SMTP-backed implementation plugs in behind the same trait,
//! and tests substitute recording or failing fakes.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::message::OutboundEmail;

// == Transport Error Enum ==
/// Errors produced by a mail transport.
///
/// These surface only on the job record; the original HTTP caller has
/// already been acknowledged by the time delivery is attempted.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Transport unreachable
    #[error("Mail transport unavailable: {0}")]
    Unavailable(String),

    /// Transport refused the message
    #[error("Message rejected by transport: {0}")]
    Rejected(String),
}

// == Mail Transport Trait ==
/// Outbound email delivery contract.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Attempts delivery of one email.
    async fn send(&self, email: &OutboundEmail) -> Result<(), TransportError>;
}

// == Log Transport ==
/// Transport that logs the email instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<(), TransportError> {
        info!(
            to = %email.to,
            from = %email.from,
            subject = %email.subject,
            "delivering contact mail (log transport)"
        );
        Ok(())
    }
}
