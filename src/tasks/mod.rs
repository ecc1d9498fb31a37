//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cache sweep: removes expired response-cache entries at configured
//!   intervals. The mail worker lives in the mail module, next to the queue
//!   it consumes.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
