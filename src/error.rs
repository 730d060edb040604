//! Error types used by the channel bridge.
//!
//! [`BridgeError`] covers failures of the bridge machinery itself: no runtime to
//! spawn on, a thread the OS would not start, or a producer that never
//! reported how it ended. How a healthy
//! producer ended is not an error; see [`BridgeExit`](crate::bridge::BridgeExit).
//!
//! Like the event types, it offers `as_label`/`as_message` for logs and metrics.

use std::any::Any;

use thiserror::Error;

/// # Errors produced by a channel bridge.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The bridge was started outside a tokio runtime.
    #[error("no tokio runtime available to run the producer")]
    NoRuntime,

    /// Driving the source (or one of its adapters) panicked.
    #[error("producer panicked: {info}")]
    ProducerPanicked {
        /// Panic payload text.
        info: String,
    },

    /// The task forwarding events to subscribers panicked.
    #[error("event listener panicked: {info}")]
    ListenerPanicked {
        /// Panic payload text.
        info: String,
    },

    /// The runtime shut down before the producer finished.
    #[error("producer aborted before completion")]
    ProducerAborted,

    /// The OS refused to start a producer thread.
    #[error("failed to spawn producer thread: {0}")]
    Spawn(#[source] std::io::Error),
}

impl BridgeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use seqflow::BridgeError;
    ///
    /// let err = BridgeError::ProducerPanicked { info: "boom".into() };
    /// assert_eq!(err.as_label(), "bridge_producer_panicked");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BridgeError::NoRuntime => "bridge_no_runtime",
            BridgeError::ProducerPanicked { .. } => "bridge_producer_panicked",
            BridgeError::ListenerPanicked { .. } => "bridge_listener_panicked",
            BridgeError::ProducerAborted => "bridge_producer_aborted",
            BridgeError::Spawn(_) => "bridge_spawn_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BridgeError::NoRuntime => "no runtime".to_string(),
            BridgeError::ProducerPanicked { info } => format!("panicked: {info}"),
            BridgeError::ListenerPanicked { info } => format!("listener panicked: {info}"),
            BridgeError::ProducerAborted => "aborted".to_string(),
            BridgeError::Spawn(e) => format!("spawn failed: {e}"),
        }
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
