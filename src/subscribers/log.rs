//! # LogWriter: simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [producer-started] bridge="numbers"
//! [producer-cancelled] bridge="numbers" sent=Some(3)
//! [receiver-closed] bridge="numbers" sent=Some(2)
//! [exhausted] bridge="numbers" sent=Some(10)
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::ProducerStarted => {
                println!("[producer-started] bridge={:?}", e.bridge);
            }
            EventKind::ProducerExhausted => {
                println!("[exhausted] bridge={:?} sent={:?}", e.bridge, e.sent);
            }
            EventKind::ProducerCancelled => {
                println!("[producer-cancelled] bridge={:?} sent={:?}", e.bridge, e.sent);
            }
            EventKind::ReceiverClosed => {
                println!("[receiver-closed] bridge={:?} sent={:?}", e.bridge, e.sent);
            }
            EventKind::SubscriberOverflow => {
                println!(
                    "[subscriber-overflow] subscriber={:?} reason={:?}",
                    e.bridge, e.reason
                );
            }
            EventKind::SubscriberPanicked => {
                println!(
                    "[subscriber-panicked] subscriber={} info={}",
                    e.bridge.as_deref().unwrap_or("unknown"),
                    e.reason.as_deref().unwrap_or("unknown"),
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
