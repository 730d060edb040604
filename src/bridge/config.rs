//! # Bridge configuration.
//!
//! [`BridgeConfig`] holds the few knobs a channel bridge has. Fields are public;
//! read them through the clamped accessors so a `0` never reaches a channel
//! constructor.

use std::borrow::Cow;

/// Settings for one channel bridge.
///
/// ## Field semantics
/// - `name`: label attached to every event the bridge publishes
/// - `capacity`: element buffer between producer and reader (min 1)
/// - `bus_capacity`: event ring buffer size, used only with subscribers (min 1)
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Bridge name carried in events.
    pub name: Cow<'static, str>,

    /// Number of elements the producer may run ahead of the reader.
    ///
    /// With the default of 1 the producer holds at most one undelivered element
    /// plus the one it is trying to send.
    pub capacity: usize,

    /// Capacity of the event bus ring buffer.
    pub bus_capacity: usize,
}

impl BridgeConfig {
    /// Default settings under a custom name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Element buffer size clamped to a minimum of 1.
    #[inline]
    pub fn capacity_clamped(&self) -> usize {
        self.capacity.max(1)
    }

    /// Event bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for BridgeConfig {
    /// - `name = "bridge"`
    /// - `capacity = 1`
    /// - `bus_capacity = 64`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("bridge"),
            capacity: 1,
            bus_capacity: 64,
        }
    }
}
