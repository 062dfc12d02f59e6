//! Key-value messages from the companion application.
//!
//! The host's transport delivers a dictionary of tuples. Weather reports use the
//! `Temperature` and `Conditions` string keys; the configuration page sends the four
//! `Show*` toggles. Unknown combinations are the receiver's problem: lookups just
//! return `None`.
//!
//! String tuples borrow from the transport's inbox buffer and are never truncated
//! here; only the display buffers they are formatted into have a fixed capacity.

use heapless::Vec;

/// Maximum number of tuples in one message.
pub const MAX_TUPLES: usize = 8;

/// Message keys shared with the companion application.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKey {
    Temperature,
    Conditions,
    ShowHeartRate,
    ShowBackground,
    ShowSteps,
    ShowBattery,
}

impl MessageKey {
    /// Snake-case name, used as the persisted setting name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Conditions => "conditions",
            Self::ShowHeartRate => "show_heart_rate",
            Self::ShowBackground => "show_background",
            Self::ShowSteps => "show_steps",
            Self::ShowBattery => "show_battery",
        }
    }
}

/// Tuple payload.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TupleValue<'a> {
    CString(&'a str),
    Int(i32),
    Bool(bool),
}

impl<'a> TupleValue<'a> {
    /// String payload, if this is a string tuple.
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::CString(s) => Some(*s),
            Self::Int(_) | Self::Bool(_) => None,
        }
    }

    /// Boolean payload. Integer tuples are true when non-zero, which is how toggles
    /// arrive from the configuration page.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Int(i) => Some(*i != 0),
            Self::CString(_) => None,
        }
    }
}

/// One key-value pair.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tuple<'a> {
    pub key: MessageKey,
    pub value: TupleValue<'a>,
}

/// A message from the companion application.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AppMessage<'a> {
    tuples: Vec<Tuple<'a>, MAX_TUPLES>,
}

impl<'a> AppMessage<'a> {
    /// Create a new empty message.
    pub const fn new() -> Self { Self { tuples: Vec::new() } }

    /// Insert or replace a tuple. Returns the tuple back if the message is full.
    pub fn insert(
        &mut self,
        key: MessageKey,
        value: TupleValue<'a>,
    ) -> Result<(), Tuple<'a>> {
        if let Some(existing) = self.tuples.iter_mut().find(|t| t.key == key) {
            existing.value = value;
            return Ok(());
        }
        self.tuples.push(Tuple { key, value })
    }

    /// Builder-style string insert; the tuple is dropped if the message is full.
    #[must_use]
    pub fn with_string(
        mut self,
        key: MessageKey,
        value: &'a str,
    ) -> Self {
        self.insert(key, TupleValue::CString(value)).ok();
        self
    }

    /// Builder-style boolean insert; the tuple is dropped if the message is full.
    #[must_use]
    pub fn with_bool(
        mut self,
        key: MessageKey,
        value: bool,
    ) -> Self {
        self.insert(key, TupleValue::Bool(value)).ok();
        self
    }

    /// Builder-style integer insert; the tuple is dropped if the message is full.
    #[must_use]
    pub fn with_int(
        mut self,
        key: MessageKey,
        value: i32,
    ) -> Self {
        self.insert(key, TupleValue::Int(value)).ok();
        self
    }

    /// Find the value stored under `key`.
    pub fn find(
        &self,
        key: MessageKey,
    ) -> Option<&TupleValue<'a>> {
        self.tuples.iter().find(|t| t.key == key).map(|t| &t.value)
    }

    /// Find a string value stored under `key`.
    pub fn find_str(
        &self,
        key: MessageKey,
    ) -> Option<&'a str> {
        self.find(key).and_then(TupleValue::as_str)
    }

    /// Find a boolean (or integer toggle) stored under `key`.
    pub fn find_bool(
        &self,
        key: MessageKey,
    ) -> Option<bool> {
        self.find(key).and_then(TupleValue::as_bool)
    }

    /// Number of tuples.
    #[inline]
    pub fn len(&self) -> usize { self.tuples.len() }

    /// Check if the message carries no tuples.
    #[inline]
    pub fn is_empty(&self) -> bool { self.tuples.is_empty() }
}

// =============================================================================
// Tests
// =============================================================================
