//! Scripted converter for testing
//!
//! Lets tests decide what each phase of the conversion protocol returns
//! and records every call, so the re-encoder can be checked without the
//! platform primitive.

use std::cell::{Cell, RefCell};
use std::ffi::CStr;

use super::{TextEncodingConverter, Utf8Converter};

/// Scripted reply for one phase of the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reply {
    /// Delegate to [`Utf8Converter`].
    #[default]
    Passthrough,
    /// Return `0` and set the last-error code.
    Fail(u32),
    /// Return this count without touching the destination.
    Report(usize),
}

/// One recorded call to the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCall {
    pub source: Vec<u8>,
    /// Destination capacity; `0` for a size query.
    pub capacity: usize,
}

impl ConverterCall {
    pub fn is_size_query(&self) -> bool {
        self.capacity == 0
    }
}

#[derive(Debug, Default)]
pub struct ScriptedConverter {
    size_query: Reply,
    convert: Reply,
    inner: Utf8Converter,
    last_error: Cell<u32>,
    calls: RefCell<Vec<ConverterCall>>,
}

impl ScriptedConverter {
    /// A converter that behaves exactly like [`Utf8Converter`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply for the size query phase.
    pub fn size_query(mut self, reply: Reply) -> Self {
        self.size_query = reply;
        self
    }

    /// Set the reply for the conversion phase.
    pub fn convert(mut self, reply: Reply) -> Self {
        self.convert = reply;
        self
    }

    pub fn calls(&self) -> Vec<ConverterCall> {
        self.calls.borrow().clone()
    }

    pub fn size_query_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| c.is_size_query()).count()
    }

    pub fn convert_count(&self) -> usize {
        self.calls.borrow().iter().filter(|c| !c.is_size_query()).count()
    }
}

impl TextEncodingConverter for ScriptedConverter {
    fn narrow_to_wide(&self, source: &CStr, dest: &mut [u16]) -> usize {
        self.calls.borrow_mut().push(ConverterCall {
            source: source.to_bytes().to_vec(),
            capacity: dest.len(),
        });

        let reply = if dest.is_empty() {
            self.size_query
        } else {
            self.convert
        };

        match reply {
            Reply::Passthrough => {
                let count = self.inner.narrow_to_wide(source, dest);
                if count == 0 {
                    self.last_error.set(self.inner.last_error());
                }
                count
            }
            Reply::Fail(code) => {
                self.last_error.set(code);
                0
            }
            Reply::Report(count) => count,
        }
    }

    fn last_error(&self) -> u32 {
        self.last_error.get()
    }
}
