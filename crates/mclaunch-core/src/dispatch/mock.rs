//! Scripted dispatcher for testing
//!
//! Replies with a fixed raw value and records each request instead of
//! contacting the platform.

use std::cell::RefCell;

use super::{DispatchRequest, ShowMode, SUCCESS_THRESHOLD, UriHandlerDispatcher};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedDispatch {
    pub verb: String,
    pub uri: Vec<u16>,
    pub show_mode: ShowMode,
}

impl RecordedDispatch {
    pub fn uri_lossy(&self) -> String {
        String::from_utf16_lossy(&self.uri)
    }
}

#[derive(Debug)]
pub struct ScriptedDispatcher {
    reply: isize,
    requests: RefCell<Vec<RecordedDispatch>>,
}

impl Default for ScriptedDispatcher {
    fn default() -> Self {
        Self::replying(SUCCESS_THRESHOLD + 1)
    }
}

impl ScriptedDispatcher {
    /// A dispatcher that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher that always returns `raw`.
    pub fn replying(raw: isize) -> Self {
        Self {
            reply: raw,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedDispatch> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl UriHandlerDispatcher for ScriptedDispatcher {
    fn dispatch(&self, request: &DispatchRequest<'_>) -> isize {
        self.requests.borrow_mut().push(RecordedDispatch {
            verb: request.verb.to_string(),
            uri: request.uri.as_units().to_vec(),
            show_mode: request.show_mode,
        });
        self.reply
    }
}
