//! Handing a URI to the handler registered for its scheme.
//!
//! Dispatchers return the platform's raw handle-or-error value. Callers go
//! through [`invoke`], which classifies that value once via
//! [`DispatchOutcome::classify`].

mod codes;
mod portable;
#[cfg(target_os = "windows")]
mod win32;

// Scripted dispatcher for testing (always available for unit and integration tests)
#[doc(hidden)]
pub mod mock;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::debug;

use crate::encoding::EncodedText;
use crate::error::InvocationError;

pub use codes::describe_code;
pub use portable::OpenDispatcher;
#[cfg(target_os = "windows")]
pub use win32::ShellDispatcher;

#[doc(hidden)]
pub use mock::{RecordedDispatch, ScriptedDispatcher};

/// Raw results above this value mean the request was dispatched.
pub const SUCCESS_THRESHOLD: isize = 32;

pub const DEFAULT_VERB: &str = "open";
pub const DEFAULT_HANDLER_NAME: &str = "Minecraft Launcher";

/// Window state requested for the handler application.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShowMode {
    #[default]
    Normal,
    Hidden,
    Minimized,
    Maximized,
}

impl ShowMode {
    /// The platform's window-show command value.
    pub fn as_raw(&self) -> i32 {
        match self {
            Self::Hidden => 0,
            Self::Normal => 1,
            Self::Minimized => 2,
            Self::Maximized => 3,
        }
    }
}

/// Fixed parameters of a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub verb: String,
    pub show_mode: ShowMode,
    /// Application named in the guidance message on failure.
    pub handler_name: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            verb: DEFAULT_VERB.to_string(),
            show_mode: ShowMode::Normal,
            handler_name: DEFAULT_HANDLER_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DispatchRequest<'a> {
    pub verb: &'a str,
    pub uri: &'a EncodedText,
    pub show_mode: ShowMode,
}

/// Access to the platform's open-by-registered-handler service.
pub trait UriHandlerDispatcher {
    /// Dispatch the request and return the raw platform result.
    fn dispatch(&self, request: &DispatchRequest<'_>) -> isize;
}

impl<T: UriHandlerDispatcher + ?Sized> UriHandlerDispatcher for &T {
    fn dispatch(&self, request: &DispatchRequest<'_>) -> isize {
        (**self).dispatch(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Dispatched(isize),
    Failed(isize),
}

impl DispatchOutcome {
    pub fn classify(raw: isize) -> Self {
        if raw > SUCCESS_THRESHOLD {
            Self::Dispatched(raw)
        } else {
            Self::Failed(raw)
        }
    }

    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched(_))
    }

    pub fn into_result(self) -> Result<(), InvocationError> {
        match self {
            Self::Dispatched(_) => Ok(()),
            Self::Failed(code) => Err(InvocationError::DispatchFailed(code)),
        }
    }
}

/// Ask the platform to open `uri` with its registered handler.
///
/// Success only means the request was accepted; the handler's own startup is
/// not observed.
pub fn invoke<D>(
    dispatcher: &D,
    uri: &EncodedText,
    options: &LaunchOptions,
) -> Result<(), InvocationError>
where
    D: UriHandlerDispatcher + ?Sized,
{
    let request = DispatchRequest {
        verb: &options.verb,
        uri,
        show_mode: options.show_mode,
    };
    let raw = dispatcher.dispatch(&request);

    let outcome = DispatchOutcome::classify(raw);
    match outcome {
        DispatchOutcome::Dispatched(_) => {
            debug!("Dispatched '{}' with verb '{}'", uri, options.verb);
        }
        DispatchOutcome::Failed(code) => {
            debug!(
                "Dispatch of '{}' failed: {}",
                uri,
                describe_code(code).unwrap_or("unknown error")
            );
        }
    }
    outcome.into_result()
}

/// Scheme part of a URI, without the trailing `:`.
pub fn uri_scheme(uri: &str) -> Option<&str> {
    let (scheme, _) = uri.split_once(':')?;
    if scheme.is_empty() {
        None
    } else {
        Some(scheme)
    }
}
