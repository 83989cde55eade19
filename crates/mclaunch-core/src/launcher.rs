//! The re-encode then dispatch pipeline.

use tracing::{debug, info};

use crate::diagnostics::DiagnosticSink;
use crate::dispatch::{LaunchOptions, UriHandlerDispatcher, invoke, uri_scheme};
use crate::encoding::{SourceText, TextEncodingConverter, reencode};
use crate::error::{Error, Result};

/// Final status of a launch, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    Success,
    Failure,
}

impl LaunchStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

pub struct Launcher<C, D> {
    converter: C,
    dispatcher: D,
    options: LaunchOptions,
}

impl<C, D> Launcher<C, D>
where
    C: TextEncodingConverter,
    D: UriHandlerDispatcher,
{
    pub fn new(converter: C, dispatcher: D, options: LaunchOptions) -> Self {
        Self {
            converter,
            dispatcher,
            options,
        }
    }

    pub fn options(&self) -> &LaunchOptions {
        &self.options
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Re-encode `source` and dispatch it. Stops at the first failure.
    pub fn launch(&self, source: SourceText<'_>) -> Result<()> {
        let uri = reencode(&self.converter, source)?;
        debug!("Opening '{}'", uri);
        invoke(&self.dispatcher, &uri, &self.options)?;
        info!("Handed '{}' to its registered handler", uri);
        Ok(())
    }

    /// Launch and report a failure, if any, through `sink`.
    pub fn run<S: DiagnosticSink>(&self, source: SourceText<'_>, sink: &S) -> LaunchStatus {
        match self.launch(source) {
            Ok(()) => LaunchStatus::Success,
            Err(e) => {
                report(&e, source, &self.options, sink);
                LaunchStatus::Failure
            }
        }
    }
}

/// Write `error` to the channel matching the step that produced it.
pub fn report<S: DiagnosticSink + ?Sized>(
    error: &Error,
    source: SourceText<'_>,
    options: &LaunchOptions,
    sink: &S,
) {
    match error {
        Error::Invocation(_) => {
            sink.wide(&wide_line(&format!("Error: {}", error)));
            sink.wide(&wide_line(&guidance(source, options)));
        }
        _ => sink.narrow(&format!("Error: {}", error)),
    }
}

fn guidance(source: SourceText<'_>, options: &LaunchOptions) -> String {
    let uri = source.as_c_str().to_string_lossy();
    match uri_scheme(&uri) {
        Some(scheme) => format!(
            "Please ensure the {} is installed and the URI scheme '{}://' is correctly associated.",
            options.handler_name, scheme
        ),
        None => format!(
            "Please ensure the {} is installed and the URI '{}' is correctly associated.",
            options.handler_name, uri
        ),
    }
}

fn wide_line(line: &str) -> Vec<u16> {
    line.encode_utf16().collect()
}
