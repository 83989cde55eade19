pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod encoding;
pub mod error;
pub mod launcher;
pub mod platform;

pub use config::{Config, DEFAULT_URI};
pub use diagnostics::{DiagnosticSink, StderrSink};
pub use dispatch::{
    DispatchOutcome, LaunchOptions, ShowMode, UriHandlerDispatcher, describe_code, invoke,
};
pub use encoding::{EncodedText, SourceText, TextEncodingConverter, reencode};
pub use error::{EncodingError, Error, InvocationError, Result};
pub use launcher::{LaunchStatus, Launcher};
pub use platform::system_launcher;
