use std::io;

use tracing::debug;

use super::codes::{ACCESS_DENIED, FILE_NOT_FOUND, NO_ASSOCIATION};
use super::{DispatchRequest, SUCCESS_THRESHOLD, UriHandlerDispatcher};

/// Dispatcher backed by the desktop's URI opener (`xdg-open`, `open`, ...).
///
/// Verb and window state have no counterpart here and are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenDispatcher;

impl OpenDispatcher {
    pub fn new() -> Self {
        Self
    }
}

/// Map an opener failure onto the nearest documented dispatch code.
fn error_code(err: &io::Error) -> isize {
    match err.kind() {
        io::ErrorKind::NotFound => FILE_NOT_FOUND,
        io::ErrorKind::PermissionDenied => ACCESS_DENIED,
        _ => NO_ASSOCIATION,
    }
}

impl UriHandlerDispatcher for OpenDispatcher {
    fn dispatch(&self, request: &DispatchRequest<'_>) -> isize {
        let uri = request.uri.to_string_lossy();
        match open::that(&uri) {
            Ok(()) => SUCCESS_THRESHOLD + 1,
            Err(e) => {
                debug!("Opener failed for '{}': {}", uri, e);
                error_code(&e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(error_code(&not_found), FILE_NOT_FOUND);

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(error_code(&denied), ACCESS_DENIED);

        let other = io::Error::other("exit status 4");
        assert_eq!(error_code(&other), NO_ASSOCIATION);
    }

    #[test]
    fn test_error_codes_classify_as_failure() {
        for kind in [
            io::ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied,
            io::ErrorKind::Other,
        ] {
            assert!(error_code(&io::Error::from(kind)) <= SUCCESS_THRESHOLD);
        }
    }
}
