//! Platform-independent UTF-8 to UTF-16 converter.

use std::cell::Cell;
use std::ffi::CStr;

use encoding_rs::UTF_8;
use tracing::trace;

use super::TextEncodingConverter;

/// Same numeric value as the Win32 error of the same name.
pub const ERROR_INSUFFICIENT_BUFFER: u32 = 122;

/// Converter backed by `encoding_rs`.
///
/// Malformed input is replaced with U+FFFD rather than rejected, the same as
/// the platform primitive called without `MB_ERR_INVALID_CHARS`.
#[derive(Debug, Default)]
pub struct Utf8Converter {
    last_error: Cell<u32>,
}

impl Utf8Converter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextEncodingConverter for Utf8Converter {
    fn narrow_to_wide(&self, source: &CStr, dest: &mut [u16]) -> usize {
        let (decoded, had_errors) = UTF_8.decode_without_bom_handling(source.to_bytes_with_nul());
        if had_errors {
            trace!("Replaced malformed UTF-8 sequences with U+FFFD");
        }

        let required = decoded.encode_utf16().count();
        if dest.is_empty() {
            return required;
        }

        if dest.len() < required {
            self.last_error.set(ERROR_INSUFFICIENT_BUFFER);
            return 0;
        }

        for (slot, unit) in dest.iter_mut().zip(decoded.encode_utf16()) {
            *slot = unit;
        }
        required
    }

    fn last_error(&self) -> u32 {
        self.last_error.get()
    }
}
