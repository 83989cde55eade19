//! Narrow-to-wide text re-encoding.
//!
//! The conversion primitive follows the platform's two-call protocol: the
//! first call passes an empty destination and returns the number of wide code
//! units needed (terminator included), the second call fills a buffer of
//! exactly that size. [`reencode`] drives both calls and strips the
//! terminator from the result.

mod portable;
#[cfg(target_os = "windows")]
mod win32;

// Scripted converter for testing (always available for unit and integration tests)
#[doc(hidden)]
pub mod mock;

use std::ffi::CStr;
use std::fmt;

use tracing::{debug, trace};

use crate::error::EncodingError;

pub use portable::{ERROR_INSUFFICIENT_BUFFER, Utf8Converter};
#[cfg(target_os = "windows")]
pub use win32::Win32Converter;

#[doc(hidden)]
pub use mock::{ConverterCall, Reply, ScriptedConverter};

/// Wide code unit used as the end marker.
const WIDE_NUL: u16 = 0;

/// Access to a narrow-to-wide conversion primitive.
///
/// Implementations mirror the platform call: an empty `dest` is a size query,
/// the return value counts code units including the terminator, and `0`
/// signals failure with the cause available from [`last_error`].
///
/// [`last_error`]: TextEncodingConverter::last_error
pub trait TextEncodingConverter {
    /// Convert `source` (terminator included) into `dest`.
    fn narrow_to_wide(&self, source: &CStr, dest: &mut [u16]) -> usize;

    /// Diagnostic code of the most recent failed call.
    fn last_error(&self) -> u32;
}

impl<T: TextEncodingConverter + ?Sized> TextEncodingConverter for &T {
    fn narrow_to_wide(&self, source: &CStr, dest: &mut [u16]) -> usize {
        (**self).narrow_to_wide(source, dest)
    }

    fn last_error(&self) -> u32 {
        (**self).last_error()
    }
}

/// Borrowed narrow text with an implicit end marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceText<'a>(&'a CStr);

impl<'a> SourceText<'a> {
    /// The servers tab of the Minecraft launcher.
    pub const DEFAULT: SourceText<'static> = SourceText(c"minecraft://openServersTab/");

    pub fn new(text: &'a CStr) -> Self {
        Self(text)
    }

    pub fn as_c_str(&self) -> &'a CStr {
        self.0
    }

    /// Length in narrow code units, terminator excluded.
    pub fn len(&self) -> usize {
        self.0.to_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> From<&'a CStr> for SourceText<'a> {
    fn from(text: &'a CStr) -> Self {
        Self(text)
    }
}

/// Wide text without a trailing terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EncodedText {
    units: Vec<u16>,
}

impl EncodedText {
    /// Wrap wide code units, dropping one trailing terminator if present.
    pub fn from_units(mut units: Vec<u16>) -> Self {
        if units.last() == Some(&WIDE_NUL) {
            units.pop();
        }
        Self { units }
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Number of characters, counted in wide code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Copy of the text with the terminator re-appended, for FFI calls.
    pub fn to_nul_terminated(&self) -> Vec<u16> {
        let mut buffer = Vec::with_capacity(self.units.len() + 1);
        buffer.extend_from_slice(&self.units);
        buffer.push(WIDE_NUL);
        buffer
    }
}

impl fmt::Display for EncodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Re-encode `source` into wide text using the size-then-convert protocol.
///
/// # Errors
///
/// Returns [`EncodingError::SizeQueryFailed`] if the size query reports zero,
/// or [`EncodingError::ConversionFailed`] if the conversion call does. The
/// conversion is never attempted after a failed size query.
pub fn reencode<C>(converter: &C, source: SourceText<'_>) -> Result<EncodedText, EncodingError>
where
    C: TextEncodingConverter + ?Sized,
{
    let required = converter.narrow_to_wide(source.as_c_str(), &mut []);
    if required == 0 {
        let code = converter.last_error();
        debug!("Size query failed (code {})", code);
        return Err(EncodingError::SizeQueryFailed(code));
    }
    trace!(
        "Size query: {} narrow units need {} wide units",
        source.len(),
        required
    );

    let mut buffer = vec![WIDE_NUL; required];
    let written = converter.narrow_to_wide(source.as_c_str(), &mut buffer);
    if written == 0 {
        let code = converter.last_error();
        debug!("Conversion failed (code {})", code);
        return Err(EncodingError::ConversionFailed(code));
    }

    // The primitive may write fewer units than it asked for; keep only those.
    buffer.truncate(written);
    let text = EncodedText::from_units(buffer);
    debug!("Re-encoded {} characters", text.len());
    Ok(text)
}
