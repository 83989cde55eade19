use std::ffi::CStr;

use windows::Win32::Foundation::GetLastError;
use windows::Win32::Globalization::{CP_UTF8, MULTI_BYTE_TO_WIDE_CHAR_FLAGS, MultiByteToWideChar};

use super::TextEncodingConverter;

/// Converter backed by `MultiByteToWideChar` with the UTF-8 code page.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Converter;

impl Win32Converter {
    pub fn new() -> Self {
        Self
    }
}

impl TextEncodingConverter for Win32Converter {
    fn narrow_to_wide(&self, source: &CStr, dest: &mut [u16]) -> usize {
        // Passing the terminator in the source slice gives the same result as a
        // length of -1: the terminator is converted and counted.
        let bytes = source.to_bytes_with_nul();
        let dest = if dest.is_empty() { None } else { Some(dest) };

        // SAFETY: `bytes` and `dest` are valid slices for the duration of the call;
        // the windows crate passes their lengths alongside the pointers.
        let count =
            unsafe { MultiByteToWideChar(CP_UTF8, MULTI_BYTE_TO_WIDE_CHAR_FLAGS(0), bytes, dest) };

        usize::try_from(count).unwrap_or(0)
    }

    fn last_error(&self) -> u32 {
        // SAFETY: GetLastError only reads the calling thread's error slot.
        unsafe { GetLastError().0 }
    }
}
