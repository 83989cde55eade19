use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SHOW_WINDOW_CMD;
use windows::core::{HSTRING, PCWSTR};

use super::{DispatchRequest, UriHandlerDispatcher};

/// Dispatcher backed by `ShellExecuteW`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellDispatcher;

impl ShellDispatcher {
    pub fn new() -> Self {
        Self
    }
}

impl UriHandlerDispatcher for ShellDispatcher {
    fn dispatch(&self, request: &DispatchRequest<'_>) -> isize {
        let verb = HSTRING::from(request.verb);
        let file = request.uri.to_nul_terminated();

        // SAFETY: `verb` and `file` are NUL-terminated UTF-16 buffers that outlive
        // the call. Parameters and directory are null, which ShellExecuteW accepts.
        let instance = unsafe {
            ShellExecuteW(
                HWND::default(),
                PCWSTR(verb.as_ptr()),
                PCWSTR(file.as_ptr()),
                PCWSTR::null(),
                PCWSTR::null(),
                SHOW_WINDOW_CMD(request.show_mode.as_raw()),
            )
        };

        instance.0 as isize
    }
}
