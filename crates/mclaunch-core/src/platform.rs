//! Host collaborators.

use crate::dispatch::LaunchOptions;
use crate::launcher::Launcher;

#[cfg(target_os = "windows")]
pub type SystemConverter = crate::encoding::Win32Converter;
#[cfg(not(target_os = "windows"))]
pub type SystemConverter = crate::encoding::Utf8Converter;

#[cfg(target_os = "windows")]
pub type SystemDispatcher = crate::dispatch::ShellDispatcher;
#[cfg(not(target_os = "windows"))]
pub type SystemDispatcher = crate::dispatch::OpenDispatcher;

/// A launcher wired to the host's converter and dispatcher.
pub fn system_launcher(options: LaunchOptions) -> Launcher<SystemConverter, SystemDispatcher> {
    Launcher::new(SystemConverter::new(), SystemDispatcher::new(), options)
}
