//! Documented error values of the handler dispatch service.

pub const OUT_OF_RESOURCES: isize = 0;
pub const FILE_NOT_FOUND: isize = 2;
pub const PATH_NOT_FOUND: isize = 3;
pub const ACCESS_DENIED: isize = 5;
pub const OUT_OF_MEMORY: isize = 8;
pub const BAD_FORMAT: isize = 11;
pub const SHARING_VIOLATION: isize = 26;
pub const ASSOCIATION_INCOMPLETE: isize = 27;
pub const DDE_TIMEOUT: isize = 28;
pub const DDE_FAILED: isize = 29;
pub const DDE_BUSY: isize = 30;
pub const NO_ASSOCIATION: isize = 31;
pub const DLL_NOT_FOUND: isize = 32;

/// Human-readable name for a dispatch failure value.
pub fn describe_code(code: isize) -> Option<&'static str> {
    let text = match code {
        OUT_OF_RESOURCES => "the system is out of memory or resources",
        FILE_NOT_FOUND => "the specified file was not found",
        PATH_NOT_FOUND => "the specified path was not found",
        ACCESS_DENIED => "access to the specified file was denied",
        OUT_OF_MEMORY => "there was not enough memory to complete the operation",
        BAD_FORMAT => "the executable file is invalid",
        SHARING_VIOLATION => "a sharing violation occurred",
        ASSOCIATION_INCOMPLETE => "the file name association is incomplete or invalid",
        DDE_TIMEOUT => "the DDE transaction timed out",
        DDE_FAILED => "the DDE transaction failed",
        DDE_BUSY => "the DDE transaction could not be completed",
        NO_ASSOCIATION => "no application is associated with the URI scheme",
        DLL_NOT_FOUND => "the specified DLL was not found",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(
            describe_code(2),
            Some("the specified file was not found")
        );
        assert_eq!(
            describe_code(31),
            Some("no application is associated with the URI scheme")
        );
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(describe_code(1), None);
        assert_eq!(describe_code(42), None);
    }
}
