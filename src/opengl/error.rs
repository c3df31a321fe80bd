use std::fmt;

use num_enum::TryFromPrimitive;

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
pub enum GlErrorKind {
    InvalidEnum = 0x0500,
    InvalidValue = 0x0501,
    InvalidOperation = 0x0502,
    StackOverflow = 0x0503,
    StackUnderflow = 0x0504,
    OutOfMemory = 0x0505,
    InvalidFramebufferOperation = 0x0506,
}

impl GlErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidEnum => "An unacceptable value is specified for an enumerated argument. The offending command is ignored and has no other side effect than to set the error flag.",
            Self::InvalidValue => "A numeric argument is out of range. The offending command is ignored and has no other side effect than to set the error flag.",
            Self::InvalidOperation => "The specified operation is not allowed in the current state. The offending command is ignored and has no other side effect than to set the error flag.",
            Self::InvalidFramebufferOperation => "The framebuffer object is not complete. The offending command is ignored and has no other side effect than to set the error flag.",
            Self::OutOfMemory => "There is not enough memory left to execute the command. The state of the GL is undefined, except for the state of the error flags, after this error is recorded.",
            Self::StackUnderflow => "An attempt has been made to perform an operation that would cause an internal stack to underflow.",
            Self::StackOverflow => "An attempt has been made to perform an operation that would cause an internal stack to overflow.",
        }
    }
}

/// A non-zero `glGetError` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlError {
    code: u32,
}

impl GlError {
    /// `None` for `GL_NO_ERROR`.
    pub fn from_code(code: u32) -> Option<Self> {
        (code != gl::NO_ERROR).then_some(Self { code })
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn kind(&self) -> Option<GlErrorKind> {
        GlErrorKind::try_from(self.code).ok()
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{:?} (0x{:04X}): {}", kind, self.code, kind.message()),
            None => write!(f, "unrecognized error code 0x{:04X}", self.code),
        }
    }
}

impl std::error::Error for GlError {}

/// Drains the GL error queue, returning the first error recorded.
pub fn check_errors() -> Result<(), GlError> {
    let first = GlError::from_code(unsafe { gl::GetError() });

    if first.is_some() {
        // Bounded: a lost context can report errors indefinitely.
        for _ in 0..8 {
            match GlError::from_code(unsafe { gl::GetError() }) {
                Some(extra) => debug!("Additional queued GL error: {}", extra),
                None => break,
            }
        }
    }

    first.map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_error_code_is_not_an_error() {
        assert_eq!(GlError::from_code(0), None);
    }

    #[test]
    fn known_codes_resolve_to_kinds() {
        let err = GlError::from_code(0x0502).unwrap();
        assert_eq!(err.kind(), Some(GlErrorKind::InvalidOperation));
        assert!(err.to_string().starts_with("InvalidOperation (0x0502): The specified operation"));
    }

    #[test]
    fn unknown_codes_are_still_reported() {
        let err = GlError::from_code(0x9999).unwrap();
        assert_eq!(err.kind(), None);
        assert_eq!(err.to_string(), "unrecognized error code 0x9999");
    }
}
