use thiserror::Error;

/// Failure raised while constructing a [`SetCookie`](crate::SetCookie).
///
/// Every variant carries a fixed message, so callers can match on either the
/// variant or the rendered text. Construction never returns a partial record;
/// the first invalid field aborts the whole parse.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CookieError {
    /// Dynamic input was neither a string, an object, nor a sequence.
    #[error("Invalid input type")]
    InvalidInputType,
    /// The leading `key=value` segment was missing, had no `=`, or either
    /// side was empty after decoding.
    #[error("Invalid key-value pair")]
    InvalidPair,
    /// Structured input with a missing or empty key.
    #[error("Invalid key")]
    InvalidKey,
    /// Structured input with a missing or empty value.
    #[error("Invalid value")]
    InvalidValue,
    /// `Expires` did not parse as an HTTP date.
    #[error("Invalid Expires field")]
    InvalidExpires,
    /// `Max-Age` did not parse as a decimal integer.
    #[error("Invalid Max-Age field")]
    InvalidMaxAge,
    /// `Domain` with a missing or empty value.
    #[error("Invalid Domain field")]
    InvalidDomain,
    /// `Path` with a missing or empty value.
    #[error("Invalid Path field")]
    InvalidPath,
    /// `Secure` carried a value; it is a bare flag.
    #[error("Invalid Secure field")]
    InvalidSecure,
    /// `HttpOnly` carried a value; it is a bare flag.
    #[error("Invalid HttpOnly field")]
    InvalidHttpOnly,
    /// `SameSite` with a missing or empty value.
    #[error("Invalid SameSite field")]
    InvalidSameSite,
}
