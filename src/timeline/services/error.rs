//! Classification shared by service errors.

/// Broad category of a service failure, used by transports to pick a
/// response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied missing or invalid input.
    Validation,
    /// A referenced assignment or reminder does not exist.
    NotFound,
    /// The underlying store failed.
    Store,
}
