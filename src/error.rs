/// Everything that can go wrong when handling serialized hashes.
///
/// Arithmetic on decoded values never fails; errors only arise at the
/// byte boundary, or when inverting a matrix that is not in the group.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A 16-byte field element or 64-byte matrix encoding is structurally
    /// invalid: wrong length, or an element with its most significant bit
    /// set.
    #[error("malformed encoding")]
    MalformedEncoding,

    /// A matrix whose determinant is not one was passed to an operation
    /// that requires membership in SL(2).
    #[error("matrix determinant is not one")]
    InvalidArgument,
}
