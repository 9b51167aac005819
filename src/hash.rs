use digest::generic_array::GenericArray;
use digest::{FixedOutputDirty, Reset, Update};

use crate::sl2::{Sl2, I};
use crate::TzHashable;

/// A streaming hasher. The entire state is one group element, which
/// starts at the identity and picks up one generator factor per input
/// bit; `sum` just serializes it. Because multiplication is associative,
/// how the input is split across `write` calls cannot be observed in the
/// output, and a digest can keep absorbing after `sum`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TzDigest {
    state: Sl2,
}

impl TzDigest {
    /// A fresh digest, equal to the hash of the empty input.
    #[must_use]
    pub fn new() -> TzDigest {
        TzDigest { state: I }
    }

    /// Puts the digest back in its initial state.
    pub fn reset(&mut self) {
        self.state = I;
    }

    /// Absorbs `data`, most significant bit of each byte first. Never
    /// fails and never short-writes.
    pub fn write(&mut self, data: &[u8]) {
        self.state = self.state * data.tz_hash();
    }

    /// The 64-byte digest of everything written so far. Does not consume
    /// or disturb the state.
    #[must_use]
    pub fn sum(&self) -> [u8; 64] {
        self.state.to_bytes()
    }

    /// The running state as a group element, for callers that want to
    /// keep combining without a decode round-trip.
    #[must_use]
    pub fn matrix(&self) -> Sl2 {
        self.state
    }
}

impl Default for TzDigest {
    fn default() -> TzDigest {
        TzDigest::new()
    }
}

impl Update for TzDigest {
    fn update(&mut self, data: impl AsRef<[u8]>) {
        self.write(data.as_ref());
    }
}

impl Reset for TzDigest {
    fn reset(&mut self) {
        TzDigest::reset(self);
    }
}

impl FixedOutputDirty for TzDigest {
    type OutputSize = digest::consts::U64;

    fn finalize_into_dirty(&mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
        out.copy_from_slice(&self.sum());
    }
}
