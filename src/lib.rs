/*!
This is an implementation of the Tillich-Zémor hash function from
["Hashing with SL₂"](https://link.springer.com/chapter/10.1007/3-540-48658-5_5),
over the field GF(2^127) with the classic generator pair. It is
wire-compatible with the `tz` package of NeoFS: same generators, same
bit order, same 64-byte serialization.

> ### Warning
>
> The Tillich-Zémor construction has published collision attacks and
> must not be relied on against an adaptive adversary. What it offers
> instead is a *homomorphism*: the hash of a concatenation is the matrix
> product of the hashes of the parts. Use it for content-addressable and
> splittable data structures where the parties are honest-but-lazy, not
> as a MAC.

# What is this library for?

This library implements a hash function H with the property that there
is a cheap operation `*` such that given byte strings `s1` and `s2`,
`H(s1 ++ s2) = H(s1) * H(s2)`.

That lets you verify a large object from independently stored or
transmitted pieces without re-hashing the whole: hash the parts as they
arrive, multiply the results in order, and compare. It also means parts
can be re-split or re-grouped freely; only the left-to-right order of
the bytes matters.

# How to use this library

One-shot hashing goes through [`hash`] (a group element) or [`sum`]
(its 64-byte serialization):

```
use tzhash::*;
assert_eq!(
    hash("hello, world! It's fun to hash stuff!".as_ref()).to_hex(),
    "0546d30c27a7b1ec9c8d8b3d89930807318e4b7090599b6099c2cf3ef541c23639d6ba0617b9fb94a9791b5fb1a49887015e37470f803e29991df9ac0ff6ad05",
);
```

Hashes compose with the `*` operator:

```
use tzhash::*;
assert_eq!(
    hash("hello, ".as_ref()) * hash("world!".as_ref()),
    hash("hello, world!".as_ref()),
);
```

The same algebra is available on serialized 64-byte hashes through
[`concat`], [`validate`], [`subtract_l`] and [`subtract_r`]:

```
use tzhash::*;
let parts = [sum(b"hello, "), sum(b"world!")];
let whole = sum(b"hello, world!");
assert_eq!(concat(&parts).unwrap(), whole);
assert!(validate(&whole, &parts).unwrap());
assert_eq!(subtract_l(&whole, &parts[0]).unwrap(), parts[1]);
```

For incremental input there is [`TzDigest`], which also implements the
`digest` crate's traits, so it can stand in wherever a
[`digest::Digest`] is expected.

# Technical Details

The state is a 2x2 matrix over GF(2^127) = GF(2)[x]/(x^127 + x^63 + 1),
starting at the identity. Each input bit, most significant first within
its byte, multiplies the state on the right by one of the two fixed
generators A = [[x, 1], [1, 0]] (bit 0) or B = [[x, x+1], [1, 1]]
(bit 1). Both generators have determinant one, so the state never
leaves SL(2) and its inverse is just the adjugate; that is what makes
the subtraction operations cheap. The digest is the four matrix
entries, 16 bytes big-endian each.

Bit-by-bit multiplication would be very slow, so hashing walks the
input two bytes at a time through precomputed generator-product tables;
see `lookup_table.rs`. We have not seriously optimized beyond that, and
performance is a secondary goal.
*/

#![no_std]

#[macro_use]
extern crate alloc;

// Re-export digest traits
pub use digest::{
    self, generic_array::GenericArray, Digest, DynDigest, FixedOutput, FixedOutputDirty, Reset,
    Update,
};

pub use crate::combine::{concat, subtract_l, subtract_r, validate};
pub use crate::error::Error;
pub use crate::gf127::Gf127;
pub use crate::hash::TzDigest;
pub use crate::sl2::{matmul, Sl2, I};

use crate::lookup_table::{BYTE_LOOKUPS, WYDE_LOOKUPS};

mod combine;
mod error;
mod gf127;
mod hash;
mod lookup_table;
mod sl2;

/// The main export of this library: give me a byte stream and I'll give
/// you the group element it hashes to. Serialize it with
/// [`Sl2::to_bytes`], or use [`sum`] to go straight to bytes.
#[must_use]
#[inline]
pub fn hash(bytes: &[u8]) -> Sl2 {
    let mut acc = I;
    for bs in bytes.chunks(2) {
        if bs.len() == 2 {
            acc = acc * WYDE_LOOKUPS[((bs[0] as usize) << 8) | (bs[1] as usize)];
        } else {
            acc = acc * BYTE_LOOKUPS[bs[0] as usize];
        }
    }
    acc
}

/// [`hash`], serialized: the 64-byte digest of `bytes`.
#[must_use]
#[inline]
pub fn sum(bytes: &[u8]) -> [u8; 64] {
    hash(bytes).to_bytes()
}

/// Same as [`hash`] but computes the hash of the byte stream in
/// parallel, exploiting the homomorphism to fold the pieces back
/// together in order.
///
/// The number of threads used is set automatically but can be
/// overridden using the `RAYON_NUM_THREADS` environment variable.
#[must_use]
#[inline]
#[cfg(feature = "std")]
pub fn hash_par(bytes: &[u8]) -> Sl2 {
    use rayon::prelude::*;

    bytes
        .par_chunks(2)
        .fold(
            || I,
            |acc, bs| {
                if bs.len() == 2 {
                    acc * WYDE_LOOKUPS[((bs[0] as usize) << 8) | (bs[1] as usize)]
                } else {
                    acc * BYTE_LOOKUPS[bs[0] as usize]
                }
            },
        )
        .reduce(
            || I,
            |mut acc, h| {
                acc = acc * h;
                acc
            },
        )
}

/// Things that can be hashed using this crate.
pub trait TzHashable {
    fn tz_hash(&self) -> Sl2;
}

impl TzHashable for [u8] {
    #[inline]
    fn tz_hash(&self) -> Sl2 {
        hash(self)
    }
}

impl<T: TzHashable> TzHashable for &T {
    #[inline]
    fn tz_hash(&self) -> Sl2 {
        (**self).tz_hash()
    }
}

impl<T: TzHashable> TzHashable for &mut T {
    #[inline]
    fn tz_hash(&self) -> Sl2 {
        (**self).tz_hash()
    }
}
