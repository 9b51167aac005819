use crate::sl2::{matmul, Sl2, A, B};
use alloc::vec::Vec;
use lazy_static::lazy_static;
use seq_macro::seq;

// The hash function is defined in terms of bit operations, corresponding to the
// generator matrices A and B. But of course this would be very slow to do in
// practice; here we generate 256-entry and 65536-entry lookup tables for all one-
// and two-byte hashes. Bits absorb most-significant first, so the leftmost
// factor in each product is the matrix for bit 7.
const BIT_LOOKUPS: [Sl2; 2] = [A, B];

const fn mul_from_byte(b: u8) -> Sl2 {
    let bit0 = (b & 1) as usize;
    let bit1 = ((b & (1 << 1)) >> 1) as usize;
    let bit2 = ((b & (1 << 2)) >> 2) as usize;
    let bit3 = ((b & (1 << 3)) >> 3) as usize;
    let bit4 = ((b & (1 << 4)) >> 4) as usize;
    let bit5 = ((b & (1 << 5)) >> 5) as usize;
    let bit6 = ((b & (1 << 6)) >> 6) as usize;
    let bit7 = ((b & (1 << 7)) >> 7) as usize;

    let m0 = BIT_LOOKUPS[bit0];
    let m1 = BIT_LOOKUPS[bit1];
    let m2 = BIT_LOOKUPS[bit2];
    let m3 = BIT_LOOKUPS[bit3];
    let m4 = BIT_LOOKUPS[bit4];
    let m5 = BIT_LOOKUPS[bit5];
    let m6 = BIT_LOOKUPS[bit6];
    let m7 = BIT_LOOKUPS[bit7];

    matmul(
        matmul(matmul(m7, m6), matmul(m5, m4)),
        matmul(matmul(m3, m2), matmul(m1, m0)),
    )
}

pub(crate) static BYTE_LOOKUPS: [Sl2; 256] = seq!(N in 0..256 {
    [
        #( mul_from_byte(N), )*
    ]
});

lazy_static! {
    // Built from the byte table rather than from scratch: a wyde's matrix
    // is the product of its two bytes' matrices, and the byte table is
    // already paid for at compile time.
    pub(crate) static ref WYDE_LOOKUPS: Vec<Sl2> = {
        let mut l = Vec::with_capacity(65536);
        let mut i: usize = 0;
        while i < 65536 {
            l.push(matmul(BYTE_LOOKUPS[i >> 8], BYTE_LOOKUPS[i & 0xff]));
            i += 1;
        }
        l
    };
}
