//! Operations on serialized hashes: combining part digests into the
//! digest of the whole, and peeling parts back off. These all decode,
//! work in the group, and re-encode; order is significant everywhere,
//! since the group is non-abelian.

use crate::error::Error;
use crate::sl2::{Sl2, I};

/// The hash of a concatenation, computed from the hashes of the parts:
/// decodes each 64-byte part and multiplies them left to right. An empty
/// list yields the hash of the empty input. Fails with
/// [`Error::MalformedEncoding`] if any part is not a valid encoding.
pub fn concat(parts: &[impl AsRef<[u8]>]) -> Result<[u8; 64], Error> {
    let mut acc = I;
    for p in parts {
        acc = acc * Sl2::from_bytes(p.as_ref())?;
    }
    Ok(acc.to_bytes())
}

/// Whether `expected` is exactly the hash of the concatenation of the
/// parts with the given hashes. Decode errors on the parts propagate;
/// `expected` itself is only compared, byte for byte.
pub fn validate(expected: &[u8], parts: &[impl AsRef<[u8]>]) -> Result<bool, Error> {
    Ok(concat(parts)?[..] == *expected)
}

/// Given `h = hash(x || y)` and `a = hash(x)`, recovers `hash(y)` as
/// a^-1 * h. Fails with [`Error::MalformedEncoding`] on undecodable
/// input; the result needs no determinant check, since SL(2) is closed
/// under multiplication and inversion.
pub fn subtract_l(h: &[u8], a: &[u8]) -> Result<[u8; 64], Error> {
    let h = Sl2::from_bytes(h)?;
    let a = Sl2::from_bytes(a)?;
    Ok((a.inverse()? * h).to_bytes())
}

/// Given `h = hash(x || y)` and `b = hash(y)`, recovers `hash(x)` as
/// h * b^-1. Same failure modes as [`subtract_l`].
pub fn subtract_r(h: &[u8], b: &[u8]) -> Result<[u8; 64], Error> {
    let h = Sl2::from_bytes(h)?;
    let b = Sl2::from_bytes(b)?;
    Ok((h * b.inverse()?).to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum;
    use alloc::vec::Vec;

    const CONCAT_HASH: &str = "7f5c9280352a8debea738a74abd4ec787f2c5e556800525692f651087442f9883bb97a2c1bc72d12ba26e3df8dc0f670564292ebc984976a8e353ff69a5fb3cb";

    const CONCAT_PARTS: &[&str] = &[
        "4275945919296224acd268456be23b8b2df931787a46716477e32cd991e98074029d4f03a0fedc09125ee4640d228d7d40d430659a0b2b70e9cd4d4c5361865a",
        "2828661d1b1e77f21788d3b365f140a2395d57dc2083c33e60d9a80e69017d5016a249c7adfe1718a10ba887dedbdaec5c4c1fbecdb1f98776b43f1142c26a88",
        "02310598b45dfa77db9f00eed6ab60773dd8bed7bdac431b42e441fae463f64c6e2688402cfdcec5def47a299b0651fb20878cf4410991bd57056d7b4b31635a",
        "1ed7e0b065c060d915e7355cdcb4edc752c06d2a4b39d90c8985aeb58e08cb9e5bbe4b2b45524efbd68cd7e4081a1b8362941200a4c9f76a0a9f9ac9b7868c03",
        "6f11e3dc4fff99ffa45e36e4655cfc657c29e950e598a90f426bf5710de9171323523db7636643b23892783f4fb3cf8e583d584c82d29558a105a615a668fc9e",
        "1865dbdb4c849620fb2c4809d75d62490f83c11f2145abaabbdc9a66ae58ce1f2e42c34d3b380e5dea1b45217750b42d130f995b162afbd2e412b0d41ec8871b",
        "5102dd1bd1f08f44dbf3f27ac895020d63f96044ce3b491aed3efbc7bbe363bc5d800101d63890f89a532427812c30c9674f37476ba44daf758afa88d4f91063",
        "70cab735dad90164cc61f7411396221c4e549f12392c0d77728c89a9754f606c7d961169d4fa88133a1ba954bad616656c86f8fd1335a2f3428fd4dca3a3f5a5",
        "430f3e92536ff9a50cbcdf08d8810a59786ca37e31d54293646117a93469f61c6cdd67933128407d77f3235293293ee86dbc759d12dfe470969eba1b4a373bd0",
        "46e1d97912ca2cf92e6a9a63667676835d900cdb2fff062136a64d8d60a8e5aa644ccee3558900af8e77d56b013ed5da12d9d0b7de0f56976e040b3d01345c0d",
    ];

    // (first, second, result) with result = concat([first, second])
    const SUBTRACT_TRIPLES: &[(&str, &str, &str)] = &[
        (
            "4275945919296224acd268456be23b8b2df931787a46716477e32cd991e98074029d4f03a0fedc09125ee4640d228d7d40d430659a0b2b70e9cd4d4c5361865a",
            "277c10e0d7c52fcc0b23ba7dbf2c3dde7dcfc1f7c0cc0d998b2de504b8c1e17c6f65ab1294aea676d4060ed2ca18c1c26fd7cec5012ab69a4ddb5e6555ac8a59",
            "7f5c9280352a8debea738a74abd4ec787f2c5e556800525692f651087442f9883bb97a2c1bc72d12ba26e3df8dc0f670564292ebc984976a8e353ff69a5fb3cb",
        ),
        (
            "18e2ce290cc74998ebd0bef76454b52a40428f13bb612e40b5b96187e9cc813248a0ed5f7ec9fb205d55d3f243e2211363f171b19eb8acc7931cf33853a79069",
            "73a0582fa7d00d62fd09c1cd18589cdb2b126cb58b3a022ae47a8a787dabe35c4388aaf0d8bb343b1e58ee8d267812d115f40a0da611f42458f452e102f60700",
            "54ccaad1bb15b2989fa31109713bca955ea5d87bbd3113b3008cea167c00052266e9c9fcb73ece98c6c08cccb074ba3d39b5d8685f022fc388e2bf1997c5bd1d",
        ),
    ];

    fn decode_parts(parts: &[&str]) -> Vec<Vec<u8>> {
        parts.iter().map(|p| hex::decode(p).unwrap()).collect()
    }

    #[test]
    fn concat_vector() {
        let parts = decode_parts(CONCAT_PARTS);
        assert_eq!(hex::encode(concat(&parts).unwrap()), CONCAT_HASH);

        // same result through the group API directly
        let mut acc = I;
        for p in &parts {
            acc = acc * Sl2::from_bytes(p).unwrap();
        }
        assert_eq!(hex::encode(acc.to_bytes()), CONCAT_HASH);
    }

    #[test]
    fn concat_of_nothing_is_identity() {
        let no_parts: &[&[u8]] = &[];
        assert_eq!(concat(no_parts).unwrap(), I.to_bytes());
    }

    #[test]
    fn concat_rejects_malformed_parts() {
        let parts: &[&[u8]] = &[&[0u8; 64], &[0u8; 63]];
        assert_eq!(concat(parts), Err(Error::MalformedEncoding));
    }

    #[test]
    fn validate_vector() {
        let h = hex::decode(CONCAT_HASH).unwrap();
        let parts = decode_parts(CONCAT_PARTS);
        assert!(validate(&h, &parts).unwrap());

        // a reordered part list is a different product
        let mut swapped = parts.clone();
        swapped.swap(0, 1);
        assert!(!validate(&h, &swapped).unwrap());
    }

    #[test]
    fn subtract_vectors() {
        for (first, second, result) in SUBTRACT_TRIPLES {
            let a = hex::decode(first).unwrap();
            let b = hex::decode(second).unwrap();
            let h = hex::decode(result).unwrap();

            assert_eq!(&subtract_r(&h, &b).unwrap()[..], &a[..]);
            assert_eq!(&subtract_l(&h, &a).unwrap()[..], &b[..]);
        }
    }

    use quickcheck::*;

    quickcheck! {
        fn homomorphism(x: Vec<u8>, y: Vec<u8>) -> bool {
            let whole: Vec<u8> = x.iter().chain(y.iter()).copied().collect();
            let parts = [sum(&x), sum(&y)];
            concat(&parts).unwrap() == sum(&whole)
        }
    }

    quickcheck! {
        fn subtraction_laws(x: Vec<u8>, y: Vec<u8>) -> bool {
            let whole: Vec<u8> = x.iter().chain(y.iter()).copied().collect();
            let h = sum(&whole);
            subtract_l(&h, &sum(&x)).unwrap() == sum(&y)
                && subtract_r(&h, &sum(&y)).unwrap() == sum(&x)
        }
    }

    quickcheck! {
        fn validate_accepts_true_splits(x: Vec<u8>, y: Vec<u8>, z: Vec<u8>) -> bool {
            let whole: Vec<u8> = x.iter().chain(y.iter()).chain(z.iter()).copied().collect();
            let parts = [sum(&x), sum(&y), sum(&z)];
            validate(&sum(&whole), &parts).unwrap()
        }
    }
}
