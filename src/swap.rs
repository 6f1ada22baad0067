//! Byte reversal of 16, 32 and 64 bit patterns.
//!
//! Every strategy below produces the same bit pattern for every input. Which one backs
//! [`swap16`], [`swap32`] and [`swap64`] is decided when the crate is compiled:
//!
//! * the `iterative-swap` or `unrolled-swap` cargo features force a portable strategy,
//! * targets with a byte-reversal instruction (`bswap`, `rev`) use [`hardware`],
//! * 32 bit ARM with `rev` but no 64 bit reversal composes [`swap64`] from two [`swap32`],
//! * older ARM cores get the [`unrolled`] exchange, everything else the [`iterative`] one.
#![deny(missing_docs)]

/// Single instruction byte reversal
pub mod hardware {
    macro_rules! impl_hardware {
        ($name:ident, $ty:ty) => {
            #[doc = concat!("Reverse the bytes of a `", stringify!($ty), "` with the target's byte-reversal instruction")]
            #[inline]
            pub fn $name(v: $ty) -> $ty {
                v.swap_bytes()
            }
        };
    }

    impl_hardware!(swap16, u16);
    impl_hardware!(swap32, u32);
    impl_hardware!(swap64, u64);
}

/// Byte for byte exchange, working inward from both ends
pub mod unrolled {
    macro_rules! impl_unrolled {
        ($name:ident, $ty:ty, $size:expr, $( ($lo:literal, $hi:literal) ),+) => {
            #[doc = concat!("Reverse the bytes of a `", stringify!($ty), "` by exchanging them pairwise")]
            #[inline]
            pub fn $name(v: $ty) -> $ty {
                let mut bytes: [u8; $size] = v.to_ne_bytes();
                $( bytes.swap($lo, $hi); )+
                <$ty>::from_ne_bytes(bytes)
            }
        };
    }

    impl_unrolled!(swap16, u16, 2, (0, 1));
    impl_unrolled!(swap32, u32, 4, (0, 3), (1, 2));
    impl_unrolled!(swap64, u64, 8, (0, 7), (1, 6), (2, 5), (3, 4));
}

/// Shift and mask accumulation, one byte per step
pub mod iterative {
    macro_rules! impl_iterative {
        ($name:ident, $ty:ty) => {
            #[doc = concat!("Reverse the bytes of a `", stringify!($ty), "` by moving its lowest byte into the result")]
            #[inline]
            pub fn $name(v: $ty) -> $ty {
                let mut ret: $ty = 0;
                let mut tmp = v;
                for _ in 0..core::mem::size_of::<$ty>() {
                    ret = (ret << 8) | (tmp & 0xff);
                    tmp >>= 8;
                }
                ret
            }
        };
    }

    impl_iterative!(swap16, u16);
    impl_iterative!(swap32, u32);
    impl_iterative!(swap64, u64);
}

/// 64 bit reversal built out of the selected 32 bit one
pub mod split {
    /// Reverse the bytes of a u64 as two byte reversed u32 halves, exchanged
    #[inline]
    pub fn swap64(v: u64) -> u64 {
        let low = super::swap32(v as u32);
        let high = super::swap32((v >> 32) as u32);
        (u64::from(low) << 32) | u64::from(high)
    }
}

#[cfg(feature = "iterative-swap")]
pub use iterative::{swap16, swap32, swap64};

#[cfg(all(not(feature = "iterative-swap"), feature = "unrolled-swap"))]
pub use unrolled::{swap16, swap32, swap64};

#[cfg(all(
    not(feature = "iterative-swap"),
    not(feature = "unrolled-swap"),
    any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "powerpc64"
    )
))]
pub use hardware::{swap16, swap32, swap64};

#[cfg(all(
    not(feature = "iterative-swap"),
    not(feature = "unrolled-swap"),
    target_arch = "arm",
    target_feature = "v6"
))]
pub use hardware::{swap16, swap32};
#[cfg(all(
    not(feature = "iterative-swap"),
    not(feature = "unrolled-swap"),
    target_arch = "arm",
    target_feature = "v6"
))]
pub use split::swap64;

#[cfg(all(
    not(feature = "iterative-swap"),
    not(feature = "unrolled-swap"),
    target_arch = "arm",
    not(target_feature = "v6")
))]
pub use unrolled::{swap16, swap32, swap64};

#[cfg(all(
    not(feature = "iterative-swap"),
    not(feature = "unrolled-swap"),
    not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "powerpc64",
        target_arch = "arm"
    ))
))]
pub use iterative::{swap16, swap32, swap64};
