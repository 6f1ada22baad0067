#![deny(missing_docs)]

use crate::swap;

mod private {
    pub trait Sealed {}
}

/// Scalar is a primitive that can be stored in a fixed byte order.
///
/// All bit patterns of a scalar are valid values and it has no padding (it is [`bytemuck::Pod`]),
/// so reversing its bytes is total.
pub trait Scalar: bytemuck::Pod + Default + private::Sealed {
    /// Returns the value whose memory image is the reverse of this one.
    ///
    /// Signed integers and floats are reinterpreted as the unsigned integer of the same width,
    /// swapped, then reinterpreted back. No arithmetic touches the swapped pattern.
    fn reverse_bytes(self) -> Self;
}

macro_rules! impl_scalar {
    (float $ty:ty, $swap:path) => {
        impl private::Sealed for $ty {}
        impl Scalar for $ty {
            #[inline]
            fn reverse_bytes(self) -> Self {
                <$ty>::from_bits($swap(self.to_bits()))
            }
        }
    };
    ($ty:ty) => {
        impl private::Sealed for $ty {}
        impl Scalar for $ty {
            #[inline]
            fn reverse_bytes(self) -> Self {
                self
            }
        }
    };
    ($ty:ty, $swap:path) => {
        impl private::Sealed for $ty {}
        impl Scalar for $ty {
            #[inline]
            fn reverse_bytes(self) -> Self {
                $swap(self)
            }
        }
    };
    ($ty:ty, $bits:ty, $swap:path) => {
        impl private::Sealed for $ty {}
        impl Scalar for $ty {
            #[inline]
            fn reverse_bytes(self) -> Self {
                $swap(self as $bits) as $ty
            }
        }
    };
}

// single byte values have no order to reverse
impl_scalar!(u8);
impl_scalar!(i8);

impl_scalar!(u16, swap::swap16);
impl_scalar!(u32, swap::swap32);
impl_scalar!(u64, swap::swap64);

impl_scalar!(i16, u16, swap::swap16);
impl_scalar!(i32, u32, swap::swap32);
impl_scalar!(i64, u64, swap::swap64);

impl_scalar!(float f32, swap::swap32);
impl_scalar!(float f64, swap::swap64);
