#![deny(missing_docs)]

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem::size_of;

use crate::endian::{ByteOrder, Endianness};
use crate::error::Result;
use crate::primitive::Scalar;

/// Moves a value between host order and a declared order; the conversion is its own inverse
#[inline]
pub(crate) fn reorder<T: Scalar>(value: T, swap: bool) -> T {
    if swap {
        value.reverse_bytes()
    } else {
        value
    }
}

/// A scalar stored in memory in the byte order `E`, whatever the host's order.
///
/// Values go in and come out in host order; in between only the declared order encoding is
/// kept, so the memory image of the value (and of any `#[repr(C)]` structure built from such
/// values) is the same on every host.
///
/// ```
/// use endian_scalar::{U16Be, U16Le};
///
/// let be = U16Be::new(0x1234);
/// let le = U16Le::new(0x1234);
/// assert_eq!(be.as_bytes(), &[0x12, 0x34]);
/// assert_eq!(le.as_bytes(), &[0x34, 0x12]);
/// assert_eq!(be.get(), le.get());
/// ```
///
/// The value is packed: it is exactly as large as `T` and has an alignment of 1.
#[repr(C, packed)]
pub struct Ordered<T, E> {
    raw: T,
    order: PhantomData<E>,
}

impl<T: Scalar, E: Endianness> Ordered<T, E> {
    const LAYOUT: () = assert!(size_of::<Self>() == size_of::<T>());

    /// Encode a host order value
    #[inline]
    pub fn new(value: T) -> Self {
        Self::from_raw(reorder(value, E::SWAP))
    }

    /// Wrap a bit pattern that is already in the declared order
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::LAYOUT;
        Ordered {
            raw,
            order: PhantomData,
        }
    }

    /// Decode to a host order value
    #[inline]
    pub fn get(self) -> T {
        reorder(self.raw, E::SWAP)
    }

    /// Replace the value with a host order value
    #[inline]
    pub fn set(&mut self, value: T) {
        *self = Self::new(value);
    }

    /// Stored bit pattern, in the declared order and not decoded
    #[inline]
    pub fn raw(self) -> T {
        self.raw
    }

    /// Memory image of the value
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Copy a value out of its memory image
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        crate::buffer::read(bytes)
    }
}

impl<T: Scalar, E: Endianness> Clone for Ordered<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Scalar, E: Endianness> Copy for Ordered<T, E> {}

impl<T: Scalar, E: Endianness> Default for Ordered<T, E> {
    /// Zero, whose encoding is the same in every order
    fn default() -> Self {
        Self::from_raw(T::zeroed())
    }
}

// SAFETY: packed, so no padding; `order` is zero sized and `raw` is Pod
unsafe impl<T: Scalar, E: Endianness> bytemuck::Zeroable for Ordered<T, E> {}
unsafe impl<T: Scalar, E: Endianness> bytemuck::Pod for Ordered<T, E> {}

impl<T: Scalar, E: Endianness> From<T> for Ordered<T, E> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_into_host {
    ($($ty:ty),*) => {
        $(
            impl<E: Endianness> From<Ordered<$ty, E>> for $ty {
                #[inline]
                fn from(value: Ordered<$ty, E>) -> Self {
                    value.get()
                }
            }
        )*
    };
}

impl_into_host!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T: Scalar + fmt::Debug, E: Endianness> fmt::Debug for Ordered<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = match E::ORDER {
            ByteOrder::Big => "Be",
            ByteOrder::Little => "Le",
        };
        f.debug_tuple(order).field(&self.get()).finish()
    }
}

impl<T: Scalar + fmt::Display, E: Endianness> fmt::Display for Ordered<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl<T: Scalar + PartialEq, E: Endianness> PartialEq for Ordered<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Scalar + PartialEq, E: Endianness> PartialEq<T> for Ordered<T, E> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T: Scalar + Eq, E: Endianness> Eq for Ordered<T, E> {}

impl<T: Scalar + PartialOrd, E: Endianness> PartialOrd for Ordered<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T: Scalar + Ord, E: Endianness> Ord for Ordered<T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<T: Scalar + Hash, E: Endianness> Hash for Ordered<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state)
    }
}
