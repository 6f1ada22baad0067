//! Declared byte orders and the byte order of the host.
#![deny(missing_docs)]

/// Order in which the bytes of a multi byte value are laid out in memory
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

impl ByteOrder {
    /// Native order of the target the crate is compiled for
    pub const HOST: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Whether a value must be byte swapped to move from `self` to `other`
    pub const fn differs_from(self, other: ByteOrder) -> bool {
        !matches!(
            (self, other),
            (ByteOrder::Big, ByteOrder::Big) | (ByteOrder::Little, ByteOrder::Little)
        )
    }
}

/// Endianness is the type level byte order an [`Ordered`](crate::Ordered) value is stored in.
///
/// Implementors are zero sized markers, so the order never takes space in the value itself.
pub trait Endianness: Copy + Default + Send + Sync + 'static {
    /// Declared byte order
    const ORDER: ByteOrder;

    /// Whether values must be swapped between host order and the declared order.
    /// Resolved at compile time.
    const SWAP: bool = Self::ORDER.differs_from(ByteOrder::HOST);
}

/// Big Endian storage order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;
impl Endianness for BigEndian {
    const ORDER: ByteOrder = ByteOrder::Big;
}

/// Little Endian storage order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;
impl Endianness for LittleEndian {
    const ORDER: ByteOrder = ByteOrder::Little;
}

/// Native Endian storage order, whichever of the two the target uses
#[cfg(target_endian = "big")]
pub type NativeEndian = BigEndian;
/// Native Endian storage order, whichever of the two the target uses
#[cfg(target_endian = "little")]
pub type NativeEndian = LittleEndian;

/// Network byte order
pub type NetworkEndian = BigEndian;
