//! # Endian scalar
//!
//! Integers and floats that are stored in a fixed byte order, whatever the byte order of the
//! host, so that they can be used as fields of binary wire or on-disk layouts.
//!
//! A value is written and read in host order like a plain number; what is kept in memory is its
//! encoding in the declared order. The order is part of the type ([`BigEndian`] or
//! [`LittleEndian`]) and takes no space.
//!
//! ```
//! use endian_scalar::{buffer, F32Le, U16Be, U32Be};
//! use bytemuck::{Pod, Zeroable};
//!
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! #[repr(C)]
//! struct Header {
//!     magic: U16Be,
//!     length: U32Be,
//!     scale: F32Le,
//! }
//!
//! let header = Header {
//!     magic: 0xabcd_u16.into(),
//!     length: 10_u32.into(),
//!     scale: 0.5_f32.into(),
//! };
//! let mut wire = [0u8; 10];
//! buffer::write(&header, &mut wire).unwrap();
//! assert_eq!(wire, [0xab, 0xcd, 0, 0, 0, 10, 0, 0, 0, 0x3f]);
//!
//! let back: Header = buffer::read(&wire).unwrap();
//! assert_eq!(back.length.get(), 10);
//! ```
//!
//! Byte reversal itself lives in [`swap`]; the strategy it uses is picked when the crate is
//! compiled, from the target and the `iterative-swap` / `unrolled-swap` features.
#![deny(missing_docs)]

pub mod buffer;
pub mod endian;
pub mod error;
mod ordered;
mod primitive;
pub mod swap;

pub use endian::{BigEndian, ByteOrder, Endianness, LittleEndian, NativeEndian, NetworkEndian};
pub use error::{Error, Result};
pub use ordered::Ordered;
pub use primitive::Scalar;

macro_rules! ordered_aliases {
    ($($name:ident = $ty:ty, $order:ident;)*) => {
        $(
            #[doc = concat!("`", stringify!($ty), "` stored in ", stringify!($order), " order")]
            pub type $name = Ordered<$ty, $order>;
            const _: () = assert!(
                core::mem::size_of::<$name>() == core::mem::size_of::<$ty>()
                    && core::mem::align_of::<$name>() == 1
            );
        )*
    };
}

ordered_aliases! {
    I8Be = i8, BigEndian;
    I8Le = i8, LittleEndian;
    U8Be = u8, BigEndian;
    U8Le = u8, LittleEndian;

    I16Be = i16, BigEndian;
    I16Le = i16, LittleEndian;
    U16Be = u16, BigEndian;
    U16Le = u16, LittleEndian;

    I32Be = i32, BigEndian;
    I32Le = i32, LittleEndian;
    U32Be = u32, BigEndian;
    U32Le = u32, LittleEndian;

    I64Be = i64, BigEndian;
    I64Le = i64, LittleEndian;
    U64Be = u64, BigEndian;
    U64Le = u64, LittleEndian;

    F32Be = f32, BigEndian;
    F32Le = f32, LittleEndian;
    F64Be = f64, BigEndian;
    F64Le = f64, LittleEndian;
}
