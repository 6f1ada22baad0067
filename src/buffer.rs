//! Bulk copies of padding-free layouts to and from byte buffers.
//!
//! Every [`Ordered`](crate::Ordered) value is [`Pod`] with an alignment of 1, so a `#[repr(C)]`
//! structure made only of them derives [`Pod`] too and can move through these helpers as a unit.
//! The buffer must be exactly as long as the layout: a short or long buffer is rejected, never
//! truncated or padded.
#![deny(missing_docs)]

use bytemuck::Pod;
use core::mem::{align_of, size_of};

use crate::error::{Error, Result};

fn check_size<T: Pod>(actual: usize) -> Result<()> {
    let expected = size_of::<T>();
    if actual != expected {
        log::debug!(
            "rejecting {} byte buffer for {} ({} bytes)",
            actual,
            core::any::type_name::<T>(),
            expected
        );
        return Err(Error::Size { expected, actual });
    }
    Ok(())
}

/// Copy a value out of `bytes`, whatever the buffer's alignment
pub fn read<T: Pod>(bytes: &[u8]) -> Result<T> {
    check_size::<T>(bytes.len())?;
    Ok(bytemuck::pod_read_unaligned(bytes))
}

/// Copy `value` into `out`
pub fn write<T: Pod>(value: &T, out: &mut [u8]) -> Result<()> {
    check_size::<T>(out.len())?;
    out.copy_from_slice(bytemuck::bytes_of(value));
    Ok(())
}

/// Borrow `bytes` as a value without copying
pub fn view<T: Pod>(bytes: &[u8]) -> Result<&T> {
    check_size::<T>(bytes.len())?;
    bytemuck::try_from_bytes(bytes).map_err(|_| Error::Align {
        align: align_of::<T>(),
    })
}

/// Mutably borrow `bytes` as a value, writes through it land in the buffer
pub fn view_mut<T: Pod>(bytes: &mut [u8]) -> Result<&mut T> {
    check_size::<T>(bytes.len())?;
    bytemuck::try_from_bytes_mut(bytes).map_err(|_| Error::Align {
        align: align_of::<T>(),
    })
}

/// Borrow `bytes` as a run of consecutive records
pub fn records<T: Pod>(bytes: &[u8]) -> Result<&[T]> {
    let record = size_of::<T>();
    if record == 0 || !bytes.len().is_multiple_of(record) {
        log::debug!(
            "rejecting {} byte buffer for {} byte records of {}",
            bytes.len(),
            record,
            core::any::type_name::<T>()
        );
        return Err(Error::Slop {
            record,
            actual: bytes.len(),
        });
    }
    bytemuck::try_cast_slice(bytes).map_err(|_| Error::Align {
        align: align_of::<T>(),
    })
}

/// Byte image of a run of records, ready to be sent or stored as is
pub fn records_bytes<T: Pod>(records: &[T]) -> &[u8] {
    bytemuck::cast_slice(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_rejects_wrong_length() {
        assert_eq!(
            read::<u32>(&[1, 2, 3]),
            Err(Error::Size {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            read::<u32>(&[1, 2, 3, 4, 5]),
            Err(Error::Size {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn read_ignores_alignment() {
        let storage = [0_u8, 1, 2, 3, 4];
        let value: u32 = read(&storage[1..]).unwrap();
        assert_eq!(value.to_ne_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn write_fills_the_whole_buffer() {
        let mut out = [0_u8; 2];
        write(&0x0102_u16, &mut out).unwrap();
        assert_eq!(out, 0x0102_u16.to_ne_bytes());

        let mut short = [0_u8; 1];
        assert!(write(&0x0102_u16, &mut short).is_err());
    }

    #[test]
    fn records_need_whole_records() {
        let bytes = [0_u8; 5];
        assert_eq!(
            records::<[u8; 2]>(&bytes),
            Err(Error::Slop {
                record: 2,
                actual: 5
            })
        );
        assert_eq!(records::<[u8; 2]>(&bytes[..4]).unwrap().len(), 2);
    }

    #[test]
    fn records_accept_empty_and_exact_multiples() {
        let bytes = [0_u8; 12];
        assert!(records::<[u8; 3]>(&bytes[..0]).unwrap().is_empty());
        assert_eq!(records::<[u8; 3]>(&bytes).unwrap().len(), 4);
        assert_eq!(records::<[u8; 4]>(&bytes).unwrap().len(), 3);
        assert!(records::<[u8; 5]>(&bytes).is_err());
    }
}
