//! This module provides the shared, low-level buffer helpers used by the kernels.
//!
//! It is the single place where typed slices and raw byte buffers are converted
//! into one another, using `bytemuck` so that no `unsafe` is needed.

use crate::error::Ufloat8Error;

/// Safely reinterprets a byte slice as a slice of a plain-old-data type.
///
/// # Errors
/// Returns `Ufloat8Error::BufferMismatch` if the length is not a multiple of the
/// size of `T`, or `Ufloat8Error::PodCast` if the buffer is misaligned for `T`.
pub fn safe_bytes_to_typed_slice<T>(bytes: &[u8]) -> Result<&[T], Ufloat8Error>
where
    T: bytemuck::Pod,
{
    let width = std::mem::size_of::<T>();
    if bytes.len() % width != 0 {
        return Err(Ufloat8Error::BufferMismatch(bytes.len(), width));
    }
    Ok(bytemuck::try_cast_slice(bytes)?)
}

/// Converts a typed slice into an owned byte vector (native endianness).
pub fn typed_slice_to_bytes<T: bytemuck::Pod>(data: &[T]) -> Vec<u8> {
    bytemuck::cast_slice(data).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_slice_roundtrip() {
        let original: Vec<u16> = vec![0, 1, 0xF800, u16::MAX];
        let bytes = typed_slice_to_bytes(&original);
        assert_eq!(bytes.len(), 8);

        let typed = safe_bytes_to_typed_slice::<u16>(&bytes).unwrap();
        assert_eq!(typed, original.as_slice());
    }

    #[test]
    fn test_safe_bytes_to_typed_slice_mismatch_error() {
        let result = safe_bytes_to_typed_slice::<u16>(&[1, 2, 3]);
        assert!(matches!(result, Err(Ufloat8Error::BufferMismatch(3, 2))));
    }
}
