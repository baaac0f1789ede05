//! Little-endian scalar encoding
//!
//! Only the widths the wire format knows about (1, 2, 4 and 8 bytes) have an
//! implementation, so an unsupported field type is a compile error rather
//! than an encode-time failure.

/// Fixed-width unsigned integer that can be placed in a step record
pub trait LeValue: Copy {
    /// Encoded width in bytes
    const WIDTH: usize;

    /// Little-endian byte representation, exactly `WIDTH` bytes long
    type Bytes: AsRef<[u8]>;

    /// Encode this value as little-endian bytes
    fn to_le_array(self) -> Self::Bytes;
}

macro_rules! impl_le_value {
    ($($ty:ty),*) => {
        $(
            impl LeValue for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();
                type Bytes = [u8; core::mem::size_of::<$ty>()];

                #[inline]
                fn to_le_array(self) -> Self::Bytes {
                    self.to_le_bytes()
                }
            }
        )*
    };
}

impl_le_value!(u8, u16, u32, u64);
