//! [Endianness](https://en.wikipedia.org/wiki/Endianness) conversions.
//!
//! Every conversion here maps a native integer to its representation in an
//! explicit byte order. The same call converts back, so there are no separate
//! `from_*` functions.

use crate::order::{
    native_order,
    ByteOrder,
};

mod sealed {
    pub trait Sealed {}
}

/// Trait for types that represent endianesses.
///
/// This trait is sealed and can't be implemented for custom types. It is only
/// implemented for [`BigEndian`], [`LittleEndian`] and [`NativeEndian`] (and
/// the type alias [`NetworkEndian`]).
pub trait Endianness: sealed::Sealed {
    fn order() -> ByteOrder;
}

/// Big endian byte order
#[derive(Clone, Copy, Debug, Default)]
pub struct BigEndian;
impl sealed::Sealed for BigEndian {}

impl Endianness for BigEndian {
    #[inline(always)]
    fn order() -> ByteOrder {
        ByteOrder::Big
    }
}

/// Little endian byte order
#[derive(Clone, Copy, Debug, Default)]
pub struct LittleEndian;
impl sealed::Sealed for LittleEndian {}

impl Endianness for LittleEndian {
    #[inline(always)]
    fn order() -> ByteOrder {
        ByteOrder::Little
    }
}

/// System native byte order.
///
/// Converting to native endian never swaps.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeEndian;
impl sealed::Sealed for NativeEndian {}

impl Endianness for NativeEndian {
    #[inline(always)]
    fn order() -> ByteOrder {
        native_order()
    }
}

/// Network byte order.
///
/// This is always big endian.
pub use self::BigEndian as NetworkEndian;

/// Unsigned integers that can be converted between byte orders.
///
/// Sealed, implemented for `u16`, `u32` and `u64`.
pub trait Integer: sealed::Sealed + Copy + Eq + std::fmt::Debug {
    type Bytes: AsRef<[u8]> + Copy + Eq + std::fmt::Debug;

    fn swap_bytes(self) -> Self;
    fn to_ne_bytes(self) -> Self::Bytes;
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_integer {
    {
        $(
            $ty:ty : $bytes:expr;
        )*
    } => {
        $(
            impl sealed::Sealed for $ty {}

            impl Integer for $ty {
                type Bytes = [u8; $bytes];

                #[inline(always)]
                fn swap_bytes(self) -> Self {
                    <$ty>::swap_bytes(self)
                }

                #[inline(always)]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }

                #[inline(always)]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }
            }
        )*
    };
}

impl_integer! {
    u16: 2;
    u32: 4;
    u64: 8;
}

/// Reinterprets the native integer `value` in byte order `E`.
///
/// This is the identity if `E` is the native order, and a byte swap
/// otherwise. With a build-time resolved byte order the comparison is
/// constant and the branch disappears.
#[inline(always)]
pub fn convert<E: Endianness, T: Integer>(value: T) -> T {
    if E::order() == native_order() {
        value
    }
    else {
        value.swap_bytes()
    }
}

/// Bytes of `value` in byte order `E`, lowest address first.
#[inline]
pub fn encode<E: Endianness, T: Integer>(value: T) -> T::Bytes {
    convert::<E, T>(value).to_ne_bytes()
}

/// Reads an integer stored in byte order `E`.
#[inline]
pub fn decode<E: Endianness, T: Integer>(bytes: T::Bytes) -> T {
    convert::<E, T>(T::from_ne_bytes(bytes))
}

macro_rules! conversions {
    {
        $(
            $(#[$attr:meta])*
            $name:ident : $endianness:ty => $ty:ty;
        )*
    } => {
        $(
            $(#[$attr])*
            #[inline(always)]
            pub fn $name(value: $ty) -> $ty {
                convert::<$endianness, $ty>(value)
            }
        )*
    };
}

conversions! {
    /// Native `u16` to little endian, or back.
    to_le16: LittleEndian => u16;
    /// Native `u32` to little endian, or back.
    to_le32: LittleEndian => u32;
    /// Native `u64` to little endian, or back.
    to_le64: LittleEndian => u64;
    /// Native `u16` to big endian, or back.
    to_be16: BigEndian => u16;
    /// Native `u32` to big endian, or back.
    to_be32: BigEndian => u32;
    /// Native `u64` to big endian, or back.
    to_be64: BigEndian => u64;
}
