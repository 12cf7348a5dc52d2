//! The host's native byte order.

use derive_more::Display;

use crate::runtime;

// `natend_order` can also be injected through RUSTFLAGS, bypassing the build script.
#[cfg(natend_order = "middle")]
compile_error!("middle-endian (PDP) byte order is not supported");

/// Ordering of the bytes of a multi-byte integer in memory.
///
/// The discriminants are the customary `1234`/`4321`/`3412` notation: the
/// position of each byte of `0x01020304` when stored.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ByteOrder {
    /// Least significant byte at the lowest address.
    #[display(fmt = "little-endian")]
    Little = 1234,

    /// Most significant byte at the lowest address.
    #[display(fmt = "big-endian")]
    Big = 4321,

    /// PDP-11 order. Only ever reported, never supported.
    #[display(fmt = "middle-endian")]
    Middle = 3412,
}

impl ByteOrder {
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns the host's byte order.
    #[inline]
    pub fn native() -> Self {
        native_order()
    }

    #[inline]
    pub fn is_native(self) -> bool {
        self == native_order()
    }
}

/// How the native byte order is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Decided by the build script. Conversions compile down to either
    /// nothing or a single byte swap.
    Fixed(ByteOrder),

    /// Probed once on first use, see [`runtime`].
    Runtime,
}

#[cfg(natend_order = "little")]
pub const RESOLUTION: Resolution = Resolution::Fixed(ByteOrder::Little);

#[cfg(natend_order = "big")]
pub const RESOLUTION: Resolution = Resolution::Fixed(ByteOrder::Big);

#[cfg(not(any(natend_order = "little", natend_order = "big")))]
pub const RESOLUTION: Resolution = Resolution::Runtime;

/// Returns the host's byte order.
///
/// With a [`Resolution::Fixed`] build this is a constant. Otherwise the first
/// call probes the host (see [`runtime::native_order`]) and later calls read
/// the cached result.
#[inline(always)]
pub fn native_order() -> ByteOrder {
    match RESOLUTION {
        Resolution::Fixed(order) => order,
        Resolution::Runtime => runtime::native_order(),
    }
}
