//! Runtime byte order detection.
//!
//! Used when the build script couldn't fix the byte order, or when runtime
//! detection is forced with the `force-runtime` feature or the
//! `NATEND_FORCE_RUNTIME` environment variable. Always compiled, so the
//! result can be checked against the build-time answer.

use std::sync::OnceLock;

use crate::{
    error::Error,
    order::ByteOrder,
};

/// The probe pattern read as a little-endian integer.
pub const PROBE_LITTLE: u32 = 0x04030201;

/// The probe pattern read as a big-endian integer.
pub const PROBE_BIG: u32 = 0x01020304;

/// The probe pattern read as a PDP-11 (middle-endian) integer.
pub const PROBE_MIDDLE: u32 = 0x02010403;

const PROBE_BYTES: [u8; 4] = [1, 2, 3, 4];

static NATIVE: OnceLock<ByteOrder> = OnceLock::new();

/// Reads the bytes `1, 2, 3, 4` as a native `u32`.
#[inline]
pub fn probe() -> u32 {
    u32::from_ne_bytes(PROBE_BYTES)
}

/// Tells which byte order produced a [`probe`] value.
pub fn classify(value: u32) -> Result<ByteOrder, Error> {
    match value {
        PROBE_LITTLE => Ok(ByteOrder::Little),
        PROBE_BIG => Ok(ByteOrder::Big),
        PROBE_MIDDLE => Err(Error::Middle),
        _ => Err(Error::UnrecognizedProbe { value }),
    }
}

/// Like [`classify`], but an unsupported order is fatal.
///
/// # Panics
///
/// If `value` is neither the little- nor the big-endian reading of the probe.
#[track_caller]
pub fn resolve(value: u32) -> ByteOrder {
    match classify(value) {
        Ok(order) => order,
        Err(e) => {
            tracing::error!(value = format_args!("{value:#010x}"), "can't determine native byte order: {e}");
            panic!("{e}");
        }
    }
}

/// Returns the host's byte order, probing it on the first call.
///
/// Concurrent first calls probe at most once, and all of them see the same
/// result.
///
/// # Panics
///
/// If the host uses an unsupported byte order.
#[inline]
pub fn native_order() -> ByteOrder {
    *NATIVE.get_or_init(|| {
        let order = resolve(probe());
        tracing::debug!(%order, "probed native byte order");
        order
    })
}
