//! Native byte order, and conversions to explicit little or big endian.
//!
//! The byte order is fixed by the build script whenever the target tells us
//! what it is, which makes every conversion either a no-op or a single byte
//! swap with no branch. Otherwise it's probed once at runtime, see
//! [`runtime`].
//!
//! ```
//! let wire = natend::to_be32(0x0a000001);
//! assert_eq!(wire.to_ne_bytes(), [10, 0, 0, 1]);
//! assert_eq!(natend::to_be32(wire), 0x0a000001);
//! ```

#[cfg(test)]
mod detect;
pub mod endianness;
pub mod error;
pub mod order;
pub mod runtime;

pub use self::{
    endianness::{
        convert,
        decode,
        encode,
        to_be16,
        to_be32,
        to_be64,
        to_le16,
        to_le32,
        to_le64,
        BigEndian,
        Endianness,
        Integer,
        LittleEndian,
        NativeEndian,
        NetworkEndian,
    },
    error::Error,
    order::{
        native_order,
        ByteOrder,
        Resolution,
        RESOLUTION,
    },
};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
