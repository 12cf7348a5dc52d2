/// The host uses a byte order this crate can't convert from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("middle-endian (PDP) byte order is not supported")]
    Middle,

    #[error("byte order probe read back {value:#010x} (bytes {:02x?}), which is neither little- nor big-endian", .value.to_ne_bytes())]
    UnrecognizedProbe { value: u32 },
}
