//! Binary round-trip codec.
//!
//! The third strategy encodes a record into an opaque byte buffer once and
//! then decodes that same buffer over and over. Bincode is compact and
//! non-self-describing, so the buffer carries field values only, no member
//! names.

use crate::error::MapError;
use crate::record::MessageRecord;

/// Encode a record into its binary representation.
pub fn encode(record: &MessageRecord) -> Result<Vec<u8>, MapError> {
    bincode::serialize(record).map_err(MapError::codec)
}

/// Decode a record from a buffer produced by [`encode`].
///
/// Buffers from any other source are rejected with [`MapError::Codec`].
pub fn decode(bytes: &[u8]) -> Result<MessageRecord, MapError> {
    bincode::deserialize(bytes).map_err(MapError::codec)
}
