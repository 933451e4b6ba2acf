//! STT decoding: bytes to service records.
//!
//! Each byte yields four services, MSB pair first. Service names and the
//! mandatory flag are derived from the position in the whole table.

use crate::bits::split_byte;
use crate::error::SttError;
use crate::layout::{MIN_TABLE_BYTES, SERVICES_PER_BYTE};
use crate::service::ServiceInfo;

/// Decode a status table into its service records.
///
/// Produces exactly `4 * bytes.len()` records. The first eight are flagged
/// mandatory; all 256 byte values are valid.
///
/// # Errors
///
/// - [`SttError::EmptyInput`] if `bytes` is empty
/// - [`SttError::BelowMinimumSize`] if `bytes` holds fewer than 2 bytes
pub fn decode(bytes: &[u8]) -> Result<Vec<ServiceInfo>, SttError> {
    if bytes.is_empty() {
        tracing::debug!("rejecting empty table");
        return Err(SttError::EmptyInput);
    }

    if bytes.len() < MIN_TABLE_BYTES {
        tracing::debug!(len = bytes.len(), "table shorter than {MIN_TABLE_BYTES} bytes");
        return Err(SttError::BelowMinimumSize {
            actual: bytes.len(),
            minimum: MIN_TABLE_BYTES,
        });
    }

    let services: Vec<ServiceInfo> = bytes
        .iter()
        .flat_map(|&byte| split_byte(byte))
        .enumerate()
        .map(|(index, pair)| ServiceInfo::at_index(index, pair))
        .collect();

    debug_assert_eq!(services.len(), bytes.len() * SERVICES_PER_BYTE);
    tracing::trace!(bytes = bytes.len(), services = services.len(), "decoded table");

    Ok(services)
}
