//! STT encoding: service records to bytes.
//!
//! Groups of four records pack into one byte, first record in the top pair.
//! Only the allocated and activated flags are written; names and the
//! mandatory flag are dropped.

use crate::bits::{join_byte, BitPair};
use crate::error::SttError;
use crate::layout::{MIN_TABLE_SERVICES, SERVICES_PER_BYTE};
use crate::service::ServiceInfo;

/// Encode service records into a status table.
///
/// Produces exactly `services.len() / 4` bytes.
///
/// # Errors
///
/// - [`SttError::EmptyInput`] if `services` is empty
/// - [`SttError::BelowMinimumSize`] if fewer than 8 records are given
/// - [`SttError::UnalignedRecordCount`] if the count is not a multiple of 4
pub fn encode(services: &[ServiceInfo]) -> Result<Vec<u8>, SttError> {
    check_count(services.len())?;

    let bytes: Vec<u8> = services
        .chunks_exact(SERVICES_PER_BYTE)
        .map(|group| join_byte(std::array::from_fn(|k| group[k].bit_pair())))
        .collect();

    tracing::trace!(services = services.len(), bytes = bytes.len(), "encoded table");

    Ok(bytes)
}

/// Encode bare payloads, bypassing record metadata.
///
/// Applies the same size rules as [`encode`].
pub fn encode_pairs(pairs: &[BitPair]) -> Result<Vec<u8>, SttError> {
    check_count(pairs.len())?;

    Ok(pairs
        .chunks_exact(SERVICES_PER_BYTE)
        .map(|group| join_byte(std::array::from_fn(|k| group[k])))
        .collect())
}

/// Size rules shared by both encoders.
fn check_count(count: usize) -> Result<(), SttError> {
    if count == 0 {
        tracing::debug!("rejecting empty service list");
        return Err(SttError::EmptyInput);
    }

    if count < MIN_TABLE_SERVICES {
        tracing::debug!(count, "service list shorter than {MIN_TABLE_SERVICES} records");
        return Err(SttError::BelowMinimumSize {
            actual: count,
            minimum: MIN_TABLE_SERVICES,
        });
    }

    // Every byte needs a full group of four
    if count % SERVICES_PER_BYTE != 0 {
        tracing::debug!(count, "trailing partial byte group");
        return Err(SttError::UnalignedRecordCount(count));
    }

    Ok(())
}
