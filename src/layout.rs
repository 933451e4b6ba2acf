//! Fixed geometry of a Service/Status Table.
//!
//! Every byte carries four services, two bits each. A valid table holds at
//! least two bytes, and those first two bytes form the mandatory block.

/// Services packed into one byte.
pub const SERVICES_PER_BYTE: usize = 4;

/// Bits carried by one service.
pub const BITS_PER_SERVICE: usize = 2;

/// Smallest table, in bytes.
pub const MIN_TABLE_BYTES: usize = 2;

/// Smallest table, in services.
pub const MIN_TABLE_SERVICES: usize = MIN_TABLE_BYTES * SERVICES_PER_BYTE;

/// Number of leading services flagged mandatory on decode.
pub const MANDATORY_SERVICES: usize = 8;

/// Prefix of synthesized service names.
pub const SERVICE_NAME_PREFIX: &str = "Service-";

/// Name given to the service at `index` in a decoded table.
pub fn service_name(index: usize) -> String {
    format!("{SERVICE_NAME_PREFIX}{index}")
}
