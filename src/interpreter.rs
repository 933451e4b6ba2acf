//! Interpreter abstraction over table formats.

use crate::decode::decode;
use crate::encode::encode;
use crate::error::SttError;
use crate::service::ServiceInfo;

/// A bidirectional translator between a byte table and service records.
pub trait Interpreter {
    /// Parse a byte table into service records.
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ServiceInfo>, SttError>;

    /// Serialize service records back into a byte table.
    fn to_bytes(&self, services: &[ServiceInfo]) -> Result<Vec<u8>, SttError>;
}

/// Stateless interpreter for the Service/Status Table format.
#[derive(Clone, Copy, Debug, Default)]
pub struct SttInterpreter;

impl SttInterpreter {
    pub fn new() -> Self {
        Self
    }
}

impl Interpreter for SttInterpreter {
    fn parse(&self, bytes: &[u8]) -> Result<Vec<ServiceInfo>, SttError> {
        decode(bytes)
    }

    fn to_bytes(&self, services: &[ServiceInfo]) -> Result<Vec<u8>, SttError> {
        encode(services)
    }
}
