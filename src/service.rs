//! Service records carried by a status table.

use std::fmt;

use crate::bits::BitPair;
use crate::layout::{service_name, MANDATORY_SERVICES};

/// Whether a service sits in the table's mandatory block.
///
/// Derived from table position on decode and never written back by encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceZone {
    /// One of the first eight services (first two bytes).
    Mandatory,
    /// Any later, extension service.
    Optional,
}

impl ServiceZone {
    /// Zone of the service at `index` in a decoded table.
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index < MANDATORY_SERVICES {
            Self::Mandatory
        } else {
            Self::Optional
        }
    }
}

/// Status entry for a single service.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceInfo {
    name: String,
    status: BitPair,
    zone: ServiceZone,
}

impl ServiceInfo {
    /// Create a service record. Any flag combination is accepted.
    pub fn new(
        name: impl Into<String>,
        is_allocated: bool,
        is_activated: bool,
        is_mandatory: bool,
    ) -> Self {
        let zone = if is_mandatory {
            ServiceZone::Mandatory
        } else {
            ServiceZone::Optional
        };
        Self {
            name: name.into(),
            status: BitPair::new(is_allocated, is_activated),
            zone,
        }
    }

    /// Record for the service decoded at `index` of a table.
    pub(crate) fn at_index(index: usize, status: BitPair) -> Self {
        Self {
            name: service_name(index),
            status,
            zone: ServiceZone::for_index(index),
        }
    }

    /// Service name. Informational only.
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.status.allocated
    }

    #[inline]
    pub fn is_activated(&self) -> bool {
        self.status.activated
    }

    #[inline]
    pub fn is_mandatory(&self) -> bool {
        self.zone == ServiceZone::Mandatory
    }

    /// The encoded payload of this service.
    #[inline]
    pub fn bit_pair(&self) -> BitPair {
        self.status
    }

    #[inline]
    pub fn zone(&self) -> ServiceZone {
        self.zone
    }

    /// Payload as `(allocated, activated)`.
    ///
    /// Element 0 is the allocated flag, element 1 the activated flag.
    pub fn to_bit_pair(&self) -> (bool, bool) {
        (self.status.allocated, self.status.activated)
    }
}

impl fmt::Display for ServiceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(name = {}, allocated = {}, activated = {}, mandatory = {})",
            self.name,
            self.is_allocated(),
            self.is_activated(),
            self.is_mandatory()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_verbatim() {
        let service = ServiceInfo::new("uplink", true, false, true);
        assert_eq!(service.name(), "uplink");
        assert!(service.is_allocated());
        assert!(!service.is_activated());
        assert!(service.is_mandatory());
        assert_eq!(service.zone(), ServiceZone::Mandatory);

        let service = ServiceInfo::new(String::from("x"), false, true, false);
        assert_eq!(service.zone(), ServiceZone::Optional);
        assert_eq!(service.bit_pair(), BitPair::new(false, true));
    }

    #[test]
    fn test_to_bit_pair() {
        assert_eq!(
            ServiceInfo::new("a", true, false, false).to_bit_pair(),
            (true, false)
        );
        assert_eq!(
            ServiceInfo::new("b", false, true, false).to_bit_pair(),
            (false, true)
        );
    }

    #[test]
    fn test_zone_for_index() {
        assert_eq!(ServiceZone::for_index(0), ServiceZone::Mandatory);
        assert_eq!(ServiceZone::for_index(7), ServiceZone::Mandatory);
        assert_eq!(ServiceZone::for_index(8), ServiceZone::Optional);
        assert_eq!(ServiceZone::for_index(1000), ServiceZone::Optional);
    }

    #[test]
    fn test_at_index() {
        let service = ServiceInfo::at_index(9, BitPair::new(true, true));
        assert_eq!(service.name(), "Service-9");
        assert!(!service.is_mandatory());
    }

    #[test]
    fn test_display() {
        let service = ServiceInfo::new("Service-3", true, false, true);
        assert_eq!(
            service.to_string(),
            "(name = Service-3, allocated = true, activated = false, mandatory = true)"
        );
    }
}
