//! Tenant identifier

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a tenant in a multi-tenant deployment.
///
/// Tenant IDs are strictly positive; `new` rejects anything else so the
/// directory lookup only ever sees well-formed references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TenantId(i64);

impl TenantId {
    /// Create a tenant ID from a raw integer, rejecting non-positive values.
    pub fn new(id: i64) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    /// The raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_id_positive() {
        let id = TenantId::new(5).unwrap();
        assert_eq!(id.get(), 5);
        assert_eq!(id.to_string(), "5");
    }

    #[test]
    fn test_tenant_id_rejects_zero_and_negative() {
        assert!(TenantId::new(0).is_none());
        assert!(TenantId::new(-3).is_none());
    }

    #[test]
    fn test_tenant_id_serde_transparent() {
        let id = TenantId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: TenantId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, id);
    }
}
