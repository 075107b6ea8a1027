//! Strongly-typed ID wrappers for all entity types
//!
//! Newtype wrappers keep an invoice id from being passed where a check id is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a full UUID string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Check whether user input refers to this ID
            ///
            /// Accepts the full UUID, the short display form (`inv-1a2b3c4d`)
            /// or the bare 8-character prefix.
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                let full = self.0.to_string();
                if input.eq_ignore_ascii_case(&full) {
                    return true;
                }
                let short = input.strip_prefix($display_prefix).unwrap_or(input);
                short.len() >= 8 && full.starts_with(&short.to_lowercase())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(InvoiceId, "inv-");
define_id!(CheckId, "chk-");
define_id!(CashAccountId, "kas-");
define_id!(CashTransactionId, "ctx-");
define_id!(ProjectId, "prj-");
define_id!(ContractId, "ctr-");
define_id!(InstallmentId, "ins-");
define_id!(PayrollId, "pay-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = InvoiceId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("inv-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_id_serialization() {
        let id = ContractId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ContractId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = CheckId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: CheckId = format!("chk-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_matches_short_forms() {
        let id = ProjectId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert!(id.matches("prj-550e8400"));
        assert!(id.matches("550e8400"));
        assert!(id.matches("550E8400-E29B-41D4-A716-446655440000"));
        assert!(!id.matches("550e"));
        assert!(!id.matches("prj-12345678"));
    }
}
