//! Billing record types.
//!
//! The `billings` table itself lives in the hosted datastore; this service
//! only ever issues a targeted field update against one row. These types
//! describe the identifier used to address that row and the update payload.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a billing row in the external datastore.
///
/// The browser client sends this as either a JSON string or a JSON number
/// depending on the screen it came from, so deserialization accepts both and
/// normalizes to a string. The same string form is attached to checkout
/// sessions as correlation metadata and echoed back by the processor.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BillingId(String);

impl BillingId {
    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for BillingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(i64),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(Self(n.to_string())),
            Raw::Str(s) => {
                if s.trim().is_empty() {
                    Err(serde::de::Error::custom("billing id must not be empty"))
                } else {
                    Ok(Self(s))
                }
            }
        }
    }
}

impl From<&str> for BillingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Debug for BillingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BillingId({})", self.0)
    }
}

impl fmt::Display for BillingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payment status of a billing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    /// Rent not yet paid.
    Unpaid,
    /// Payment confirmed by the processor.
    Paid,
}

impl fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unpaid => f.write_str("unpaid"),
            Self::Paid => f.write_str("paid"),
        }
    }
}

/// The field update applied to a billing row when its payment completes.
///
/// Serialized as the body of the row-store update. Reapplying the same
/// update for a redelivered event writes content-identical fields, which is
/// what makes webhook redelivery safe without coordination.
#[derive(Debug, Clone, Serialize)]
pub struct BillingUpdate {
    /// New status, always [`BillingStatus::Paid`] in this flow.
    pub status: BillingStatus,
    /// When the payment was reconciled.
    pub paid_date: DateTime<Utc>,
    /// Processor payment reference (payment intent id).
    pub payment_id: String,
}

impl BillingUpdate {
    /// Build the update recorded for a completed checkout.
    #[must_use]
    pub fn paid(payment_id: impl Into<String>, paid_date: DateTime<Utc>) -> Self {
        Self {
            status: BillingStatus::Paid,
            paid_date,
            payment_id: payment_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_id_accepts_json_string() {
        let id: BillingId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn billing_id_accepts_json_number() {
        let id: BillingId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn billing_id_rejects_empty_string() {
        let result: Result<BillingId, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BillingStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
    }

    #[test]
    fn update_serializes_all_fields() {
        let when = chrono::DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let update = BillingUpdate::paid("pi_123", when);
        let value = serde_json::to_value(&update).unwrap();

        assert_eq!(value["status"], "paid");
        assert_eq!(value["payment_id"], "pi_123");
        assert_eq!(value["paid_date"], "2024-03-01T10:00:00Z");
    }
}
