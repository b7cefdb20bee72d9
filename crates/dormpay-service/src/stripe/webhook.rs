//! Stripe webhook signature verification.
//!
//! Stripe signs each delivery with HMAC-SHA256 over `"{timestamp}.{body}"`
//! and sends the result in the `stripe-signature` header as
//! `t=<unix>,v1=<hex>[,v1=<hex>...]`. Verification must run against the raw
//! body bytes; any re-serialization of a parsed payload breaks the check.

use crate::crypto::{constant_time_eq, hmac_sha256_hex};

/// Maximum accepted age of a signed timestamp, in seconds.
///
/// Matches the default tolerance of Stripe's own `constructEvent`.
pub const SIGNATURE_TOLERANCE_SECONDS: i64 = 300;

/// Signature verification failure.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Header is not in `t=...,v1=...` form.
    #[error("malformed signature header")]
    Malformed,

    /// Signed timestamp is outside the accepted tolerance.
    #[error("signature timestamp outside tolerance")]
    Expired,

    /// No `v1` candidate matched the expected signature.
    #[error("signature mismatch")]
    Mismatch,
}

/// Parsed `stripe-signature` header.
#[derive(Debug)]
struct SignatureHeader<'a> {
    timestamp: i64,
    candidates: Vec<&'a str>,
}

impl<'a> SignatureHeader<'a> {
    fn parse(header: &'a str) -> Result<Self, SignatureError> {
        let mut timestamp = None;
        let mut candidates = Vec::new();

        for part in header.split(',') {
            let mut kv = part.trim().splitn(2, '=');
            match (kv.next(), kv.next()) {
                (Some("t"), Some(ts)) => timestamp = ts.parse::<i64>().ok(),
                (Some("v1"), Some(sig)) => candidates.push(sig),
                _ => {}
            }
        }

        let timestamp = timestamp.ok_or(SignatureError::Malformed)?;
        if candidates.is_empty() {
            return Err(SignatureError::Malformed);
        }

        Ok(Self {
            timestamp,
            candidates,
        })
    }
}

/// Verify a webhook delivery against the shared secret.
///
/// `now` is the caller's clock (unix seconds); injecting it keeps the
/// tolerance check testable without a real clock.
pub fn verify_signature(
    secret: &str,
    payload: &[u8],
    header: &str,
    now: i64,
) -> Result<(), SignatureError> {
    let parsed = SignatureHeader::parse(header)?;

    if (now - parsed.timestamp).abs() > SIGNATURE_TOLERANCE_SECONDS {
        return Err(SignatureError::Expired);
    }

    // Signed payload is "{timestamp}." followed by the raw body bytes.
    let mut signed = parsed.timestamp.to_string().into_bytes();
    signed.push(b'.');
    signed.extend_from_slice(payload);

    let expected = hmac_sha256_hex(secret, &signed);

    if parsed
        .candidates
        .iter()
        .any(|candidate| constant_time_eq(&expected, candidate))
    {
        Ok(())
    } else {
        Err(SignatureError::Mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";

    fn sign(payload: &[u8], timestamp: i64) -> String {
        let mut signed = timestamp.to_string().into_bytes();
        signed.push(b'.');
        signed.extend_from_slice(payload);
        let sig = hmac_sha256_hex(SECRET, &signed);
        format!("t={timestamp},v1={sig}")
    }

    #[test]
    fn valid_signature_verifies() {
        let payload = br#"{"id":"evt_1","type":"checkout.session.completed"}"#;
        let header = sign(payload, 1_700_000_000);

        assert_eq!(
            verify_signature(SECRET, payload, &header, 1_700_000_000),
            Ok(())
        );
    }

    #[test]
    fn signature_within_tolerance_verifies() {
        let payload = b"{}";
        let header = sign(payload, 1_700_000_000);

        assert_eq!(
            verify_signature(SECRET, payload, &header, 1_700_000_000 + 299),
            Ok(())
        );
    }

    #[test]
    fn stale_timestamp_is_rejected() {
        let payload = b"{}";
        let header = sign(payload, 1_700_000_000);

        assert_eq!(
            verify_signature(SECRET, payload, &header, 1_700_000_000 + 301),
            Err(SignatureError::Expired)
        );
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let header = sign(b"{\"a\":1}", 1_700_000_000);

        assert_eq!(
            verify_signature(SECRET, b"{\"a\":2}", &header, 1_700_000_000),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let payload = b"{}";
        let header = sign(payload, 1_700_000_000);

        assert_eq!(
            verify_signature("whsec_other", payload, &header, 1_700_000_000),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn any_matching_v1_candidate_verifies() {
        // Secret rotation sends multiple v1 entries; one match is enough.
        let payload = b"{}";
        let timestamp = 1_700_000_000;
        let mut signed = timestamp.to_string().into_bytes();
        signed.push(b'.');
        signed.extend_from_slice(payload);
        let good = hmac_sha256_hex(SECRET, &signed);
        let header = format!("t={timestamp},v1=deadbeef,v1={good}");

        assert_eq!(verify_signature(SECRET, payload, &header, timestamp), Ok(()));
    }

    #[test]
    fn header_without_timestamp_is_malformed() {
        assert_eq!(
            verify_signature(SECRET, b"{}", "v1=abc", 0),
            Err(SignatureError::Malformed)
        );
    }

    #[test]
    fn header_without_candidates_is_malformed() {
        assert_eq!(
            verify_signature(SECRET, b"{}", "t=123", 0),
            Err(SignatureError::Malformed)
        );
    }
}
