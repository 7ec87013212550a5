//! Donation records
//!
//! A donation is a single accepted contribution. Records are immutable once
//! created and only ever appended to the collective ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Amount, ValidationError, ValidationResult};

/// A single contribution record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    /// Amount given, always greater than zero
    pub amount: Amount,
    /// Optional donor contact, format-checked only, never verified
    pub donor_email: Option<String>,
    /// When the donation was recorded, immutable
    pub recorded_at: DateTime<Utc>,
}

impl Donation {
    /// Validate and create a donation stamped with the current time.
    ///
    /// Rejects a zero amount and a malformed email before anything is
    /// recorded. A missing email is fine; donations may be anonymous.
    pub fn new(amount: Amount, donor_email: Option<String>) -> ValidationResult<Self> {
        if amount.is_zero() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if let Some(ref email) = donor_email {
            validate_email(email)?;
        }
        Ok(Self {
            amount,
            donor_email,
            recorded_at: Utc::now(),
        })
    }
}

/// Shallow format check: one `@`, non-empty local part, domain with a dot.
///
/// Deliverability is not this crate's problem; the check only catches typos
/// before they reach the receipt mailer.
fn validate_email(email: &str) -> ValidationResult<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_donation() {
        let donation =
            Donation::new(Amount::from_major(35), Some("donor@example.org".into())).unwrap();
        assert_eq!(donation.amount, Amount::new(3500));
        assert_eq!(donation.donor_email.as_deref(), Some("donor@example.org"));
    }

    #[test]
    fn test_anonymous_donation_allowed() {
        let donation = Donation::new(Amount::from_major(10), None).unwrap();
        assert!(donation.donor_email.is_none());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = Donation::new(Amount::zero(), None);
        assert_eq!(result.unwrap_err(), ValidationError::NonPositiveAmount);
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for bad in ["plainaddress", "@example.org", "donor@", "donor@nodot", "a@.org", "a@org."] {
            let result = Donation::new(Amount::from_major(5), Some(bad.into()));
            assert!(
                matches!(result, Err(ValidationError::InvalidEmail(_))),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let donation =
            Donation::new(Amount::from_major(100), Some("donor@example.org".into())).unwrap();
        let json = serde_json::to_string(&donation).unwrap();
        let back: Donation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, donation);
    }
}
