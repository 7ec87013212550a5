//! Bloom Certificate Issuance
//!
//! Turns an accepted donation into a render-ready certificate request: a
//! display identifier, the gift's certificate tier, and its impact
//! statement, combined with the donor-supplied name and date. No
//! persistence; the only side effect is identifier generation.
//!
//! Document rendering itself is an external collaborator, reached through
//! the [`DocumentRenderer`] trait. It consumes the request and returns a
//! binary document; it never calls back into the engine.

#![deny(unsafe_code)]

use bloom_tiers::impact_description;
use bloom_types::{Amount, CertificateTier};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display-only certificate identifier, e.g. `BLM-2026-3F7A9C1D22E04B81`.
///
/// Collision-resistant at human donation volumes (64 random bits), not
/// cryptographically meaningful; it exists so donors and staff can refer to
/// a certificate, not to authenticate one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateId(String);

impl CertificateId {
    /// Generate an identifier stamped with the issue year.
    pub fn generate(issued_on: DateTime<Utc>) -> Self {
        let entropy = Uuid::new_v4().simple().to_string();
        Self(format!(
            "BLM-{}-{}",
            issued_on.year(),
            entropy[..16].to_uppercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the document renderer needs to produce a certificate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub certificate_id: CertificateId,
    pub donor_name: String,
    pub amount: Amount,
    pub issued_on: DateTime<Utc>,
    pub impact_statement: String,
    pub tier: CertificateTier,
}

/// Assemble a certificate request for a single gift.
///
/// Derives the tier and impact statement from the amount and generates the
/// display identifier.
pub fn issue(
    donor_name: impl Into<String>,
    amount: Amount,
    issued_on: DateTime<Utc>,
) -> CertificateRequest {
    CertificateRequest {
        certificate_id: CertificateId::generate(issued_on),
        donor_name: donor_name.into(),
        amount,
        issued_on,
        impact_statement: impact_description(amount),
        tier: bloom_tiers::certificate_tier(amount),
    }
}

/// Error from the external document renderer
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("certificate rendering failed: {0}")]
    Failed(String),
}

/// External collaborator contract: consumes a request, returns a binary
/// document (PDF or image bytes). Never calls back into the engine.
pub trait DocumentRenderer {
    fn render(&self, request: &CertificateRequest) -> Result<Vec<u8>, RenderError>;
}
