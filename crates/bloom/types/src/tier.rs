//! Donor and certificate tiers
//!
//! Two independently-evolving classifications that both look at a dollar
//! amount but answer different questions:
//!
//! - [`DonorTier`] ranks a donor's *lifetime* total.
//! - [`CertificateTier`] themes the certificate for a *single* gift.
//!
//! They are kept as separate enums with separate threshold tables on
//! purpose; do not merge them.

use serde::{Deserialize, Serialize};

use crate::Amount;

/// Lifetime-total classification of a donor
///
/// Five contiguous bands covering `[0, ∞)`; the derived `Ord` follows
/// declaration order, so `Guardian < Ally < ... < ApexProtector`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DonorTier {
    Guardian,
    Ally,
    Champion,
    Protector,
    ApexProtector,
}

impl DonorTier {
    /// Minimum lifetime total for this tier (the band's lower bound)
    pub fn threshold(&self) -> Amount {
        match self {
            DonorTier::Guardian => Amount::zero(),
            DonorTier::Ally => Amount::from_major(100),
            DonorTier::Champion => Amount::from_major(500),
            DonorTier::Protector => Amount::from_major(1_000),
            DonorTier::ApexProtector => Amount::from_major(5_000),
        }
    }

    /// The next tier up, or `None` at the top
    pub fn next(&self) -> Option<DonorTier> {
        match self {
            DonorTier::Guardian => Some(DonorTier::Ally),
            DonorTier::Ally => Some(DonorTier::Champion),
            DonorTier::Champion => Some(DonorTier::Protector),
            DonorTier::Protector => Some(DonorTier::ApexProtector),
            DonorTier::ApexProtector => None,
        }
    }

    /// All tiers in ascending order
    pub fn all() -> [DonorTier; 5] {
        [
            DonorTier::Guardian,
            DonorTier::Ally,
            DonorTier::Champion,
            DonorTier::Protector,
            DonorTier::ApexProtector,
        ]
    }
}

impl std::fmt::Display for DonorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DonorTier::Guardian => "Guardian",
            DonorTier::Ally => "Ally",
            DonorTier::Champion => "Champion",
            DonorTier::Protector => "Protector",
            DonorTier::ApexProtector => "Apex Protector",
        };
        write!(f, "{name}")
    }
}

/// Single-gift classification driving certificate visuals
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CertificateTier {
    Seedling,
    Rose,
    Lily,
    Orchid,
    Lotus,
}

impl CertificateTier {
    /// Minimum single-gift amount for this tier
    pub fn threshold(&self) -> Amount {
        match self {
            CertificateTier::Seedling => Amount::zero(),
            CertificateTier::Rose => Amount::from_major(50),
            CertificateTier::Lily => Amount::from_major(150),
            CertificateTier::Orchid => Amount::from_major(500),
            CertificateTier::Lotus => Amount::from_major(1_500),
        }
    }

    /// Visual theme handed to the certificate renderer
    pub fn theme(&self) -> CertificateTheme {
        match self {
            CertificateTier::Seedling => CertificateTheme {
                title: "Seedling Supporter",
                color: "#7cb342",
                gradient: ("#aed581", "#558b2f"),
            },
            CertificateTier::Rose => CertificateTheme {
                title: "Rose Benefactor",
                color: "#e91e63",
                gradient: ("#f48fb1", "#ad1457"),
            },
            CertificateTier::Lily => CertificateTheme {
                title: "Lily Patron",
                color: "#ab47bc",
                gradient: ("#ce93d8", "#6a1b9a"),
            },
            CertificateTier::Orchid => CertificateTheme {
                title: "Orchid Guardian",
                color: "#5c6bc0",
                gradient: ("#9fa8da", "#283593"),
            },
            CertificateTier::Lotus => CertificateTheme {
                title: "Lotus Luminary",
                color: "#ffb300",
                gradient: ("#ffe082", "#ff8f00"),
            },
        }
    }

    /// All tiers in ascending order
    pub fn all() -> [CertificateTier; 5] {
        [
            CertificateTier::Seedling,
            CertificateTier::Rose,
            CertificateTier::Lily,
            CertificateTier::Orchid,
            CertificateTier::Lotus,
        ]
    }
}

impl std::fmt::Display for CertificateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.theme().title)
    }
}

/// Visual theme for a certificate tier. Serialized for the renderer,
/// never read back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CertificateTheme {
    pub title: &'static str,
    /// Accent color, hex
    pub color: &'static str,
    /// Background gradient stops, hex
    pub gradient: (&'static str, &'static str),
}
