//! Band lookups for donor and certificate tiers
//!
//! Both lookups walk their tier's threshold table from the top: the highest
//! tier whose lower bound is at or below the amount wins. The bands are
//! contiguous and exhaustive over `[0, ∞)`, so every amount maps to exactly
//! one tier and larger amounts never map lower.

use bloom_types::{Amount, CertificateTier, DonorTier};
use serde::{Deserialize, Serialize};

/// Classify a donor's lifetime total into a donor tier
pub fn donor_level(lifetime_total: Amount) -> DonorTier {
    let mut level = DonorTier::Guardian;
    for tier in DonorTier::all() {
        if lifetime_total >= tier.threshold() {
            level = tier;
        }
    }
    level
}

/// The next donor tier above a lifetime total, with the total required to
/// reach it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTier {
    pub tier: DonorTier,
    pub threshold: Amount,
}

/// The next tier up from a lifetime total, or `None` at the top tier
pub fn next_donor_level(lifetime_total: Amount) -> Option<NextTier> {
    donor_level(lifetime_total).next().map(|tier| NextTier {
        tier,
        threshold: tier.threshold(),
    })
}

/// Classify a single gift into a certificate tier
///
/// Independent thresholds from [`donor_level`]; this drives certificate
/// visuals only.
pub fn certificate_tier(single_amount: Amount) -> CertificateTier {
    let mut level = CertificateTier::Seedling;
    for tier in CertificateTier::all() {
        if single_amount >= tier.threshold() {
            level = tier;
        }
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_donor_level_bands() {
        assert_eq!(donor_level(Amount::zero()), DonorTier::Guardian);
        assert_eq!(donor_level(Amount::from_major(99)), DonorTier::Guardian);
        assert_eq!(donor_level(Amount::from_major(100)), DonorTier::Ally);
        assert_eq!(donor_level(Amount::from_major(499)), DonorTier::Ally);
        assert_eq!(donor_level(Amount::from_major(500)), DonorTier::Champion);
        assert_eq!(donor_level(Amount::from_major(1_000)), DonorTier::Protector);
        assert_eq!(
            donor_level(Amount::from_major(5_000)),
            DonorTier::ApexProtector
        );
        assert_eq!(
            donor_level(Amount::from_major(1_000_000)),
            DonorTier::ApexProtector
        );
    }

    #[test]
    fn test_band_edges_are_exclusive_below() {
        // one cent under a threshold stays in the lower band
        assert_eq!(
            donor_level(Amount::from_major(100) - Amount::new(1)),
            DonorTier::Guardian
        );
        assert_eq!(
            donor_level(Amount::from_major(5_000) - Amount::new(1)),
            DonorTier::Protector
        );
    }

    #[test]
    fn test_next_donor_level() {
        let next = next_donor_level(Amount::zero()).unwrap();
        assert_eq!(next.tier, DonorTier::Ally);
        assert_eq!(next.threshold, Amount::from_major(100));

        let next = next_donor_level(Amount::from_major(750)).unwrap();
        assert_eq!(next.tier, DonorTier::Protector);
        assert_eq!(next.threshold, Amount::from_major(1_000));

        assert!(next_donor_level(Amount::from_major(5_000)).is_none());
        assert!(next_donor_level(Amount::from_major(99_999)).is_none());
    }

    #[test]
    fn test_certificate_tier_bands() {
        assert_eq!(certificate_tier(Amount::zero()), CertificateTier::Seedling);
        assert_eq!(
            certificate_tier(Amount::from_major(49)),
            CertificateTier::Seedling
        );
        assert_eq!(
            certificate_tier(Amount::from_major(50)),
            CertificateTier::Rose
        );
        assert_eq!(
            certificate_tier(Amount::from_major(150)),
            CertificateTier::Lily
        );
        assert_eq!(
            certificate_tier(Amount::from_major(500)),
            CertificateTier::Orchid
        );
        assert_eq!(
            certificate_tier(Amount::from_major(1_500)),
            CertificateTier::Lotus
        );
    }

    #[test]
    fn test_tier_schemes_are_independent() {
        // $500 lifetime is a Champion donor, but a $500 single gift is an
        // Orchid certificate; the two tables must not be conflated.
        let amount = Amount::from_major(500);
        assert_eq!(donor_level(amount), DonorTier::Champion);
        assert_eq!(certificate_tier(amount), CertificateTier::Orchid);
    }

    proptest! {
        #[test]
        fn property_donor_level_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(donor_level(Amount::new(lo)) <= donor_level(Amount::new(hi)));
        }

        #[test]
        fn property_bands_partition_amounts(cents in 0u64..10_000_000) {
            let amount = Amount::new(cents);
            let tier = donor_level(amount);
            // the amount sits at or above its own band's lower bound
            prop_assert!(amount >= tier.threshold());
            // and strictly below the next band's lower bound, if any
            if let Some(next) = next_donor_level(amount) {
                prop_assert!(amount < next.threshold);
                prop_assert!(next.tier > tier);
            } else {
                prop_assert_eq!(tier, DonorTier::ApexProtector);
            }
        }

        #[test]
        fn property_certificate_tier_is_monotonic(a in 0u64..10_000_000, b in 0u64..10_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(certificate_tier(Amount::new(lo)) <= certificate_tier(Amount::new(hi)));
        }
    }
}
