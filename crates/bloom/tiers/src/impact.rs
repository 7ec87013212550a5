//! Impact statements
//!
//! Translates a gift into the concrete shelter impact shown to the donor
//! ("sheltered 1 woman for the night"). The phrasing and the night
//! boundaries are user-visible business rules agreed with the shelter; any
//! change here changes donor-facing copy and must go through product.

use bloom_types::Amount;

/// Cost of one night of shelter, the unit every statement is derived from
pub const NIGHT_COST: Amount = Amount(35_00);

/// Human-readable impact of a single gift
///
/// `nights = floor(amount / NIGHT_COST)`. Note the deliberate shape of the
/// ladder: 1 and 2 nights get their own phrasings before the generic
/// "{n} safe nights" band, and 30 nights still reads "2 weeks" — the
/// per-week phrasing starts strictly above 30.
pub fn impact_description(amount: Amount) -> String {
    let nights = amount.cents() / NIGHT_COST.cents();
    match nights {
        0 => "provided emergency supplies".to_string(),
        1 => "sheltered 1 woman for the night".to_string(),
        2 => "sheltered 2 women for the night".to_string(),
        3..=4 => format!("provided {nights} safe nights of shelter"),
        5..=7 => format!("sheltered a mother and child for {} nights", nights / 2),
        8..=14 => "provided a full week of safety for a family".to_string(),
        15..=30 => "provided 2 weeks of shelter and support".to_string(),
        _ => format!("provided {} weeks of safety for a family", nights / 7),
    }
}
