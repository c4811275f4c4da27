//! Submission-time split sheet validation
//!
//! The editing operations never enforce the 100% invariant (manual
//! edits are expected to pass through invalid intermediate states);
//! this check runs when an event is created or its splits change.

use shared::models::Partner;

use super::SplitError;

/// Float comparison slack for percentages that should be whole numbers
const TOLERANCE: f64 = 1e-9;

/// Check a split sheet before it is persisted
///
/// Requires exactly one house row whose percentage matches the event's
/// `rumba_percentage`, every percentage within [0, 100], and a total of
/// exactly 100.
pub fn validate_splits(partners: &[Partner], rumba_percentage: f64) -> Result<(), SplitError> {
    let mut house: Option<&Partner> = None;
    for partner in partners {
        if partner.is_house() {
            if house.is_some() {
                return Err(SplitError::DuplicateHouse);
            }
            house = Some(partner);
        }
    }
    let house = house.ok_or(SplitError::MissingHouse)?;

    for partner in partners {
        if !partner.percentage.is_finite()
            || partner.percentage < 0.0
            || partner.percentage > 100.0
        {
            return Err(SplitError::OutOfRange {
                name: partner.name.clone(),
                percentage: partner.percentage,
            });
        }
    }

    if (house.percentage - rumba_percentage).abs() > TOLERANCE {
        return Err(SplitError::HouseMismatch {
            partner: house.percentage,
            event: rumba_percentage,
        });
    }

    let total: f64 = partners.iter().map(|p| p.percentage).sum();
    if (total - 100.0).abs() > TOLERANCE {
        return Err(SplitError::TotalNot100 { total });
    }

    Ok(())
}
