//! Partner percentage editing
//!
//! The house edit is the only operation that recalculates other rows.
//! Every other edit is manual; the total is checked at submission time
//! by [`super::validate_splits`], not here.

use shared::models::{HOUSE_PARTNER, Partner};

use super::SplitError;

/// Sanitize a percentage from user input: non-finite becomes 0
fn sanitize(percentage: f64) -> f64 {
    if percentage.is_finite() { percentage } else { 0.0 }
}

/// Edit the house partner's percentage and rebalance the rest
///
/// `percentage` is clamped to [0, 100]. The remainder (100 − p) is
/// redistributed across the non-house rows in proportion to their
/// current percentages, each rounded independently to the nearest whole
/// percent — the total may drift from 100 and is not corrected here.
/// When the non-house rows sum to 0 they are left unchanged. A missing
/// house row is inserted.
pub fn rebalance_house(partners: &mut Vec<Partner>, percentage: f64) {
    let p = sanitize(percentage).clamp(0.0, 100.0);

    match partners.iter_mut().find(|q| q.is_house()) {
        Some(house) => house.percentage = p,
        None => partners.push(Partner::new(HOUSE_PARTNER, p)),
    }

    let remaining = 100.0 - p;
    let total_others: f64 = partners
        .iter()
        .filter(|q| !q.is_house())
        .map(|q| q.percentage)
        .sum();

    if total_others > 0.0 {
        for partner in partners.iter_mut().filter(|q| !q.is_house()) {
            partner.percentage = (partner.percentage * remaining / total_others).round();
        }
    }
}

/// Edit one row's percentage
///
/// The house row routes through [`rebalance_house`]; any other row is
/// set in place with no recalculation.
pub fn set_partner_percentage(
    partners: &mut Vec<Partner>,
    index: usize,
    percentage: f64,
) -> Result<(), SplitError> {
    let Some(partner) = partners.get(index) else {
        return Err(SplitError::NoSuchPartner(index));
    };

    if partner.is_house() {
        rebalance_house(partners, percentage);
        return Ok(());
    }

    partners[index].percentage = sanitize(percentage);
    Ok(())
}

/// Rename one row
///
/// The house row keeps its reserved name, and no other row may take it.
pub fn rename_partner(
    partners: &mut [Partner],
    index: usize,
    name: &str,
) -> Result<(), SplitError> {
    let Some(partner) = partners.get_mut(index) else {
        return Err(SplitError::NoSuchPartner(index));
    };

    if partner.is_house() {
        return Err(SplitError::HouseRename);
    }
    if name == HOUSE_PARTNER {
        return Err(SplitError::ReservedName);
    }

    partner.name = name.to_string();
    Ok(())
}

/// Append a new row holding whatever is left of 100%
pub fn add_partner(partners: &mut Vec<Partner>, name: impl Into<String>) -> Result<(), SplitError> {
    let name = name.into();
    if name == HOUSE_PARTNER {
        return Err(SplitError::ReservedName);
    }

    let used: f64 = partners.iter().map(|p| p.percentage).sum();
    partners.push(Partner::new(name, (100.0 - used).max(0.0)));
    Ok(())
}

/// Remove one row; the freed percentage is not redistributed
pub fn remove_partner(partners: &mut Vec<Partner>, index: usize) -> Result<(), SplitError> {
    let Some(partner) = partners.get(index) else {
        return Err(SplitError::NoSuchPartner(index));
    };

    if partner.is_house() {
        return Err(SplitError::HouseRemove);
    }

    partners.remove(index);
    Ok(())
}
