//! Split sheet editing
//!
//! An event's revenue split is a list of partner rows summing to 100%,
//! with one reserved house row ([`shared::models::HOUSE_PARTNER`]).
//! Editing the house percentage redistributes the remainder across the
//! other partners proportionally; editing any other row is a manual
//! edit with no recalculation. Nothing here touches the repository;
//! callers validate with [`validate_splits`] before persisting.

pub mod rebalance;
pub mod validate;

pub use rebalance::{
    add_partner, rebalance_house, remove_partner, rename_partner, set_partner_percentage,
};
pub use validate::validate_splits;

use thiserror::Error;

use crate::utils::AppError;

/// Split sheet editing and validation errors
#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("No partner at index {0}")]
    NoSuchPartner(usize),

    #[error("The house partner cannot be renamed")]
    HouseRename,

    #[error("The house partner cannot be removed")]
    HouseRemove,

    #[error("Partner name is reserved for the house partner")]
    ReservedName,

    #[error("Split sheet has no house partner row")]
    MissingHouse,

    #[error("Split sheet has more than one house partner row")]
    DuplicateHouse,

    #[error("{name} percentage {percentage} is outside 0-100")]
    OutOfRange { name: String, percentage: f64 },

    #[error("Partner percentages must add up to 100% (currently {total}%)")]
    TotalNot100 { total: f64 },

    #[error("House partner percentage {partner}% does not match rumbaPercentage {event}%")]
    HouseMismatch { partner: f64, event: f64 },
}

impl From<SplitError> for AppError {
    fn from(e: SplitError) -> Self {
        AppError::Validation(e.to_string())
    }
}
