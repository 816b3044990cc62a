use thiserror::Error;

use crate::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("item {0:?} is already reserved by another claimant")]
    AlreadyReserved(ItemId),

    #[error("item {0:?} no longer exists")]
    TargetMissing(ItemId),

    #[error("item {target:?} cannot be reserved: {reason}")]
    Rejected { target: ItemId, reason: String },
}
