//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod referral;
pub mod waiting_list;

pub use referral::{ReferralEntity, ReferralStatusDb, SponsorTokenEntity};
pub use waiting_list::WaitingListEntryEntity;
