//! Domain models.

pub mod referral;
pub mod waiting_list;
