//! Repository implementations for database operations.

pub mod referral;
pub mod waiting_list;

pub use referral::ReferralRepository;
pub use waiting_list::WaitingListRepository;
