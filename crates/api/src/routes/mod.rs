//! HTTP route handlers.

pub mod health;
pub mod referrals;
pub mod waiting_list;
