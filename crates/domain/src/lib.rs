//! Domain layer for the referral backend.
//!
//! This crate contains:
//! - Domain models (Referral, WaitingListEntry)
//! - Request/response types with validation rules

pub mod models;
