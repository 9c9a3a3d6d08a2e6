//! Shared utilities for the referral backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Cryptographic utilities (API key hashing)

pub mod crypto;
