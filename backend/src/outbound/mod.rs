//! Outbound adapters implementing domain ports against infrastructure.
//!
//! - **persistence**: PostgreSQL repositories and token lookup via Diesel.

pub mod persistence;
