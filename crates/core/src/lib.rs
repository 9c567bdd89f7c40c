//! # Marketplace Core
//!
//! Domain types and the availability engine for the services marketplace.
//!
//! The engine is a pure computation over three read-only datasets (a provider's
//! weekly working hours, its date-level exceptions and a service's confirmed
//! bookings). Storage is reached only through the [`store::MarketStore`] trait,
//! which callers inject.

pub mod availability;
pub mod errors;
pub mod models;
pub mod store;
