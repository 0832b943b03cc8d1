#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # iptracker-entities
//!
//! Reusable, agnostic domain entities for the IP address tracker.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod geo;
pub mod location;
pub mod lookup;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
