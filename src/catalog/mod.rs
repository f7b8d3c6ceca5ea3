//! The catalog — an in-memory relational store with four collections.
//!
//! - course types and courses: ordered label sets, positional identity
//! - offerings: `"<type> - <course>"` labels, deduplicated by string
//! - registrations: (offering label, student name) pairs, never deduplicated
//!
//! No referential integrity between them. Invalid input never errors; it
//! simply leaves the snapshot unchanged.

pub mod action;
pub mod events;
pub mod labels;
pub mod ledger;
pub mod offering;
pub mod session;

pub use action::Action;
pub use events::CatalogEvent;
pub use labels::LabelRegistry;
pub use ledger::{Registration, RegistrationLedger};
pub use offering::{offering_label, OfferingRegistry};
pub use session::Session;
