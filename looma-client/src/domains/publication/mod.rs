//! Chapter publication lifecycle
//!
//! Publish, schedule, cancel-schedule, and delete. All transitions are
//! server-authoritative; this domain only issues the requests, gates the
//! destructive ones on typed confirmation phrases, and exposes busy flags
//! and per-operation errors for the presentation layer.

pub mod confirm;
pub mod controller;

pub use confirm::ConfirmationPhrase;
pub use controller::{PublicationFlow, PublicationSnapshot};
