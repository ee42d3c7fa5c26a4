//! Shared core for the Jal Drishti client and backend.
//!
//! Everything both sides agree on lives here: the wire types exchanged as
//! JSON, the closed field vocabularies, form drafts with validation and
//! payload assembly, FAQ filtering and relative-time formatting.

pub mod faq;
pub mod forms;
pub mod models;
pub mod timefmt;
pub mod vocab;

pub use models::{
    ActivityEntry, District, Faq, MapLocation, NewPatientReport, NewQuery, NewWaterReport,
    PatientReport, ReportKind, ReportStats, ReportStatus, UserQuery, WaterReport, WaterSource,
};
