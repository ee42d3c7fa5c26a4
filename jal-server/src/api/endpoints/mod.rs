//! Request handlers, one module per resource.

pub mod dashboard;
pub mod districts;
pub mod faqs;
pub mod patient_reports;
pub mod queries;
pub mod water_reports;
