//! Common types and data structures

use jal_core::{ActivityEntry, District, Faq, MapLocation, ReportStats};

/// Bottom navigation tabs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Reports,
    Education,
    Query,
}

/// Screens stacked inside the Reports tab.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ReportScreen {
    Dashboard,
    Chooser,
    WaterForm,
    PatientForm,
}

/// Sub-tabs inside the Query tab.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum QueryTab {
    Faq,
    SubmitQuery,
}

/// Which form a finished submission belongs to.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    WaterReport,
    PatientReport,
    Query,
}

/// Everything fetched from the backend. Slots start empty and are filled
/// by background tasks; the UI renders whatever the latest fetch produced.
#[derive(Default)]
pub struct RemoteData {
    pub stats: Option<ReportStats>,
    pub activity: Option<Vec<ActivityEntry>>,
    pub map_locations: Option<Vec<MapLocation>>,
    pub faqs: Option<Vec<Faq>>,
    pub districts: Option<Vec<District>>,
}

/// Built-in education module card.
pub struct EducationVideo {
    pub title: &'static str,
    pub description: &'static str,
    pub audience: &'static str,
    pub category: &'static str,
    pub level: &'static str,
    pub duration: &'static str,
}
