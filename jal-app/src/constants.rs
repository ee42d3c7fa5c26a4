//! Application constants and configuration

use jal_core::ReportStatus;

use crate::types::EducationVideo;

pub const APP_NAME: &str = "Jal Drishti";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";
/// Overrides the persisted backend URL when set.
pub const BACKEND_URL_ENV: &str = "JAL_DRISHTI_BACKEND_URL";

// ============================================================================
// HOME MAP
// ============================================================================

/// Map view center: Mawsynram, East Khasi Hills.
pub const MAP_CENTER_LAT: f64 = 25.4670;
pub const MAP_CENTER_LNG: f64 = 91.3662;

/// Degrees of latitude/longitude covered by the painted map panel.
/// Wide enough that every built-in sample site projects inside it.
pub const MAP_SPAN_LAT: f64 = 0.50;
pub const MAP_SPAN_LNG: f64 = 1.20;

pub const OSM_ZOOM: u32 = 12;

/// Built-in markers shown while no fetched map locations are available.
pub const SAMPLE_SITES: [(&str, f64, f64, ReportStatus); 5] = [
    ("Mawsynram", 25.4670, 91.3662, ReportStatus::Processed),
    ("Mawjymbuin Caves", 25.5788, 91.8933, ReportStatus::UnderReview),
    ("Hardware House", 25.4500, 91.4000, ReportStatus::Submitted),
    (
        "Emily And Sankrita Homes",
        25.5000,
        91.5000,
        ReportStatus::HighPriority,
    ),
    ("Nan Bah Meston", 25.3500, 91.6000, ReportStatus::Processed),
];

// ============================================================================
// REPORTS DASHBOARD
// ============================================================================

/// Sample counters shown until the first successful stats fetch.
pub const PLACEHOLDER_STATS: jal_core::ReportStats = jal_core::ReportStats {
    total_submitted: 12,
    total_processed: 8,
    under_review: 3,
    high_priority: 1,
};

// ============================================================================
// EDUCATION MODULES
// ============================================================================

pub const EDUCATION_VIDEOS: [EducationVideo; 2] = [
    EducationVideo {
        title: "Water Quality Testing at Home",
        description: "Learn simple methods to test water quality at home using \
                      basic tools and visual inspection techniques.",
        audience: "General Public",
        category: "Testing",
        level: "Beginner",
        duration: "8:45",
    },
    EducationVideo {
        title: "Waterborne Disease Prevention",
        description: "Essential practices for preventing waterborne diseases in \
                      rural communities.",
        audience: "Health Workers",
        category: "Prevention",
        level: "Intermediate",
        duration: "12:30",
    },
];
