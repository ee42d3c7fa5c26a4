//! Wire types exchanged between the client and the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// CLOSED VOCABULARY ENUMS
// ============================================================================

/// Lifecycle status the backend assigns to stored reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    Processed,
    UnderReview,
    HighPriority,
}

impl Default for ReportStatus {
    fn default() -> Self {
        ReportStatus::Submitted
    }
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Submitted,
        ReportStatus::Processed,
        ReportStatus::UnderReview,
        ReportStatus::HighPriority,
    ];

    /// Wire value, also used as the storage column value.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Submitted => "submitted",
            ReportStatus::Processed => "processed",
            ReportStatus::UnderReview => "under_review",
            ReportStatus::HighPriority => "high_priority",
        }
    }

    pub fn parse(s: &str) -> Option<ReportStatus> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Origin of a tested or consumed water sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterSource {
    Borewell,
    River,
    Lake,
    Pond,
    Well,
    Tap,
    Spring,
}

impl WaterSource {
    pub const ALL: [WaterSource; 7] = [
        WaterSource::Borewell,
        WaterSource::River,
        WaterSource::Lake,
        WaterSource::Pond,
        WaterSource::Well,
        WaterSource::Tap,
        WaterSource::Spring,
    ];

    /// Wire value, also used as the storage column value.
    pub fn as_str(self) -> &'static str {
        match self {
            WaterSource::Borewell => "borewell",
            WaterSource::River => "river",
            WaterSource::Lake => "lake",
            WaterSource::Pond => "pond",
            WaterSource::Well => "well",
            WaterSource::Tap => "tap",
            WaterSource::Spring => "spring",
        }
    }

    /// Label shown in the source pickers.
    pub fn label(self) -> &'static str {
        match self {
            WaterSource::Borewell => "Borewell",
            WaterSource::River => "River",
            WaterSource::Lake => "Lake",
            WaterSource::Pond => "Pond",
            WaterSource::Well => "Well",
            WaterSource::Tap => "Tap Water",
            WaterSource::Spring => "Spring",
        }
    }

    pub fn parse(s: &str) -> Option<WaterSource> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// Which report table an activity entry or map marker was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    WaterReport,
    PatientReport,
}

// ============================================================================
// REFERENCE RECORDS
// ============================================================================

/// Administrative region offered by the district pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub state: String,
}

impl District {
    /// Picker label, e.g. "Kamrup, Assam".
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }
}

/// Frequently asked question served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Faq {
    pub fn new(question: &str, answer: &str, category: &str) -> Faq {
        Faq {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// REPORT RECORDS
// ============================================================================

/// Stored water quality report as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterReport {
    pub id: String,
    pub location_name: String,
    pub district: String,
    pub water_source: WaterSource,
    pub collection_date: DateTime<Utc>,
    pub collection_time: String,
    pub collector_name: String,
    pub collector_id: String,
    pub phone_number: String,
    pub ph_level: Option<f64>,
    pub turbidity: Option<f64>,
    pub chlorine: Option<f64>,
    pub e_coli: Option<i64>,
    pub total_coliform: Option<i64>,
    pub tds: Option<f64>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Water report submission assembled by the client. The server assigns
/// id, status and created_at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWaterReport {
    pub location_name: String,
    pub district: String,
    pub water_source: WaterSource,
    pub collection_date: DateTime<Utc>,
    pub collection_time: String,
    pub collector_name: String,
    pub collector_id: String,
    pub phone_number: String,
    pub ph_level: Option<f64>,
    pub turbidity: Option<f64>,
    pub chlorine: Option<f64>,
    pub e_coli: Option<i64>,
    pub total_coliform: Option<i64>,
    pub tds: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl WaterReport {
    /// Materialize a stored record from a submission.
    pub fn from_new(new: NewWaterReport) -> WaterReport {
        WaterReport {
            id: Uuid::new_v4().to_string(),
            location_name: new.location_name,
            district: new.district,
            water_source: new.water_source,
            collection_date: new.collection_date,
            collection_time: new.collection_time,
            collector_name: new.collector_name,
            collector_id: new.collector_id,
            phone_number: new.phone_number,
            ph_level: new.ph_level,
            turbidity: new.turbidity,
            chlorine: new.chlorine,
            e_coli: new.e_coli,
            total_coliform: new.total_coliform,
            tds: new.tds,
            status: ReportStatus::Submitted,
            created_at: Utc::now(),
            latitude: new.latitude,
            longitude: new.longitude,
        }
    }

    /// Dashboard activity row for this report.
    pub fn activity_entry(&self) -> ActivityEntry {
        ActivityEntry {
            id: self.id.clone(),
            kind: ReportKind::WaterReport,
            title: format!("Water Quality Report - {}", self.location_name),
            location: format!("{}, {}", self.location_name, self.district),
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Map marker, present only when both coordinates were reported.
    pub fn map_location(&self) -> Option<MapLocation> {
        let latitude = self.latitude?;
        let longitude = self.longitude?;
        let ph = match self.ph_level {
            Some(v) => v.to_string(),
            None => "N/A".to_string(),
        };
        Some(MapLocation {
            id: self.id.clone(),
            kind: ReportKind::WaterReport,
            title: format!("Water Quality - {}", self.location_name),
            latitude,
            longitude,
            status: self.status,
            description: format!("Water source: {}, pH: {}", self.water_source.as_str(), ph),
        })
    }
}

/// Stored patient report as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientReport {
    pub id: String,
    pub patient_name: String,
    pub age: i64,
    pub gender: String,
    pub location_name: String,
    pub district: String,
    pub symptoms: Vec<String>,
    pub suspected_disease: String,
    pub water_source_used: WaterSource,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub report_date: DateTime<Utc>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Patient report submission assembled by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatientReport {
    pub patient_name: String,
    pub age: i64,
    pub gender: String,
    pub location_name: String,
    pub district: String,
    pub symptoms: Vec<String>,
    pub suspected_disease: String,
    pub water_source_used: WaterSource,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PatientReport {
    /// Materialize a stored record from a submission.
    pub fn from_new(new: NewPatientReport) -> PatientReport {
        let now = Utc::now();
        PatientReport {
            id: Uuid::new_v4().to_string(),
            patient_name: new.patient_name,
            age: new.age,
            gender: new.gender,
            location_name: new.location_name,
            district: new.district,
            symptoms: new.symptoms,
            suspected_disease: new.suspected_disease,
            water_source_used: new.water_source_used,
            reporter_name: new.reporter_name,
            reporter_phone: new.reporter_phone,
            report_date: now,
            status: ReportStatus::Submitted,
            created_at: now,
            latitude: new.latitude,
            longitude: new.longitude,
        }
    }

    /// Dashboard activity row for this report.
    pub fn activity_entry(&self) -> ActivityEntry {
        ActivityEntry {
            id: self.id.clone(),
            kind: ReportKind::PatientReport,
            title: format!("Patient Report - {}", self.suspected_disease),
            location: format!("{}, {}", self.location_name, self.district),
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Map marker, present only when both coordinates were reported.
    pub fn map_location(&self) -> Option<MapLocation> {
        let latitude = self.latitude?;
        let longitude = self.longitude?;
        Some(MapLocation {
            id: self.id.clone(),
            kind: ReportKind::PatientReport,
            title: format!("Health Alert - {}", self.suspected_disease),
            latitude,
            longitude,
            status: self.status,
            description: format!("Patient: {}, Age: {}", self.patient_name, self.age),
        })
    }
}

// ============================================================================
// QUERIES & DERIVED RECORDS
// ============================================================================

/// Question submitted through the query form; answered by experts out of band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserQuery {
    pub id: String,
    pub user_name: String,
    pub phone_number: String,
    pub question: String,
    pub status: String,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Query submission assembled by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuery {
    pub user_name: String,
    pub phone_number: String,
    pub question: String,
}

impl UserQuery {
    /// Materialize a stored record from a submission.
    pub fn from_new(new: NewQuery) -> UserQuery {
        UserQuery {
            id: Uuid::new_v4().to_string(),
            user_name: new.user_name,
            phone_number: new.phone_number,
            question: new.question,
            status: "pending".to_string(),
            response: None,
            created_at: Utc::now(),
        }
    }
}

/// Dashboard counters, per-status counts summed across both report kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total_submitted: i64,
    pub total_processed: i64,
    pub under_review: i64,
    pub high_priority: i64,
}

/// Dashboard activity row derived from a stored report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub title: String,
    pub location: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

/// Map marker derived from a stored report that carries coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapLocation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: ReportStatus,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_water_report() -> WaterReport {
        WaterReport::from_new(NewWaterReport {
            location_name: "Mawsynram".to_string(),
            district: "East Khasi Hills".to_string(),
            water_source: WaterSource::Spring,
            collection_date: Utc::now(),
            collection_time: "10:30:00".to_string(),
            collector_name: "R. Lyngdoh".to_string(),
            collector_id: "V-102".to_string(),
            phone_number: "9876543210".to_string(),
            ph_level: None,
            turbidity: Some(1.5),
            chlorine: None,
            e_coli: Some(0),
            total_coliform: None,
            tds: None,
            latitude: Some(25.467),
            longitude: Some(91.3662),
        })
    }

    #[test]
    fn wire_values_round_trip() {
        for status in ReportStatus::ALL {
            assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
        }
        for source in WaterSource::ALL {
            assert_eq!(WaterSource::parse(source.as_str()), Some(source));
        }
        assert_eq!(ReportStatus::parse("unknown"), None);
    }

    #[test]
    fn enums_serialize_as_wire_values() {
        let json = serde_json::to_value(ReportStatus::UnderReview).unwrap();
        assert_eq!(json, serde_json::json!("under_review"));
        let json = serde_json::to_value(WaterSource::Tap).unwrap();
        assert_eq!(json, serde_json::json!("tap"));
        let json = serde_json::to_value(ReportKind::PatientReport).unwrap();
        assert_eq!(json, serde_json::json!("patient_report"));
    }

    #[test]
    fn from_new_assigns_server_fields() {
        let report = sample_water_report();
        assert!(!report.id.is_empty());
        assert_eq!(report.status, ReportStatus::Submitted);
    }

    #[test]
    fn water_activity_entry_composes_title_and_location() {
        let entry = sample_water_report().activity_entry();
        assert_eq!(entry.title, "Water Quality Report - Mawsynram");
        assert_eq!(entry.location, "Mawsynram, East Khasi Hills");
        assert_eq!(entry.kind, ReportKind::WaterReport);
    }

    #[test]
    fn water_map_location_renders_missing_ph_as_na() {
        let location = sample_water_report().map_location().unwrap();
        assert_eq!(location.title, "Water Quality - Mawsynram");
        assert_eq!(location.description, "Water source: spring, pH: N/A");
    }

    #[test]
    fn map_location_requires_both_coordinates() {
        let mut report = sample_water_report();
        report.longitude = None;
        assert!(report.map_location().is_none());
        report.longitude = Some(91.0);
        report.latitude = None;
        assert!(report.map_location().is_none());
    }

    #[test]
    fn patient_map_location_describes_patient() {
        let report = PatientReport::from_new(NewPatientReport {
            patient_name: "A. Sangma".to_string(),
            age: 34,
            gender: "female".to_string(),
            location_name: "Tura".to_string(),
            district: "West Garo Hills".to_string(),
            symptoms: vec!["Fever".to_string()],
            suspected_disease: "Cholera".to_string(),
            water_source_used: WaterSource::Well,
            reporter_name: "B. Marak".to_string(),
            reporter_phone: "9000000000".to_string(),
            latitude: Some(25.5),
            longitude: Some(90.2),
        });
        let location = report.map_location().unwrap();
        assert_eq!(location.title, "Health Alert - Cholera");
        assert_eq!(location.description, "Patient: A. Sangma, Age: 34");
        assert_eq!(report.activity_entry().title, "Patient Report - Cholera");
    }

    #[test]
    fn new_query_defaults_to_pending() {
        let query = UserQuery::from_new(NewQuery {
            user_name: "K. Das".to_string(),
            phone_number: "9812345678".to_string(),
            question: "Is boiled water safe?".to_string(),
        });
        assert_eq!(query.status, "pending");
        assert!(query.response.is_none());
    }

    #[test]
    fn district_label_joins_name_and_state() {
        let district = District {
            name: "Kamrup".to_string(),
            state: "Assam".to_string(),
        };
        assert_eq!(district.label(), "Kamrup, Assam");
    }
}
