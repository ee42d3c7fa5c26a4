//! Draft state and payload assembly for the three submission forms.
//!
//! Each form is a bag of text fields the UI binds to directly. `validate`
//! checks required-field presence; `payload` coerces the draft into the
//! wire type, turning blank optional numerics into `None`. Validation
//! failure means the caller never issues a network call.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

use crate::models::{NewPatientReport, NewQuery, NewWaterReport, WaterSource};

/// Validation failure surfaced by the form dialogs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please select at least one symptom")]
    NoSymptoms,
    #[error("{0} is not a valid number")]
    InvalidNumber(&'static str),
    #[error("Collection time is not a valid time")]
    InvalidTime,
}

// ============================================================================
// WATER QUALITY REPORT FORM
// ============================================================================

/// Draft behind the water quality report form.
#[derive(Debug, Clone)]
pub struct WaterReportForm {
    pub location_name: String,
    pub district: String,
    pub water_source: Option<WaterSource>,
    pub collection_date: NaiveDate,
    /// `HH:MM:SS` (seconds optional), prefilled with the local time.
    pub collection_time: String,
    pub collector_name: String,
    pub collector_id: String,
    pub phone_number: String,
    pub ph_level: String,
    pub turbidity: String,
    pub chlorine: String,
    pub e_coli: String,
    pub total_coliform: String,
    pub tds: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for WaterReportForm {
    fn default() -> Self {
        let now = Local::now();
        WaterReportForm {
            location_name: String::new(),
            district: String::new(),
            water_source: None,
            collection_date: now.date_naive(),
            collection_time: now.format("%H:%M:%S").to_string(),
            collector_name: String::new(),
            collector_id: String::new(),
            phone_number: String::new(),
            ph_level: String::new(),
            turbidity: String::new(),
            chlorine: String::new(),
            e_coli: String::new(),
            total_coliform: String::new(),
            tds: String::new(),
            latitude: String::new(),
            longitude: String::new(),
        }
    }
}

impl WaterReportForm {
    /// Required-field presence check. Optional test readings are not
    /// inspected here.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            self.location_name.as_str(),
            self.district.as_str(),
            self.collector_name.as_str(),
            self.phone_number.as_str(),
        ];
        if self.water_source.is_none() || required.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }

    /// Coerce the draft into a submission. Validates first, so an `Err`
    /// here means nothing should be sent.
    pub fn payload(&self) -> Result<NewWaterReport, FormError> {
        self.validate()?;
        let water_source = self.water_source.ok_or(FormError::MissingFields)?;
        Ok(NewWaterReport {
            location_name: self.location_name.clone(),
            district: self.district.clone(),
            water_source,
            collection_date: self.collection_timestamp()?,
            collection_time: self.collection_time.clone(),
            collector_name: self.collector_name.clone(),
            collector_id: self.collector_id.clone(),
            phone_number: self.phone_number.clone(),
            ph_level: parse_optional_f64(&self.ph_level, "pH level")?,
            turbidity: parse_optional_f64(&self.turbidity, "Turbidity")?,
            chlorine: parse_optional_f64(&self.chlorine, "Chlorine")?,
            e_coli: parse_optional_i64(&self.e_coli, "E. coli count")?,
            total_coliform: parse_optional_i64(&self.total_coliform, "Total coliform")?,
            tds: parse_optional_f64(&self.tds, "TDS")?,
            latitude: parse_optional_f64(&self.latitude, "Latitude")?,
            longitude: parse_optional_f64(&self.longitude, "Longitude")?,
        })
    }

    /// Date field plus time field, read as a UTC timestamp.
    fn collection_timestamp(&self) -> Result<DateTime<Utc>, FormError> {
        let time = NaiveTime::parse_from_str(&self.collection_time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&self.collection_time, "%H:%M"))
            .map_err(|_| FormError::InvalidTime)?;
        Ok(self.collection_date.and_time(time).and_utc())
    }
}

// ============================================================================
// PATIENT REPORT FORM
// ============================================================================

/// Draft behind the patient report form.
#[derive(Debug, Clone, Default)]
pub struct PatientReportForm {
    pub patient_name: String,
    pub age: String,
    /// Wire value from the gender picker, empty until picked.
    pub gender: String,
    pub location_name: String,
    pub district: String,
    pub symptoms: Vec<String>,
    pub suspected_disease: String,
    pub water_source_used: Option<WaterSource>,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub latitude: String,
    pub longitude: String,
}

impl PatientReportForm {
    /// Add the symptom if absent, remove it if present.
    pub fn toggle_symptom(&mut self, symptom: &str) {
        if let Some(pos) = self.symptoms.iter().position(|s| s == symptom) {
            self.symptoms.remove(pos);
        } else {
            self.symptoms.push(symptom.to_string());
        }
    }

    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }

    /// Required-field presence check, then the symptom-set check. The
    /// empty symptom set is reported separately so the dialog can name it.
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            self.patient_name.as_str(),
            self.age.as_str(),
            self.gender.as_str(),
            self.location_name.as_str(),
            self.district.as_str(),
            self.suspected_disease.as_str(),
            self.reporter_name.as_str(),
            self.reporter_phone.as_str(),
        ];
        if self.water_source_used.is_none() || required.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        if self.symptoms.is_empty() {
            return Err(FormError::NoSymptoms);
        }
        Ok(())
    }

    /// Coerce the draft into a submission. Validates first.
    pub fn payload(&self) -> Result<NewPatientReport, FormError> {
        self.validate()?;
        let water_source_used = self.water_source_used.ok_or(FormError::MissingFields)?;
        Ok(NewPatientReport {
            patient_name: self.patient_name.clone(),
            age: parse_required_i64(&self.age, "Age")?,
            gender: self.gender.clone(),
            location_name: self.location_name.clone(),
            district: self.district.clone(),
            symptoms: self.symptoms.clone(),
            suspected_disease: self.suspected_disease.clone(),
            water_source_used,
            reporter_name: self.reporter_name.clone(),
            reporter_phone: self.reporter_phone.clone(),
            latitude: parse_optional_f64(&self.latitude, "Latitude")?,
            longitude: parse_optional_f64(&self.longitude, "Longitude")?,
        })
    }
}

// ============================================================================
// QUERY FORM
// ============================================================================

/// Draft behind the Submit Query form.
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    pub user_name: String,
    pub phone_number: String,
    pub question: String,
}

impl QueryForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            self.user_name.as_str(),
            self.phone_number.as_str(),
            self.question.as_str(),
        ];
        if required.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }

    pub fn payload(&self) -> Result<NewQuery, FormError> {
        self.validate()?;
        Ok(NewQuery {
            user_name: self.user_name.clone(),
            phone_number: self.phone_number.clone(),
            question: self.question.clone(),
        })
    }
}

// ============================================================================
// NUMERIC COERCION
// ============================================================================

fn parse_optional_f64(raw: &str, field: &'static str) -> Result<Option<f64>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(FormError::InvalidNumber(field)),
    }
}

fn parse_optional_i64(raw: &str, field: &'static str) -> Result<Option<i64>, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| FormError::InvalidNumber(field))
}

fn parse_required_i64(raw: &str, field: &'static str) -> Result<i64, FormError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FormError::InvalidNumber(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_water_form() -> WaterReportForm {
        WaterReportForm {
            location_name: "Mawsynram".to_string(),
            district: "East Khasi Hills".to_string(),
            water_source: Some(WaterSource::Spring),
            collection_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            collection_time: "10:30:00".to_string(),
            collector_name: "R. Lyngdoh".to_string(),
            phone_number: "9876543210".to_string(),
            ..Default::default()
        }
    }

    fn filled_patient_form() -> PatientReportForm {
        PatientReportForm {
            patient_name: "A. Sangma".to_string(),
            age: "34".to_string(),
            gender: "female".to_string(),
            location_name: "Tura".to_string(),
            district: "West Garo Hills".to_string(),
            symptoms: vec!["Fever".to_string()],
            suspected_disease: "Cholera".to_string(),
            water_source_used: Some(WaterSource::Well),
            reporter_name: "B. Marak".to_string(),
            reporter_phone: "9000000000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn toggle_symptom_twice_restores_set() {
        let mut form = filled_patient_form();
        let before = form.symptoms.clone();
        form.toggle_symptom("Vomiting");
        assert!(form.has_symptom("Vomiting"));
        form.toggle_symptom("Vomiting");
        assert_eq!(form.symptoms, before);
    }

    #[test]
    fn toggle_symptom_removes_existing_entry() {
        let mut form = filled_patient_form();
        form.toggle_symptom("Fever");
        assert!(form.symptoms.is_empty());
    }

    #[test]
    fn blank_required_field_fails_validation() {
        let mut form = filled_water_form();
        form.phone_number.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));
        assert!(form.payload().is_err());

        let mut form = filled_water_form();
        form.water_source = None;
        assert_eq!(form.payload(), Err(FormError::MissingFields));
    }

    #[test]
    fn empty_symptom_set_is_reported_separately() {
        let mut form = filled_patient_form();
        form.symptoms.clear();
        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::NoSymptoms);
        assert_eq!(err.to_string(), "Please select at least one symptom");
    }

    #[test]
    fn missing_fields_message_matches_dialog() {
        assert_eq!(
            FormError::MissingFields.to_string(),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn blank_numerics_serialize_as_null() {
        let payload = filled_water_form().payload().unwrap();
        assert_eq!(payload.ph_level, None);
        assert_eq!(payload.e_coli, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["ph_level"].is_null());
        assert!(json["total_coliform"].is_null());
        assert!(json["latitude"].is_null());
    }

    #[test]
    fn filled_numerics_parse_to_numbers() {
        let mut form = filled_water_form();
        form.ph_level = "7.2".to_string();
        form.e_coli = " 12 ".to_string();
        let payload = form.payload().unwrap();
        assert_eq!(payload.ph_level, Some(7.2));
        assert_eq!(payload.e_coli, Some(12));
    }

    #[test]
    fn garbage_numeric_names_the_field() {
        let mut form = filled_water_form();
        form.ph_level = "acidic".to_string();
        let err = form.payload().unwrap_err();
        assert_eq!(err, FormError::InvalidNumber("pH level"));
        assert_eq!(err.to_string(), "pH level is not a valid number");

        let mut form = filled_patient_form();
        form.age = "thirty".to_string();
        assert_eq!(form.payload(), Err(FormError::InvalidNumber("Age")));
    }

    #[test]
    fn nan_input_is_rejected() {
        let mut form = filled_water_form();
        form.turbidity = "NaN".to_string();
        assert_eq!(form.payload(), Err(FormError::InvalidNumber("Turbidity")));
    }

    #[test]
    fn collection_timestamp_concatenates_date_and_time() {
        let payload = filled_water_form().payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        let stamp = json["collection_date"].as_str().unwrap();
        assert!(stamp.starts_with("2024-01-15T10:30:00"));
        assert_eq!(json["collection_time"], "10:30:00");
    }

    #[test]
    fn short_time_format_is_accepted() {
        let mut form = filled_water_form();
        form.collection_time = "09:15".to_string();
        assert!(form.payload().is_ok());

        form.collection_time = "late morning".to_string();
        assert_eq!(form.payload(), Err(FormError::InvalidTime));
    }

    #[test]
    fn patient_age_parses_to_integer() {
        let payload = filled_patient_form().payload().unwrap();
        assert_eq!(payload.age, 34);
        assert_eq!(payload.gender, "female");
    }

    #[test]
    fn query_form_requires_every_field() {
        let mut form = QueryForm {
            user_name: "K. Das".to_string(),
            phone_number: "9812345678".to_string(),
            question: "Is boiled water safe?".to_string(),
        };
        assert!(form.payload().is_ok());
        form.question.clear();
        assert_eq!(form.payload(), Err(FormError::MissingFields));
    }
}
