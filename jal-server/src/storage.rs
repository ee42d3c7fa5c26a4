//! Storage module for the Jal Drishti backend
//! Handles SQLite persistence for reports, queries and FAQs

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Result};
use std::path::Path;
use tracing::debug;

use jal_core::models::{
    Faq, PatientReport, ReportStats, ReportStatus, UserQuery, WaterReport, WaterSource,
};

use crate::seed;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the given path and seed reference data
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        db.seed_faqs_if_empty()?;
        debug!(path = %path.display(), "Database opened");
        Ok(db)
    }

    /// In-memory database for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        db.seed_faqs_if_empty()?;
        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS water_reports (
                id TEXT PRIMARY KEY,
                location_name TEXT NOT NULL,
                district TEXT NOT NULL,
                water_source TEXT NOT NULL,
                collection_date TEXT NOT NULL,
                collection_time TEXT NOT NULL,
                collector_name TEXT NOT NULL,
                collector_id TEXT NOT NULL DEFAULT '',
                phone_number TEXT NOT NULL,
                ph_level REAL,
                turbidity REAL,
                chlorine REAL,
                e_coli INTEGER,
                total_coliform INTEGER,
                tds REAL,
                status TEXT NOT NULL DEFAULT 'submitted',
                created_at TEXT NOT NULL,
                latitude REAL,
                longitude REAL
            );

            CREATE INDEX IF NOT EXISTS idx_water_reports_created ON water_reports(created_at);
            CREATE INDEX IF NOT EXISTS idx_water_reports_status ON water_reports(status);

            CREATE TABLE IF NOT EXISTS patient_reports (
                id TEXT PRIMARY KEY,
                patient_name TEXT NOT NULL,
                age INTEGER NOT NULL,
                gender TEXT NOT NULL,
                location_name TEXT NOT NULL,
                district TEXT NOT NULL,
                symptoms TEXT NOT NULL,
                suspected_disease TEXT NOT NULL,
                water_source_used TEXT NOT NULL,
                reporter_name TEXT NOT NULL,
                reporter_phone TEXT NOT NULL,
                report_date TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'submitted',
                created_at TEXT NOT NULL,
                latitude REAL,
                longitude REAL
            );

            CREATE INDEX IF NOT EXISTS idx_patient_reports_created ON patient_reports(created_at);
            CREATE INDEX IF NOT EXISTS idx_patient_reports_status ON patient_reports(status);

            CREATE TABLE IF NOT EXISTS queries (
                id TEXT PRIMARY KEY,
                user_name TEXT NOT NULL,
                phone_number TEXT NOT NULL,
                question TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'pending',
                response TEXT,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_queries_created ON queries(created_at);

            CREATE TABLE IF NOT EXISTS faqs (
                id TEXT PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category TEXT NOT NULL,
                created_at TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Insert the FAQ seeds when the table is empty
    fn seed_faqs_if_empty(&self) -> Result<()> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM faqs", [], |r| r.get(0))?;
        if count > 0 {
            return Ok(());
        }
        for (question, answer, category) in seed::FAQ_SEEDS {
            self.insert_faq(&Faq::new(question, answer, category))?;
        }
        debug!(count = seed::FAQ_SEEDS.len(), "FAQ table seeded");
        Ok(())
    }

    // ========================================================================
    // WATER REPORTS
    // ========================================================================

    pub fn insert_water_report(&self, report: &WaterReport) -> Result<()> {
        self.conn.execute(
            "INSERT INTO water_reports (
                id, location_name, district, water_source, collection_date,
                collection_time, collector_name, collector_id, phone_number,
                ph_level, turbidity, chlorine, e_coli, total_coliform, tds,
                status, created_at, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                     ?14, ?15, ?16, ?17, ?18, ?19)",
            params![
                report.id,
                report.location_name,
                report.district,
                report.water_source.as_str(),
                timestamp(report.collection_date),
                report.collection_time,
                report.collector_name,
                report.collector_id,
                report.phone_number,
                report.ph_level,
                report.turbidity,
                report.chlorine,
                report.e_coli,
                report.total_coliform,
                report.tds,
                report.status.as_str(),
                timestamp(report.created_at),
                report.latitude,
                report.longitude,
            ],
        )?;
        Ok(())
    }

    /// Most recent water reports first
    pub fn water_reports(&self, limit: i64) -> Result<Vec<WaterReport>> {
        let mut stmt = self.conn.prepare(&format!(
            "{WATER_SELECT} ORDER BY created_at DESC LIMIT ?1"
        ))?;
        let reports = stmt
            .query_map(params![limit.max(0)], water_report_from_row)?
            .collect::<Result<Vec<_>>>()?;
        Ok(reports)
    }

    /// One water report by id
    pub fn water_report(&self, id: &str) -> Result<Option<WaterReport>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WATER_SELECT} WHERE id = ?1"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(water_report_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// Water reports that carry both coordinates, newest first
    pub fn water_reports_with_coords(&self, limit: i64) -> Result<Vec<WaterReport>> {
        let mut stmt = self.conn.prepare(&format!(
            "{WATER_SELECT} WHERE latitude IS NOT NULL AND longitude IS NOT NULL
             ORDER BY created_at DESC LIMIT ?1"
        ))?;
        let reports = stmt
            .query_map(params![limit.max(0)], water_report_from_row)?
            .collect::<Result<Vec<_>>>()?;
        Ok(reports)
    }

    // ========================================================================
    // PATIENT REPORTS
    // ========================================================================

    pub fn insert_patient_report(&self, report: &PatientReport) -> Result<()> {
        let symptoms =
            serde_json::to_string(&report.symptoms).unwrap_or_else(|_| "[]".to_string());
        self.conn.execute(
            "INSERT INTO patient_reports (
                id, patient_name, age, gender, location_name, district,
                symptoms, suspected_disease, water_source_used, reporter_name,
                reporter_phone, report_date, status, created_at, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                     ?14, ?15, ?16)",
            params![
                report.id,
                report.patient_name,
                report.age,
                report.gender,
                report.location_name,
                report.district,
                symptoms,
                report.suspected_disease,
                report.water_source_used.as_str(),
                report.reporter_name,
                report.reporter_phone,
                timestamp(report.report_date),
                report.status.as_str(),
                timestamp(report.created_at),
                report.latitude,
                report.longitude,
            ],
        )?;
        Ok(())
    }

    /// Most recent patient reports first
    pub fn patient_reports(&self, limit: i64) -> Result<Vec<PatientReport>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PATIENT_SELECT} ORDER BY created_at DESC LIMIT ?1"
        ))?;
        let reports = stmt
            .query_map(params![limit.max(0)], patient_report_from_row)?
            .collect::<Result<Vec<_>>>()?;
        Ok(reports)
    }

    /// Patient reports that carry both coordinates, newest first
    pub fn patient_reports_with_coords(&self, limit: i64) -> Result<Vec<PatientReport>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PATIENT_SELECT} WHERE latitude IS NOT NULL AND longitude IS NOT NULL
             ORDER BY created_at DESC LIMIT ?1"
        ))?;
        let reports = stmt
            .query_map(params![limit.max(0)], patient_report_from_row)?
            .collect::<Result<Vec<_>>>()?;
        Ok(reports)
    }

    // ========================================================================
    // AGGREGATION
    // ========================================================================

    /// Per-status counts summed across both report tables
    pub fn report_stats(&self) -> Result<ReportStats> {
        let count = |table: &str, status: ReportStatus| -> Result<i64> {
            self.conn.query_row(
                &format!("SELECT COUNT(*) FROM {table} WHERE status = ?1"),
                params![status.as_str()],
                |r| r.get(0),
            )
        };
        Ok(ReportStats {
            total_submitted: count("water_reports", ReportStatus::Submitted)?
                + count("patient_reports", ReportStatus::Submitted)?,
            total_processed: count("water_reports", ReportStatus::Processed)?
                + count("patient_reports", ReportStatus::Processed)?,
            under_review: count("water_reports", ReportStatus::UnderReview)?
                + count("patient_reports", ReportStatus::UnderReview)?,
            high_priority: count("water_reports", ReportStatus::HighPriority)?
                + count("patient_reports", ReportStatus::HighPriority)?,
        })
    }

    // ========================================================================
    // QUERIES & FAQS
    // ========================================================================

    pub fn insert_query(&self, query: &UserQuery) -> Result<()> {
        self.conn.execute(
            "INSERT INTO queries (id, user_name, phone_number, question, status, response, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                query.id,
                query.user_name,
                query.phone_number,
                query.question,
                query.status,
                query.response,
                timestamp(query.created_at),
            ],
        )?;
        Ok(())
    }

    /// Most recent queries first
    pub fn queries(&self, limit: i64) -> Result<Vec<UserQuery>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_name, phone_number, question, status, response, created_at
             FROM queries ORDER BY created_at DESC LIMIT ?1",
        )?;
        let queries = stmt
            .query_map(params![limit.max(0)], |row| {
                Ok(UserQuery {
                    id: row.get(0)?,
                    user_name: row.get(1)?,
                    phone_number: row.get(2)?,
                    question: row.get(3)?,
                    status: row.get(4)?,
                    response: row.get(5)?,
                    created_at: parse_timestamp(&row.get::<_, String>(6)?),
                })
            })?
            .collect::<Result<Vec<_>>>()?;
        Ok(queries)
    }

    pub fn insert_faq(&self, faq: &Faq) -> Result<()> {
        self.conn.execute(
            "INSERT INTO faqs (id, question, answer, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                faq.id,
                faq.question,
                faq.answer,
                faq.category,
                timestamp(faq.created_at),
            ],
        )?;
        Ok(())
    }

    /// All FAQs in insertion order
    pub fn faqs(&self) -> Result<Vec<Faq>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, question, answer, category, created_at FROM faqs ORDER BY rowid",
        )?;
        let faqs = stmt
            .query_map([], |row| {
                Ok(Faq {
                    id: row.get(0)?,
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    category: row.get(3)?,
                    created_at: parse_timestamp(&row.get::<_, String>(4)?),
                })
            })?
            .collect::<Result<Vec<_>>>()?;
        Ok(faqs)
    }
}

// Column lists are shared between the list, detail and coordinate queries so
// the row mappers can stay positional.
const WATER_SELECT: &str = "SELECT id, location_name, district, water_source, collection_date,
    collection_time, collector_name, collector_id, phone_number, ph_level, turbidity,
    chlorine, e_coli, total_coliform, tds, status, created_at, latitude, longitude
    FROM water_reports";

const PATIENT_SELECT: &str = "SELECT id, patient_name, age, gender, location_name, district,
    symptoms, suspected_disease, water_source_used, reporter_name, reporter_phone,
    report_date, status, created_at, latitude, longitude
    FROM patient_reports";

fn water_report_from_row(row: &rusqlite::Row<'_>) -> Result<WaterReport> {
    Ok(WaterReport {
        id: row.get(0)?,
        location_name: row.get(1)?,
        district: row.get(2)?,
        water_source: parse_water_source(&row.get::<_, String>(3)?),
        collection_date: parse_timestamp(&row.get::<_, String>(4)?),
        collection_time: row.get(5)?,
        collector_name: row.get(6)?,
        collector_id: row.get(7)?,
        phone_number: row.get(8)?,
        ph_level: row.get(9)?,
        turbidity: row.get(10)?,
        chlorine: row.get(11)?,
        e_coli: row.get(12)?,
        total_coliform: row.get(13)?,
        tds: row.get(14)?,
        status: parse_status(&row.get::<_, String>(15)?),
        created_at: parse_timestamp(&row.get::<_, String>(16)?),
        latitude: row.get(17)?,
        longitude: row.get(18)?,
    })
}

fn patient_report_from_row(row: &rusqlite::Row<'_>) -> Result<PatientReport> {
    let symptoms: String = row.get(6)?;
    Ok(PatientReport {
        id: row.get(0)?,
        patient_name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        location_name: row.get(4)?,
        district: row.get(5)?,
        symptoms: serde_json::from_str(&symptoms).unwrap_or_default(),
        suspected_disease: row.get(7)?,
        water_source_used: parse_water_source(&row.get::<_, String>(8)?),
        reporter_name: row.get(9)?,
        reporter_phone: row.get(10)?,
        report_date: parse_timestamp(&row.get::<_, String>(11)?),
        status: parse_status(&row.get::<_, String>(12)?),
        created_at: parse_timestamp(&row.get::<_, String>(13)?),
        latitude: row.get(14)?,
        longitude: row.get(15)?,
    })
}

/// Fixed-width UTC timestamps keep `ORDER BY created_at` lexicographic.
fn timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn parse_status(raw: &str) -> ReportStatus {
    ReportStatus::parse(raw).unwrap_or_default()
}

fn parse_water_source(raw: &str) -> WaterSource {
    WaterSource::parse(raw).unwrap_or(WaterSource::Tap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jal_core::models::{NewPatientReport, NewQuery, NewWaterReport};

    fn water_report(
        location: &str,
        created_at: DateTime<Utc>,
        status: ReportStatus,
        coords: Option<(f64, f64)>,
    ) -> WaterReport {
        let mut report = WaterReport::from_new(NewWaterReport {
            location_name: location.to_string(),
            district: "East Khasi Hills".to_string(),
            water_source: WaterSource::Spring,
            collection_date: created_at,
            collection_time: "10:00:00".to_string(),
            collector_name: "R. Lyngdoh".to_string(),
            collector_id: String::new(),
            phone_number: "9876543210".to_string(),
            ph_level: Some(7.2),
            turbidity: None,
            chlorine: None,
            e_coli: Some(0),
            total_coliform: None,
            tds: None,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
        });
        report.created_at = created_at;
        report.status = status;
        report
    }

    fn patient_report(
        disease: &str,
        created_at: DateTime<Utc>,
        status: ReportStatus,
    ) -> PatientReport {
        let mut report = PatientReport::from_new(NewPatientReport {
            patient_name: "A. Sangma".to_string(),
            age: 34,
            gender: "female".to_string(),
            location_name: "Tura".to_string(),
            district: "West Garo Hills".to_string(),
            symptoms: vec!["Fever".to_string(), "Diarrhea".to_string()],
            suspected_disease: disease.to_string(),
            water_source_used: WaterSource::Well,
            reporter_name: "B. Marak".to_string(),
            reporter_phone: "9000000000".to_string(),
            latitude: None,
            longitude: None,
        });
        report.created_at = created_at;
        report.status = status;
        report
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn water_report_round_trips_every_field() {
        let db = Database::open_in_memory().unwrap();
        let report =
            water_report("Mawsynram", at(10), ReportStatus::Submitted, Some((25.467, 91.3662)));
        db.insert_water_report(&report).unwrap();

        let stored = db.water_report(&report.id).unwrap().unwrap();
        assert_eq!(stored.location_name, "Mawsynram");
        assert_eq!(stored.water_source, WaterSource::Spring);
        assert_eq!(stored.ph_level, Some(7.2));
        assert_eq!(stored.turbidity, None);
        assert_eq!(stored.e_coli, Some(0));
        assert_eq!(stored.status, ReportStatus::Submitted);
        assert_eq!(stored.created_at, report.created_at);
        assert_eq!(stored.latitude, Some(25.467));
    }

    #[test]
    fn missing_water_report_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.water_report("no-such-id").unwrap().is_none());
    }

    #[test]
    fn water_reports_come_back_newest_first() {
        let db = Database::open_in_memory().unwrap();
        for (location, hour) in [("Older", 8), ("Newest", 12), ("Middle", 10)] {
            db.insert_water_report(&water_report(location, at(hour), ReportStatus::Submitted, None))
                .unwrap();
        }

        let reports = db.water_reports(50).unwrap();
        let names: Vec<&str> = reports.iter().map(|r| r.location_name.as_str()).collect();
        assert_eq!(names, vec!["Newest", "Middle", "Older"]);

        assert_eq!(db.water_reports(2).unwrap().len(), 2);
    }

    #[test]
    fn patient_symptoms_round_trip_through_json_column() {
        let db = Database::open_in_memory().unwrap();
        let report = patient_report("Cholera", at(9), ReportStatus::Submitted);
        db.insert_patient_report(&report).unwrap();

        let stored = db.patient_reports(50).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].symptoms, vec!["Fever", "Diarrhea"]);
        assert_eq!(stored[0].age, 34);
        assert_eq!(stored[0].water_source_used, WaterSource::Well);
    }

    #[test]
    fn coordinate_queries_skip_reports_without_both_coords() {
        let db = Database::open_in_memory().unwrap();
        let with_coords =
            water_report("Plotted", at(8), ReportStatus::Submitted, Some((25.5, 91.5)));
        db.insert_water_report(&with_coords).unwrap();
        let mut half = water_report("HalfCoords", at(9), ReportStatus::Submitted, None);
        half.latitude = Some(25.0);
        db.insert_water_report(&half).unwrap();

        let plotted = db.water_reports_with_coords(200).unwrap();
        assert_eq!(plotted.len(), 1);
        assert_eq!(plotted[0].location_name, "Plotted");
    }

    #[test]
    fn report_stats_sum_across_both_tables() {
        let db = Database::open_in_memory().unwrap();
        db.insert_water_report(&water_report("A", at(8), ReportStatus::Submitted, None))
            .unwrap();
        db.insert_water_report(&water_report("B", at(9), ReportStatus::HighPriority, None))
            .unwrap();
        db.insert_patient_report(&patient_report("Typhoid", at(10), ReportStatus::Submitted))
            .unwrap();
        db.insert_patient_report(&patient_report("Cholera", at(11), ReportStatus::UnderReview))
            .unwrap();

        let stats = db.report_stats().unwrap();
        assert_eq!(stats.total_submitted, 2);
        assert_eq!(stats.total_processed, 0);
        assert_eq!(stats.under_review, 1);
        assert_eq!(stats.high_priority, 1);
    }

    #[test]
    fn faqs_are_seeded_once() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("jal.db");

        let db = Database::open(&path).unwrap();
        assert_eq!(db.faqs().unwrap().len(), 7);
        drop(db);

        // Reopening must not duplicate the seeds.
        let db = Database::open(&path).unwrap();
        let faqs = db.faqs().unwrap();
        assert_eq!(faqs.len(), 7);
        assert_eq!(
            faqs[0].question,
            "How do I report a suspected waterborne disease outbreak?"
        );
        assert_eq!(faqs[0].category, "reporting");
    }

    #[test]
    fn queries_round_trip_newest_first() {
        let db = Database::open_in_memory().unwrap();
        let mut first = UserQuery::from_new(NewQuery {
            user_name: "K. Das".to_string(),
            phone_number: "9812345678".to_string(),
            question: "Is boiled water safe?".to_string(),
        });
        first.created_at = at(8);
        let mut second = UserQuery::from_new(NewQuery {
            user_name: "M. Devi".to_string(),
            phone_number: "9811111111".to_string(),
            question: "Where can I get ORS?".to_string(),
        });
        second.created_at = at(9);

        db.insert_query(&first).unwrap();
        db.insert_query(&second).unwrap();

        let queries = db.queries(50).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].user_name, "M. Devi");
        assert_eq!(queries[0].status, "pending");
        assert!(queries[0].response.is_none());
    }
}
