//! Fixed field vocabularies for the report forms.
//!
//! Water sources and report statuses are enums in `models`; the free-text
//! vocabularies live here as plain lists (the wire carries the strings
//! verbatim).

/// Symptom checklist for the patient report form.
pub const SYMPTOMS: [&str; 12] = [
    "Diarrhea",
    "Vomiting",
    "Fever",
    "Stomach cramps",
    "Nausea",
    "Headache",
    "Dehydration",
    "Blood in stool",
    "Persistent vomiting",
    "High fever",
    "Abdominal pain",
    "Loss of appetite",
];

/// Suspected disease picker options for the patient report form.
pub const DISEASES: [&str; 10] = [
    "Cholera",
    "Typhoid",
    "Hepatitis A",
    "Gastroenteritis",
    "Dysentery",
    "Rotavirus infection",
    "E. coli infection",
    "Giardiasis",
    "Cryptosporidiosis",
    "Other waterborne disease",
];

/// Gender picker options as (label, wire value).
pub const GENDERS: [(&str, &str); 3] = [("Male", "male"), ("Female", "female"), ("Other", "other")];
