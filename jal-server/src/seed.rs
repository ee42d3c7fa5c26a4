//! Compiled-in reference data: the district list and the FAQ seeds.

use jal_core::models::District;

/// Northeast India districts offered by the report form pickers,
/// as (name, state).
pub const DISTRICTS: [(&str, &str); 48] = [
    ("Kamrup", "Assam"),
    ("Jorhat", "Assam"),
    ("Sivasagar", "Assam"),
    ("Dibrugarh", "Assam"),
    ("Tinsukia", "Assam"),
    ("Golaghat", "Assam"),
    ("Nagaon", "Assam"),
    ("Sonitpur", "Assam"),
    ("East Garo Hills", "Meghalaya"),
    ("West Garo Hills", "Meghalaya"),
    ("East Khasi Hills", "Meghalaya"),
    ("West Khasi Hills", "Meghalaya"),
    ("Ri Bhoi", "Meghalaya"),
    ("East Jaintia Hills", "Meghalaya"),
    ("West Jaintia Hills", "Meghalaya"),
    ("North Garo Hills", "Meghalaya"),
    ("South West Garo Hills", "Meghalaya"),
    ("South Garo Hills", "Meghalaya"),
    ("South West Khasi Hills", "Meghalaya"),
    ("Imphal East", "Manipur"),
    ("Imphal West", "Manipur"),
    ("Bishnupur", "Manipur"),
    ("Thoubal", "Manipur"),
    ("Churachandpur", "Manipur"),
    ("Mon", "Nagaland"),
    ("Tuensang", "Nagaland"),
    ("Kohima", "Nagaland"),
    ("Dimapur", "Nagaland"),
    ("Wokha", "Nagaland"),
    ("Zunheboto", "Nagaland"),
    ("Mokokchung", "Nagaland"),
    ("Phek", "Nagaland"),
    ("West Tripura", "Tripura"),
    ("North Tripura", "Tripura"),
    ("South Tripura", "Tripura"),
    ("Dhalai", "Tripura"),
    ("Gomati", "Tripura"),
    ("Khowai", "Tripura"),
    ("Sepahijala", "Tripura"),
    ("Unakoti", "Tripura"),
    ("Aizawl", "Mizoram"),
    ("Lunglei", "Mizoram"),
    ("Champhai", "Mizoram"),
    ("Kolasib", "Mizoram"),
    ("Lawngtlai", "Mizoram"),
    ("Mamit", "Mizoram"),
    ("Saiha", "Mizoram"),
    ("Serchhip", "Mizoram"),
];

pub fn districts() -> Vec<District> {
    DISTRICTS
        .into_iter()
        .map(|(name, state)| District {
            name: name.to_string(),
            state: state.to_string(),
        })
        .collect()
}

/// FAQ seeds inserted when the FAQ table is empty, as
/// (question, answer, category).
pub const FAQ_SEEDS: [(&str, &str, &str); 7] = [
    (
        "How do I report a suspected waterborne disease outbreak?",
        "To report a suspected waterborne disease outbreak, go to the Reports section, tap 'Submit New Report', select 'Patient Report', and fill in all the required details including symptoms, suspected disease, and location information.",
        "reporting",
    ),
    (
        "What should I do if my water supply seems contaminated?",
        "If your water supply seems contaminated, stop using it immediately for drinking or cooking. Report it through the app's water quality report feature, boil water before use, and contact local health authorities.",
        "safety",
    ),
    (
        "What are the symptoms of waterborne diseases I should watch for?",
        "Common symptoms include diarrhea, vomiting, stomach cramps, fever, headache, and dehydration. Severe symptoms may include blood in stool, high fever, and persistent vomiting.",
        "health",
    ),
    (
        "How can I prevent waterborne diseases?",
        "Boil water for at least 1 minute before drinking, use water purification tablets, maintain proper hygiene, wash hands frequently, and ensure proper sanitation around water sources.",
        "prevention",
    ),
    (
        "Where can I get my water tested for quality?",
        "You can get water tested at government health centers, certified private labs, or use home testing kits. Contact your local health department for authorized testing facilities in your area.",
        "testing",
    ),
    (
        "What emergency supplies should I keep during an outbreak?",
        "Keep bottled water, water purification tablets, oral rehydration salts (ORS), basic medicines, hand sanitizer, and emergency contact numbers readily available.",
        "emergency",
    ),
    (
        "How do I access free medical treatment during an outbreak?",
        "Contact your nearest Primary Health Center (PHC), Community Health Center (CHC), or district hospital. Government health facilities provide free treatment during disease outbreaks.",
        "treatment",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_list_spans_six_states() {
        assert_eq!(DISTRICTS.len(), 48);
        let states: std::collections::BTreeSet<&str> =
            DISTRICTS.iter().map(|(_, state)| *state).collect();
        assert_eq!(states.len(), 6);
        assert!(states.contains("Assam"));
        assert!(states.contains("Mizoram"));
    }

    #[test]
    fn districts_materialize_in_order() {
        let list = districts();
        assert_eq!(list[0].label(), "Kamrup, Assam");
        assert_eq!(list[47].label(), "Serchhip, Mizoram");
    }
}
