//! FAQ filtering for the query tab.

use crate::models::Faq;

/// Indices of FAQs whose question or answer contains `query`,
/// case-insensitively. An empty query keeps every index, in order.
pub fn filter_faqs(faqs: &[Faq], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    faqs.iter()
        .enumerate()
        .filter(|(_, faq)| {
            needle.is_empty()
                || faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_faqs() -> Vec<Faq> {
        vec![
            Faq::new(
                "How do I report an outbreak?",
                "Use the Reports section of the app.",
                "reporting",
            ),
            Faq::new(
                "Is boiling effective?",
                "Boil water for at least 1 minute before drinking.",
                "prevention",
            ),
            Faq::new(
                "Where can I get water tested?",
                "Government health centers offer testing.",
                "testing",
            ),
        ]
    }

    #[test]
    fn empty_query_keeps_every_index() {
        let faqs = sample_faqs();
        assert_eq!(filter_faqs(&faqs, ""), vec![0, 1, 2]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let faqs = sample_faqs();
        assert_eq!(filter_faqs(&faqs, "OUTBREAK"), vec![0]);
        assert_eq!(filter_faqs(&faqs, "boil"), vec![1]);
    }

    #[test]
    fn answers_are_searched_too() {
        let faqs = sample_faqs();
        // "Government" appears only in an answer.
        assert_eq!(filter_faqs(&faqs, "government"), vec![2]);
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        let faqs = sample_faqs();
        assert!(filter_faqs(&faqs, "chlorination schedule").is_empty());
    }

    #[test]
    fn multiple_matches_keep_original_order() {
        let faqs = sample_faqs();
        // "water" appears in the second answer and the third question.
        assert_eq!(filter_faqs(&faqs, "water"), vec![1, 2]);
    }
}
