use std::collections::HashMap;

use crate::config::GENDER_UNANSWERED;
use crate::types::Attendee;

/// Bucket for gender answers outside the recognized categories.
const GENDER_OTHER: &str = "Other";

/// Attendee count per country code, descending, truncated to `n`.
pub fn top_countries(attendees: &[Attendee], n: usize) -> Vec<(String, u64)> {
    let mut counts = count_by(attendees.iter().map(|a| a.country.as_str()));
    counts.truncate(n);
    counts
}

/// Italian vs non-Italian attendee counts.
pub fn italian_split(attendees: &[Attendee]) -> Vec<(String, u64)> {
    count_by(
        attendees
            .iter()
            .map(|a| if a.country == "IT" { "IT" } else { "Non-IT" }),
    )
}

/// European vs non-European attendee counts (continent based).
pub fn europe_split(attendees: &[Attendee]) -> Vec<(String, u64)> {
    count_by(attendees.iter().map(|a| {
        if a.continent == "Europe" {
            "Europe"
        } else {
            "Non-Europe"
        }
    }))
}

/// Attendee counts per gender category; free-form answers outside he/him,
/// she/her and the unanswered placeholder fold into `Other`.
pub fn gender_counts(attendees: &[Attendee]) -> Vec<(String, u64)> {
    count_by(attendees.iter().map(|a| match a.gender.as_str() {
        g if g == "he/him" || g == "she/her" || g == GENDER_UNANSWERED => g,
        _ => GENDER_OTHER,
    }))
}

/// Occurrence count per label, sorted descending. The sort is stable, so
/// labels with equal counts keep first-appearance order.
fn count_by<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, u64)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u64> = HashMap::new();

    for label in labels {
        if !counts.contains_key(label) {
            order.push(label);
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut out: Vec<(String, u64)> = order
        .into_iter()
        .map(|label| (label.to_string(), counts[label]))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendee(country: &str, continent: &str, gender: &str) -> Attendee {
        Attendee {
            order_code: "X".to_string(),
            status: "p".to_string(),
            country: country.to_string(),
            item: 1,
            gender: gender.to_string(),
            continent: continent.to_string(),
        }
    }

    #[test]
    fn top_countries_sorts_descending_and_truncates() {
        let attendees = vec![
            attendee("IT", "Europe", "--"),
            attendee("IT", "Europe", "--"),
            attendee("DE", "Europe", "--"),
            attendee("US", "North America", "--"),
            attendee("DE", "Europe", "--"),
            attendee("IT", "Europe", "--"),
        ];

        let top = top_countries(&attendees, 2);

        assert_eq!(
            top,
            vec![("IT".to_string(), 3), ("DE".to_string(), 2)]
        );
    }

    #[test]
    fn italian_split_buckets_everything_else() {
        let attendees = vec![
            attendee("IT", "Europe", "--"),
            attendee("DE", "Europe", "--"),
            attendee("US", "North America", "--"),
        ];

        let split = italian_split(&attendees);

        assert_eq!(
            split,
            vec![("Non-IT".to_string(), 2), ("IT".to_string(), 1)]
        );
    }

    #[test]
    fn europe_split_uses_the_continent_field() {
        let attendees = vec![
            attendee("IT", "Europe", "--"),
            attendee("DE", "Europe", "--"),
            attendee("XX", "Unknown", "--"),
        ];

        let split = europe_split(&attendees);

        assert_eq!(
            split,
            vec![("Europe".to_string(), 2), ("Non-Europe".to_string(), 1)]
        );
    }

    #[test]
    fn gender_counts_fold_free_form_answers_into_other() {
        let attendees = vec![
            attendee("IT", "Europe", "he/him"),
            attendee("IT", "Europe", "she/her"),
            attendee("IT", "Europe", "they/them"),
            attendee("IT", "Europe", "ze/zir"),
            attendee("IT", "Europe", "--"),
        ];

        let counts = gender_counts(&attendees);

        assert_eq!(counts[0], ("Other".to_string(), 2));
        assert!(counts.contains(&("he/him".to_string(), 1)));
        assert!(counts.contains(&("she/her".to_string(), 1)));
        assert!(counts.contains(&("--".to_string(), 1)));
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let attendees = vec![
            attendee("FR", "Europe", "--"),
            attendee("DE", "Europe", "--"),
            attendee("FR", "Europe", "--"),
            attendee("DE", "Europe", "--"),
        ];

        let top = top_countries(&attendees, 10);

        assert_eq!(
            top,
            vec![("FR".to_string(), 2), ("DE".to_string(), 2)]
        );
    }
}
