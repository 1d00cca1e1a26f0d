use std::collections::HashSet;

use crate::types::CleanRecord;

/// Keeps the first record seen for every job_link, dropping later duplicates.
/// Returns the surviving records and the number dropped.
pub fn dedup_by_link(records: Vec<CleanRecord>) -> (Vec<CleanRecord>, usize) {
    let before = records.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(before);
    let survivors: Vec<CleanRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.job_link.clone()))
        .collect();
    let dropped = before - survivors.len();
    (survivors, dropped)
}

/// Domain relevance gate: a record survives only if its original title
/// contains at least one allow-listed keyword.
pub fn retain_allowed(records: Vec<CleanRecord>, allow: &[String]) -> (Vec<CleanRecord>, usize) {
    let before = records.len();
    let survivors: Vec<CleanRecord> = records
        .into_iter()
        .filter(|record| {
            let title = record.job_title.to_lowercase();
            allow.iter().any(|keyword| title.contains(keyword.as_str()))
        })
        .collect();
    let dropped = before - survivors.len();
    (survivors, dropped)
}

/// Noise gate: drops records whose original title contains any deny-listed
/// keyword. Applied after the allow gate, so "Marketing Data Analyst" is
/// still excluded despite its allow-list hit.
pub fn drop_denied(records: Vec<CleanRecord>, deny: &[String]) -> (Vec<CleanRecord>, usize) {
    let before = records.len();
    let survivors: Vec<CleanRecord> = records
        .into_iter()
        .filter(|record| {
            let title = record.job_title.to_lowercase();
            !deny.iter().any(|keyword| title.contains(keyword.as_str()))
        })
        .collect();
    let dropped = before - survivors.len();
    (survivors, dropped)
}

/// Drops records whose extracted city is a vague region label rather than a
/// real city.
pub fn drop_vague_cities(
    records: Vec<CleanRecord>,
    excluded: &[String],
) -> (Vec<CleanRecord>, usize) {
    let before = records.len();
    let survivors: Vec<CleanRecord> = records
        .into_iter()
        .filter(|record| !excluded.iter().any(|city| city == &record.city))
        .collect();
    let dropped = before - survivors.len();
    (survivors, dropped)
}

/// Sorts newest-first. The resulting Vec order is the dense output ordering.
pub fn sort_newest_first(records: &mut [CleanRecord]) {
    records.sort_by(|a, b| b.posted_on.cmp(&a.posted_on));
}
