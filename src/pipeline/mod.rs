pub mod dates;
pub mod filter;
pub mod location;
pub mod sanitize;
pub mod title;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::CleanConfig;
use crate::types::{CleanRecord, RawRecord};

use dates::parse_posted_on;
use location::extract_city;
use sanitize::sanitize;
use title::{canonicalize_title, detect_level};

/// Why a record was excluded during the per-record stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropReason {
    MissingRequired,
    EmptyDescription,
    BadLink,
    EmptyCanonicalTitle,
}

/// Per-stage accounting for one pipeline run. Non-conforming records are
/// excluded silently, so the counters are the only trace they leave.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RunReport {
    pub input_rows: usize,
    pub missing_required: usize,
    pub empty_description: usize,
    pub bad_link: usize,
    pub empty_canonical_title: usize,
    pub duplicate_link: usize,
    pub off_topic: usize,
    pub denied_keyword: usize,
    pub vague_city: usize,
    pub output_rows: usize,
}

impl RunReport {
    pub fn total_dropped(&self) -> usize {
        self.input_rows - self.output_rows
    }
}

/// The record normalizer: a linear sequence of per-record transforms followed
/// by table-level filters. Single-threaded and deterministic; the same input
/// always produces the same output.
pub struct Pipeline {
    config: CleanConfig,
}

impl Pipeline {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    /// Runs the full cleaning sequence over an in-memory table.
    pub fn run(&self, raw_records: Vec<RawRecord>) -> (Vec<CleanRecord>, RunReport) {
        let mut report = RunReport {
            input_rows: raw_records.len(),
            ..RunReport::default()
        };

        // Per-record stage: RawRecord -> Option<CleanRecord>
        let mut cleaned: Vec<CleanRecord> = Vec::with_capacity(raw_records.len());
        for raw in &raw_records {
            match self.clean_record(raw) {
                Ok(record) => cleaned.push(record),
                Err(reason) => {
                    debug!(?reason, "record dropped");
                    match reason {
                        DropReason::MissingRequired => report.missing_required += 1,
                        DropReason::EmptyDescription => report.empty_description += 1,
                        DropReason::BadLink => report.bad_link += 1,
                        DropReason::EmptyCanonicalTitle => report.empty_canonical_title += 1,
                    }
                }
            }
        }

        // Table-level stages, each strictly narrowing
        let (cleaned, duplicates) = filter::dedup_by_link(cleaned);
        report.duplicate_link = duplicates;

        let (cleaned, off_topic) = filter::retain_allowed(cleaned, &self.config.allow_keywords);
        report.off_topic = off_topic;

        let (mut cleaned, denied) = filter::drop_denied(cleaned, &self.config.deny_keywords);
        report.denied_keyword = denied;

        if self.config.exclude_vague_cities {
            let (kept, vague) = filter::drop_vague_cities(cleaned, &self.config.excluded_cities);
            report.vague_city = vague;
            cleaned = kept;
        }

        filter::sort_newest_first(&mut cleaned);
        report.output_rows = cleaned.len();

        info!(
            input = report.input_rows,
            output = report.output_rows,
            dropped = report.total_dropped(),
            "cleaning run finished"
        );

        (cleaned, report)
    }

    /// Transforms one raw posting into a clean record, or reports why it was
    /// excluded. Field-level problems degrade to empty strings; only the
    /// required-field and gate rules below drop the record.
    fn clean_record(&self, raw: &RawRecord) -> Result<CleanRecord, DropReason> {
        let job_title = sanitize(raw.title.as_deref());
        let company = sanitize(raw.company.as_deref());
        let location = sanitize(raw.location.as_deref());
        let posted_on = raw.updated.as_deref().and_then(parse_posted_on);

        let posted_on = match posted_on {
            Some(parsed)
                if !job_title.is_empty() && !company.is_empty() && !location.is_empty() =>
            {
                parsed
            }
            _ => return Err(DropReason::MissingRequired),
        };

        let description = sanitize(raw.snippet.as_deref());
        if self.config.require_description && description.is_empty() {
            return Err(DropReason::EmptyDescription);
        }

        let job_link = sanitize(raw.link.as_deref());
        if job_link.is_empty()
            || (self.config.require_link_scheme && !job_link.starts_with("http"))
        {
            return Err(DropReason::BadLink);
        }

        let job_title_cleaned = canonicalize_title(&job_title, &self.config.categories);
        if job_title_cleaned.is_empty() {
            return Err(DropReason::EmptyCanonicalTitle);
        }

        Ok(CleanRecord {
            job_level: detect_level(&job_title),
            city: extract_city(&location),
            salary: sanitize(raw.salary.as_deref()),
            job_type: sanitize(raw.job_type.as_deref()),
            country: sanitize(raw.country.as_deref()),
            job_title,
            job_title_cleaned,
            company,
            location,
            description,
            posted_on,
            job_link,
        })
    }
}
