use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One job posting as exported by the fetch stage. Everything is optional
/// text: upstream rows routinely arrive with holes, and the sanitizer maps
/// missing fields to empty strings before any decision is made.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Fetch-time annotation, only present when the fetcher tagged the query
    /// country onto each row.
    #[serde(default, rename = "Country")]
    pub country: Option<String>,
}

/// Coarse seniority bucket inferred from title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobLevel {
    Senior,
    Entry,
    Mid,
}

/// A validated, canonicalized job posting ready for analytics. Constructed
/// once by the pipeline and never mutated afterwards; serialized with the
/// dashboard-facing column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Job_Title_Cleaned")]
    pub job_title_cleaned: String,
    #[serde(rename = "Job_Level")]
    pub job_level: JobLevel,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Job_Type")]
    pub job_type: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Posted_On", with = "iso_datetime")]
    pub posted_on: NaiveDateTime,
    #[serde(rename = "Job_Link")]
    pub job_link: String,
    #[serde(rename = "Country")]
    pub country: String,
}

/// Serde adapter writing Posted_On as ISO-8601 seconds precision.
pub mod iso_datetime {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_record() -> CleanRecord {
        CleanRecord {
            job_title: "Senior Data Analyst".to_string(),
            job_title_cleaned: "Data Analyst".to_string(),
            job_level: JobLevel::Senior,
            company: "Acme".to_string(),
            location: "Toronto, ON".to_string(),
            city: "Toronto".to_string(),
            salary: String::new(),
            job_type: "Full-time".to_string(),
            description: "Dashboards and SQL.".to_string(),
            posted_on: NaiveDate::from_ymd_opt(2025, 8, 20)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            job_link: "https://example.com/jobs/1".to_string(),
            country: "Canada".to_string(),
        }
    }

    #[test]
    fn clean_record_serializes_with_dashboard_column_names() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(sample_record()).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "Job_Title,Job_Title_Cleaned,Job_Level,Company,Location,City,Salary,\
             Job_Type,Description,Posted_On,Job_Link,Country"
        );
        assert!(out.contains("2025-08-20T09:30:00"));
        assert!(out.contains(",Senior,"));
    }

    #[test]
    fn raw_record_tolerates_missing_country_column() {
        let data = "title,location,company,salary,type,updated,snippet,link\n\
                    Data Analyst,Toronto,Acme,,Full-time,2025-08-20T09:30:00,desc,https://x.io/1\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let record: RawRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(record.title.as_deref(), Some("Data Analyst"));
        assert!(record.country.is_none());
    }
}
