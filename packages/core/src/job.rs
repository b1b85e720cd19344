//! Job posting records as served by the jobs API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::DraftError;

/// Numeric identifier assigned by the jobs API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl JobId {
    /// Parse a job ID from a path segment.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication status, derived by the server from the posting and expiration dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Scheduled,
    Active,
    Expired,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Scheduled => "scheduled",
            JobStatus::Active => "active",
            JobStatus::Expired => "expired",
        }
    }

    /// Parse a wire value. Matching is exact, the way the URL codec expects it.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(JobStatus::Scheduled),
            "active" => Some(JobStatus::Active),
            "expired" => Some(JobStatus::Expired),
            _ => None,
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job posting.
///
/// The listing endpoint and the detail endpoint return the same record shape, so
/// listing entries use this type as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(with = "date_only")]
    pub posting_date: NaiveDate,
    #[serde(with = "date_only")]
    pub expiration_date: NaiveDate,
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Entry of a listing page.
pub type JobSummary = Job;

/// Payload for creating or updating a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    pub required_skills: Vec<String>,
    #[serde(with = "date_only")]
    pub posting_date: NaiveDate,
    #[serde(with = "date_only")]
    pub expiration_date: NaiveDate,
}

impl JobDraft {
    /// Check the fields the server requires before anything is sent.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("description", &self.description),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(name));
            }
        }
        if self.expiration_date < self.posting_date {
            return Err(DraftError::ExpiresBeforePosting {
                posting: self.posting_date,
                expiration: self.expiration_date,
            });
        }
        Ok(())
    }
}

impl From<&Job> for JobDraft {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            description: job.description.clone(),
            salary_range: job.salary_range.clone(),
            required_skills: job.required_skills.clone(),
            posting_date: job.posting_date,
            expiration_date: job.expiration_date,
        }
    }
}

/// Split the comma-separated skills input of the job form.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the value of a `<input type="date">` field.
pub fn parse_form_date(input: &str) -> Result<NaiveDate, DraftError> {
    NaiveDate::parse_from_str(input.trim(), date_only::FORMAT)
        .map_err(|_| DraftError::InvalidDate(input.to_string()))
}

/// Dates travel as `YYYY-MM-DD`; the server sometimes sends a full timestamp, of
/// which only the date part is kept.
mod date_only {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let date_part = raw.get(..10).unwrap_or(&raw);
        NaiveDate::parse_from_str(date_part, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;
    use serde_json::json;

    fn sample_draft() -> JobDraft {
        JobDraft {
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            location: "Berlin".into(),
            description: "Build services".into(),
            salary_range: None,
            required_skills: vec!["rust".into()],
            posting_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        }
    }

    #[test]
    fn job_accepts_timestamp_dates() {
        let job: Job = serde_json::from_value(json!({
            "id": 7,
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "description": "",
            "salary_range": null,
            "required_skills": ["rust", "sql"],
            "posting_date": "2024-03-01T00:00:00Z",
            "expiration_date": "2024-04-01",
            "status": "active",
            "created_at": "2024-02-28T10:15:00Z"
        }))
        .unwrap();

        assert_eq!(job.id, JobId(7));
        assert_eq!(job.posting_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(job.expiration_date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(job.status, JobStatus::Active);
        assert!(job.salary_range.is_none());
        assert!(job.updated_at.is_none());
    }

    #[test]
    fn draft_serializes_plain_dates() {
        let value = serde_json::to_value(sample_draft()).unwrap();
        assert_eq!(value["posting_date"], "2024-03-01");
        assert_eq!(value["expiration_date"], "2024-04-01");
        assert!(value.get("salary_range").is_none());
    }

    #[test]
    fn validate_rejects_blank_and_inverted_dates() {
        let mut draft = sample_draft();
        assert!(draft.validate().is_ok());

        draft.company = "   ".into();
        assert_eq!(draft.validate(), Err(DraftError::MissingField("company")));

        let mut draft = sample_draft();
        draft.expiration_date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert!(matches!(
            draft.validate(),
            Err(DraftError::ExpiresBeforePosting { .. })
        ));
    }

    #[test]
    fn skills_are_trimmed_and_blanks_dropped() {
        assert_eq!(parse_skills(" rust, sql ,, go "), vec!["rust", "sql", "go"]);
        assert!(parse_skills("  ").is_empty());
    }

    #[test]
    fn form_dates_parse() {
        assert_eq!(
            parse_form_date("2024-12-31").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert!(parse_form_date("31/12/2024").is_err());
    }
}
