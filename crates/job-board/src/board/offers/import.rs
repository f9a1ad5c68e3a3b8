use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::domain::{Modality, OfferDraft, Priority, UnknownVariant};

#[derive(Debug)]
pub enum OfferImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { line: u64, source: UnknownVariant },
    Date { line: u64, value: String },
}

impl std::fmt::Display for OfferImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OfferImportError::Io(err) => write!(f, "failed to read offer export: {}", err),
            OfferImportError::Csv(err) => write!(f, "invalid offer CSV data: {}", err),
            OfferImportError::Row { line, source } => {
                write!(f, "offer CSV line {}: {}", line, source)
            }
            OfferImportError::Date { line, value } => write!(
                f,
                "offer CSV line {}: '{}' is not a YYYY-MM-DD date",
                line, value
            ),
        }
    }
}

impl std::error::Error for OfferImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OfferImportError::Io(err) => Some(err),
            OfferImportError::Csv(err) => Some(err),
            OfferImportError::Row { source, .. } => Some(source),
            OfferImportError::Date { .. } => None,
        }
    }
}

impl From<std::io::Error> for OfferImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for OfferImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads offer drafts from a spreadsheet export, one offer per row.
pub struct OfferImporter;

impl OfferImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<OfferDraft>, OfferImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<OfferDraft>, OfferImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut drafts = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            // Line where the record starts; quoted cells may span several lines.
            let line = record.position().map_or(0, csv::Position::line);
            let row: OfferRow = record.deserialize(Some(&headers))?;
            drafts.push(row.into_draft(line)?);
        }

        Ok(drafts)
    }
}

#[derive(Debug, Deserialize)]
struct OfferRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Department", default)]
    department: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Modality")]
    modality: String,
    #[serde(rename = "Salary", default)]
    salary: String,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(
        rename = "Priority",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    priority: Option<String>,
    #[serde(rename = "Competencies", default)]
    competencies: String,
    #[serde(rename = "Education", default)]
    education: String,
    #[serde(rename = "Experience", default)]
    experience: String,
    #[serde(
        rename = "Published",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    published: Option<String>,
}

impl OfferRow {
    fn into_draft(self, line: u64) -> Result<OfferDraft, OfferImportError> {
        let modality: Modality = self
            .modality
            .parse()
            .map_err(|source| OfferImportError::Row { line, source })?;
        let priority = match self.priority.as_deref() {
            Some(raw) => raw
                .parse::<Priority>()
                .map_err(|source| OfferImportError::Row { line, source })?,
            None => Priority::default(),
        };
        let published_on = match self.published {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| OfferImportError::Date { line, value: raw })?,
            ),
            None => None,
        };

        Ok(OfferDraft {
            title: self.title,
            company: self.company,
            department: self.department,
            description: self.description,
            location: self.location,
            modality,
            salary: self.salary,
            industry: self.industry,
            priority,
            required_competencies: split_list(&self.competencies),
            required_education: split_list(&self.education),
            required_experience: self.experience,
            published_on,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
