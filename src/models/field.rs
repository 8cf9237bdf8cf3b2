use chrono::{Duration, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldOption {
    #[serde(rename = "id")]
    pub option_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelectField {
    pub field_id: String,
    pub options: Vec<FieldOption>,
}

impl SingleSelectField {
    /// Option id whose name matches exactly (case-sensitive).
    pub fn option_id(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| option.option_id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iteration {
    #[serde(rename = "id")]
    pub iteration_id: String,
    /// ISO `YYYY-MM-DD`, so string order is chronological.
    pub start_date: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Length in days.
    #[serde(default)]
    pub duration: Option<i64>,
}

impl Iteration {
    pub fn new(iteration_id: &str, start_date: &str) -> Self {
        Self {
            iteration_id: iteration_id.to_string(),
            start_date: start_date.to_string(),
            title: None,
            duration: None,
        }
    }

    /// Last day of the iteration, when the start date and duration are known.
    pub fn end_date(&self) -> Option<NaiveDate> {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok()?;
        let days = self.duration.filter(|d| *d > 0)?;
        start.checked_add_signed(Duration::days(days - 1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationField {
    pub field_id: String,
    pub iterations: Vec<Iteration>,
}
