use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// How configured labels combine when matched against the content's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelOperator {
    /// Every configured label must be present.
    And,
    /// None of the configured labels may be present.
    Not,
    /// At least one configured label must be present.
    #[default]
    Or,
}

impl FromStr for LabelOperator {
    type Err = std::convert::Infallible;

    /// Unrecognised operators fall back to `Or`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "and" => LabelOperator::And,
            "not" => LabelOperator::Not,
            _ => LabelOperator::Or,
        })
    }
}

impl fmt::Display for LabelOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LabelOperator::And => "and",
            LabelOperator::Not => "not",
            LabelOperator::Or => "or",
        };
        f.write_str(s)
    }
}

/// Splits a comma-separated label list, trimming, lowercasing and dropping empties.
pub fn parse_labels(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|label| label.trim().to_lowercase())
        .filter(|label| !label.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDecision {
    Proceed,
    Skip(String),
}

impl FilterDecision {
    pub fn proceeds(&self) -> bool {
        matches!(self, FilterDecision::Proceed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    labeled: BTreeSet<String>,
    operator: LabelOperator,
}

impl LabelFilter {
    pub fn new(labeled: BTreeSet<String>, operator: LabelOperator) -> Self {
        Self { labeled, operator }
    }

    pub fn labeled(&self) -> &BTreeSet<String> {
        &self.labeled
    }

    pub fn operator(&self) -> LabelOperator {
        self.operator
    }

    /// Decide whether content carrying `labels` (lowercased) qualifies.
    pub fn evaluate(&self, labels: &BTreeSet<String>) -> FilterDecision {
        let configured = self.configured_list();
        let any_present = self.labeled.iter().any(|l| labels.contains(l));

        match self.operator {
            LabelOperator::And => {
                if self.labeled.is_subset(labels) {
                    FilterDecision::Proceed
                } else {
                    FilterDecision::Skip(format!(
                        "content is missing one of the required labels: {}",
                        configured
                    ))
                }
            }
            LabelOperator::Not => {
                if !self.labeled.is_empty() && any_present {
                    FilterDecision::Skip(format!(
                        "content has one of the excluded labels: {}",
                        configured
                    ))
                } else {
                    FilterDecision::Proceed
                }
            }
            LabelOperator::Or => {
                if self.labeled.is_empty() || any_present {
                    FilterDecision::Proceed
                } else {
                    FilterDecision::Skip(format!(
                        "content does not have any of the labels: {}",
                        configured
                    ))
                }
            }
        }
    }

    fn configured_list(&self) -> String {
        self.labeled.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
