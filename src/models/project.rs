use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{PlacerError, PlacerResult};

lazy_static! {
    static ref PROJECT_URL_RE: Regex = Regex::new(
        r"^(?:https://)?github\.com/(?P<owner_type>orgs|users)/(?P<owner_name>[^/]+)/projects/(?P<number>\d+)"
    )
    .expect("project URL pattern is valid");
}

/// Kind of account that owns a project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    Organization,
    User,
}

impl OwnerKind {
    /// Root field name used by the GraphQL schema for this owner.
    pub fn as_query_field(&self) -> &'static str {
        match self {
            OwnerKind::Organization => "organization",
            OwnerKind::User => "user",
        }
    }
}

impl FromStr for OwnerKind {
    type Err = PlacerError;

    /// Parses the path segment of a project URL (`orgs` or `users`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "orgs" => Ok(OwnerKind::Organization),
            "users" => Ok(OwnerKind::User),
            other => Err(PlacerError::UnsupportedOwnerType(other.to_string())),
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_field())
    }
}

/// Maps a URL owner token to the GraphQL owner field name.
pub fn owner_type_query(token: &str) -> PlacerResult<&'static str> {
    token.parse::<OwnerKind>().map(|kind| kind.as_query_field())
}

/// Board coordinates parsed from a project URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub owner_kind: OwnerKind,
    pub owner_name: String,
    pub number: u32,
}

impl ProjectRef {
    pub fn parse(url: &str) -> PlacerResult<Self> {
        let caps = PROJECT_URL_RE
            .captures(url)
            .ok_or_else(|| PlacerError::InvalidProjectUrl(url.to_string()))?;

        let owner_kind = caps["owner_type"].parse::<OwnerKind>()?;
        let number = caps["number"]
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| PlacerError::InvalidProjectUrl(url.to_string()))?;

        Ok(Self {
            owner_kind,
            owner_name: caps["owner_name"].to_string(),
            number,
        })
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner_kind, self.owner_name, self.number)
    }
}

/// Opaque node id of a resolved project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
