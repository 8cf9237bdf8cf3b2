use std::env;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command};

use crate::constants::GITHUB_GRAPHQL_URL;
use crate::error::{PlacerError, PlacerResult};
use crate::filtering::{parse_labels, LabelFilter, LabelOperator};

/// Validated invocation inputs.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub project_url: String,
    pub github_token: String,
    pub field_name: String,
    pub field_option: String,
    pub label_filter: LabelFilter,
    pub api_url: String,
    pub event_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

/// Command line definition. Every action input can also come from the
/// `INPUT_*` variable the Actions runner exports for it.
pub fn command() -> Command {
    Command::new("board-placer")
        .about("Add the triggering issue or pull request to a project board and set its fields")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("project-url")
                .long("project-url")
                .env("INPUT_PROJECT-URL")
                .value_name("URL")
                .help("Project board URL, e.g. https://github.com/orgs/<org>/projects/<number>")
        )
        .arg(
            Arg::new("github-token")
                .long("github-token")
                .env("INPUT_GITHUB-TOKEN")
                .value_name("TOKEN")
                .hide_env_values(true)
                .help("Token with access to the project (falls back to GITHUB_TOKEN)")
        )
        .arg(
            Arg::new("field-name")
                .long("field-name")
                .env("INPUT_FIELD-NAME")
                .value_name("NAME")
                .help("Single-select field to set")
        )
        .arg(
            Arg::new("field-option")
                .long("field-option")
                .env("INPUT_FIELD-OPTION")
                .value_name("OPTION")
                .help("Option to select in the field")
        )
        .arg(
            Arg::new("labeled")
                .long("labeled")
                .env("INPUT_LABELED")
                .value_name("LABELS")
                .help("Comma-separated labels the content is filtered by")
        )
        .arg(
            Arg::new("label-operator")
                .long("label-operator")
                .env("INPUT_LABEL-OPERATOR")
                .value_name("OPERATOR")
                .help("How labels combine: and, not, or (default)")
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .env("GITHUB_GRAPHQL_URL")
                .value_name("URL")
                .help("GraphQL endpoint")
        )
        .arg(
            Arg::new("event-path")
                .long("event-path")
                .env("GITHUB_EVENT_PATH")
                .value_name("FILE")
                .help("Webhook event payload that triggered the run")
        )
        .arg(
            Arg::new("output-path")
                .long("output-path")
                .env("GITHUB_OUTPUT")
                .value_name("FILE")
                .help("File that action outputs are appended to")
        )
}

fn value(matches: &ArgMatches, name: &str) -> Option<String> {
    matches
        .get_one::<String>(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(matches: &ArgMatches, name: &str) -> PlacerResult<String> {
    value(matches, name)
        .ok_or_else(|| PlacerError::ConfigError(format!("Input required and not supplied: {}", name)))
}

impl Inputs {
    pub fn from_matches(matches: &ArgMatches) -> PlacerResult<Self> {
        let github_token = match value(matches, "github-token") {
            Some(token) => token,
            None => env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    PlacerError::ConfigError("Input required and not supplied: github-token".to_string())
                })?,
        };

        let labeled = value(matches, "labeled")
            .map(|raw| parse_labels(&raw))
            .unwrap_or_default();
        let operator = value(matches, "label-operator")
            .map(|op| op.parse::<LabelOperator>().unwrap_or_default())
            .unwrap_or_default();

        Ok(Self {
            project_url: required(matches, "project-url")?,
            github_token,
            field_name: required(matches, "field-name")?,
            field_option: required(matches, "field-option")?,
            label_filter: LabelFilter::new(labeled, operator),
            api_url: value(matches, "api-url").unwrap_or_else(|| GITHUB_GRAPHQL_URL.to_string()),
            event_path: value(matches, "event-path").map(PathBuf::from),
            output_path: value(matches, "output-path").map(PathBuf::from),
        })
    }
}

/// Builder for inputs assembled in code rather than from the command line.
pub struct InputsBuilder {
    project_url: String,
    github_token: String,
    field_name: String,
    field_option: String,
    labeled: String,
    label_operator: LabelOperator,
    api_url: String,
}

impl InputsBuilder {
    pub fn new(project_url: &str, field_name: &str, field_option: &str) -> Self {
        Self {
            project_url: project_url.to_string(),
            github_token: String::new(),
            field_name: field_name.to_string(),
            field_option: field_option.to_string(),
            labeled: String::new(),
            label_operator: LabelOperator::default(),
            api_url: GITHUB_GRAPHQL_URL.to_string(),
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.github_token = token.to_string();
        self
    }

    pub fn with_labels(mut self, labeled: &str, operator: LabelOperator) -> Self {
        self.labeled = labeled.to_string();
        self.label_operator = operator;
        self
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    pub fn build(self) -> Inputs {
        Inputs {
            project_url: self.project_url,
            github_token: self.github_token,
            field_name: self.field_name,
            field_option: self.field_option,
            label_filter: LabelFilter::new(parse_labels(&self.labeled), self.label_operator),
            api_url: self.api_url,
            event_path: None,
            output_path: None,
        }
    }
}
