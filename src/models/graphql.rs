use std::collections::HashMap;

use serde::Deserialize;

use super::field::{FieldOption, Iteration};

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NodeId {
    pub id: String,
}

// Project lookup, keyed by the owner root field ("organization" or "user")
pub type ProjectOwnerData = HashMap<String, Option<ProjectOwnerNode>>;

#[derive(Debug, Deserialize)]
pub struct ProjectOwnerNode {
    #[serde(rename = "projectV2")]
    pub project_v2: Option<NodeId>,
}

// Item mutation response structures
#[derive(Debug, Deserialize)]
pub struct AddContentData {
    #[serde(rename = "addProjectV2ItemById")]
    pub add_item: Option<AddContentPayload>,
}

#[derive(Debug, Deserialize)]
pub struct AddContentPayload {
    pub item: Option<NodeId>,
}

#[derive(Debug, Deserialize)]
pub struct AddDraftData {
    #[serde(rename = "addProjectV2DraftIssue")]
    pub add_draft: Option<AddDraftPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDraftPayload {
    pub project_item: Option<NodeId>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldValueData {
    #[serde(rename = "updateProjectV2ItemFieldValue")]
    pub update: Option<UpdateFieldValuePayload>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFieldValuePayload {
    #[serde(rename = "projectV2Item")]
    pub project_v2_item: Option<NodeId>,
}

// Field lookups. A field of another type matches no fragment and comes back as `{}`.
#[derive(Debug, Deserialize)]
pub struct FieldLookupData<F> {
    pub node: Option<ProjectFieldNode<F>>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectFieldNode<F> {
    pub field: Option<F>,
}

#[derive(Debug, Deserialize)]
pub struct SingleSelectFieldNode {
    pub id: Option<String>,
    #[serde(default)]
    pub options: Vec<FieldOption>,
}

#[derive(Debug, Deserialize)]
pub struct IterationFieldNode {
    pub id: Option<String>,
    pub configuration: Option<IterationConfiguration>,
}

#[derive(Debug, Deserialize)]
pub struct IterationConfiguration {
    pub iterations: Option<Vec<Iteration>>,
}
