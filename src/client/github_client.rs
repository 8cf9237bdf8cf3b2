use async_trait::async_trait;
use serde_json::json;

use super::api::ProjectsApi;
use super::graphql::GraphQLClient;
use crate::constants::{
    ADD_CONTENT_MUTATION, ADD_DRAFT_MUTATION, ITERATION_FIELD_QUERY, PROJECT_ID_QUERY,
    SINGLE_SELECT_FIELD_QUERY, UPDATE_ITERATION_MUTATION, UPDATE_SINGLE_SELECT_MUTATION,
};
use crate::error::{PlacerError, PlacerResult};
use crate::models::graphql::{
    AddContentData, AddDraftData, FieldLookupData, IterationFieldNode, NodeId, ProjectOwnerData,
    SingleSelectFieldNode, UpdateFieldValueData,
};
use crate::models::{IterationField, ProjectId, ProjectRef, SingleSelectField};

/// GitHub Projects (V2) over the GraphQL API.
pub struct GitHubClient {
    graphql: GraphQLClient,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: &str) -> PlacerResult<Self> {
        Ok(Self {
            graphql: GraphQLClient::new(api_url, token)?,
        })
    }

    fn require_item(node: Option<NodeId>, operation: &str) -> PlacerResult<String> {
        node.map(|n| n.id)
            .ok_or_else(|| PlacerError::ApiError(format!("{} returned no project item", operation)))
    }
}

#[async_trait]
impl ProjectsApi for GitHubClient {
    async fn project_id(&self, project: &ProjectRef) -> PlacerResult<ProjectId> {
        let owner_field = project.owner_kind.as_query_field();
        let query = PROJECT_ID_QUERY.replace("{ownerKind}", owner_field);
        let variables = json!({
            "ownerName": project.owner_name,
            "projectNumber": project.number,
        });

        let mut data: ProjectOwnerData = self.graphql.query(&query, variables).await?;

        data.remove(owner_field)
            .flatten()
            .and_then(|owner| owner.project_v2)
            .map(|node| node.id)
            .filter(|id| !id.is_empty())
            .map(ProjectId)
            .ok_or_else(|| PlacerError::ProjectNotFound(project.to_string()))
    }

    async fn add_content(&self, project_id: &ProjectId, content_id: &str) -> PlacerResult<String> {
        let variables = json!({
            "projectId": project_id.as_str(),
            "contentId": content_id,
        });

        let data: AddContentData = self.graphql.mutate(ADD_CONTENT_MUTATION, variables).await?;
        Self::require_item(data.add_item.and_then(|p| p.item), "addProjectV2ItemById")
    }

    async fn add_draft(&self, project_id: &ProjectId, title: &str) -> PlacerResult<String> {
        let variables = json!({
            "projectId": project_id.as_str(),
            "title": title,
        });

        let data: AddDraftData = self.graphql.mutate(ADD_DRAFT_MUTATION, variables).await?;
        Self::require_item(data.add_draft.and_then(|p| p.project_item), "addProjectV2DraftIssue")
    }

    async fn single_select_field(
        &self,
        project_id: &ProjectId,
        field_name: &str,
    ) -> PlacerResult<SingleSelectField> {
        let variables = json!({
            "projectId": project_id.as_str(),
            "fieldName": field_name,
        });

        let data: FieldLookupData<SingleSelectFieldNode> =
            self.graphql.query(SINGLE_SELECT_FIELD_QUERY, variables).await?;

        let (field_id, options) = data
            .node
            .and_then(|node| node.field)
            .and_then(|field| field.id.map(|id| (id, field.options)))
            .ok_or_else(|| PlacerError::FieldNotFound(field_name.to_string()))?;

        Ok(SingleSelectField { field_id, options })
    }

    async fn set_single_select(
        &self,
        project_id: &ProjectId,
        item_id: &str,
        field_id: &str,
        option_id: Option<&str>,
    ) -> PlacerResult<String> {
        let variables = json!({
            "projectId": project_id.as_str(),
            "itemId": item_id,
            "fieldId": field_id,
            "optionId": option_id,
        });

        let data: UpdateFieldValueData =
            self.graphql.mutate(UPDATE_SINGLE_SELECT_MUTATION, variables).await?;
        Self::require_item(
            data.update.and_then(|p| p.project_v2_item),
            "updateProjectV2ItemFieldValue",
        )
    }

    async fn iteration_field(
        &self,
        project_id: &ProjectId,
        field_name: &str,
    ) -> PlacerResult<IterationField> {
        let variables = json!({
            "projectId": project_id.as_str(),
            "fieldName": field_name,
        });

        let data: FieldLookupData<IterationFieldNode> =
            self.graphql.query(ITERATION_FIELD_QUERY, variables).await?;

        let field = data
            .node
            .and_then(|node| node.field)
            .ok_or_else(|| PlacerError::FieldNotFound(field_name.to_string()))?;
        let field_id = field
            .id
            .ok_or_else(|| PlacerError::FieldNotFound(field_name.to_string()))?;
        let iterations = field
            .configuration
            .and_then(|config| config.iterations)
            .ok_or_else(|| PlacerError::NoIterations(field_name.to_string()))?;

        Ok(IterationField { field_id, iterations })
    }

    async fn set_iteration(
        &self,
        project_id: &ProjectId,
        item_id: &str,
        field_id: &str,
        iteration_id: &str,
    ) -> PlacerResult<String> {
        let variables = json!({
            "projectId": project_id.as_str(),
            "itemId": item_id,
            "fieldId": field_id,
            "iterationId": iteration_id,
        });

        let data: UpdateFieldValueData =
            self.graphql.mutate(UPDATE_ITERATION_MUTATION, variables).await?;
        Self::require_item(
            data.update.and_then(|p| p.project_v2_item),
            "updateProjectV2ItemFieldValue",
        )
    }
}
