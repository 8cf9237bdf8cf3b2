use async_trait::async_trait;

use crate::error::PlacerResult;
use crate::models::{IterationField, ProjectId, ProjectRef, SingleSelectField};

/// The remote project-board operations the placer depends on.
///
/// Every mutation returns the id of the project item it touched.
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    /// Resolve a board to its node id by owner login, number and owner kind.
    async fn project_id(&self, project: &ProjectRef) -> PlacerResult<ProjectId>;

    /// Link an existing issue or pull request to the board.
    async fn add_content(&self, project_id: &ProjectId, content_id: &str) -> PlacerResult<String>;

    /// Create a draft item with the given title.
    async fn add_draft(&self, project_id: &ProjectId, title: &str) -> PlacerResult<String>;

    async fn single_select_field(
        &self,
        project_id: &ProjectId,
        field_name: &str,
    ) -> PlacerResult<SingleSelectField>;

    /// Set a single-select value. A `None` option is sent as-is and left for
    /// the server to reject.
    async fn set_single_select(
        &self,
        project_id: &ProjectId,
        item_id: &str,
        field_id: &str,
        option_id: Option<&str>,
    ) -> PlacerResult<String>;

    async fn iteration_field(
        &self,
        project_id: &ProjectId,
        field_name: &str,
    ) -> PlacerResult<IterationField>;

    async fn set_iteration(
        &self,
        project_id: &ProjectId,
        item_id: &str,
        field_id: &str,
        iteration_id: &str,
    ) -> PlacerResult<String>;
}
