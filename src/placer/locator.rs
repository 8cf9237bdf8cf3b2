use tracing::info;

use crate::client::ProjectsApi;
use crate::error::PlacerResult;
use crate::models::{ProjectId, ProjectRef};

/// Parse the project URL and resolve it to the board's node id.
pub async fn locate_project(
    api: &dyn ProjectsApi,
    project_url: &str,
) -> PlacerResult<(ProjectRef, ProjectId)> {
    let project = ProjectRef::parse(project_url)?;

    info!(
        owner = %project.owner_name,
        owner_kind = %project.owner_kind,
        number = project.number,
        "resolving project"
    );

    let project_id = api.project_id(&project).await?;
    info!(project_id = %project_id, "project resolved");

    Ok((project, project_id))
}
