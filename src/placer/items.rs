use tracing::info;

use crate::client::ProjectsApi;
use crate::error::PlacerResult;
use crate::models::{BoardItem, ContentRef, ItemPlacement, ProjectId, ProjectRef};

/// Put the content on the board.
///
/// Content owned by the project's owner is linked directly. Content from any
/// other owner cannot be linked, so a draft titled with its URL is created.
/// The owner comparison is case-sensitive.
pub async fn resolve_item(
    api: &dyn ProjectsApi,
    project: &ProjectRef,
    project_id: &ProjectId,
    content: &ContentRef,
) -> PlacerResult<ItemPlacement> {
    if content.owner_login == project.owner_name {
        info!(content_id = %content.content_id, "adding content to project");
        let item_id = api.add_content(project_id, &content.content_id).await?;
        Ok(ItemPlacement::Attached(BoardItem { item_id }))
    } else {
        info!(
            content_owner = %content.owner_login,
            project_owner = %project.owner_name,
            title = %content.url,
            "content owner differs from project owner, creating draft item"
        );
        let item_id = api.add_draft(project_id, &content.url).await?;
        Ok(ItemPlacement::Drafted(BoardItem { item_id }))
    }
}
