use tracing::{info, warn};

use crate::client::ProjectsApi;
use crate::error::PlacerResult;
use crate::models::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field_id: String,
    /// `None` when no option carried the configured name.
    pub option_id: Option<String>,
    pub item_id: String,
}

/// Set the named single-select field on the item to the named option.
///
/// A missing option is not rejected here: the update is sent without an
/// option id and the server decides.
pub async fn assign_field(
    api: &dyn ProjectsApi,
    project_id: &ProjectId,
    item_id: &str,
    field_name: &str,
    option_name: &str,
) -> PlacerResult<FieldAssignment> {
    let field = api.single_select_field(project_id, field_name).await?;
    let option_id = field.option_id(option_name).map(str::to_string);

    match &option_id {
        Some(id) => info!(field = field_name, option = option_name, option_id = %id, "setting field"),
        None => warn!(
            field = field_name,
            option = option_name,
            available = ?field.options.iter().map(|o| o.name.as_str()).collect::<Vec<_>>(),
            "option not found on field, sending update without an option id"
        ),
    }

    let item_id = api
        .set_single_select(project_id, item_id, &field.field_id, option_id.as_deref())
        .await?;

    Ok(FieldAssignment {
        field_id: field.field_id,
        option_id,
        item_id,
    })
}
