use tracing::info;

use crate::client::ProjectsApi;
use crate::constants::ITERATION_FIELD_NAME;
use crate::error::{PlacerError, PlacerResult};
use crate::models::{Iteration, ProjectId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationAssignment {
    pub field_id: String,
    pub iteration: Iteration,
    pub item_id: String,
}

/// Iteration with the greatest start date. Dates compare as strings; on a
/// tie the earlier entry in the list is kept.
pub fn select_latest(iterations: &[Iteration]) -> Option<&Iteration> {
    iterations.iter().reduce(|latest, candidate| {
        if candidate.start_date > latest.start_date {
            candidate
        } else {
            latest
        }
    })
}

/// Put the item in the latest iteration of the project's `Iteration` field.
pub async fn assign_iteration(
    api: &dyn ProjectsApi,
    project_id: &ProjectId,
    item_id: &str,
) -> PlacerResult<IterationAssignment> {
    let field = api.iteration_field(project_id, ITERATION_FIELD_NAME).await?;
    let iteration = select_latest(&field.iterations)
        .cloned()
        .ok_or_else(|| PlacerError::NoIterations(ITERATION_FIELD_NAME.to_string()))?;

    info!(
        iteration_id = %iteration.iteration_id,
        title = iteration.title.as_deref().unwrap_or(""),
        start = %iteration.start_date,
        end = ?iteration.end_date(),
        "setting iteration"
    );

    let item_id = api
        .set_iteration(project_id, item_id, &field.field_id, &iteration.iteration_id)
        .await?;

    Ok(IterationAssignment {
        field_id: field.field_id,
        iteration,
        item_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_latest_start_date() {
        let iterations = vec![
            Iteration::new("a", "2024-01-01"),
            Iteration::new("b", "2024-02-01"),
        ];
        assert_eq!(select_latest(&iterations).unwrap().iteration_id, "b");
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let iterations = vec![
            Iteration::new("b", "2024-02-01"),
            Iteration::new("c", "2023-12-18"),
            Iteration::new("a", "2024-01-01"),
        ];
        assert_eq!(select_latest(&iterations).unwrap().iteration_id, "b");
    }

    #[test]
    fn ties_keep_first_encountered() {
        let iterations = vec![
            Iteration::new("first", "2024-02-01"),
            Iteration::new("second", "2024-02-01"),
        ];
        assert_eq!(select_latest(&iterations).unwrap().iteration_id, "first");
    }

    #[test]
    fn empty_list_has_no_selection() {
        assert!(select_latest(&[]).is_none());
    }
}
