//! Places the triggering issue or pull request on a project board.
//!
//! A run moves through label filtering, project lookup, item creation, the
//! single-select update and the iteration update, strictly in that order.
//! Every remote call waits on the previous one, and the first failure ends
//! the run without undoing mutations that already succeeded.

pub mod fields;
pub mod items;
pub mod iterations;
pub mod locator;

use tracing::info;

use crate::client::ProjectsApi;
use crate::config::Inputs;
use crate::constants::ITEM_ID_OUTPUT;
use crate::context::TriggerContext;
use crate::error::PlacerResult;
use crate::filtering::FilterDecision;
use crate::models::{ItemPlacement, ProjectId};
use crate::outputs::OutputSink;

pub use fields::{assign_field, FieldAssignment};
pub use items::resolve_item;
pub use iterations::{assign_iteration, select_latest, IterationAssignment};
pub use locator::locate_project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    pub project_id: ProjectId,
    pub placement: ItemPlacement,
    pub field: FieldAssignment,
    pub iteration: IterationAssignment,
}

impl PlacementReport {
    /// The item id from the last mutation of the run.
    pub fn item_id(&self) -> &str {
        &self.iteration.item_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// The label filter rejected the content; nothing was changed.
    Skipped { reason: String },
    Placed(PlacementReport),
}

pub struct BoardItemPlacer<'a> {
    api: &'a dyn ProjectsApi,
    outputs: &'a mut dyn OutputSink,
}

impl<'a> BoardItemPlacer<'a> {
    pub fn new(api: &'a dyn ProjectsApi, outputs: &'a mut dyn OutputSink) -> Self {
        Self { api, outputs }
    }

    pub async fn run(
        &mut self,
        inputs: &Inputs,
        trigger: &TriggerContext,
    ) -> PlacerResult<PlacementOutcome> {
        let content = &trigger.content;
        let filter = &inputs.label_filter;

        if let FilterDecision::Skip(reason) = filter.evaluate(&content.labels) {
            info!(
                operator = %filter.operator(),
                labeled = ?filter.labeled(),
                content = %content.url,
                "skipping: {}",
                reason
            );
            return Ok(PlacementOutcome::Skipped { reason });
        }

        let (project, project_id) = locate_project(self.api, &inputs.project_url).await?;

        let placement = resolve_item(self.api, &project, &project_id, content).await?;
        info!(item_id = placement.item_id(), kind = placement.kind(), "item on board");
        self.outputs.publish(ITEM_ID_OUTPUT, placement.item_id())?;

        let field = assign_field(
            self.api,
            &project_id,
            placement.item_id(),
            &inputs.field_name,
            &inputs.field_option,
        )
        .await?;
        self.outputs.publish(ITEM_ID_OUTPUT, &field.item_id)?;

        let iteration = assign_iteration(self.api, &project_id, &field.item_id).await?;
        self.outputs.publish(ITEM_ID_OUTPUT, &iteration.item_id)?;

        info!(item_id = %iteration.item_id, project = %project, "placement complete");

        Ok(PlacementOutcome::Placed(PlacementReport {
            project_id,
            placement,
            field,
            iteration,
        }))
    }
}
