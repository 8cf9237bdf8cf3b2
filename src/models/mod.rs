pub mod content;
pub mod field;
pub mod graphql;
pub mod project;

// Re-export commonly used types
pub use content::{BoardItem, ContentRef, ItemPlacement};
pub use field::{FieldOption, Iteration, IterationField, SingleSelectField};
pub use graphql::{GraphQLError, GraphQLResponse};
pub use project::{owner_type_query, OwnerKind, ProjectId, ProjectRef};
