pub mod api;
pub mod github_client;
pub mod graphql;

pub use api::ProjectsApi;
pub use github_client::GitHubClient;
pub use graphql::GraphQLClient;
