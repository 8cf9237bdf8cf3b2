pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const USER_AGENT: &str = concat!("board-placer/", env!("CARGO_PKG_VERSION"));

/// The iteration field is looked up by this fixed name.
pub const ITERATION_FIELD_NAME: &str = "Iteration";

/// Name of the action output carrying the project item id.
pub const ITEM_ID_OUTPUT: &str = "itemId";

// Owner kind is spliced into the query as the root field name.
pub const PROJECT_ID_QUERY: &str = r#"
    query($ownerName: String!, $projectNumber: Int!) {
        {ownerKind}(login: $ownerName) {
            projectV2(number: $projectNumber) {
                id
            }
        }
    }
"#;

pub const ADD_CONTENT_MUTATION: &str = r#"
    mutation($projectId: ID!, $contentId: ID!) {
        addProjectV2ItemById(input: { projectId: $projectId, contentId: $contentId }) {
            item {
                id
            }
        }
    }
"#;

pub const ADD_DRAFT_MUTATION: &str = r#"
    mutation($projectId: ID!, $title: String!) {
        addProjectV2DraftIssue(input: { projectId: $projectId, title: $title }) {
            projectItem {
                id
            }
        }
    }
"#;

pub const SINGLE_SELECT_FIELD_QUERY: &str = r#"
    query($projectId: ID!, $fieldName: String!) {
        node(id: $projectId) {
            ... on ProjectV2 {
                field(name: $fieldName) {
                    ... on ProjectV2SingleSelectField {
                        id
                        options {
                            id
                            name
                        }
                    }
                }
            }
        }
    }
"#;

pub const ITERATION_FIELD_QUERY: &str = r#"
    query($projectId: ID!, $fieldName: String!) {
        node(id: $projectId) {
            ... on ProjectV2 {
                field(name: $fieldName) {
                    ... on ProjectV2IterationField {
                        id
                        configuration {
                            iterations {
                                id
                                title
                                startDate
                                duration
                            }
                        }
                    }
                }
            }
        }
    }
"#;

pub const UPDATE_SINGLE_SELECT_MUTATION: &str = r#"
    mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $optionId: String) {
        updateProjectV2ItemFieldValue(
            input: {
                projectId: $projectId
                itemId: $itemId
                fieldId: $fieldId
                value: { singleSelectOptionId: $optionId }
            }
        ) {
            projectV2Item {
                id
            }
        }
    }
"#;

pub const UPDATE_ITERATION_MUTATION: &str = r#"
    mutation($projectId: ID!, $itemId: ID!, $fieldId: ID!, $iterationId: String!) {
        updateProjectV2ItemFieldValue(
            input: {
                projectId: $projectId
                itemId: $itemId
                fieldId: $fieldId
                value: { iterationId: $iterationId }
            }
        ) {
            projectV2Item {
                id
            }
        }
    }
"#;
