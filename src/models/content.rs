use std::collections::BTreeSet;

/// The issue or pull request that triggered the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRef {
    pub content_id: String,
    pub owner_login: String,
    pub url: String,
    /// Lowercased label names.
    pub labels: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardItem {
    pub item_id: String,
}

/// How the content ended up on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPlacement {
    /// The live issue or pull request was linked to the project.
    Attached(BoardItem),
    /// A draft titled with the content URL stands in for cross-owner content.
    Drafted(BoardItem),
}

impl ItemPlacement {
    pub fn item(&self) -> &BoardItem {
        match self {
            ItemPlacement::Attached(item) | ItemPlacement::Drafted(item) => item,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item().item_id
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ItemPlacement::Attached(_) => "attached",
            ItemPlacement::Drafted(_) => "drafted",
        }
    }
}
