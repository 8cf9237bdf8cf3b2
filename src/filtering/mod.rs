pub mod labels;

pub use labels::{parse_labels, FilterDecision, LabelFilter, LabelOperator};
