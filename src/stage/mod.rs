//! Aggregation pipeline stages. Every builder returns the stage as a single-key
//! [`bson::Document`]; optional stages are `Option<Document>`.

mod complex;
mod primitives;
mod types;

pub use complex::{
    group_and_count_stages, list_stages, optional_paging_stage, optional_sorting_stage,
    search_filter_expr_stage, search_filter_stage, search_pattern,
};
pub use primitives::{
    add_fields, count, facet, group, limit, lookup_pipeline, lookup_simple, match_stage, project,
    replace_with, set, skip, sort, unset, unwind,
};
pub use types::SearchField;
