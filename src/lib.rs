//! Builders for MongoDB query filters and aggregation pipelines.
//!
//! Every function here is a pure constructor over [`bson`] values: `expr` builds operator
//! expressions, `query_ops` builds query-language conditions, `stage` builds pipeline stages
//! and the higher-level composites (paging, keyword search, group-and-count), and `pipeline`
//! flattens it all into the `Vec<Document>` a driver's `aggregate` call takes.
//!
//! ```
//! use bson::doc;
//! use bson_pipeline::{expr, pipeline, query_ops, stage};
//!
//! let stages = pipeline![
//!     stage::match_stage(doc! { "age": query_ops::less_than(30) }),
//!     stage::add_fields(doc! { "label": expr::concat(["$first", " ", "$last"]) }),
//!     stage::optional_sorting_stage("age", true),
//!     stage::optional_paging_stage(Some(0), Some(10)),
//! ];
//! assert_eq!(stages.len(), 4);
//! ```

pub mod bson_ext;
pub mod devlog;
pub mod errors;
pub mod expr;
pub mod logger;
pub mod options;
pub mod pipeline;
pub mod query_ops;
pub mod stage;

pub use bson;
pub use errors::{PipelineError, Result};
pub use options::ListOptions;
pub use pipeline::{Step, optional_stage, parse_pipeline_json, pipeline, pipeline_to_json};
