//! Assembling stages into a pipeline.
//!
//! Builders hand back a single stage (`Document`), a run of stages (`Vec<Document>`) or an
//! optional stage (`Option<_>`). [`pipeline`] and the [`pipeline!`](crate::pipeline!) macro accept
//! any mix of these and flatten them into the `Vec<Document>` a driver's `aggregate` expects.

use bson::{Bson, Document};

use crate::bson_ext::into_document;
use crate::errors::{PipelineError, Result};

/// One item handed to the pipeline assembler.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Stage(Document),
    Stages(Vec<Document>),
    Empty,
}

impl From<Document> for Step {
    fn from(d: Document) -> Self {
        Self::Stage(d)
    }
}

impl From<Vec<Document>> for Step {
    fn from(v: Vec<Document>) -> Self {
        Self::Stages(v)
    }
}

impl<T: Into<Step>> From<Option<T>> for Step {
    fn from(o: Option<T>) -> Self {
        o.map_or(Self::Empty, Into::into)
    }
}

/// Flatten `steps` into one ordered pipeline. Stage lists are spliced in place and empty
/// steps are skipped.
pub fn pipeline<I, S>(steps: I) -> Vec<Document>
where
    I: IntoIterator<Item = S>,
    S: Into<Step>,
{
    let mut out = Vec::new();
    for step in steps {
        match step.into() {
            Step::Stage(d) => out.push(d),
            Step::Stages(v) => out.extend(v),
            Step::Empty => {}
        }
    }
    out
}

/// Build a pipeline from heterogeneous steps.
///
/// ```
/// use bson::doc;
/// use bson_pipeline::{pipeline, stage};
///
/// let stages = pipeline![
///     stage::match_stage(doc! { "archived": false }),
///     stage::optional_sorting_stage("", false),
///     stage::group_and_count_stages("os", "count", "$os"),
/// ];
/// assert_eq!(stages.len(), 3);
/// ```
#[macro_export]
macro_rules! pipeline {
    () => { ::std::vec::Vec::<$crate::bson::Document>::new() };
    ($($step:expr),+ $(,)?) => {
        $crate::pipeline::pipeline([$($crate::pipeline::Step::from($step)),+])
    };
}

/// `stage` when `optional` is true, otherwise no stage.
pub fn optional_stage(optional: bool, stage: Document) -> Option<Document> {
    optional.then_some(stage)
}

/// Parse a JSON array of stage documents. Extended JSON values (`{"$oid": ...}`,
/// `{"$date": ...}`) are decoded through `bson`'s serde support.
///
/// # Errors
/// Returns an error if the input is not a JSON array, an element is not a document, or a
/// document is not a single `$`-prefixed stage.
pub fn parse_pipeline_json(json: &str) -> Result<Vec<Document>> {
    let values: Vec<Bson> = serde_json::from_str(json)?;
    let mut out = Vec::with_capacity(values.len());
    for (i, v) in values.into_iter().enumerate() {
        let d = into_document(v)?;
        if d.len() != 1 || !d.keys().all(|k| k.starts_with('$')) {
            let keys: Vec<&str> = d.keys().map(String::as_str).collect();
            return Err(PipelineError::InvalidStage(format!("stage {i} has keys {keys:?}")));
        }
        out.push(d);
    }
    log::debug!("parsed pipeline with {} stages", out.len());
    Ok(out)
}

/// Render `stages` as a relaxed extended JSON array, for logs and debugging. Key order is kept,
/// so the output parses back into the same pipeline with [`parse_pipeline_json`].
pub fn pipeline_to_json(stages: &[Document]) -> String {
    Bson::Array(stages.iter().cloned().map(Bson::Document).collect())
        .into_relaxed_extjson()
        .to_string()
}
