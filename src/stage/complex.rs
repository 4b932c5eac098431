use bson::{Bson, Document, doc};

use super::primitives::{
    add_fields, count, facet, group, limit, match_stage, project, skip, sort,
};
use super::types::SearchField;
use crate::expr::{
    cond, convert_errorable_nullable, divide, equal, floor, is_array, min, or, reduce, regex_match,
    subtract, sum,
};
use crate::options::ListOptions;
use crate::pipeline::pipeline;
use crate::query_ops::regex as regex_condition;
use crate::trace_builder;

/// `$sort` on `sort_by` (descending when `sort_desc`), or no stage when `sort_by` is empty.
pub fn optional_sorting_stage(sort_by: &str, sort_desc: bool) -> Option<Document> {
    if sort_by.is_empty() {
        return None;
    }
    let order = if sort_desc { -1 } else { 1 };
    let mut spec = Document::new();
    spec.insert(sort_by, order);
    Some(sort(spec))
}

/// Turn a stream of documents into one page plus metadata, or no stage when `page` or `size`
/// is missing.
///
/// The result is a single document `{content: [...], metadata: [{total_elements, total_pages,
/// size, number, empty, first, last}]}`. `metadata` is empty when the input stream is.
pub fn optional_paging_stage(page: Option<i64>, size: Option<i64>) -> Option<Document> {
    let (page, size) = page.zip(size)?;
    let offset = page.saturating_mul(size);
    trace_builder!("paging stage: page={page} size={size} offset={offset}");

    let content = pipeline([skip(offset), limit(size)]);
    let first = page == 0;
    let metadata = pipeline([
        count("total_elements"),
        add_fields(doc! {
            "total_pages": floor(divide("$total_elements", size)),
            "size": min([Bson::from(size), subtract("$total_elements", offset)]),
            "number": page
        }),
        add_fields(doc! {
            "empty": equal("$size", 0),
            "first": first,
            "last": equal(page, subtract("$total_pages", 1))
        }),
    ]);
    Some(facet(doc! { "content": content, "metadata": metadata }))
}

/// Alternation of `keywords`, each escaped so it matches literally.
pub fn search_pattern<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords.iter().map(|k| ::regex::escape(k.as_ref())).collect::<Vec<_>>().join("|")
}

/// `$match` keeping documents where any of `fields` contains any of `keywords`,
/// case-insensitively.
pub fn search_filter_stage<F, K>(fields: &[F], keywords: &[K]) -> Document
where
    F: AsRef<str>,
    K: AsRef<str>,
{
    let pattern = search_pattern(keywords);
    trace_builder!("search filter: {} field(s), pattern {pattern:?}", fields.len());
    let conditions: Vec<Bson> = fields
        .iter()
        .map(|f| {
            let mut c = Document::new();
            c.insert(f.as_ref(), regex_condition(&pattern, "i"));
            Bson::Document(c)
        })
        .collect();
    match_stage(or(conditions))
}

/// String form of `value` for matching. Null, missing and unconvertible values (documents,
/// arrays, binaries) become `""` so a single odd document cannot fail the aggregate.
fn search_text(value: impl Into<Bson>) -> Bson {
    convert_errorable_nullable(value, "string", "", "")
}

fn text_match(value: impl Into<Bson>, pattern: &str) -> Bson {
    regex_match(search_text(value), pattern, "i")
}

/// Like [`search_filter_stage`] but evaluated as an aggregation expression, so array-valued
/// fields match when any element matches and non-string scalars are compared by their string
/// form. A field declared as an array that holds a scalar is matched as a scalar.
pub fn search_filter_expr_stage<K: AsRef<str>>(
    fields: &[SearchField],
    keywords: &[K],
) -> Document {
    let pattern = search_pattern(keywords);
    trace_builder!("search expr filter: {} field(s), pattern {pattern:?}", fields.len());
    let conditions: Vec<Bson> = fields
        .iter()
        .map(|f| match f {
            SearchField::Scalar(_) => text_match(f.path(), &pattern),
            SearchField::Array(_) => cond(
                is_array(f.path()),
                reduce(
                    f.path(),
                    false,
                    or([Bson::from("$$value"), text_match("$$this", &pattern)]),
                ),
                text_match(f.path(), &pattern),
            ),
        })
        .collect();
    match_stage(doc! { "$expr": or(conditions) })
}

/// Group by `what`, counting documents, and reshape to `{what_field_name, count_field_name}`.
pub fn group_and_count_stages(
    what_field_name: &str,
    count_field_name: &str,
    what: impl Into<Bson>,
) -> Vec<Document> {
    let what: Bson = what.into();
    let mut grouping = doc! { "_id": what };
    grouping.insert(count_field_name, sum(1));
    let mut shape = doc! { "_id": false };
    shape.insert(what_field_name, "$_id");
    shape.insert(count_field_name, true);
    vec![group(grouping), project(shape)]
}

/// Search, sort and page stages for a listing request, in that order.
pub fn list_stages(opts: &ListOptions) -> Vec<Document> {
    let search = (!opts.search_fields.is_empty() && !opts.keywords.is_empty())
        .then(|| search_filter_stage(opts.search_fields.as_slice(), opts.keywords.as_slice()));
    let sorting = opts.sort_by.as_deref().and_then(|s| optional_sorting_stage(s, opts.sort_desc));
    let paging = optional_paging_stage(opts.page, opts.size);
    let out = pipeline([search, sorting, paging]);
    log::debug!("list stages: {} stage(s)", out.len());
    out
}
