use bson::{Bson, Document, doc};

use crate::expr::list;

fn stage(name: &str, arg: impl Into<Bson>) -> Document {
    let mut d = Document::new();
    d.insert(name, arg);
    d
}

/// `$match` filtering on query-language `conditions`.
pub fn match_stage(conditions: impl Into<Bson>) -> Document {
    stage("$match", conditions)
}

/// `$sort` by `what`, a document of `field: 1 | -1` in priority order.
pub fn sort(what: impl Into<Bson>) -> Document {
    stage("$sort", what)
}

pub fn limit(number: impl Into<Bson>) -> Document {
    stage("$limit", number)
}

pub fn skip(number: impl Into<Bson>) -> Document {
    stage("$skip", number)
}

pub fn project(what: impl Into<Bson>) -> Document {
    stage("$project", what)
}

/// `$unset` of the given field names (always an array, even for one field).
pub fn unset<I, T>(what: I) -> Document
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    stage("$unset", list(what))
}

pub fn set(what: impl Into<Bson>) -> Document {
    stage("$set", what)
}

pub fn add_fields(what: impl Into<Bson>) -> Document {
    stage("$addFields", what)
}

/// `$unwind` of a field path such as `"$tags"`.
pub fn unwind(what: &str) -> Document {
    stage("$unwind", what)
}

pub fn replace_with(what: impl Into<Bson>) -> Document {
    stage("$replaceWith", what)
}

/// Equality `$lookup` joining `local_field` to `foreign_field` of collection `from`.
pub fn lookup_simple(
    from: &str,
    local_field: &str,
    foreign_field: &str,
    as_name: &str,
) -> Document {
    let spec = doc! {
        "from": from,
        "localField": local_field,
        "foreignField": foreign_field,
        "as": as_name
    };
    stage("$lookup", spec)
}

/// `$lookup` running `pipeline` on collection `from`, with `let_vars` visible as `$$<name>`.
pub fn lookup_pipeline(
    from: &str,
    let_vars: impl Into<Bson>,
    as_name: &str,
    pipeline: impl Into<Bson>,
) -> Document {
    let let_vars: Bson = let_vars.into();
    let pipeline: Bson = pipeline.into();
    stage("$lookup", doc! { "from": from, "let": let_vars, "as": as_name, "pipeline": pipeline })
}

pub fn group(fields: impl Into<Bson>) -> Document {
    stage("$group", fields)
}

/// `$facet` running each named sub-pipeline over the same input.
pub fn facet(fields: impl Into<Bson>) -> Document {
    stage("$facet", fields)
}

/// `$count` writing the number of input documents to `field`.
pub fn count(field: &str) -> Document {
    stage("$count", field)
}
