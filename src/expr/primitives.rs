use bson::{Bson, Document, doc};

/// `{ name: arg }` as a value.
pub(crate) fn op(name: &str, arg: impl Into<Bson>) -> Bson {
    let mut d = Document::new();
    d.insert(name, arg);
    Bson::Document(d)
}

pub(crate) fn list<I, T>(items: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    Bson::Array(items.into_iter().map(Into::into).collect())
}

fn pair(a: impl Into<Bson>, b: impl Into<Bson>) -> Bson {
    Bson::Array(vec![a.into(), b.into()])
}

// --- arithmetic ---

/// `$add` over every operand.
pub fn add<I, T>(things: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$add", list(things))
}

pub fn multiply<I, T>(things: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$multiply", list(things))
}

/// `a - b`
pub fn subtract(a: impl Into<Bson>, b: impl Into<Bson>) -> Bson {
    op("$subtract", pair(a, b))
}

/// `a / b`
pub fn divide(a: impl Into<Bson>, b: impl Into<Bson>) -> Bson {
    op("$divide", pair(a, b))
}

pub fn floor(what: impl Into<Bson>) -> Bson {
    op("$floor", what)
}

/// Smallest of the operands (expression form, array argument).
pub fn min<I, T>(what: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$min", list(what))
}

/// Largest of the operands (expression form, array argument).
pub fn max<I, T>(what: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$max", list(what))
}

// --- logic and comparison ---

/// True when every condition is true.
pub fn and<I, T>(conds: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$and", list(conds))
}

/// True when any condition is true.
pub fn or<I, T>(conds: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$or", list(conds))
}

pub fn not(what: impl Into<Bson>) -> Bson {
    op("$not", Bson::Array(vec![what.into()]))
}

pub fn equal(a: impl Into<Bson>, b: impl Into<Bson>) -> Bson {
    op("$eq", pair(a, b))
}

pub fn not_equal(a: impl Into<Bson>, b: impl Into<Bson>) -> Bson {
    op("$ne", pair(a, b))
}

/// True when `a > b`.
pub fn greater(a: impl Into<Bson>, b: impl Into<Bson>) -> Bson {
    op("$gt", pair(a, b))
}

/// True when `a < b`.
pub fn less(a: impl Into<Bson>, b: impl Into<Bson>) -> Bson {
    op("$lt", pair(a, b))
}

/// True when `what` is an element of `array`.
pub fn in_array(what: impl Into<Bson>, array: impl Into<Bson>) -> Bson {
    op("$in", pair(what, array))
}

// --- strings ---

/// First match of `regex` in `input`; yields `{match, idx, captures}` or null.
pub fn regex_find(input: impl Into<Bson>, regex: &str, options: &str) -> Bson {
    let input: Bson = input.into();
    op("$regexFind", doc! { "input": input, "regex": regex, "options": options })
}

pub fn regex_match(input: impl Into<Bson>, regex: &str, options: &str) -> Bson {
    let input: Bson = input.into();
    op("$regexMatch", doc! { "input": input, "regex": regex, "options": options })
}

pub fn concat<I, T>(what: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$concat", list(what))
}

pub fn to_string(what: impl Into<Bson>) -> Bson {
    op("$toString", what)
}

// --- sets and arrays ---

/// Set containing every element of every operand.
pub fn set_union<I, T>(what: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$setUnion", list(what))
}

/// Apply `in_expr` to every element of `input`, bound as `$$<as_name>`.
pub fn map(input: impl Into<Bson>, as_name: &str, in_expr: impl Into<Bson>) -> Bson {
    let input: Bson = input.into();
    let in_expr: Bson = in_expr.into();
    op("$map", doc! { "input": input, "as": as_name, "in": in_expr })
}

/// Keep the elements of `input` for which `cond` holds, bound as `$$<as_name>`.
pub fn filter(input: impl Into<Bson>, as_name: &str, cond: impl Into<Bson>) -> Bson {
    let input: Bson = input.into();
    let cond: Bson = cond.into();
    op("$filter", doc! { "input": input, "as": as_name, "cond": cond })
}

/// Fold `input` into one value; `in_expr` sees `$$value` and `$$this`.
pub fn reduce(
    input: impl Into<Bson>,
    initial_value: impl Into<Bson>,
    in_expr: impl Into<Bson>,
) -> Bson {
    let input: Bson = input.into();
    let initial_value: Bson = initial_value.into();
    let in_expr: Bson = in_expr.into();
    op("$reduce", doc! { "input": input, "initialValue": initial_value, "in": in_expr })
}

pub fn is_array(what: impl Into<Bson>) -> Bson {
    op("$isArray", Bson::Array(vec![what.into()]))
}

pub fn size(input: impl Into<Bson>) -> Bson {
    op("$size", input)
}

pub fn array_elem_at(input: impl Into<Bson>, index: impl Into<Bson>) -> Bson {
    op("$arrayElemAt", pair(input, index))
}

// --- objects and conditionals ---

pub fn merge_objects<I, T>(what: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$mergeObjects", list(what))
}

/// `what` unless it is null or missing, then `alt_value`.
pub fn if_null(what: impl Into<Bson>, alt_value: impl Into<Bson>) -> Bson {
    op("$ifNull", pair(what, alt_value))
}

pub fn cond(cond: impl Into<Bson>, if_true: impl Into<Bson>, if_false: impl Into<Bson>) -> Bson {
    let cond: Bson = cond.into();
    let if_true: Bson = if_true.into();
    let if_false: Bson = if_false.into();
    op("$cond", doc! { "if": cond, "then": if_true, "else": if_false })
}

/// Bind `vars` and evaluate `in_expr` with them in scope as `$$<name>`.
pub fn let_vars(vars: impl Into<Bson>, in_expr: impl Into<Bson>) -> Bson {
    let vars: Bson = vars.into();
    let in_expr: Bson = in_expr.into();
    op("$let", doc! { "vars": vars, "in": in_expr })
}

// --- dates ---

pub fn date_from_string(what: impl Into<Bson>, format: &str) -> Bson {
    let what: Bson = what.into();
    op("$dateFromString", doc! { "dateString": what, "format": format })
}

pub fn date_from_nullable_string(
    what: impl Into<Bson>,
    format: &str,
    on_null: impl Into<Bson>,
) -> Bson {
    let what: Bson = what.into();
    let on_null: Bson = on_null.into();
    op("$dateFromString", doc! { "dateString": what, "format": format, "onNull": on_null })
}

// --- conversion ---

pub fn convert(input: impl Into<Bson>, to: &str) -> Bson {
    let input: Bson = input.into();
    op("$convert", doc! { "input": input, "to": to })
}

pub fn convert_errorable(input: impl Into<Bson>, to: &str, on_error: impl Into<Bson>) -> Bson {
    let input: Bson = input.into();
    let on_error: Bson = on_error.into();
    op("$convert", doc! { "input": input, "to": to, "onError": on_error })
}

pub fn convert_nullable(input: impl Into<Bson>, to: &str, on_null: impl Into<Bson>) -> Bson {
    let input: Bson = input.into();
    let on_null: Bson = on_null.into();
    op("$convert", doc! { "input": input, "to": to, "onNull": on_null })
}

pub fn convert_errorable_nullable(
    input: impl Into<Bson>,
    to: &str,
    on_error: impl Into<Bson>,
    on_null: impl Into<Bson>,
) -> Bson {
    let input: Bson = input.into();
    let on_error: Bson = on_error.into();
    let on_null: Bson = on_null.into();
    op("$convert", doc! { "input": input, "to": to, "onError": on_error, "onNull": on_null })
}

pub fn to_double(input: impl Into<Bson>) -> Bson {
    op("$toDouble", input)
}

// --- accumulators ---

/// `$sum` accumulator, e.g. `sum(1)` to count documents in a group.
pub fn sum(what: impl Into<Bson>) -> Bson {
    op("$sum", what)
}

/// `$max` accumulator over a single expression (unlike [`max`]).
pub fn max_aggr(what: impl Into<Bson>) -> Bson {
    op("$max", what)
}
