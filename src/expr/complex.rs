use bson::{Bson, doc};

use super::primitives::{
    array_elem_at, concat, cond, convert_errorable_nullable, equal, filter, greater, let_vars,
    reduce, regex_find, size,
};

/// `what` as a double, or `0` when it is null or cannot be converted.
pub fn convert_to_double_or_zero(what: impl Into<Bson>) -> Bson {
    convert_errorable_nullable(what, "double", 0, 0)
}

/// Join the strings of `list` with `sep`, without a leading separator.
pub fn join(list: impl Into<Bson>, sep: impl Into<Bson>) -> Bson {
    let sep: Bson = sep.into();
    reduce(
        list,
        "",
        concat([Bson::from("$$value"), cond(equal("$$value", ""), "", sep), Bson::from("$$this")]),
    )
}

/// `a` when `cmp_expr_a > cmp_expr_b`, otherwise `b`.
pub fn max_with_cmp_expr(
    cmp_expr_a: impl Into<Bson>,
    cmp_expr_b: impl Into<Bson>,
    a: impl Into<Bson>,
    b: impl Into<Bson>,
) -> Bson {
    cond(greater(cmp_expr_a, cmp_expr_b), a, b)
}

/// True when at least one element of `input` satisfies `cond`.
/// Inside `cond` the current element is `$$<item_name>`.
pub fn any(input: impl Into<Bson>, item_name: &str, cond: impl Into<Bson>) -> Bson {
    greater(size(filter(input, item_name, cond)), 0)
}

/// Capture group `capture_index` of the first match of `regex` in `input`, as a double
/// (`0` when there is no match).
pub fn get_capture_from_regex_match(
    input: impl Into<Bson>,
    regex: &str,
    options: &str,
    capture_index: i32,
) -> Bson {
    let found = regex_find(input, regex, options);
    let_vars(
        doc! { "match": found },
        convert_to_double_or_zero(array_elem_at("$$match.captures", capture_index)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_separator_on_first_element() {
        let got = join("$tags", ", ");
        let want = doc! {
            "$reduce": {
                "input": "$tags",
                "initialValue": "",
                "in": { "$concat": [
                    "$$value",
                    { "$cond": { "if": { "$eq": ["$$value", ""] }, "then": "", "else": ", " } },
                    "$$this"
                ] }
            }
        };
        assert_eq!(got, Bson::Document(want));
    }

    #[test]
    fn any_counts_filtered_elements() {
        let got = any("$items", "item", greater("$$item.qty", 3));
        let want = doc! {
            "$gt": [
                { "$size": { "$filter": {
                    "input": "$items",
                    "as": "item",
                    "cond": { "$gt": ["$$item.qty", 3] }
                } } },
                0
            ]
        };
        assert_eq!(got, Bson::Document(want));
    }

    #[test]
    fn capture_from_regex_match_converts_to_double() {
        let got = get_capture_from_regex_match("$version", r"(\d+)\.(\d+)", "", 1);
        let want = doc! {
            "$let": {
                "vars": { "match": { "$regexFind": {
                    "input": "$version",
                    "regex": r"(\d+)\.(\d+)",
                    "options": ""
                } } },
                "in": { "$convert": {
                    "input": { "$arrayElemAt": ["$$match.captures", 1] },
                    "to": "double",
                    "onError": 0,
                    "onNull": 0
                } }
            }
        };
        assert_eq!(got, Bson::Document(want));
    }

    #[test]
    fn max_with_cmp_expr_picks_by_comparison() {
        let got = max_with_cmp_expr("$a.rank", "$b.rank", "$a", "$b");
        assert_eq!(
            got,
            Bson::Document(doc! { "$cond": {
                "if": { "$gt": ["$a.rank", "$b.rank"] },
                "then": "$a",
                "else": "$b"
            } })
        );
    }
}
