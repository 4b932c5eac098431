//! Aggregation operator expressions. Every builder returns a [`bson::Bson`] so results nest
//! anywhere an expression is accepted.

mod complex;
mod primitives;

pub(crate) use primitives::{list, op};

pub use complex::{
    any, convert_to_double_or_zero, get_capture_from_regex_match, join, max_with_cmp_expr,
};
pub use primitives::{
    add, and, array_elem_at, concat, cond, convert, convert_errorable, convert_errorable_nullable,
    convert_nullable, date_from_nullable_string, date_from_string, divide, equal, filter, floor,
    greater, if_null, in_array, is_array, less, let_vars, map, max, max_aggr, merge_objects, min,
    multiply, not, not_equal, or, reduce, regex_find, regex_match, set_union, size, subtract, sum,
    to_double, to_string,
};
