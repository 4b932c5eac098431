//! Query-language field conditions, used as `doc! { field: condition }` inside `$match` or a
//! driver `find` filter.

use bson::{Bson, doc};

use crate::expr::{list, op};

/// `{ $lt: value }`
pub fn less_than(value: impl Into<Bson>) -> Bson {
    op("$lt", value)
}

/// `{ $lte: value }`
pub fn less_equal_than(value: impl Into<Bson>) -> Bson {
    op("$lte", value)
}

pub fn greater_than(value: impl Into<Bson>) -> Bson {
    op("$gt", value)
}

pub fn greater_equal_than(value: impl Into<Bson>) -> Bson {
    op("$gte", value)
}

pub fn not_equal_to(value: impl Into<Bson>) -> Bson {
    op("$ne", value)
}

pub fn in_values<I, T>(values: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$in", list(values))
}

pub fn not_in_values<I, T>(values: I) -> Bson
where
    I: IntoIterator<Item = T>,
    T: Into<Bson>,
{
    op("$nin", list(values))
}

pub fn exists(exists: bool) -> Bson {
    op("$exists", exists)
}

/// `{ $regex: pattern, $options: options }`; the pattern is passed through unescaped.
pub fn regex(pattern: &str, options: &str) -> Bson {
    Bson::Document(doc! { "$regex": pattern, "$options": options })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_conditions() {
        assert_eq!(less_than(10), Bson::Document(doc! { "$lt": 10 }));
        assert_eq!(less_equal_than("2020-01-01"), Bson::Document(doc! { "$lte": "2020-01-01" }));
        assert_eq!(greater_than(0), Bson::Document(doc! { "$gt": 0 }));
        assert_eq!(greater_equal_than(1.5), Bson::Document(doc! { "$gte": 1.5 }));
    }

    #[test]
    fn inequality_and_regex_conditions() {
        assert_eq!(not_equal_to(Bson::Null), Bson::Document(doc! { "$ne": null }));
        assert_eq!(
            regex("^srv-", "i"),
            Bson::Document(doc! { "$regex": "^srv-", "$options": "i" })
        );
    }

    #[test]
    fn membership_conditions() {
        assert_eq!(in_values(["a", "b"]), Bson::Document(doc! { "$in": ["a", "b"] }));
        assert_eq!(not_in_values(Vec::<i32>::new()), Bson::Document(doc! { "$nin": [] }));
        assert_eq!(exists(false), Bson::Document(doc! { "$exists": false }));
    }
}
