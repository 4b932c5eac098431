use bson::{Bson, Document};

use crate::errors::{PipelineError, Result};

/// `orig` with every key of `extension` inserted when `extend` is true, otherwise `orig` as is.
/// Keys already present in `orig` are overwritten in place.
pub fn optional_extension(extend: bool, mut orig: Document, extension: Document) -> Document {
    if extend {
        for (k, v) in extension {
            orig.insert(k, v);
        }
    }
    orig
}

/// Unwrap a value that must be a document, such as a stage or a filter produced by the
/// expression builders.
///
/// # Errors
/// Returns [`PipelineError::NotADocument`] naming the element type when `value` is not a document.
pub fn into_document(value: Bson) -> Result<Document> {
    match value {
        Bson::Document(d) => Ok(d),
        other => Err(PipelineError::NotADocument(format!("{:?}", other.element_type()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    #[test]
    fn extension_applied_only_when_requested() {
        let orig = doc! { "a": 1, "b": 2 };
        let ext = doc! { "b": 3, "c": 4 };
        assert_eq!(optional_extension(false, orig.clone(), ext.clone()), doc! { "a": 1, "b": 2 });
        assert_eq!(optional_extension(true, orig, ext), doc! { "a": 1, "b": 3, "c": 4 });
    }

    #[test]
    fn into_document_rejects_scalars() {
        assert_eq!(into_document(Bson::Document(doc! { "x": 1 })).unwrap(), doc! { "x": 1 });
        let err = into_document(Bson::Int32(7)).unwrap_err();
        assert!(matches!(err, PipelineError::NotADocument(ref t) if t.contains("Int32")));
    }
}
