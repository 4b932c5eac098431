//! Trace output of the composite builders. Messages go to the `log` facade under
//! [`TRACE_TARGET`] and, while a [`TraceCapture`] is alive on the current thread, into that
//! capture as well.

use std::cell::RefCell;

#[doc(hidden)]
pub use log;

/// Log target used by `trace_builder!`.
pub const TRACE_TARGET: &str = "bson_pipeline::builder";

thread_local! {
    static CAPTURED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Collects builder traces emitted on the current thread until dropped.
#[must_use = "capturing stops when the value is dropped"]
pub struct TraceCapture(());

impl TraceCapture {
    pub fn start() -> Self {
        CAPTURED.with(|c| c.replace(Some(Vec::new())));
        Self(())
    }

    /// Messages captured since the last call, oldest first.
    pub fn take(&self) -> Vec<String> {
        CAPTURED.with(|c| c.borrow_mut().as_mut().map(std::mem::take).unwrap_or_default())
    }
}

impl Drop for TraceCapture {
    fn drop(&mut self) {
        CAPTURED.with(|c| c.replace(None));
    }
}

#[doc(hidden)]
pub fn record(msg: String) {
    log::trace!(target: TRACE_TARGET, "{msg}");
    CAPTURED.with(|c| {
        if let Some(buf) = c.borrow_mut().as_mut() {
            buf.push(msg);
        }
    });
}

/// Emit a builder trace message.
#[macro_export]
macro_rules! trace_builder {
    ($($arg:tt)*) => {
        $crate::devlog::record(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{
        SearchField, optional_paging_stage, search_filter_expr_stage, search_filter_stage,
    };

    #[test]
    fn search_filters_report_field_count_and_pattern() {
        let capture = TraceCapture::start();
        let _ = search_filter_stage(&["name", "os"], &["a.b"]);
        let _ = search_filter_expr_stage(&[SearchField::Array("tags".into())], &["x"]);
        let got = capture.take();
        assert_eq!(got.len(), 2);
        assert!(got[0].contains("2 field(s)"), "{got:?}");
        assert!(got[0].contains(r#""a\\.b""#), "{got:?}");
        assert!(got[1].starts_with("search expr filter: 1 field(s)"), "{got:?}");
    }

    #[test]
    fn absent_paging_emits_nothing() {
        let capture = TraceCapture::start();
        assert!(optional_paging_stage(None, Some(10)).is_none());
        assert!(capture.take().is_empty());
        let _ = optional_paging_stage(Some(1), Some(10));
        assert_eq!(capture.take(), vec!["paging stage: page=1 size=10 offset=10".to_string()]);
    }

    #[test]
    fn nothing_is_kept_once_capture_ends() {
        drop(TraceCapture::start());
        let _ = optional_paging_stage(Some(0), Some(5));
        let capture = TraceCapture::start();
        assert!(capture.take().is_empty());
    }
}
