//! In-page script sources injected by the harness.
//!
//! Kept as reviewable functions rather than inline strings at call sites.
//! The coverage snippets reference the host function registered by
//! [`CoverageCollector`](crate::CoverageCollector) under
//! [`COVERAGE_FUNCTION`](crate::coverage::COVERAGE_FUNCTION).

use crate::coverage::COVERAGE_FUNCTION;

/// Init script registering a page-unload hook that reports the page's live
/// coverage map to the host sink.
pub fn coverage_unload_hook_js() -> String {
	format!(
		r#"() => {{
			window.addEventListener('beforeunload', () =>
				window.{COVERAGE_FUNCTION}(JSON.stringify(window.__coverage__))
			);
		}}"#
	)
}

/// Expression re-flushing a page's coverage map through the host sink.
///
/// Evaluated at teardown in every page still open, covering pages that
/// never fired an unload event during the test.
pub fn coverage_flush_js() -> String {
	format!("window.{COVERAGE_FUNCTION}(JSON.stringify(window.__coverage__))")
}

/// Expression resolving once all animations within the selected element and
/// its subtree have finished. Useful when verifying that css transitions
/// have completed.
pub fn animations_settled_js(selector: &str) -> String {
	let escaped = escape_selector(selector);
	format!(
		r#"Promise.all(
			document.querySelector('{escaped}')
				.getAnimations({{ subtree: true }})
				.map((animation) => animation.finished)
		).then(() => 'settled')"#
	)
}

pub fn escape_selector(selector: &str) -> String {
	selector.replace('\\', "\\\\").replace('\'', "\\'")
}
