//! Console capture and post-test assertion.
//!
//! A [`ConsoleSink`] is attached to a page for the duration of one test and
//! appends every console message the page emits, in arrival order. After
//! the test body completes, [`ConsoleSink::assert_no_errors`] sweeps the
//! captured sequence and records a soft failure for every `error`-level
//! message; [`SoftAssertions::into_result`] converts the record into a
//! single fatal error at the very end.

use std::sync::Arc;

use gantry_automation::{ConsoleMessage, Page, Subscription};
use parking_lot::Mutex;
use tracing::trace;

use crate::error::{HarnessError, Result};

/// Formats a console message as `[type] text at (url line:column)`.
pub fn format_message(msg: &ConsoleMessage) -> String {
	format!(
		"[{}] {} at ({} {}:{})",
		msg.kind, msg.text, msg.location.url, msg.location.line_number, msg.location.column_number
	)
}

/// Append-only sink of console events scoped to one page.
#[derive(Clone, Default)]
pub struct ConsoleSink {
	messages: Arc<Mutex<Vec<ConsoleMessage>>>,
}

impl ConsoleSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches a fresh sink to `page`.
	///
	/// The returned [`Subscription`] keeps the listener alive; dropping it
	/// detaches capture.
	pub fn attach<P: Page>(page: &P) -> (Self, Subscription) {
		let sink = Self::new();
		let inner = sink.clone();
		let subscription = page.on_console(Box::new(move |msg| inner.push(msg)));
		(sink, subscription)
	}

	fn push(&self, msg: ConsoleMessage) {
		trace!(target: "gantry.console", kind = %msg.kind, text = %msg.text, "captured console message");
		self.messages.lock().push(msg);
	}

	pub fn len(&self) -> usize {
		self.messages.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.messages.lock().is_empty()
	}

	/// Returns a snapshot of the captured messages, in arrival order.
	pub fn messages(&self) -> Vec<ConsoleMessage> {
		self.messages.lock().clone()
	}

	/// Drains the captured messages, in arrival order.
	pub fn drain(&self) -> Vec<ConsoleMessage> {
		std::mem::take(&mut *self.messages.lock())
	}

	/// Soft-checks every captured message, in order, against the `error`
	/// severity level. No reordering, no deduplication.
	pub fn assert_no_errors(&self, soft: &mut SoftAssertions) {
		for msg in self.drain() {
			soft.check(!msg.kind.is_error(), format!("Console error detected: {}", format_message(&msg)));
		}
	}
}

/// Records non-fatal check failures for reporting at test end.
///
/// A failed check never halts execution; all failures surface together via
/// [`into_result`](Self::into_result).
#[derive(Debug, Default)]
pub struct SoftAssertions {
	failures: Vec<String>,
}

impl SoftAssertions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `message` as a failure when `ok` is false.
	pub fn check(&mut self, ok: bool, message: impl Into<String>) {
		if !ok {
			self.failures.push(message.into());
		}
	}

	pub fn failures(&self) -> &[String] {
		&self.failures
	}

	pub fn is_empty(&self) -> bool {
		self.failures.is_empty()
	}

	/// Ok when no failures were recorded, otherwise one error listing every
	/// failure in the order it was recorded.
	pub fn into_result(self) -> Result<()> {
		if self.failures.is_empty() {
			return Ok(());
		}
		Err(HarnessError::SoftAssertions {
			count: self.failures.len(),
			report: self.failures.join("\n"),
		})
	}
}

#[cfg(test)]
mod tests {
	use gantry_automation::{ConsoleKind, SourceLocation};

	use super::*;

	fn message(kind: ConsoleKind, text: &str) -> ConsoleMessage {
		ConsoleMessage {
			kind,
			text: text.to_string(),
			location: SourceLocation {
				url: "http://x/app.js".into(),
				line_number: 10,
				column_number: 5,
			},
		}
	}

	#[test]
	fn format_matches_fixture_shape() {
		let msg = message(ConsoleKind::Error, "boom");
		assert_eq!(format_message(&msg), "[error] boom at (http://x/app.js 10:5)");
	}

	#[test]
	fn sink_preserves_arrival_order() {
		let sink = ConsoleSink::new();
		sink.push(message(ConsoleKind::Log, "first"));
		sink.push(message(ConsoleKind::Warning, "second"));
		sink.push(message(ConsoleKind::Log, "third"));

		let texts: Vec<_> = sink.drain().into_iter().map(|m| m.text).collect();
		assert_eq!(texts, ["first", "second", "third"]);
		assert!(sink.is_empty());
	}

	#[test]
	fn error_messages_record_soft_failures_in_order() {
		let sink = ConsoleSink::new();
		sink.push(message(ConsoleKind::Error, "boom"));
		sink.push(message(ConsoleKind::Log, "fine"));
		sink.push(message(ConsoleKind::Error, "bust"));

		let mut soft = SoftAssertions::new();
		sink.assert_no_errors(&mut soft);

		assert_eq!(
			soft.failures(),
			[
				"Console error detected: [error] boom at (http://x/app.js 10:5)",
				"Console error detected: [error] bust at (http://x/app.js 10:5)",
			]
		);
	}

	#[test]
	fn clean_sweep_yields_ok() {
		let sink = ConsoleSink::new();
		sink.push(message(ConsoleKind::Warning, "only a warning"));

		let mut soft = SoftAssertions::new();
		sink.assert_no_errors(&mut soft);
		assert!(soft.into_result().is_ok());
	}

	#[test]
	fn soft_failures_aggregate_into_one_error() {
		let mut soft = SoftAssertions::new();
		soft.check(false, "first failure");
		soft.check(true, "not recorded");
		soft.check(false, "second failure");

		let err = soft.into_result().unwrap_err();
		let rendered = err.to_string();
		assert!(rendered.starts_with("2 soft assertion(s) failed:"));
		assert!(rendered.contains("first failure\nsecond failure"));
	}
}
