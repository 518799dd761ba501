//! Console event records emitted by driven pages.

use serde::{Deserialize, Serialize};

/// Severity/type tag of a console event.
///
/// The wire tag set is open-ended (engines add their own), so unknown tags
/// round-trip through [`ConsoleKind::Other`] rather than failing capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConsoleKind {
	Log,
	Debug,
	Info,
	Warning,
	Error,
	Trace,
	Other(String),
}

impl ConsoleKind {
	/// Returns the wire tag for this kind.
	pub fn as_str(&self) -> &str {
		match self {
			ConsoleKind::Log => "log",
			ConsoleKind::Debug => "debug",
			ConsoleKind::Info => "info",
			ConsoleKind::Warning => "warning",
			ConsoleKind::Error => "error",
			ConsoleKind::Trace => "trace",
			ConsoleKind::Other(tag) => tag,
		}
	}

	/// Returns true for the `error` severity level.
	pub fn is_error(&self) -> bool {
		matches!(self, ConsoleKind::Error)
	}
}

impl From<String> for ConsoleKind {
	fn from(tag: String) -> Self {
		match tag.as_str() {
			"log" => ConsoleKind::Log,
			"debug" => ConsoleKind::Debug,
			"info" => ConsoleKind::Info,
			"warning" => ConsoleKind::Warning,
			"error" => ConsoleKind::Error,
			"trace" => ConsoleKind::Trace,
			_ => ConsoleKind::Other(tag),
		}
	}
}

impl From<ConsoleKind> for String {
	fn from(kind: ConsoleKind) -> Self {
		kind.as_str().to_string()
	}
}

impl std::fmt::Display for ConsoleKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Source position reported with a console event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
	pub url: String,
	pub line_number: u32,
	pub column_number: u32,
}

/// One console event observed on a page.
///
/// Records are immutable after capture; the harness accumulates them in
/// arrival order and consumes them once the test body has finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleMessage {
	#[serde(rename = "type")]
	pub kind: ConsoleKind,
	pub text: String,
	#[serde(default)]
	pub location: SourceLocation,
}
