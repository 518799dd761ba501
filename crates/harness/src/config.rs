use std::path::PathBuf;

/// Default coverage artifact directory, relative to the working directory.
pub const DEFAULT_COVERAGE_DIR: &str = ".nyc_output";

/// Default remote debugging endpoint for remote execution groups.
pub const DEFAULT_REMOTE_ENDPOINT: &str = "ws://localhost:3003";

/// Default pattern matched against execution group names to select remote
/// execution.
pub const DEFAULT_REMOTE_GROUP_PATTERN: &str = "browserless";

/// Fully owned harness configuration.
///
/// This type is the stable handoff between the test runner's setup code and
/// the instrumentation internals. It is evaluated once per session; the
/// resulting decorations never re-read it mid-session.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
	/// Directory coverage artifacts are written to. Created recursively on
	/// session instrumentation if absent.
	pub coverage_dir: PathBuf,
	/// Remote debugging endpoint used when a group routes remote.
	pub remote_endpoint: String,
	/// Pattern matched against the active execution group's name; matching
	/// groups acquire their browser over the remote endpoint.
	pub remote_group_pattern: String,
}

impl HarnessConfig {
	/// Creates a baseline config with default instrumentation behavior.
	pub fn new() -> Self {
		Self {
			coverage_dir: PathBuf::from(DEFAULT_COVERAGE_DIR),
			remote_endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
			remote_group_pattern: DEFAULT_REMOTE_GROUP_PATTERN.to_string(),
		}
	}
}

impl Default for HarnessConfig {
	fn default() -> Self {
		Self::new()
	}
}
