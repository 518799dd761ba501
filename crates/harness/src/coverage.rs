//! Coverage artifact capture for instrumented contexts.
//!
//! Pages report their serialized coverage map through a host-exposed sink on
//! two triggers: a `beforeunload` hook installed into every page of the
//! context, and an explicit re-flush of still-open pages at teardown. Each
//! non-empty payload is written once, to a uniquely named file, so
//! concurrent pages never collide. The artifact content is owned by an
//! external coverage tool and treated as an opaque blob here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use gantry_automation::{BrowserContext, Page};
use parking_lot::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{HarnessError, Result};
use crate::js;

/// Name of the host function pages call with their serialized coverage map.
pub const COVERAGE_FUNCTION: &str = "collectIstanbulCoverage";

/// Filename prefix of written coverage artifacts.
pub const ARTIFACT_PREFIX: &str = "playwright_coverage_";

type WriteError = (PathBuf, std::io::Error);

/// Context decoration persisting per-page coverage payloads.
///
/// Created by [`install`](Self::install), which must complete before the
/// context is handed to the test body. The sink runs on the automation
/// client's event callbacks and cannot fail the test directly; the first
/// write failure is recorded and surfaced by [`take_write_error`]
/// (called from session teardown).
///
/// [`take_write_error`]: Self::take_write_error
pub struct CoverageCollector {
	dir: PathBuf,
	write_error: Arc<Mutex<Option<WriteError>>>,
}

impl CoverageCollector {
	/// Decorates `context` with coverage capture, writing artifacts to `dir`.
	///
	/// Ensures `dir` exists (recursively, idempotently) before any page can
	/// dispatch a flush, installs the unload hook into every future page,
	/// and registers the host sink. Setup failures are fatal.
	pub async fn install<C: BrowserContext>(context: &C, dir: &Path) -> Result<Self> {
		tokio::fs::create_dir_all(dir).await.map_err(|source| HarnessError::CoverageDir {
			path: dir.to_path_buf(),
			source,
		})?;

		context.add_init_script(&js::coverage_unload_hook_js()).await?;

		let write_error = Arc::new(Mutex::new(None));
		let sink_dir = dir.to_path_buf();
		let sink_error = Arc::clone(&write_error);
		context
			.expose_function(
				COVERAGE_FUNCTION,
				Arc::new(move |payload| {
					if let Err(err) = write_artifact(&sink_dir, payload.as_deref()) {
						sink_error.lock().get_or_insert(err);
					}
				}),
			)
			.await?;

		debug!(target: "gantry.coverage", dir = %dir.display(), "coverage capture installed");

		Ok(Self {
			dir: dir.to_path_buf(),
			write_error,
		})
	}

	/// Returns the artifact output directory.
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Re-flushes coverage for every page still open in `context`.
	///
	/// Safety net for pages that never fired an unload event during the
	/// test; pages that did unload have already reported through the hook.
	pub async fn flush_open_pages<C: BrowserContext>(&self, context: &C) -> Result<()> {
		for page in context.pages() {
			page.evaluate(&js::coverage_flush_js()).await?;
		}
		Ok(())
	}

	/// Surfaces the first artifact-write failure recorded by the sink.
	pub fn take_write_error(&self) -> Result<()> {
		match self.write_error.lock().take() {
			Some((path, source)) => Err(HarnessError::CoverageWrite { path, source }),
			None => Ok(()),
		}
	}
}

/// Persists one coverage payload, skipping empty captures.
///
/// A page with no instrumented code serializes its coverage global to
/// `undefined` (or an empty string through some clients); those payloads
/// produce no file.
fn write_artifact(dir: &Path, payload: Option<&str>) -> std::result::Result<(), WriteError> {
	let Some(payload) = payload else { return Ok(()) };
	if payload.is_empty() || payload == "undefined" || payload == "null" {
		return Ok(());
	}

	let path = dir.join(format!("{ARTIFACT_PREFIX}{}.json", Uuid::new_v4()));
	match std::fs::write(&path, payload) {
		Ok(()) => {
			debug!(target: "gantry.coverage", path = %path.display(), bytes = payload.len(), "wrote coverage artifact");
			Ok(())
		}
		Err(err) => {
			warn!(target: "gantry.coverage", path = %path.display(), error = %err, "failed to write coverage artifact");
			Err((path, err))
		}
	}
}
