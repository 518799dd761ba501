//! Session facade composing the instrumentation decorators.
//!
//! Decoration order follows the primitives' nesting: the context is
//! decorated once at session construction (coverage capture), each page is
//! decorated as the test acquires it (console capture), and teardown runs
//! in reverse - finish pages first, then tear the session down.

use gantry_automation::{BrowserContext, Page, Subscription};
use tracing::debug;
use uuid::Uuid;

use crate::config::HarnessConfig;
use crate::console::{ConsoleSink, SoftAssertions};
use crate::coverage::CoverageCollector;
use crate::error::Result;

/// One instrumented browser session bound to a single test execution.
///
/// Owns the context handle and the installed coverage decoration. Created
/// fully initialized by [`instrument`](Self::instrument); the
/// flush-on-teardown obligation is discharged by [`teardown`](Self::teardown),
/// which must run inside the test framework's guaranteed-cleanup phase.
pub struct InstrumentedSession<C: BrowserContext> {
	id: Uuid,
	context: C,
	coverage: CoverageCollector,
}

impl<C: BrowserContext> InstrumentedSession<C> {
	/// Decorates `context` and hands it back ready for the test body.
	///
	/// The coverage output directory exists, the unload hook is installed,
	/// and the host sink is registered before this returns.
	pub async fn instrument(context: C, config: &HarnessConfig) -> Result<Self> {
		let coverage = CoverageCollector::install(&context, &config.coverage_dir).await?;
		let id = Uuid::new_v4();
		debug!(target: "gantry", session = %id, "session instrumented");
		Ok(Self { id, context, coverage })
	}

	/// Unique identifier of this instrumentation instance.
	pub fn id(&self) -> Uuid {
		self.id
	}

	/// The decorated context handle.
	pub fn context(&self) -> &C {
		&self.context
	}

	/// Decorates a page of this session with console capture.
	pub fn instrument_page(&self, page: C::Page) -> InstrumentedPage<C::Page> {
		InstrumentedPage::new(page)
	}

	/// Completes the session's flush-on-teardown obligation.
	///
	/// Every page still open has its coverage re-flushed, then any artifact
	/// write failure recorded by the sink is surfaced. Pages should be
	/// [finished](InstrumentedPage::finish) before this runs.
	pub async fn teardown(self) -> Result<()> {
		self.coverage.flush_open_pages(&self.context).await?;
		self.coverage.take_write_error()?;
		debug!(target: "gantry", session = %self.id, "session torn down");
		Ok(())
	}
}

/// A page decorated with console capture for the duration of one test.
pub struct InstrumentedPage<P: Page> {
	page: P,
	sink: ConsoleSink,
	// RAII: keeps the console listener attached until finish/drop.
	_subscription: Subscription,
}

impl<P: Page> InstrumentedPage<P> {
	pub fn new(page: P) -> Self {
		let (sink, subscription) = ConsoleSink::attach(&page);
		Self {
			page,
			sink,
			_subscription: subscription,
		}
	}

	/// The decorated page handle.
	pub fn page(&self) -> &P {
		&self.page
	}

	/// Captured console traffic for this page.
	pub fn sink(&self) -> &ConsoleSink {
		&self.sink
	}

	/// Runs the post-test console sweep, recording soft failures for every
	/// `error`-level message, and releases the page.
	pub fn finish(self, soft: &mut SoftAssertions) -> P {
		self.sink.assert_no_errors(soft);
		self.page
	}
}
