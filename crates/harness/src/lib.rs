//! gantry: session instrumentation for browser e2e tests.
//!
//! This crate decorates the browser-automation primitives a test runs
//! against - without altering test-author-facing semantics - to provide:
//!
//! - **Coverage capture**: every page reports its serialized coverage map to
//!   a host-exposed sink on unload, and teardown re-flushes any page that is
//!   still open. Non-empty payloads land as uniquely named JSON artifacts in
//!   the configured output directory.
//! - **Console assertions**: every console message a page emits is captured
//!   in arrival order and soft-checked after the test body - an `error`
//!   level message records a failure without aborting the remaining checks.
//! - **Browser routing**: execution groups whose name matches the configured
//!   pattern acquire their browser over the remote debugging protocol
//!   instead of the locally launched instance.
//!
//! The decorated primitives are the traits of [`gantry_automation`]; real
//! backends and the scenario scripts that drive them live elsewhere.
//!
//! # Example
//!
//! ```ignore
//! use gantry::{HarnessConfig, InstrumentedSession, SoftAssertions};
//!
//! let config = HarnessConfig::new();
//! let session = InstrumentedSession::instrument(context, &config).await?;
//! let page = session.instrument_page(session.context().pages().remove(0));
//!
//! // ... test body drives the page ...
//!
//! let mut soft = SoftAssertions::new();
//! page.finish(&mut soft);
//! session.teardown().await?;
//! soft.into_result()?;
//! ```

pub mod animations;
pub mod config;
pub mod console;
pub mod coverage;
pub mod error;
pub mod js;
pub mod logging;
pub mod retry;
pub mod routing;
pub mod session;

pub use config::HarnessConfig;
pub use console::{ConsoleSink, SoftAssertions, format_message};
pub use coverage::CoverageCollector;
pub use error::{HarnessError, Result};
pub use retry::{DEFAULT_MAX_ATTEMPTS, retry_until};
pub use routing::{BrowserRoute, ExecutionGroup, acquire_browser, route_for_group};
pub use session::{InstrumentedPage, InstrumentedSession};
