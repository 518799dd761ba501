//! The capability set the harness decorates, expressed as traits.

use std::sync::Arc;

use async_trait::async_trait;

use crate::console::ConsoleMessage;
use crate::error::Result;
use crate::subscription::Subscription;

/// Callback invoked for each console event a page emits.
pub type ConsoleHandler = Box<dyn Fn(ConsoleMessage) + Send + Sync>;

/// Host-side function callable from in-page script.
///
/// The argument is the single string the page passed, or `None` when the
/// call site passed `undefined` (e.g. serializing a missing global).
pub type HostFunction = Arc<dyn Fn(Option<String>) + Send + Sync>;

/// A browser tab within a [`BrowserContext`].
#[async_trait]
pub trait Page: Send + Sync {
	/// Registers a console-event callback.
	///
	/// Events are delivered in emission order. Dropping the returned
	/// [`Subscription`] detaches the handler.
	fn on_console(&self, handler: ConsoleHandler) -> Subscription;

	/// Evaluates a JavaScript expression in the page and returns its
	/// stringified result.
	async fn evaluate(&self, expression: &str) -> Result<String>;
}

/// An isolated browsing session owning zero or more pages.
#[async_trait]
pub trait BrowserContext: Send + Sync {
	type Page: Page;

	/// Installs a script evaluated in every page subsequently opened in
	/// this context, before any of the page's own scripts run.
	async fn add_init_script(&self, source: &str) -> Result<()>;

	/// Exposes `function` as `window.<name>(arg)` in every page of this
	/// context.
	async fn expose_function(&self, name: &str, function: HostFunction) -> Result<()>;

	/// Returns the pages currently open in this context.
	fn pages(&self) -> Vec<Self::Page>;
}

/// Acquires browser handles over the remote debugging protocol.
#[async_trait]
pub trait RemoteConnector: Send + Sync {
	type Browser: Send;

	/// Connects to an already-running browser at `endpoint`.
	async fn connect_over_cdp(&self, endpoint: &str) -> Result<Self::Browser>;
}
