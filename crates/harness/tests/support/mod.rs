//! In-memory fakes of the automation seam.
//!
//! `FakeContext`/`FakePage` emulate the slice of client behavior the
//! harness decorates: init-script installation, host-function exposure,
//! console emission, and evaluation of the coverage flush expression
//! (which routes the page's coverage payload into the exposed sink, the
//! way a real client bridges `window.<fn>()` back to the host).

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use gantry_automation::{
	BrowserContext, ConsoleHandler, ConsoleMessage, Error, HostFunction, Page, RemoteConnector, Result, Subscription,
};
use parking_lot::Mutex;

type HostFunctions = Arc<Mutex<HashMap<String, HostFunction>>>;

#[derive(Clone)]
pub struct FakePage {
	/// Serialized coverage map this page would report, if any.
	coverage: Option<String>,
	handlers: Arc<Mutex<Vec<ConsoleHandler>>>,
	host_functions: HostFunctions,
	evaluations: Arc<Mutex<Vec<String>>>,
}

impl FakePage {
	fn new(coverage: Option<String>, host_functions: HostFunctions) -> Self {
		Self {
			coverage,
			handlers: Arc::new(Mutex::new(Vec::new())),
			host_functions,
			evaluations: Arc::new(Mutex::new(Vec::new())),
		}
	}

	/// Delivers a console message to every registered handler, in order.
	pub fn emit_console(&self, msg: ConsoleMessage) {
		for handler in self.handlers.lock().iter() {
			handler(msg.clone());
		}
	}

	/// Simulates the page unloading: the installed unload hook reports the
	/// page's coverage through the host sink.
	pub fn fire_unload(&self) {
		self.report_coverage();
	}

	pub fn evaluations(&self) -> Vec<String> {
		self.evaluations.lock().clone()
	}

	fn report_coverage(&self) {
		let sink = self
			.host_functions
			.lock()
			.get(gantry::coverage::COVERAGE_FUNCTION)
			.cloned()
			.expect("coverage sink not registered");
		sink(self.coverage.clone());
	}
}

#[async_trait]
impl Page for FakePage {
	fn on_console(&self, handler: ConsoleHandler) -> Subscription {
		self.handlers.lock().push(handler);
		Subscription::detached()
	}

	async fn evaluate(&self, expression: &str) -> Result<String> {
		self.evaluations.lock().push(expression.to_string());
		if expression == gantry::js::coverage_flush_js() {
			self.report_coverage();
			return Ok("undefined".to_string());
		}
		Ok("settled".to_string())
	}
}

#[derive(Default)]
pub struct FakeContext {
	pages: Mutex<Vec<FakePage>>,
	init_scripts: Mutex<Vec<String>>,
	host_functions: HostFunctions,
}

impl FakeContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens a page that would report the given coverage payload.
	pub fn open_page(&self, coverage: Option<&str>) -> FakePage {
		let page = FakePage::new(coverage.map(str::to_string), Arc::clone(&self.host_functions));
		self.pages.lock().push(page.clone());
		page
	}

	pub fn init_scripts(&self) -> Vec<String> {
		self.init_scripts.lock().clone()
	}
}

#[async_trait]
impl BrowserContext for FakeContext {
	type Page = FakePage;

	async fn add_init_script(&self, source: &str) -> Result<()> {
		self.init_scripts.lock().push(source.to_string());
		Ok(())
	}

	async fn expose_function(&self, name: &str, function: HostFunction) -> Result<()> {
		self.host_functions.lock().insert(name.to_string(), function);
		Ok(())
	}

	fn pages(&self) -> Vec<FakePage> {
		self.pages.lock().clone()
	}
}

/// Marker browser handle with an observable identity.
#[derive(Debug, PartialEq, Eq)]
pub struct FakeBrowser {
	pub label: String,
}

pub struct FakeConnector {
	pub refuse: bool,
}

#[async_trait]
impl RemoteConnector for FakeConnector {
	type Browser = FakeBrowser;

	async fn connect_over_cdp(&self, endpoint: &str) -> Result<FakeBrowser> {
		if self.refuse {
			return Err(Error::Connect {
				endpoint: endpoint.to_string(),
				message: "connection refused".to_string(),
			});
		}
		Ok(FakeBrowser {
			label: format!("remote:{endpoint}"),
		})
	}
}
