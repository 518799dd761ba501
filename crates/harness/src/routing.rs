//! Remote-vs-local browser routing keyed on the execution group.
//!
//! Some execution groups run their browser inside a headless-service
//! container reachable over the remote debugging protocol; everything else
//! uses the locally launched instance. The decision is made once per
//! session, at acquisition time, and never re-evaluated.

use gantry_automation::RemoteConnector;
use regex_lite::Regex;
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};

/// Named configuration bucket the active test runs under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionGroup {
	name: String,
}

impl ExecutionGroup {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

/// Where a session's browser handle comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowserRoute {
	/// Use the locally provided browser handle unchanged.
	Local,
	/// Connect over the remote debugging protocol.
	Remote { endpoint: String },
}

/// Decides the route for `group` against the configured pattern.
pub fn route_for_group(group: &ExecutionGroup, config: &HarnessConfig) -> Result<BrowserRoute> {
	let pattern = Regex::new(&config.remote_group_pattern).map_err(|err| HarnessError::GroupPattern {
		pattern: config.remote_group_pattern.clone(),
		message: err.to_string(),
	})?;

	let route = if pattern.is_match(group.name()) {
		BrowserRoute::Remote {
			endpoint: config.remote_endpoint.clone(),
		}
	} else {
		BrowserRoute::Local
	};
	debug!(target: "gantry", group = group.name(), route = ?route, "resolved browser route");
	Ok(route)
}

/// Acquires the browser handle for `group`.
///
/// Remote groups connect to the configured endpoint; connection failure is
/// fatal, with no fallback to the local browser. All other groups get the
/// provided `local` handle back unchanged.
pub async fn acquire_browser<C>(
	connector: &C,
	local: C::Browser,
	group: &ExecutionGroup,
	config: &HarnessConfig,
) -> Result<C::Browser>
where
	C: RemoteConnector,
{
	match route_for_group(group, config)? {
		BrowserRoute::Local => Ok(local),
		BrowserRoute::Remote { endpoint } => {
			info!(target: "gantry", group = group.name(), endpoint = %endpoint, "connecting to remote browser");
			connector
				.connect_over_cdp(&endpoint)
				.await
				.map_err(|source| HarnessError::RemoteConnect { endpoint, source })
		}
	}
}
