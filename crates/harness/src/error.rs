use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, Error)]
pub enum HarnessError {
	#[error("coverage directory creation failed: {path}")]
	CoverageDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("coverage artifact write failed: {path}")]
	CoverageWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("remote browser connection failed: {endpoint}")]
	RemoteConnect {
		endpoint: String,
		#[source]
		source: gantry_automation::Error,
	},

	#[error("invalid execution group pattern '{pattern}': {message}")]
	GroupPattern { pattern: String, message: String },

	#[error("condition not met after {attempts} attempts: {condition}")]
	RetryExhausted { attempts: u32, condition: String },

	#[error("{count} soft assertion(s) failed:\n{report}")]
	SoftAssertions { count: usize, report: String },

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Automation(#[from] gantry_automation::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}
