//! Bounded retry for flaky UI interactions.
//!
//! Some UI state only becomes actionable after the interface is nudged -
//! e.g. a context menu that must be dismissed and reopened until an action
//! renders. Rather than hand-rolling that loop per call site, scenarios use
//! [`retry_until`]: run an action, test a predicate, give up after a fixed
//! number of attempts. The bound is attempt-counted, not time-based; the
//! enclosing test framework owns wall-clock timeouts.

use std::future::Future;

use tracing::debug;

use crate::error::{HarnessError, Result};

/// Attempt bound used by scenario helpers when none is specified.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Runs `action` then `predicate`, repeating until the predicate reports
/// success or `max_attempts` runs out.
///
/// Returns the 1-based attempt number that succeeded. Errors from the
/// action or predicate propagate immediately; exhausting the bound yields
/// [`HarnessError::RetryExhausted`] naming `condition`.
pub async fn retry_until<A, FA, P, FP>(
	max_attempts: u32,
	condition: &str,
	mut action: A,
	mut predicate: P,
) -> Result<u32>
where
	A: FnMut() -> FA,
	FA: Future<Output = Result<()>>,
	P: FnMut() -> FP,
	FP: Future<Output = Result<bool>>,
{
	for attempt in 1..=max_attempts {
		action().await?;
		if predicate().await? {
			debug!(target: "gantry", condition, attempt, "condition met");
			return Ok(attempt);
		}
	}

	Err(HarnessError::RetryExhausted {
		attempts: max_attempts,
		condition: condition.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[tokio::test]
	async fn reports_the_succeeding_attempt() {
		let runs = Cell::new(0u32);
		let runs_ref = &runs;

		let attempt = retry_until(
			DEFAULT_MAX_ATTEMPTS,
			"third time lucky",
			|| async move {
				runs_ref.set(runs_ref.get() + 1);
				Ok(())
			},
			|| async move { Ok(runs_ref.get() >= 3) },
		)
		.await
		.unwrap();

		assert_eq!(attempt, 3);
		assert_eq!(runs.get(), 3);
	}

	#[tokio::test]
	async fn exhaustion_is_an_error_naming_the_condition() {
		let runs = Cell::new(0u32);
		let runs_ref = &runs;

		let err = retry_until(
			5,
			"menu action visible",
			|| async move {
				runs_ref.set(runs_ref.get() + 1);
				Ok(())
			},
			|| async move { Ok(false) },
		)
		.await
		.unwrap_err();

		assert_eq!(runs.get(), 5);
		assert!(matches!(
			err,
			HarnessError::RetryExhausted { attempts: 5, ref condition } if condition == "menu action visible"
		));
	}

	#[tokio::test]
	async fn action_errors_propagate_immediately() {
		let runs = Cell::new(0u32);
		let runs_ref = &runs;

		let err = retry_until(
			5,
			"never reached",
			|| async move {
				runs_ref.set(runs_ref.get() + 1);
				Err(HarnessError::Anyhow(anyhow::anyhow!("click failed")))
			},
			|| async move { Ok(true) },
		)
		.await
		.unwrap_err();

		assert_eq!(runs.get(), 1);
		assert!(err.to_string().contains("click failed"));
	}
}
