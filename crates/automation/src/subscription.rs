//! RAII handles for registered event handlers.

use tokio::sync::oneshot;

/// Handle that detaches a registered event handler when dropped.
///
/// Returned by [`Page::on_console`]; the backing implementation listens on
/// the cancellation channel and stops delivering events once it fires.
///
/// [`Page::on_console`]: crate::Page::on_console
pub struct Subscription {
	cancel_tx: Option<oneshot::Sender<()>>,
}

impl Subscription {
	/// Creates a subscription wired to the given cancellation sender.
	pub fn new(cancel_tx: oneshot::Sender<()>) -> Self {
		Self {
			cancel_tx: Some(cancel_tx),
		}
	}

	/// Creates a subscription with no backing handler to cancel.
	///
	/// Useful for implementations that tie handler lifetime to the page
	/// object itself.
	pub fn detached() -> Self {
		Self { cancel_tx: None }
	}

	/// Explicitly detaches the handler, equivalent to dropping the handle.
	pub fn unsubscribe(mut self) {
		if let Some(tx) = self.cancel_tx.take() {
			let _ = tx.send(());
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(tx) = self.cancel_tx.take() {
			let _ = tx.send(());
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription").field("active", &self.cancel_tx.is_some()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drop_signals_cancellation() {
		let (tx, mut rx) = oneshot::channel::<()>();
		let sub = Subscription::new(tx);
		drop(sub);
		assert!(rx.try_recv().is_ok());
	}

	#[test]
	fn unsubscribe_signals_cancellation() {
		let (tx, mut rx) = oneshot::channel::<()>();
		let sub = Subscription::new(tx);
		sub.unsubscribe();
		assert!(rx.try_recv().is_ok());
	}

	#[test]
	fn detached_subscription_is_inert() {
		let sub = Subscription::detached();
		assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
	}
}
