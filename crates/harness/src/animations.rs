//! Animation settling helper for visual assertions.

use gantry_automation::Page;

use crate::error::Result;
use crate::js;

/// Waits for all animations within `selector`'s element and subtree to
/// finish. Useful before snapshotting views whose css transitions would
/// otherwise race the assertion.
pub async fn wait_for_animations<P: Page>(page: &P, selector: &str) -> Result<()> {
	page.evaluate(&js::animations_settled_js(selector)).await?;
	Ok(())
}
