//! Trait seam over the browser automation client driven by the gantry harness.
//!
//! The harness decorates three primitives of the underlying automation stack:
//! the browsing context, its pages, and browser acquisition. This crate pins
//! down exactly the capability set those decorations consume, so the harness
//! (and its tests) stay independent of any concrete client:
//!
//! - [`BrowserContext`] - init-script installation, host-function exposure,
//!   open-page enumeration
//! - [`Page`] - console event subscription and expression evaluation
//! - [`RemoteConnector`] - browser acquisition over the remote debugging
//!   protocol
//!
//! Console traffic is represented by [`ConsoleMessage`] records; handler
//! registrations return a [`Subscription`] that detaches the handler when
//! dropped.

mod console;
mod error;
mod subscription;
mod traits;

pub use console::{ConsoleKind, ConsoleMessage, SourceLocation};
pub use error::{Error, Result};
pub use subscription::Subscription;
pub use traits::{BrowserContext, ConsoleHandler, HostFunction, Page, RemoteConnector};
