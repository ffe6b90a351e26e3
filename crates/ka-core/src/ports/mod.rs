//! Port interfaces for the bridge
//!
//! Ports define the contract between the bridge (application layer) and the
//! collaborators on either side of it: the backend peer that supplies sheets
//! and executes forwarded actions, the presentation coordinator that renders
//! them, and the metrics sink.
//!
//! Every port call is a one-way, fire-and-forget send. Results, if any, come
//! back later as new inbound events or through a supplied callback.

pub mod backend;
pub mod manual_filling;
pub mod metrics;

pub use backend::AccessoryBackendPort;
pub use manual_filling::ManualFillingPort;
pub use metrics::AccessoryMetricsPort;
