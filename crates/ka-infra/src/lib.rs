//! Infrastructure adapters for the accessory bridge
//! 附件桥接层的基础设施适配器

pub mod backend;
pub mod codec;
pub mod metrics;
pub mod presentation;

pub use backend::{BackendRequest, ChannelBackendAdapter};
pub use codec::{decode_line, encode_line, CodecError};
pub use metrics::TracingMetricsRecorder;
pub use presentation::{ChannelManualFillingAdapter, ManualFillingCommand};
