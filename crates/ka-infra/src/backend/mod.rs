//! Backend-facing adapters
//! 面向后端的适配器

mod channel;

pub use channel::{BackendRequest, ChannelBackendAdapter};
