//! Presentation coordinator adapters
//! 展示协调器适配器

mod channel;

pub use channel::{ChannelManualFillingAdapter, ManualFillingCommand};
