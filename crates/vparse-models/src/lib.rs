//! Shared data models for the vparse backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video catalog entries and drafts
//! - Source platform derivation
//! - Parse results and parser types
//! - Wire schemas for the detect/parse endpoints

pub mod entry;
pub mod parse;
pub mod platform;
pub mod utils;
pub mod vip;
pub mod wire;

// Re-export common types
pub use entry::{Category, EntryDraft, EntryId, ValidationError, VideoEntry};
pub use parse::{ParseResult, ParserType};
pub use platform::Platform;
pub use utils::is_absolute_http_url;
pub use vip::classify_vip;
pub use wire::{DetectVipRequest, DetectVipResponse, ParseVideoRequest, ParseVideoResponse};
