pub mod miter_offset;
mod strategy;

pub use miter_offset::MiterOffset2D;
pub use strategy::{offset, MiterOffsetStrategy, OffsetService, OffsetStrategy};
