//! marq-chain: segment chunking and chain splicing for seamless scroll playback
//!
//! A dot-matrix display driver can only animate a bounded number of glyph
//! columns per pass, so an arbitrarily long message has to be split into
//! bounded, overlapping segments and played back one after another. This
//! crate computes that split and maintains the linked playback order; it
//! renders nothing itself.
//!
//! # Overview
//! - `layout`: column geometry → character-count arithmetic
//! - `chunk`: message → minimal run of overlapping segments, and back
//! - `segment`: the segment entity and its arena handle
//! - `arena`: segment ownership, link splicing, playback-order iteration

pub mod arena;
pub mod chunk;
pub mod layout;
pub mod segment;

// Convenience re-exports for the most common operations
pub use arena::{ChainIter, SegmentArena};
pub use chunk::{chunk_message, reassemble};
pub use layout::ScrollLayout;
pub use segment::{Segment, SegmentId};
