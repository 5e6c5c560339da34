use serde::{Deserialize, Serialize};

/// Handle to a segment inside a [`SegmentArena`](crate::SegmentArena).
///
/// Copyable and cheap; a handle is only meaningful for the arena that issued
/// it. The arena never removes segments, so handles stay valid for its whole
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub(crate) u32);

/// One displayable chunk of a message, sized to fit the scroll buffer.
///
/// A message longer than the buffer can fully scroll is split into several
/// segments that overlap by one screenful, so playback can hand off from one
/// segment to the next without a visible jump. The `next` link threads
/// segments into a chain; it carries no ownership, every segment is owned by
/// its arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// The substring of the original message this segment shows
    pub(crate) text: String,
    /// Another segment of the *same* message must play immediately after this one
    pub(crate) has_continuation: bool,
    /// This segment is not the head of its continuation run
    pub(crate) is_continuation: bool,
    /// The segment to play after this one (possibly from a different message)
    pub(crate) next: Option<SegmentId>,
}

impl Segment {
    pub(crate) fn new(text: impl Into<String>, has_continuation: bool, is_continuation: bool) -> Self {
        Self {
            text: text.into(),
            has_continuation,
            is_continuation,
            next: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_continuation(&self) -> bool {
        self.has_continuation
    }

    pub fn is_continuation(&self) -> bool {
        self.is_continuation
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn next(&self) -> Option<SegmentId> {
        self.next
    }
}
