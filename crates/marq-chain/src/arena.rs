//! Segment arena: the owner registry for every segment in a chain.
//!
//! `next` links are structural references between arena slots, never owning
//! pointers: dropping the arena releases every segment at once, and dropping
//! a single chain never recursively frees anything. Splice operations live
//! here because the arena is the only place allowed to rewrite links.

use tracing::debug;

use marq_core::{MarqError, MarqResult};

use crate::segment::{Segment, SegmentId};

/// Caller-held container owning every segment it creates.
///
/// All [`SegmentId`] handles index into the arena that issued them. The arena
/// never removes individual segments; a finished chain is released by
/// dropping the whole arena (or letting it go out of scope with the playback
/// session it belongs to).
#[derive(Debug, Default)]
pub struct SegmentArena {
    segments: Vec<Segment>,
}

impl SegmentArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a standalone segment for a message that fits the scroll buffer
    /// in one pass. No continuation flags, no link.
    pub fn insert(&mut self, text: impl Into<String>) -> SegmentId {
        self.insert_segment(Segment::new(text, false, false))
    }

    pub(crate) fn insert_segment(&mut self, segment: Segment) -> SegmentId {
        let id = SegmentId(self.segments.len() as u32);
        self.segments.push(segment);
        id
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Unconditionally rewrite `id`'s link, returning the displaced one.
    ///
    /// The previously linked segment stays in the arena; the returned handle
    /// is the caller's only way to reach it again through this chain.
    pub fn set_next(&mut self, id: SegmentId, next: Option<SegmentId>) -> Option<SegmentId> {
        std::mem::replace(&mut self.segments[id.0 as usize].next, next)
    }

    /// Splice an entire continuation run immediately after `id`.
    ///
    /// Whatever `id` pointed to before is reattached after the run's last
    /// segment, so `insert_next` threads a second, independently generated
    /// chain into an existing one without losing its tail. The two chains may
    /// use different fonts or buffer geometry; no compatibility check is made.
    ///
    /// Returns the inserted head. Fails with [`MarqError::Chain`] if
    /// `new_head`'s run is half-linked or cyclic (see [`run_last`]).
    ///
    /// [`run_last`]: SegmentArena::run_last
    pub fn insert_next(&mut self, id: SegmentId, new_head: SegmentId) -> MarqResult<SegmentId> {
        let run_end = self.run_last(new_head)?;
        let old_next = self.set_next(id, Some(new_head));
        self.set_next(run_end, old_next);
        debug!(
            "spliced run {}..{} after segment {}",
            new_head.0, run_end.0, id.0
        );
        Ok(new_head)
    }

    /// Walk a continuation run to its last segment.
    ///
    /// Follows `next` while `has_continuation` holds. The walk is bounded by
    /// the arena population; a well-formed run cannot be longer than the
    /// arena, so exceeding the bound means a link cycle and fails with
    /// [`MarqError::Chain`]. A segment that marks a continuation but has no
    /// link fails the same way.
    pub fn run_last(&self, head: SegmentId) -> MarqResult<SegmentId> {
        let mut cursor = head;
        let mut steps = 0usize;
        while self.segments[cursor.0 as usize].has_continuation {
            cursor = self.segments[cursor.0 as usize].next.ok_or_else(|| {
                MarqError::Chain(format!(
                    "segment {} marks a continuation but has no next link",
                    cursor.0
                ))
            })?;
            steps += 1;
            if steps > self.segments.len() {
                return Err(MarqError::Chain(format!(
                    "continuation run from segment {} does not terminate",
                    head.0
                )));
            }
        }
        Ok(cursor)
    }

    /// Iterate a chain from `head`, following `next` until the first
    /// unlinked segment.
    ///
    /// This is the playback order: the scheduler shows one segment per
    /// scroll-complete notification and advances through exactly this
    /// sequence. Looping playback is the caller re-entering at `head` after
    /// the iterator ends. The iterator follows whatever links exist, so a
    /// cycle created by `set_next` misuse makes it non-terminating.
    pub fn walk(&self, head: SegmentId) -> ChainIter<'_> {
        ChainIter {
            arena: self,
            cursor: Some(head),
        }
    }
}

impl std::ops::Index<SegmentId> for SegmentArena {
    type Output = Segment;

    fn index(&self, id: SegmentId) -> &Segment {
        &self.segments[id.0 as usize]
    }
}

/// Iterator over a chain in playback order. See [`SegmentArena::walk`].
#[derive(Debug)]
pub struct ChainIter<'a> {
    arena: &'a SegmentArena,
    cursor: Option<SegmentId>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (SegmentId, &'a Segment);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let segment = &self.arena[id];
        self.cursor = segment.next;
        Some((id, segment))
    }
}
