//! Message chunking
//!
//! Splits a message into the minimum number of segments a fixed-capacity
//! scroll buffer can each display, overlapping consecutive segments by one
//! screenful so playback hands off without a visible skip or repeat.
//!
//! Each segment after the first starts `screen_chars` characters before the
//! point where the previous segment's new characters ran out; the window on
//! screen at the hand-off instant is therefore identical between the end of
//! one scroll and the start of the next.
//!
//! Counting and slicing are per `char`: one glyph renders one `char`.

use tracing::debug;

use crate::arena::SegmentArena;
use crate::layout::ScrollLayout;
use crate::segment::{Segment, SegmentId};

/// Chunk `message` into a continuation run, returning its head.
///
/// Produces a single segment when the whole message fits through the buffer
/// in one scroll (including the empty message), otherwise a linked run in
/// which every segment advances the message cursor by
/// `max_fully_scroll_chars`. The arena owns everything produced; the head
/// handle reaches the rest through the links.
pub fn chunk_message(arena: &mut SegmentArena, message: &str, layout: ScrollLayout) -> SegmentId {
    chunk_run(arena, message, layout, false)
}

fn chunk_run(
    arena: &mut SegmentArena,
    message: &str,
    layout: ScrollLayout,
    is_continuation: bool,
) -> SegmentId {
    // Byte offset of every char boundary, including the end
    let bounds: Vec<usize> = message
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(message.len()))
        .collect();
    let chars = bounds.len() - 1;

    let needs_continuation = chars > layout.max_fully_scroll_chars;

    let first_end = chars.min(layout.max_shown_chars);
    let head = arena.insert_segment(Segment::new(
        &message[..bounds[first_end]],
        needs_continuation,
        is_continuation,
    ));

    if !needs_continuation {
        return head;
    }

    let mut produced = 1usize;
    let mut last = head;
    let mut start = layout.max_fully_scroll_chars;
    let mut end = chars.min(start + layout.max_shown_chars);

    while start < end {
        let id = arena.insert_segment(Segment::new(
            &message[bounds[start]..bounds[end]],
            end < chars,
            true,
        ));
        arena.set_next(last, Some(id));
        last = id;
        produced += 1;

        start += layout.max_fully_scroll_chars;
        end = chars.min(start + layout.max_shown_chars);
    }

    debug!("chunked {chars}-char message into {produced} segments");
    head
}

/// Rebuild the original message from a continuation run.
///
/// Inverse of [`chunk_message`]: concatenates the run's texts, dropping the
/// leading `screen_chars`-character overlap of every segment after the first.
/// Walks the run only; segments spliced in from other messages are not
/// touched. Must be called with the layout the run was chunked with.
pub fn reassemble(arena: &SegmentArena, head: SegmentId, layout: ScrollLayout) -> String {
    let mut message = String::new();
    let mut cursor = Some(head);
    let mut first = true;

    while let Some(id) = cursor {
        let segment = &arena[id];
        if first {
            message.push_str(segment.text());
            first = false;
        } else {
            message.push_str(skip_chars(segment.text(), layout.screen_chars));
        }
        cursor = if segment.has_continuation() {
            segment.next()
        } else {
            None
        };
    }

    message
}

fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((offset, _)) => &s[offset..],
        None => "",
    }
}
