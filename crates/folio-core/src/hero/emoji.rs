//! Hero text segmentation
//!
//! Splits a hero line into plain text and emoji so the renderer can give
//! each emoji its own staggered emphasis when the line becomes active.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::hero::EMOJI_STAGGER_MS;

/// Emoji blocks used by the hero copy, each optionally followed by a
/// skin-tone modifier where the block allows one
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"[\x{1F600}-\x{1F64F}][\x{1F3FB}-\x{1F3FF}]?",
        r"|[\x{1F300}-\x{1F5FF}][\x{1F3FB}-\x{1F3FF}]?",
        r"|[\x{1F680}-\x{1F6FF}][\x{1F3FB}-\x{1F3FF}]?",
        r"|[\x{1F1E0}-\x{1F1FF}]",
        r"|[\x{2600}-\x{26FF}]",
        r"|[\x{2700}-\x{27BF}]",
        r"|[\x{1F900}-\x{1F9FF}][\x{1F3FB}-\x{1F3FF}]?",
        r"|[\x{1F018}-\x{1F270}]",
    ))
    .expect("emoji pattern is valid")
});

/// A run of hero text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// `ordinal` counts emoji from 1 within the line
    Emoji { text: &'a str, ordinal: usize },
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(text) | Segment::Emoji { text, .. } => text,
        }
    }

    /// Delay before this emoji's emphasis starts; zero for text
    pub fn emphasis_delay(&self) -> Duration {
        match self {
            Segment::Text(_) => Duration::ZERO,
            Segment::Emoji { ordinal, .. } => {
                Duration::from_millis(*ordinal as u64 * EMOJI_STAGGER_MS)
            }
        }
    }
}

/// Split `text` into text and emoji segments, in order
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut ordinal = 0;

    for m in EMOJI.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment::Text(&text[cursor..m.start()]));
        }
        ordinal += 1;
        segments.push(Segment::Emoji {
            text: m.as_str(),
            ordinal,
        });
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(Segment::Text(&text[cursor..]));
    }
    segments
}

/// Number of emoji in `text`
pub fn emoji_count(text: &str) -> usize {
    EMOJI.find_iter(text).count()
}

/// Time until the last emoji of `text` starts its emphasis
pub fn emphasis_settle_time(text: &str) -> Duration {
    Duration::from_millis(emoji_count(text) as u64 * EMOJI_STAGGER_MS)
}
