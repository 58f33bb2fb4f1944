//! Hero lines

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// One unit of hero text, emphasized one at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub index: usize,
    pub content: String,
}

/// Ordered, non-empty sequence of lines whose indices are `0..N-1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroLines {
    lines: Vec<Line>,
}

impl HeroLines {
    /// Build from plain text, assigning indices by position
    pub fn from_texts<I, S>(texts: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = texts
            .into_iter()
            .enumerate()
            .map(|(index, content)| Line {
                index,
                content: content.into(),
            })
            .collect();
        Self::new(lines)
    }

    /// Validate an explicit line sequence
    pub fn new(lines: Vec<Line>) -> Result<Self> {
        if lines.is_empty() {
            return Err(FolioError::EmptyLines);
        }
        if let Some((position, line)) = lines
            .iter()
            .enumerate()
            .find(|(position, line)| line.index != *position)
        {
            return Err(FolioError::NonContiguousIndex {
                position,
                index: line.index,
            });
        }
        Ok(Self { lines })
    }

    /// Number of lines (always at least one)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line
    pub fn last_index(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a HeroLines {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
