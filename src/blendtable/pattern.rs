//! Blending pattern references and their ordered storage.

use std::{collections::HashMap, fmt};

use crate::config::OverwritePolicy;

/// A blending mask referenced by the table cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Identifier used by the table cells
    pub pattern_id: u32,
    /// Path to the pattern file, relative to the definition file
    pub filename: String,
}

/// Renders the body of a `pattern` line: `pattern <id> <filename>`.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pattern {} {}", self.pattern_id, self.filename)
    }
}

/// Result of inserting into a [`PatternMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternInsert {
    /// The id was not present before.
    Added,
    /// The id existed; holds the replaced filename.
    Replaced(String),
}

/// Patterns keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMap {
    entries: Vec<Pattern>,
    index: HashMap<u32, usize>,
}

impl PatternMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the pattern for `pattern_id`.
    ///
    /// A replaced entry either keeps its position or is moved behind all other
    /// entries, depending on `policy`.
    pub fn insert(
        &mut self,
        pattern_id: u32,
        filename: String,
        policy: OverwritePolicy,
    ) -> PatternInsert {
        let Some(&position) = self.index.get(&pattern_id) else {
            self.index.insert(pattern_id, self.entries.len());
            self.entries.push(Pattern {
                pattern_id,
                filename,
            });
            return PatternInsert::Added;
        };

        match policy {
            OverwritePolicy::KeepPosition => {
                let previous = std::mem::replace(&mut self.entries[position].filename, filename);
                PatternInsert::Replaced(previous)
            }
            OverwritePolicy::MoveToEnd => {
                let previous = self.entries.remove(position);
                for entry in &self.entries[position..] {
                    if let Some(slot) = self.index.get_mut(&entry.pattern_id) {
                        *slot -= 1;
                    }
                }
                self.index.insert(pattern_id, self.entries.len());
                self.entries.push(Pattern {
                    pattern_id,
                    filename,
                });
                PatternInsert::Replaced(previous.filename)
            }
        }
    }

    /// Returns the pattern stored for `pattern_id`.
    #[must_use]
    pub fn get(&self, pattern_id: u32) -> Option<&Pattern> {
        self.index
            .get(&pattern_id)
            .and_then(|&position| self.entries.get(position))
    }

    /// Returns `true` if a pattern with this id exists.
    #[must_use]
    pub fn contains(&self, pattern_id: u32) -> bool {
        self.index.contains_key(&pattern_id)
    }

    /// Number of stored patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pattern was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in output order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PatternMap {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(map: &PatternMap) -> Vec<u32> {
        map.iter().map(|p| p.pattern_id).collect()
    }

    fn filled() -> PatternMap {
        let mut map = PatternMap::new();
        for (id, name) in [(3, "c.png"), (1, "a.png"), (2, "b.png")] {
            map.insert(id, name.to_string(), OverwritePolicy::KeepPosition);
        }
        map
    }

    #[test]
    fn test_insertion_order() {
        let map = filled();
        assert_eq!(ids(&map), vec![3, 1, 2]);
        assert_eq!(map.len(), 3);
        assert!(map.contains(1));
        assert!(!map.contains(4));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = filled();
        let result = map.insert(1, "z.png".to_string(), OverwritePolicy::KeepPosition);
        assert_eq!(result, PatternInsert::Replaced("a.png".to_string()));
        assert_eq!(ids(&map), vec![3, 1, 2]);
        assert_eq!(map.get(1).unwrap().filename, "z.png");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_overwrite_moves_to_end() {
        let mut map = filled();
        let result = map.insert(3, "z.png".to_string(), OverwritePolicy::MoveToEnd);
        assert_eq!(result, PatternInsert::Replaced("c.png".to_string()));
        assert_eq!(ids(&map), vec![1, 2, 3]);

        // index must follow the shifted entries
        assert_eq!(map.get(1).unwrap().filename, "a.png");
        assert_eq!(map.get(2).unwrap().filename, "b.png");
        assert_eq!(map.get(3).unwrap().filename, "z.png");
    }

    #[test]
    fn test_identical_insert_is_idempotent() {
        let mut map = filled();
        let before = map.clone();
        map.insert(2, "b.png".to_string(), OverwritePolicy::KeepPosition);
        assert_eq!(map, before);
    }

    #[test]
    fn test_pattern_display() {
        let pattern = Pattern {
            pattern_id: 7,
            filename: "masks/edge.png".to_string(),
        };
        assert_eq!(pattern.to_string(), "pattern 7 masks/edge.png");
    }
}
