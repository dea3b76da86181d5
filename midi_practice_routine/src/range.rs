// Integer start/end pairs for note, fret, and octave bounds.
//
// Persisted as `{"start": .., "end": ..}`. Missing or null bounds read as 0.
// `iter()` walks from `start` toward `end` (exclusive) in either direction;
// candidate-pitch expansion uses `inclusive()` instead, which is ascending
// only and empty when `start > end`.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberRange {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub start: i32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub end: i32,
}

impl NumberRange {
    pub fn new(start: i32, end: i32) -> Self {
        NumberRange { start, end }
    }

    /// Distance between the bounds, regardless of direction.
    pub fn len(&self) -> u32 {
        self.start.abs_diff(self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `len()` values starting at `start`, stepping toward `end`.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        let direction = if self.start >= self.end { -1 } else { 1 };
        let start = self.start;
        (0..self.len() as i32).map(move |i| start + direction * i)
    }

    /// `start..=end`, ascending.
    pub fn inclusive(&self) -> RangeInclusive<i32> {
        self.start..=self.end
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_range() {
        let range = NumberRange::new(0, 127);
        assert_eq!(range.len(), 127);
    }

    #[test]
    fn reverse_range() {
        let range = NumberRange::new(0, -127);
        assert_eq!(range.end, -127);
        assert_eq!(range.len(), 127);
    }

    #[test]
    fn null_bounds_default_to_zero() {
        let range = NumberRange::from_json(r#"{"start": null, "end": null}"#).unwrap();
        assert_eq!(range, NumberRange::new(0, 0));
        assert!(range.is_empty());

        let range = NumberRange::from_json("{}").unwrap();
        assert_eq!(range, NumberRange::new(0, 0));
    }

    #[test]
    fn iteration_excludes_end() {
        let values: Vec<i32> = NumberRange::new(4, 9).iter().collect();
        assert_eq!(values, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn reverse_iteration() {
        let values: Vec<i32> = NumberRange::new(4, 0).iter().collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
    }

    #[test]
    fn inclusive_is_ascending_only() {
        assert_eq!(NumberRange::new(2, 4).inclusive().collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(NumberRange::new(4, 2).inclusive().count(), 0);
    }

    #[test]
    fn json_has_only_start_and_end() {
        let json = serde_json::to_string(&NumberRange::new(0, 5)).unwrap();
        assert_eq!(json, r#"{"start":0,"end":5}"#);
        assert_eq!(NumberRange::from_json(&json).unwrap(), NumberRange::new(0, 5));
    }
}
