//! Global play-count aggregation and the trending ranking.
//!
//! Every add-song call counts as one play, whether or not the song was
//! already in the user's playlist.
//!
//! ## Ordering
//!
//! [`TrendingTracker::ranked_songs`] orders by play count, highest first.
//! Songs with equal counts keep the order in which they were first played.

use log::trace;
use std::collections::HashMap;

/// Receives one notification per successful add-song call.
pub trait PlayRecorder {
    /// Record a single play of `song`.
    fn record_play(&mut self, song: &str);
}

/// Play counts for every song any user has added.
#[derive(Debug, Default, Clone)]
pub struct TrendingTracker {
    /// Song title -> index into `songs`.
    index: HashMap<String, usize>,
    /// `(title, count)` in first-played order.
    songs: Vec<(String, u64)>,
}

impl TrendingTracker {
    /// Tracker with no plays recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of plays recorded for `song`, 0 if it was never played.
    #[must_use]
    pub fn count(&self, song: &str) -> u64 {
        self.index.get(song).map_or(0, |&i| self.songs[i].1)
    }

    /// All songs with their counts, most played first.
    #[must_use]
    pub fn ranked_songs(&self) -> Vec<(String, u64)> {
        let mut ranked = self.songs.clone();
        // `sort_by` is stable, so ties stay in first-played order.
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        ranked
    }

    /// Number of distinct songs played so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl PlayRecorder for TrendingTracker {
    fn record_play(&mut self, song: &str) {
        let count = match self.index.get(song) {
            Some(&i) => {
                self.songs[i].1 += 1;
                self.songs[i].1
            }
            None => {
                self.index.insert(song.to_owned(), self.songs.len());
                self.songs.push((song.to_owned(), 1));
                1
            }
        };
        trace!("Recorded play of `{song}' (now {count}).");
    }
}
