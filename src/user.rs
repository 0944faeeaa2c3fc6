//! A registered user: credential, playlist, recent history and friends.
//!
//! The playlist is a set of titles kept in first-added order. The recent
//! history is a bounded list, most recent first, where repeated adds of the
//! same title each count as a new entry.

use crate::trending::PlayRecorder;
use log::debug;
use std::collections::{HashSet, VecDeque};

/// Upper bound on the recent history, also the default size.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// A registered user and everything they own: credential, playlist, recent
/// history and the usernames of their friends.
///
/// Users are created and owned by [`crate::directory::UserDirectory`].
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password: String,
    playlist: Vec<String>,
    playlist_index: HashSet<String>,
    recent: VecDeque<String>,
    history_capacity: usize,
    /// Friend usernames in the order the friendships were made.
    friends: Vec<String>,
}

impl User {
    /// Create a user with an empty playlist, history and friend set.
    ///
    /// `history_capacity` is clamped to `1..=DEFAULT_HISTORY_CAPACITY`: the
    /// most recent song is always kept and the history never exceeds five.
    #[must_use]
    pub fn new(username: &str, password: &str, history_capacity: usize) -> Self {
        let history_capacity = history_capacity.clamp(1, DEFAULT_HISTORY_CAPACITY);
        Self {
            username: username.to_owned(),
            password: password.to_owned(),
            playlist: Vec::new(),
            playlist_index: HashSet::new(),
            recent: VecDeque::new(),
            history_capacity,
            friends: Vec::new(),
        }
    }

    /// Case-sensitive login name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Plain equality check against the stored secret.
    #[must_use]
    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Add `song` to the playlist and the front of the recent history, then
    /// report one play to `recorder`.
    ///
    /// The title must already be validated as non-blank. Adding a song that
    /// is already in the playlist leaves the playlist unchanged but still
    /// updates the history and still counts as a play.
    pub fn add_song(&mut self, song: &str, recorder: &mut impl PlayRecorder) {
        if self.playlist_index.insert(song.to_owned()) {
            self.playlist.push(song.to_owned());
        }

        self.recent.push_front(song.to_owned());
        while self.recent.len() > self.history_capacity {
            if let Some(evicted) = self.recent.pop_back() {
                debug!("Evicted `{evicted}' from {}'s recent history.", self.username);
            }
        }

        recorder.record_play(song);
    }

    /// Playlist titles in first-added order.
    #[must_use]
    pub fn playlist(&self) -> &[String] {
        &self.playlist
    }

    /// `true` if `song` is in the playlist (exact, case-sensitive match).
    #[must_use]
    pub fn has_song(&self, song: &str) -> bool {
        self.playlist_index.contains(song)
    }

    /// Recently added songs, most recent first.
    pub fn recent_history(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.recent.iter().map(String::as_str)
    }

    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Friend usernames in the order the friendships were made.
    #[must_use]
    pub fn friends(&self) -> &[String] {
        &self.friends
    }

    #[must_use]
    pub fn is_friend(&self, username: &str) -> bool {
        self.friends.iter().any(|f| f == username)
    }

    /// One side of a friendship edge. The directory adds both sides.
    ///
    /// Returns `false` if nothing changed (self or already a friend).
    pub(crate) fn link_friend(&mut self, username: &str) -> bool {
        if username == self.username || self.is_friend(username) {
            return false;
        }
        self.friends.push(username.to_owned());
        true
    }
}
