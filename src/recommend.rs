//! Friend-based song recommendations and the "music twin" search.
//!
//! Both operations read the friendship edges and playlists held by a
//! [`UserDirectory`] and never mutate anything.
//!
//! ## Music twin tie-break
//!
//! Friends are scanned in the order the friendships were made and a friend
//! only replaces the current best with a strictly larger overlap. Among
//! friends tied for the maximum the earliest friendship wins. A friend with
//! zero songs in common is still a twin when nobody does better.

use crate::directory::UserDirectory;
use crate::user::User;
use log::{debug, trace};
use std::collections::BTreeSet;

/// The friend sharing the most playlist songs with a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicTwin {
    pub username: String,
    /// Number of the user's songs also in the twin's playlist.
    pub overlap: usize,
}

/// Read-only view over a directory that answers recommendation queries.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'a> {
    directory: &'a UserDirectory,
}

impl<'a> RecommendationEngine<'a> {
    /// Engine answering queries against `directory`.
    #[must_use]
    pub fn new(directory: &'a UserDirectory) -> Self {
        Self { directory }
    }

    /// Songs in any friend's playlist that `user` does not have yet.
    ///
    /// Empty both when `user` has no friends and when the friends have
    /// nothing new to offer.
    #[must_use]
    pub fn recommend(&self, user: &User) -> BTreeSet<String> {
        let recommended: BTreeSet<String> = self
            .directory
            .friends_of(user)
            .flat_map(User::playlist)
            .filter(|song| !user.has_song(song))
            .cloned()
            .collect();
        debug!(
            "{} recommendation(s) for `{}'.",
            recommended.len(),
            user.username()
        );
        recommended
    }

    /// Friend with the largest playlist overlap, `None` only without friends.
    #[must_use]
    pub fn find_music_twin(&self, user: &User) -> Option<MusicTwin> {
        let mut best: Option<(&User, usize)> = None;

        for friend in self.directory.friends_of(user) {
            let overlap = overlap(user, friend);
            trace!("`{}' shares {overlap} song(s) with `{}'.", user.username(), friend.username());
            if best.map_or(true, |(_, max)| overlap > max) {
                best = Some((friend, overlap));
            }
        }

        best.map(|(friend, overlap)| MusicTwin {
            username: friend.username().to_owned(),
            overlap,
        })
    }
}

/// How many of `user`'s playlist songs are also in `other`'s playlist.
#[must_use]
pub fn overlap(user: &User, other: &User) -> usize {
    user.playlist().iter().filter(|song| other.has_song(song)).count()
}
