//! Top-level ChatterTunes instance.
//!
//! Owns the [`UserDirectory`] and the [`TrendingTracker`] and turns every
//! operation into the status message the user sees. Operations acting for a
//! user take the caller's optional [`Session`]; without one they fail with
//! [`CoreError::NotLoggedIn`].

use crate::config::RuntimeConfig;
use crate::directory::UserDirectory;
use crate::error::{CoreError, CoreResult};
use crate::recommend::RecommendationEngine;
use crate::session::Session;
use crate::trending::TrendingTracker;
use std::fmt::{Display, Write as _};

/// One running ChatterTunes instance: all users plus the global play counts.
///
/// Created once per process; nothing outlives it.
#[derive(Debug, Clone, Default)]
pub struct ChatterTunes {
    directory: UserDirectory,
    trending: TrendingTracker,
}

impl ChatterTunes {
    /// Empty instance using the history capacity from `config`.
    #[must_use]
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            directory: UserDirectory::new(config.history_capacity),
            trending: TrendingTracker::new(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    #[must_use]
    pub fn trending_tracker(&self) -> &TrendingTracker {
        &self.trending
    }

    /// # Errors
    ///
    /// See [`UserDirectory::register`].
    pub fn register(&mut self, username: &str, password: &str) -> CoreResult<String> {
        self.directory.register(username, password)?;
        Ok("User registered successfully!".to_owned())
    }

    /// Log in and hand back the new session with its status message.
    ///
    /// # Errors
    ///
    /// See [`UserDirectory::authenticate`].
    pub fn login(&self, username: &str, password: &str) -> CoreResult<(Session, String)> {
        let session = self.directory.authenticate(username, password)?;
        Ok((session, format!("Logged in as {username}")))
    }

    /// # Errors
    ///
    /// [`CoreError::NotLoggedIn`], or see [`UserDirectory::add_friend`].
    pub fn add_friend(&mut self, session: Option<&Session>, friend: &str) -> CoreResult<String> {
        let session = session.ok_or(CoreError::NotLoggedIn)?;
        self.directory.add_friend(session, friend)?;
        Ok("Friend added!".to_owned())
    }

    /// # Errors
    ///
    /// [`CoreError::NotLoggedIn`] or [`CoreError::InvalidSong`].
    pub fn add_song(&mut self, session: Option<&Session>, song: &str) -> CoreResult<String> {
        let session = session.ok_or(CoreError::NotLoggedIn)?;
        self.directory.add_song(session, song, &mut self.trending)?;
        Ok("Song added to playlist!".to_owned())
    }

    /// Playlist and recent history of the logged-in user.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotLoggedIn`].
    pub fn view_playlist(&self, session: Option<&Session>) -> CoreResult<String> {
        let session = session.ok_or(CoreError::NotLoggedIn)?;
        let user = self.directory.session_user(session)?;
        Ok(format!(
            "Playlist: {}\nRecently Played: {}",
            bracketed(user.playlist()),
            bracketed(user.recent_history())
        ))
    }

    /// # Errors
    ///
    /// [`CoreError::NotLoggedIn`].
    pub fn recommend(&self, session: Option<&Session>) -> CoreResult<String> {
        let session = session.ok_or(CoreError::NotLoggedIn)?;
        let user = self.directory.session_user(session)?;
        let songs = RecommendationEngine::new(&self.directory).recommend(user);
        if songs.is_empty() {
            Ok("No recommendations right now.".to_owned())
        } else {
            Ok(format!("Recommended songs: {}", bracketed(&songs)))
        }
    }

    /// Ranked songs with their play counts. Needs no session.
    #[must_use]
    pub fn trending(&self) -> String {
        let ranked = self.trending.ranked_songs();
        if ranked.is_empty() {
            return "No songs added yet!".to_owned();
        }
        let mut out = String::from("Trending Songs:\n");
        for (song, count) in ranked {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{song} ({count} plays)");
        }
        out
    }

    /// # Errors
    ///
    /// [`CoreError::NotLoggedIn`].
    pub fn music_twin(&self, session: Option<&Session>) -> CoreResult<String> {
        let session = session.ok_or(CoreError::NotLoggedIn)?;
        let user = self.directory.session_user(session)?;
        match RecommendationEngine::new(&self.directory).find_music_twin(user) {
            Some(twin) => Ok(format!(
                "Your music twin is: {} ({} songs in common)",
                twin.username, twin.overlap
            )),
            None => Ok("No music twin found yet!".to_owned()),
        }
    }
}

/// `[a, b, c]`
fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let inner = items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}
