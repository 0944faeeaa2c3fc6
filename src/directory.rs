//! Registered users, login and the friendship relation.
//!
//! The directory owns every [`User`]. Friendships are stored as usernames on
//! both sides and resolved back through the directory on lookup, so users
//! never hold references to one another.

use crate::error::{is_blank, CoreError, CoreResult};
use crate::session::Session;
use crate::trending::PlayRecorder;
use crate::user::{User, DEFAULT_HISTORY_CAPACITY};
use log::{debug, info};
use std::collections::HashMap;

/// Owner of every registered [`User`], keyed by case-sensitive username.
///
/// Registration order is remembered so listings are deterministic.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: HashMap<String, User>,
    /// Usernames in registration order.
    order: Vec<String>,
    history_capacity: usize,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl UserDirectory {
    /// Empty directory whose users keep `history_capacity` recent songs.
    #[must_use]
    pub fn new(history_capacity: usize) -> Self {
        Self {
            users: HashMap::new(),
            order: Vec::new(),
            history_capacity,
        }
    }

    /// Register a new user with an empty playlist, history and friend set.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidUsername`] / [`CoreError::InvalidPassword`] if blank
    /// - [`CoreError::DuplicateUser`] if the username is taken
    pub fn register(&mut self, username: &str, password: &str) -> CoreResult<()> {
        if is_blank(username) {
            return Err(CoreError::InvalidUsername);
        }
        if is_blank(password) {
            return Err(CoreError::InvalidPassword);
        }
        if self.users.contains_key(username) {
            return Err(CoreError::DuplicateUser(username.to_owned()));
        }

        self.users.insert(
            username.to_owned(),
            User::new(username, password, self.history_capacity),
        );
        self.order.push(username.to_owned());
        info!("Registered user `{username}'.");
        Ok(())
    }

    /// Check credentials and open a session for `username`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UserNotFound`] or [`CoreError::WrongPassword`].
    pub fn authenticate(&self, username: &str, password: &str) -> CoreResult<Session> {
        let user = self
            .users
            .get(username)
            .ok_or_else(|| CoreError::UserNotFound(username.to_owned()))?;
        if !user.check_password(password) {
            debug!("Rejected login for `{username}': wrong password.");
            return Err(CoreError::WrongPassword);
        }
        info!("User `{username}' logged in.");
        Ok(Session::new(username))
    }

    /// Make the session's user and `friend` friends of each other.
    ///
    /// Adding an existing friend is a no-op. Both names are checked before
    /// either user is touched, so a failed call changes nothing.
    ///
    /// # Errors
    ///
    /// [`CoreError::SelfFriend`] or [`CoreError::UserNotFound`].
    pub fn add_friend(&mut self, session: &Session, friend: &str) -> CoreResult<()> {
        let me = session.username();
        if friend == me {
            return Err(CoreError::SelfFriend);
        }
        if !self.users.contains_key(me) {
            return Err(CoreError::UserNotFound(me.to_owned()));
        }
        if !self.users.contains_key(friend) {
            return Err(CoreError::UserNotFound(friend.to_owned()));
        }

        let mut changed = false;
        if let Some(user) = self.users.get_mut(me) {
            changed |= user.link_friend(friend);
        }
        if let Some(user) = self.users.get_mut(friend) {
            changed |= user.link_friend(me);
        }

        if changed {
            info!("`{me}' and `{friend}' are now friends.");
        } else {
            debug!("`{me}' and `{friend}' were already friends.");
        }
        Ok(())
    }

    /// Add a song for the session's user, reporting the play to `recorder`.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidSong`] if `song` is blank, or
    /// [`CoreError::UserNotFound`] if the session does not belong here.
    pub fn add_song(
        &mut self,
        session: &Session,
        song: &str,
        recorder: &mut impl PlayRecorder,
    ) -> CoreResult<()> {
        if is_blank(song) {
            return Err(CoreError::InvalidSong);
        }
        let user = self
            .users
            .get_mut(session.username())
            .ok_or_else(|| CoreError::UserNotFound(session.username().to_owned()))?;
        user.add_song(song, recorder);
        debug!("`{}' added `{song}'.", session.username());
        Ok(())
    }

    /// Look up a user by exact username.
    #[must_use]
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    /// Resolve the user behind a session.
    ///
    /// # Errors
    ///
    /// [`CoreError::UserNotFound`] if the session does not belong here.
    pub fn session_user(&self, session: &Session) -> CoreResult<&User> {
        self.user(session.username())
            .ok_or_else(|| CoreError::UserNotFound(session.username().to_owned()))
    }

    /// Friends of `user`, in the order the friendships were made.
    pub fn friends_of<'a>(&'a self, user: &'a User) -> impl Iterator<Item = &'a User> + 'a {
        user.friends().iter().filter_map(|name| self.users.get(name))
    }

    /// `true` if `username` is registered.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.order.iter().filter_map(|name| self.users.get(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
