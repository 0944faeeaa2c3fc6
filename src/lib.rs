//! Social music bookkeeping: playlists, friends, trending songs and
//! friend-based recommendations, all held in memory.
//!
//! Core modules:
//! - [`directory`] - Registered users, login and friendships
//! - [`user`] - Per-user playlist and bounded recent history
//! - [`trending`] - Global play counts and the trending ranking
//! - [`recommend`] - Recommendations and the music-twin search
//! - [`system`] - Top-level instance producing status messages
//!
//! ### Supporting Modules
//!
//! - [`session`] - Logged-in user context
//! - [`error`] - Typed error taxonomy
//! - [`shell`] - Menu-driven command loop
//! - [`config`] - Runtime configuration
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use chattertunes::config::RuntimeConfig;
//! use chattertunes::system::ChatterTunes;
//!
//! let mut app = ChatterTunes::new(&RuntimeConfig::default());
//! app.register("alice", "pw1")?;
//! app.register("bob", "pw2")?;
//!
//! let (alice, _) = app.login("alice", "pw1")?;
//! app.add_friend(Some(&alice), "bob")?;
//! app.add_song(Some(&alice), "X")?;
//! app.add_song(Some(&alice), "Y")?;
//!
//! let (bob, _) = app.login("bob", "pw2")?;
//! app.add_song(Some(&bob), "Y")?;
//! app.add_song(Some(&bob), "Z")?;
//!
//! assert_eq!(app.recommend(Some(&alice))?, "Recommended songs: [Z]");
//! assert_eq!(app.music_twin(Some(&alice))?, "Your music twin is: bob (1 songs in common)");
//! # Ok::<(), chattertunes::error::CoreError>(())
//! ```
//!
//! ## Error Handling
//!
//! Core operations return [`error::CoreError`], whose `Display` text is the
//! message shown to the user. Application plumbing (I/O, config files) uses
//! `anyhow::Result`.

pub mod cli;
pub mod completion;
pub mod config;
pub mod directory;
pub mod error;
pub mod recommend;
pub mod session;
pub mod shell;
pub mod system;
pub mod trending;
pub mod user;
