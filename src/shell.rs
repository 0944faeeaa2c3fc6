//! # Menu-Driven Command Loop
//!
//! The interactive front end: a welcome menu (register, login, exit) and,
//! after a successful login, a user dashboard. Input is read a line at a
//! time from any [`BufRead`] and all prompts and messages go to any
//! [`Write`], so the same loop serves a terminal, a script file or a test.
//!
//! End of input ends the loop cleanly from either menu.

use crate::session::Session;
use crate::system::ChatterTunes;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Welcome menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Register,
    Login,
    Exit,
}

impl MainChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.parse::<u8>().ok()? {
            1 => Some(Self::Register),
            2 => Some(Self::Login),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Dashboard entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardChoice {
    AddFriend,
    AddSong,
    ViewPlaylist,
    Recommend,
    Trending,
    MusicTwin,
    Logout,
}

impl DashboardChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.parse::<u8>().ok()? {
            1 => Some(Self::AddFriend),
            2 => Some(Self::AddSong),
            3 => Some(Self::ViewPlaylist),
            4 => Some(Self::Recommend),
            5 => Some(Self::Trending),
            6 => Some(Self::MusicTwin),
            7 => Some(Self::Logout),
            _ => None,
        }
    }
}

/// Why the dashboard returned.
enum DashboardExit {
    Logout,
    EndOfInput,
}

/// The menu loop, bound to a [`ChatterTunes`] instance and an input/output pair.
pub struct Shell<'a, R, W> {
    system: &'a mut ChatterTunes,
    input: R,
    output: W,
    show_banner: bool,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(system: &'a mut ChatterTunes, input: R, output: W) -> Self {
        Self {
            system,
            input,
            output,
            show_banner: true,
        }
    }

    /// Toggle the welcome banner above the main menu.
    #[must_use]
    pub fn show_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run until the user exits or input runs out.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the input or output stream; user mistakes are
    /// reported as messages and the loop goes on.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.show_banner {
                self.say("\n=== Welcome to ChatterTunes ===")?;
            }
            self.say("1. Register\n2. Login\n3. Exit")?;
            let Some(line) = self.prompt("Choice: ")? else {
                debug!("Input closed at main menu");
                return Ok(());
            };

            match MainChoice::parse(&line) {
                Some(MainChoice::Register) => self.register()?,
                Some(MainChoice::Login) => {
                    if let Some(session) = self.login()? {
                        if let DashboardExit::EndOfInput = self.dashboard(&session)? {
                            return Ok(());
                        }
                    }
                }
                Some(MainChoice::Exit) => {
                    self.say("Goodbye!")?;
                    return Ok(());
                }
                None => self.say("Invalid choice!")?,
            }
        }
    }

    fn register(&mut self) -> Result<()> {
        let Some((username, password)) = self.credentials()? else {
            return Ok(());
        };
        let message = report(self.system.register(&username, &password));
        self.say(&message)
    }

    fn login(&mut self) -> Result<Option<Session>> {
        let Some((username, password)) = self.credentials()? else {
            return Ok(None);
        };
        match self.system.login(&username, &password) {
            Ok((session, message)) => {
                self.say(&message)?;
                Ok(Some(session))
            }
            Err(err) => {
                self.say(&err.to_string())?;
                Ok(None)
            }
        }
    }

    fn credentials(&mut self) -> Result<Option<(String, String)>> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    fn dashboard(&mut self, session: &Session) -> Result<DashboardExit> {
        loop {
            self.say("\n--- User Dashboard ---")?;
            self.say(
                "1. Add Friend\n2. Add Song to Playlist\n3. View My Playlist\n\
                 4. Recommend Songs\n5. Show Trending Songs\n6. Find My Music Twin\n7. Logout",
            )?;
            let Some(line) = self.prompt("Choice: ")? else {
                debug!("Input closed at dashboard");
                return Ok(DashboardExit::EndOfInput);
            };

            let message = match DashboardChoice::parse(&line) {
                Some(DashboardChoice::AddFriend) => {
                    let Some(friend) = self.prompt("Enter friend's username: ")? else {
                        return Ok(DashboardExit::EndOfInput);
                    };
                    report(self.system.add_friend(Some(session), &friend))
                }
                Some(DashboardChoice::AddSong) => {
                    let Some(song) = self.prompt("Enter song name: ")? else {
                        return Ok(DashboardExit::EndOfInput);
                    };
                    report(self.system.add_song(Some(session), &song))
                }
                Some(DashboardChoice::ViewPlaylist) => report(self.system.view_playlist(Some(session))),
                Some(DashboardChoice::Recommend) => report(self.system.recommend(Some(session))),
                Some(DashboardChoice::Trending) => self.system.trending(),
                Some(DashboardChoice::MusicTwin) => report(self.system.music_twin(Some(session))),
                Some(DashboardChoice::Logout) => {
                    info!("User `{}' logged out.", session.username());
                    self.say("Logged out successfully.")?;
                    return Ok(DashboardExit::Logout);
                }
                None => "Invalid choice!".to_owned(),
            };
            self.say(&message)?;
        }
    }

    /// Print `text` without a newline and read one line, `None` at EOF.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input line")?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_owned()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").context("Failed to write output")
    }
}

/// Success message, or the error's own status text.
fn report<E: std::fmt::Display>(result: std::result::Result<String, E>) -> String {
    result.unwrap_or_else(|err| err.to_string())
}
