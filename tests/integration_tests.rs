//! # Integration Tests for ChatterTunes
//!
//! End-to-end workflows through the public library API and the menu loop,
//! plus a couple of checks against the built binary.

use anyhow::Result;
use chattertunes::config::RuntimeConfig;
use chattertunes::error::{CoreError, ErrorKind};
use chattertunes::recommend::{MusicTwin, RecommendationEngine};
use chattertunes::shell::Shell;
use chattertunes::system::ChatterTunes;
use std::collections::BTreeSet;
use std::io::Cursor;
use std::process::Command;

/// Test helper: alice and bob registered, friends, with alice X,Y and bob Y,Z.
fn alice_and_bob() -> Result<ChatterTunes> {
    let mut app = ChatterTunes::new(&RuntimeConfig::default());
    app.register("alice", "pw1")?;
    app.register("bob", "pw2")?;

    let (alice, _) = app.login("alice", "pw1")?;
    assert_eq!(app.add_friend(Some(&alice), "bob")?, "Friend added!");
    app.add_song(Some(&alice), "X")?;
    app.add_song(Some(&alice), "Y")?;

    let (bob, _) = app.login("bob", "pw2")?;
    app.add_song(Some(&bob), "Y")?;
    app.add_song(Some(&bob), "Z")?;
    Ok(app)
}

#[cfg(test)]
mod workflow_tests {
    use super::*;

    #[test]
    fn test_alice_bob_scenario() -> Result<()> {
        let app = alice_and_bob()?;
        let (alice, _) = app.login("alice", "pw1")?;

        assert_eq!(app.recommend(Some(&alice))?, "Recommended songs: [Z]");
        assert_eq!(
            app.music_twin(Some(&alice))?,
            "Your music twin is: bob (1 songs in common)"
        );

        let engine = RecommendationEngine::new(app.directory());
        let user = app.directory().session_user(&alice)?;
        assert_eq!(engine.recommend(user), BTreeSet::from(["Z".to_string()]));
        assert_eq!(
            engine.find_music_twin(user),
            Some(MusicTwin { username: "bob".into(), overlap: 1 })
        );
        Ok(())
    }

    #[test]
    fn test_non_friend_never_recommended_or_twinned() -> Result<()> {
        let mut app = alice_and_bob()?;
        app.register("eve", "pw3")?;
        let (eve, _) = app.login("eve", "pw3")?;
        for song in ["X", "Y", "Q"] {
            app.add_song(Some(&eve), song)?;
        }

        let (alice, _) = app.login("alice", "pw1")?;
        assert_eq!(app.recommend(Some(&alice))?, "Recommended songs: [Z]");
        assert_eq!(
            app.music_twin(Some(&alice))?,
            "Your music twin is: bob (1 songs in common)"
        );

        // eve overlaps with alice on X and Y but has no friends at all.
        assert_eq!(app.recommend(Some(&eve))?, "No recommendations right now.");
        assert_eq!(app.music_twin(Some(&eve))?, "No music twin found yet!");
        Ok(())
    }

    #[test]
    fn test_register_twice_conflicts() -> Result<()> {
        let mut app = ChatterTunes::new(&RuntimeConfig::default());
        app.register("alice", "pw")?;
        app.login("alice", "pw")?;

        let err = app.register("alice", "pw").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "Username already exists!");
        Ok(())
    }

    #[test]
    fn test_friendship_is_symmetric() -> Result<()> {
        let app = alice_and_bob()?;
        let alice = app.directory().user("alice").expect("alice exists");
        let bob = app.directory().user("bob").expect("bob exists");
        assert!(alice.is_friend("bob"));
        assert!(bob.is_friend("alice"));
        Ok(())
    }

    #[test]
    fn test_history_keeps_last_five() -> Result<()> {
        let mut app = ChatterTunes::new(&RuntimeConfig::default());
        app.register("alice", "pw")?;
        let (alice, _) = app.login("alice", "pw")?;
        for song in ["a", "b", "c", "a", "d", "e", "a"] {
            app.add_song(Some(&alice), song)?;
        }

        let user = app.directory().session_user(&alice)?;
        let history: Vec<_> = user.recent_history().collect();
        assert_eq!(history, vec!["a", "e", "d", "a", "c"]);
        assert_eq!(user.playlist().len(), 5);
        assert_eq!(app.trending_tracker().count("a"), 3);
        Ok(())
    }

    #[test]
    fn test_trending_across_users() -> Result<()> {
        let mut app = ChatterTunes::new(&RuntimeConfig::default());
        app.register("alice", "pw")?;
        app.register("bob", "pw")?;
        let (alice, _) = app.login("alice", "pw")?;
        let (bob, _) = app.login("bob", "pw")?;

        app.add_song(Some(&alice), "Y")?;
        app.add_song(Some(&alice), "X")?;
        app.add_song(Some(&bob), "X")?;
        app.add_song(Some(&alice), "X")?;

        let ranked = app.trending_tracker().ranked_songs();
        assert_eq!(ranked[0], ("X".to_string(), 3));
        assert_eq!(ranked[1], ("Y".to_string(), 1));
        Ok(())
    }

    #[test]
    fn test_rejected_friend_request_has_no_effect() -> Result<()> {
        let mut app = alice_and_bob()?;
        let (alice, _) = app.login("alice", "pw1")?;
        assert_eq!(
            app.add_friend(Some(&alice), "nobody"),
            Err(CoreError::UserNotFound("nobody".into()))
        );
        assert_eq!(app.directory().user("alice").map(|u| u.friends().len()), Some(1));
        Ok(())
    }
}

#[cfg(test)]
mod shell_tests {
    use super::*;

    fn run(script: &str) -> Result<String> {
        let mut app = ChatterTunes::new(&RuntimeConfig::default());
        let mut out = Vec::new();
        Shell::new(&mut app, Cursor::new(script.to_owned()), &mut out)
            .show_banner(false)
            .run()?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_full_menu_session() -> Result<()> {
        let script = "\
1\nalice\npw1\n\
1\nbob\npw2\n\
2\nalice\npw1\n1\nbob\n2\nX\n2\nY\n7\n\
2\nbob\npw2\n2\nY\n2\nZ\n7\n\
2\nalice\npw1\n4\n6\n5\n7\n\
3\n";
        let out = run(script)?;

        assert!(out.contains("Friend added!"));
        assert!(out.contains("Recommended songs: [Z]"));
        assert!(out.contains("Your music twin is: bob (1 songs in common)"));
        assert!(out.contains("Trending Songs:\nY (2 plays)\nX (1 plays)\nZ (1 plays)\n"));
        assert!(out.ends_with("Goodbye!\n"));
        Ok(())
    }

    #[test]
    fn test_unknown_login() -> Result<()> {
        let out = run("2\nghost\npw\n3\n")?;
        assert!(out.contains("User not found!"));
        assert!(!out.contains("User Dashboard"));
        Ok(())
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn test_cli_help_displays_correctly() {
        let output = Command::new(env!("CARGO_BIN_EXE_chattertunes"))
            .arg("--help")
            .output()
            .expect("Failed to run help command");

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("chattertunes"));
        assert!(stdout.contains("interactive"));
        assert!(stdout.contains("script"));
        assert!(stdout.contains("completion"));
    }

    #[test]
    fn test_script_command_runs_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let script = dir.path().join("demo.txt");
        std::fs::write(&script, "1\nalice\npw\n3\n")?;

        let output = Command::new(env!("CARGO_BIN_EXE_chattertunes"))
            .arg("script")
            .arg(&script)
            .output()?;

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("User registered successfully!"));
        assert!(stdout.contains("Goodbye!"));
        Ok(())
    }

    #[test]
    fn test_missing_script_fails() {
        let output = Command::new(env!("CARGO_BIN_EXE_chattertunes"))
            .args(["script", "/definitely/not/here.txt"])
            .output()
            .expect("Failed to run script command");
        assert!(!output.status.success());
    }
}
