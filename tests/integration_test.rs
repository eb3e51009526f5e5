//! Integration tests for findplace
//!
//! These tests verify end-to-end functionality by creating temporary
//! directories of audio files and running the complete workflows against
//! the real file system.

use findplace::{
    commands::{
        find::{FindContext, FindOptions, run},
        list::write_listing,
    },
    config::FindPlaceConfig,
    deletion::{DeletionService, FsDeletion},
    playlist::{DEFAULT_AUDIO_EXTENSIONS, DirectoryPlaylist, PlaylistError, PlaylistSource},
    search::{Feedback, SearchError, SearchSession, SearchState},
    ui::{BufferedWriter, NoPlayback, ScriptedInput, mock::Answer},
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a directory holding `count` numbered segments
fn setup_audio_dir(count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..count {
        fs::write(dir.path().join(format!("{i:02}.mp3")), b"audio").unwrap();
    }
    dir
}

fn remaining_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn playlist() -> DirectoryPlaylist {
    DirectoryPlaylist::new(DEFAULT_AUDIO_EXTENSIONS)
}

/// Answer every probe as a listener who has heard everything up to `place`
fn answer_until_found(session: &mut SearchSession, place: usize) -> usize {
    let mut answers = 0;
    while let Some(SearchState::Step { index, .. }) = session.state().copied() {
        let sense = if index <= place {
            Feedback::Remembers
        } else {
            Feedback::DoesNotRemember
        };
        session.feedback(sense).unwrap();
        answers += 1;
    }
    answers
}

#[test]
fn test_search_over_directory_locates_place() {
    let dir = setup_audio_dir(40);
    let mut session = SearchSession::new();
    session.start_from(&playlist(), dir.path()).unwrap();

    let answers = answer_until_found(&mut session, 23);

    let located = session.located().unwrap();
    assert!(
        located.name == "23.mp3" || located.name == "24.mp3",
        "located {}",
        located.name
    );
    assert!(answers <= 6, "took {answers} answers");
}

#[test]
fn test_delete_earlier_removes_files_from_disk() {
    let dir = setup_audio_dir(16);
    let mut session = SearchSession::new();
    session.start_from(&playlist(), dir.path()).unwrap();
    session.select(10).unwrap();
    session.feedback(Feedback::Remembers).unwrap();
    while !session.state().unwrap().is_success() {
        session.feedback(Feedback::DoesNotRemember).unwrap();
    }
    let found = session.state().unwrap().index();
    let located = session.located().unwrap().name.clone();

    let outcome = session.delete_earlier(&FsDeletion::new()).unwrap();

    assert_eq!(outcome.deleted, found);
    assert_eq!(session.segments().len(), 16 - found);
    assert_eq!(session.located().unwrap().name, located);
    assert_eq!(remaining_files(dir.path()).len(), 16 - found);
    assert_eq!(remaining_files(dir.path())[0], located);
}

#[test]
fn test_failed_deletion_keeps_sequence_and_files() {
    let dir = setup_audio_dir(8);
    let mut session = SearchSession::new();
    session.start_from(&playlist(), dir.path()).unwrap();
    session.select(7).unwrap();
    session.feedback(Feedback::Remembers).unwrap();
    assert!(session.state().unwrap().is_success());

    // Something else removed a file since the directory was listed
    fs::remove_file(dir.path().join("03.mp3")).unwrap();

    let result = session.delete_earlier(&FsDeletion::new());
    assert!(matches!(result, Err(SearchError::Deletion(_))));
    assert_eq!(session.segments().len(), 8);
    assert!(!session.is_deletion_pending());
    assert_eq!(remaining_files(dir.path()).len(), 7);
}

#[test]
fn test_dry_run_find_leaves_files_and_sequence() {
    let dir = setup_audio_dir(11);
    let mut session = SearchSession::new();
    session.start_from(&playlist(), dir.path()).unwrap();

    let input = ScriptedInput::new([
        Answer::Select(0), // remembers
        Answer::Select(1), // does not remember
        Answer::Select(0), // remembers
        Answer::Select(0), // delete earlier
        Answer::Select(2), // done
    ]);
    let writer = BufferedWriter::new();
    let deleter = FsDeletion::new().dry_run(true);
    let ctx = FindContext {
        input: &input,
        output: &writer,
        deleter: &deleter,
        player: &NoPlayback,
    };
    let options = FindOptions {
        context: 2,
        confirm_deletions: true,
        quiet: false,
        dry_run: true,
    };

    let outcome = run(&mut session, &ctx, options).unwrap();

    assert_eq!(outcome.deleted, 0);
    assert_eq!(outcome.located.unwrap().name, "08.mp3");
    assert_eq!(session.segments().len(), 11);
    assert_eq!(remaining_files(dir.path()).len(), 11);
    assert!(writer.contains("Dry run: would delete 8 segment(s)"));
}

#[test]
fn test_two_phase_deletion_through_service() {
    let dir = setup_audio_dir(6);
    let mut session = SearchSession::new();
    session.start_from(&playlist(), dir.path()).unwrap();
    session.select(3).unwrap();
    session.feedback(Feedback::Remembers).unwrap();
    session.feedback(Feedback::DoesNotRemember).unwrap();
    let found = session.state().unwrap().index();

    let ticket = session.begin_delete_earlier().unwrap();
    assert!(matches!(
        session.restart(),
        Err(SearchError::DeletionPending)
    ));

    let result = FsDeletion::new().delete(ticket.segments());
    let outcome = session.complete_delete_earlier(ticket, result).unwrap();

    assert_eq!(outcome.deleted, found);
    assert_eq!(remaining_files(dir.path()).len(), 6 - found);
}

#[test]
fn test_empty_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "not audio").unwrap();

    let mut session = SearchSession::new();
    let result = session.start_from(&playlist(), dir.path());

    assert!(matches!(result, Err(SearchError::EmptyPlaylist)));
    assert!(!session.is_started());
}

#[test]
fn test_missing_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let result = playlist().list(&missing);

    assert!(matches!(result, Err(PlaylistError::NotFound(_))));
}

#[test]
fn test_listing_follows_playback_order() {
    let dir = TempDir::new().unwrap();
    for path in ["b/02.mp3", "b/01.mp3", "a/10.m4b", "top.mp3", ".hidden.mp3", "cover.jpg"] {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, b"x").unwrap();
    }

    let segments = playlist().list(dir.path()).unwrap();
    let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names, vec!["top.mp3", "10.m4b", "01.mp3", "02.mp3"]);
}

#[test]
fn test_list_command_json_output() {
    let dir = setup_audio_dir(3);
    let mut out = Vec::new();

    write_listing(&playlist(), dir.path(), true, false, &mut out).unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["00.mp3", "01.mp3", "02.mp3"]);
}

#[test]
fn test_config_ignore_patterns_apply_to_listing() {
    let dir = setup_audio_dir(3);
    fs::create_dir(dir.path().join("extras")).unwrap();
    fs::write(dir.path().join("extras/bonus.mp3"), b"x").unwrap();

    let config = FindPlaceConfig {
        ignore_patterns: vec!["extras/*".to_string()],
        ..FindPlaceConfig::default()
    };
    let segments = config.playlist().unwrap().list(dir.path()).unwrap();

    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| s.relative_path.is_empty()));
}

#[test]
fn test_interactive_find_then_delete() {
    let dir = setup_audio_dir(11);
    let mut session = SearchSession::new();
    session.start_from(&playlist(), dir.path()).unwrap();

    let input = ScriptedInput::new([
        Answer::Select(0), // remembers
        Answer::Select(1), // does not remember
        Answer::Select(0), // remembers
        Answer::Select(0), // delete earlier
        Answer::Confirm(true),
        Answer::Select(1), // done
    ]);
    let writer = BufferedWriter::new();
    let deleter = FsDeletion::new();
    let ctx = FindContext {
        input: &input,
        output: &writer,
        deleter: &deleter,
        player: &NoPlayback,
    };
    let options = FindOptions {
        context: 2,
        confirm_deletions: true,
        quiet: false,
        dry_run: false,
    };

    let outcome = run(&mut session, &ctx, options).unwrap();

    assert_eq!(outcome.located.unwrap().name, "08.mp3");
    assert_eq!(outcome.deleted, 8);
    assert_eq!(remaining_files(dir.path()), vec!["08.mp3", "09.mp3", "10.mp3"]);
    assert!(writer.contains("Deleted 8 segment(s)"));
    assert_eq!(input.remaining(), 0);
}
