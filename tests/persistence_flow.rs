//! End-to-end rounds through the console frontend with statistics on disk

use std::fs;
use std::io::Cursor;
use std::path::Path;
use wordle_game::controller::SessionController;
use wordle_game::output::ConsoleFrontend;
use wordle_game::stats::{JsonStatsStore, Statistics, StatisticsTracker};
use wordle_game::wordlists::WordStore;
use wordle_game::wordlists::loader::words_from_slice;

fn words() -> WordStore {
    WordStore::new(
        words_from_slice(&["robot"]),
        words_from_slice(&["allow", "lolly", "crane", "slate", "mouse", "salet"]),
    )
}

fn play(words: &WordStore, path: &Path, script: &str) -> (String, Statistics) {
    colored::control::set_override(false);

    let frontend = ConsoleFrontend::new(Cursor::new(script.to_string()), Vec::new());
    let mut controller = SessionController::new(words, JsonStatsStore::with_path(path), frontend);
    controller.run().unwrap();

    let stats = controller.tracker().stats();
    let output = String::from_utf8(controller.into_frontend().into_output()).unwrap();
    (output, stats)
}

#[test]
fn statistics_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("statistics.json");
    let words = words();

    // Win in two, then quit from the post-game menu
    let (_, first) = play(&words, &path, "2\nallow\nrobot\n4\n");
    assert_eq!(first.games_played, 1);
    assert!(path.exists());

    // Lose the next round
    let (output, second) = play(
        &words,
        &path,
        "2\nallow\nlolly\ncrane\nslate\nmouse\nsalet\n4\n",
    );
    assert!(output.contains("ROBOT"));
    assert_eq!(second.games_played, 2);
    assert_eq!(second.games_won, 1);
    assert_eq!(second.win_percent, 50);
    assert_eq!(second.current_streak, 0);
    assert_eq!(second.max_streak, 1);
    assert_eq!(second.guess_distribution, [0, 1, 0, 0, 0, 0]);

    let reloaded = StatisticsTracker::load_from(&JsonStatsStore::with_path(&path));
    assert_eq!(reloaded.stats(), second);
}

#[test]
fn corrupt_file_starts_from_zero_and_is_repaired() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statistics.json");
    fs::write(&path, "3,2,66,0,2,1,0,1,0").unwrap();
    let words = words();

    let (output, stats) = play(&words, &path, "3\n2\nrobot\n4\n");
    assert!(output.contains("STATISTICS"));
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.guess_distribution[0], 1);

    let reloaded = StatisticsTracker::load_from(&JsonStatsStore::with_path(&path));
    assert_eq!(reloaded.stats(), stats);
}

#[test]
fn abandoned_round_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statistics.json");
    let words = words();

    let (_, stats) = play(&words, &path, "2\nallow\nquit\n");
    assert_eq!(stats, Statistics::default());
    assert!(!path.exists());
}
