//! End-to-end session flow against a file-backed store.

use std::fs;
use std::time::{Duration, Instant};

use serde_json::json;
use tempfile::TempDir;
use tracker_core::{CounterKind, GameConfig, GameState, ModalTarget, PcgRng, PlayerId};
use tracker_runtime::{
    Direction, FileStateRepository, HoldGesture, Intent, Session, StateRepository,
};

const P0: PlayerId = PlayerId(0);
const P1: PlayerId = PlayerId(1);
const P2: PlayerId = PlayerId(2);
const P3: PlayerId = PlayerId(3);

fn open(dir: &TempDir) -> Session<PcgRng> {
    let repository = FileStateRepository::new(dir.path()).expect("create repository");
    Session::restore(Box::new(repository), &GameConfig::default(), PcgRng::new(99))
}

#[test]
fn full_game_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut session = open(&dir);
    assert_eq!(session.state(), &GameState::default());

    // Five players, one random first player.
    session.handle(Intent::AddPlayer);
    session.handle(Intent::PickRandomPlayer);
    let first = session.state().selected.expect("someone goes first");
    assert!(session.state().is_visible(first));

    // Tap and hold on p1's minus side.
    let start = Instant::now();
    let mut minus = HoldGesture::new(Direction::Decrease);
    minus.press(start);
    let held = minus.poll(start + Duration::from_millis(2100));
    assert_eq!(held.count, 2);
    session.handle(Intent::AdjustLife {
        player: P1,
        delta: held.delta(),
    });
    assert!(minus.release(start + Duration::from_millis(2300)).is_empty());
    assert_eq!(session.state().players[1].life, 30);
    assert_eq!(session.state().selected, None);

    // p3 deals commander damage to p0.
    session.handle(Intent::ToggleCommanderDamage(P3));
    session.handle(Intent::AdjustLife {
        player: P0,
        delta: 7,
    });
    session.handle(Intent::ToggleCommanderDamage(P3));

    // p2 picks up poison.
    session.handle(Intent::ToggleCounter {
        kind: CounterKind::Poison,
        player: P2,
    });
    session.handle(Intent::AdjustLife {
        player: P2,
        delta: 3,
    });

    let before_restart = session.state().clone();
    drop(session);

    let restored = open(&dir);
    assert_eq!(restored.state(), &before_restart);
    assert_eq!(restored.state().visible_count, 5);
    assert_eq!(restored.state().players[0].commander_damage_from(P3), 7);
    assert_eq!(restored.state().players[2].counters.poison, 3);
    assert_eq!(
        restored.state().modal,
        ModalTarget::CounterTarget {
            kind: CounterKind::Poison,
            player: P2
        }
    );
}

#[test]
fn corrupt_store_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let repository = FileStateRepository::new(dir.path()).unwrap();
    fs::write(repository.path(), "definitely not json").unwrap();

    let session = open(&dir);
    assert_eq!(session.state(), &GameState::default());
}

#[test]
fn legacy_store_is_upgraded_on_first_save() {
    let dir = TempDir::new().unwrap();
    let repository = FileStateRepository::new(dir.path()).unwrap();
    let legacy = json!({
        "version": 1,
        "players": [
            { "id": "p0", "life": 40, "color": "#e74c3c" },
            { "id": "p1", "life": 35, "color": "#3498db" },
            { "id": "p2", "life": 40, "color": "#2ecc71" },
            { "id": "p3", "life": 40, "color": "#f39c12" },
            { "id": "p4", "life": 40, "color": "#9b59b6" },
            { "id": "p5", "life": 40, "color": "#1abc9c" }
        ],
        "visibleCount": 2,
        "selectedPlayerId": "p4"
    });
    fs::write(repository.path(), legacy.to_string()).unwrap();

    let mut session = open(&dir);
    assert_eq!(session.state().visible_count, 2);
    assert_eq!(session.state().players[1].life, 35);
    // p4 is hidden, so the stale highlight is dropped.
    assert_eq!(session.state().selected, None);

    session.handle(Intent::AdjustLife {
        player: P1,
        delta: 1,
    });

    let document = repository.load().unwrap().unwrap();
    assert_eq!(document["version"], 2);
    assert_eq!(document["players"][1]["life"], 36);
    assert_eq!(document["players"][1]["colorIndex"], 1);
    assert_eq!(document["commanderDamageSourceId"], serde_json::Value::Null);
}
