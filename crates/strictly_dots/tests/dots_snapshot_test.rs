//! Tests for the read-only board snapshot.

use strictly_dots::{BoardSnapshot, Cell, Color, Dot, Edge, GameState, Player, PlayerId};

fn game_with_claim() -> GameState {
    let mut game = GameState::new_game(
        2,
        vec![Player::new("Red", Color::RED), Player::new("Blue", Color::BLUE)],
    )
    .unwrap();
    for edge in Cell::new(1, 1).edges() {
        let (a, b) = edge.endpoints();
        game.attempt_move(a, b).unwrap();
    }
    game
}

#[test]
fn test_snapshot_reflects_board() {
    let game = game_with_claim();
    let snapshot = game.current_board();

    assert_eq!(*snapshot.grid_size(), 2);
    assert_eq!(snapshot.drawn_edges().len(), 4);
    assert_eq!(snapshot.cell_owners(), &vec![(Cell::new(1, 1), PlayerId::new(1))]);
    assert_eq!(snapshot.owner_of(Cell::new(1, 1)), Some(PlayerId::new(1)));
    assert_eq!(snapshot.owner_of(Cell::new(0, 0)), None);
    assert_eq!(snapshot.scores().get(PlayerId::new(1)), 1);
    assert_eq!(*snapshot.active_player(), PlayerId::new(1));

    let top = Edge::new(Dot::new(1, 1), Dot::new(1, 2)).unwrap();
    assert!(snapshot.is_drawn(top));
    assert!(!snapshot.is_drawn(Edge::new(Dot::new(0, 0), Dot::new(0, 1)).unwrap()));
}

#[test]
fn test_snapshot_is_detached_from_game() {
    let mut game = game_with_claim();
    let snapshot = game.current_board();
    game.attempt_move(Dot::new(0, 0), Dot::new(0, 1)).unwrap();

    assert_eq!(snapshot.drawn_edges().len(), 4);
    assert_eq!(game.current_board().drawn_edges().len(), 5);
}

#[test]
fn test_snapshot_json_roundtrip() {
    let snapshot = game_with_claim().current_board();
    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_snapshot_lookups_survive_reordered_json() {
    let snapshot = game_with_claim().current_board();
    let mut value = serde_json::to_value(&snapshot).unwrap();
    for key in ["drawn_edges", "cell_owners"] {
        value[key].as_array_mut().unwrap().reverse();
    }
    let parsed: BoardSnapshot = serde_json::from_value(value).unwrap();

    assert_eq!(parsed, snapshot);
    for (edge, _) in snapshot.drawn_edges() {
        assert!(parsed.is_drawn(*edge));
    }
    assert_eq!(parsed.owner_of(Cell::new(1, 1)), Some(PlayerId::new(1)));
}

#[test]
fn test_roster_resolves_colors_for_rendering() {
    let game = game_with_claim();
    let snapshot = game.current_board();
    let owner = snapshot.owner_of(Cell::new(1, 1)).unwrap();
    let player = game.roster().get(owner).unwrap();
    assert_eq!(player.name(), "Blue");
    assert_eq!(*player.color(), Color::BLUE);
}
