//! Tests for driver-level game state.

use minimax_tictactoe::{Game, Move, MoveError, Outcome, Player};

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.outcome(), Outcome::InProgress);

    let outcome = game.play(Move::new(1, 1)).unwrap();
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(game.history(), &[Move::new(1, 1)]);
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = Game::new();
    game.play(Move::new(1, 1)).unwrap();

    let before = game.clone();
    let result = game.play(Move::new(1, 1));
    assert_eq!(result, Err(MoveError::SquareOccupied(Move::new(1, 1))));
    assert_eq!(game, before);
}

#[test]
fn test_wrong_player_rejected() {
    let mut game = Game::new();
    let result = game.play_as(Player::O, Move::new(0, 0));
    assert_eq!(result, Err(MoveError::WrongPlayer(Player::O)));
    assert!(game.play_as(Player::X, Move::new(0, 0)).is_ok());
}

#[test]
fn test_win_is_absorbing() {
    // X: top row, O: middle row
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)].map(|(r, c)| Move::new(r, c));
    let mut game = Game::replay(&moves).unwrap();
    assert_eq!(game.outcome(), Outcome::Win(Player::X));
    assert_eq!(game.to_move(), Player::X);

    assert_eq!(game.play(Move::new(2, 2)), Err(MoveError::GameOver));
    assert_eq!(game.play_computer(), Err(MoveError::GameOver));
    assert_eq!(game.history().len(), 5);
}

#[test]
fn test_replay_stops_at_first_error() {
    let moves = [Move::new(0, 0), Move::new(0, 0)];
    assert_eq!(
        Game::replay(&moves),
        Err(MoveError::SquareOccupied(Move::new(0, 0)))
    );
}

#[test]
fn test_computer_replies_to_corner_with_centre() {
    let mut game = Game::new();
    game.play(Move::new(0, 0)).unwrap();
    let (reply, outcome) = game.play_computer().unwrap();
    assert_eq!(reply, Move::new(1, 1));
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_self_play_is_a_draw() {
    let mut game = Game::new();
    while !game.outcome().is_terminal() {
        game.play_computer().unwrap();
    }

    assert_eq!(game.outcome(), Outcome::Draw);
    let expected = [
        (0, 0),
        (1, 1),
        (0, 1),
        (0, 2),
        (2, 0),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 2),
    ]
    .map(|(r, c)| Move::new(r, c));
    assert_eq!(game.history(), &expected);
}

#[test]
fn test_game_serializes_to_json() {
    let game = Game::replay(&[Move::new(2, 0)]).unwrap();
    let json = serde_json::to_string(&game).unwrap();
    let back: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_deserialize_rejects_wrong_side_to_move() {
    let mut value = serde_json::to_value(Game::new()).unwrap();
    value["to_move"] = serde_json::json!("O");

    let err = serde_json::from_value::<Game>(value).unwrap_err();
    assert!(err.to_string().contains("does not match the move history"));
}

#[test]
fn test_deserialize_rejects_board_without_history() {
    // X holds the top row but the history is empty.
    let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)].map(|(r, c)| Move::new(r, c));
    let mut value = serde_json::to_value(Game::replay(&moves).unwrap()).unwrap();
    value["history"] = serde_json::json!([]);

    assert!(serde_json::from_value::<Game>(value).is_err());
}

#[test]
fn test_deserialize_rejects_illegal_history() {
    let mut value = serde_json::to_value(Game::new()).unwrap();
    value["history"] = serde_json::json!([{ "row": 3, "col": 0 }]);
    assert!(serde_json::from_value::<Game>(value).is_err());

    let mut value = serde_json::to_value(Game::new()).unwrap();
    value["history"] = serde_json::json!([{ "row": 1, "col": 1 }, { "row": 1, "col": 1 }]);
    assert!(serde_json::from_value::<Game>(value).is_err());
}

#[test]
fn test_deserialized_game_keeps_playing() {
    let game = Game::replay(&[Move::new(0, 0), Move::new(1, 1)]).unwrap();
    let json = serde_json::to_string(&game).unwrap();

    let mut back: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_move(), Player::X);
    assert_eq!(back.play(Move::new(2, 2)), Ok(Outcome::InProgress));
    assert_eq!(back.history().len(), 3);
}
