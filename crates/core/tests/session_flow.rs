use matgo_core::{
    catalog, Card, EndReason, Event, EventBus, GameError, GameSession, GoStopChoice, GoStopState,
    MemoryProfile, Phase, Seat, GO_STOP_TICKS,
};
use std::collections::HashSet;

fn card(month: u8, ordinal: u8) -> Card {
    catalog()
        .into_iter()
        .find(|card| card.id.month == month && card.id.ordinal == ordinal)
        .expect("catalog card")
}

/// Deck + hands + board + collections must always hold exactly the 48-card
/// catalog with no duplicate ids.
fn assert_conservation(session: &GameSession) {
    let state = &session.state;
    let mut ids: Vec<String> = Vec::new();
    ids.extend(session.deck.cards().iter().map(|card| card.id.to_string()));
    ids.extend(state.player_hand.iter().map(|card| card.id.to_string()));
    ids.extend(state.ai_hand.iter().map(|card| card.id.to_string()));
    ids.extend(state.board.iter().map(|card| card.id.to_string()));
    ids.extend(state.player_collection.iter().map(|card| card.id.to_string()));
    ids.extend(state.ai_collection.iter().map(|card| card.id.to_string()));
    assert_eq!(ids.len(), 48, "cards lost or duplicated");
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 48, "duplicate card ids across containers");
}

/// Drives whatever the current phase asks for: first hand card (then its
/// first match) on the human turn, the engine's own AI path otherwise.
fn step(session: &mut GameSession, go_stop: GoStopChoice, events: &mut EventBus) {
    match session.state.phase {
        Phase::PlayerTurn => {
            session.select_card(0, events).expect("select hand card");
            if let Some(selection) = session.state.selection.clone() {
                let target = selection.matches[0];
                session
                    .select_board_card(target, events)
                    .expect("select board card");
            }
        }
        Phase::AiTurn => {
            let ticket = session.scheduler.take().expect("ai play scheduled");
            session.dispatch(ticket, events).expect("dispatch ai play");
        }
        Phase::GoStop => {
            session.select_go_stop(go_stop, events).expect("go/stop");
        }
        other => panic!("unexpected phase {other:?}"),
    }
}

#[test]
fn full_game_conserves_all_48_cards() {
    let mut session = GameSession::new(11);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    assert_conservation(&session);

    let mut steps = 0;
    while session.state.phase != Phase::GameOver {
        step(&mut session, GoStopChoice::Stop, &mut events);
        assert_conservation(&session);
        steps += 1;
        assert!(steps < 200, "game did not terminate");
    }
    assert!(session.state.result.is_some());
}

#[test]
fn go_limit_or_exhaustion_ends_a_go_heavy_game() {
    let mut session = GameSession::new(23);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);

    let mut steps = 0;
    while session.state.phase != Phase::GameOver {
        step(&mut session, GoStopChoice::Go, &mut events);
        assert_conservation(&session);
        steps += 1;
        assert!(steps < 400, "game did not terminate");
    }
    let result = session.state.result.expect("result");
    assert!(matches!(
        result.reason,
        EndReason::GoLimit | EndReason::Exhausted
    ));
    assert!(session.state.go_count <= 3);
}

#[test]
fn game_over_fires_exactly_once() {
    let mut session = GameSession::new(5);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    while session.state.phase != Phase::GameOver {
        step(&mut session, GoStopChoice::Stop, &mut events);
    }
    let game_overs = events
        .drain()
        .filter(|event| matches!(event, Event::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);

    // Terminal phase rejects further play commands.
    assert!(matches!(
        session.select_card(0, &mut events),
        Err(GameError::InvalidPhase(Phase::GameOver))
    ));
}

#[test]
fn dealing_hands_out_7_7_8() {
    let mut session = GameSession::new(1);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    assert_eq!(session.state.player_hand.len(), 7);
    assert_eq!(session.state.ai_hand.len(), 7);
    assert_eq!(session.state.board.len(), 8);
    assert_eq!(session.deck.remaining(), 25);
    assert!(matches!(
        session.state.phase,
        Phase::PlayerTurn | Phase::AiTurn
    ));
    assert_eq!(session.state.round, 1);
}

fn scripted_player_turn(session: &mut GameSession) {
    session.state.phase = Phase::PlayerTurn;
    session.state.turn = Seat::Player;
    session.state.selection = None;
}

#[test]
fn capture_is_atomic_and_mismatch_rejected() {
    let mut session = GameSession::new(2);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    scripted_player_turn(&mut session);
    session.state.player_hand = vec![card(3, 3)];
    session.state.board = vec![card(9, 1), card(3, 1), card(3, 2)];

    session.select_card(0, &mut events).expect("select");
    let selection = session.state.selection.clone().expect("selection");
    assert_eq!(selection.matches, vec![1, 2]);

    // Wrong target: rejected, nothing moves.
    assert!(matches!(
        session.select_board_card(0, &mut events),
        Err(GameError::NotAMatch)
    ));
    assert_eq!(session.state.player_hand.len(), 1);
    assert_eq!(session.state.board.len(), 3);
    assert!(session.state.player_collection.is_empty());
    assert!(session.state.selection.is_some());

    // Valid target: exactly the pair moves into the collection.
    session.select_board_card(1, &mut events).expect("capture");
    assert_eq!(session.state.player_collection.len(), 2);
    assert!(session.state.player_collection.contains(card(3, 3).id));
    assert!(session.state.player_collection.contains(card(3, 1).id));
    assert_eq!(session.state.board.len(), 2);
    assert!(session.state.selection.is_none());
}

#[test]
fn unmatched_card_is_discarded_to_board() {
    let mut session = GameSession::new(3);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    scripted_player_turn(&mut session);
    session.state.player_hand = vec![card(7, 1), card(7, 2)];
    session.state.board = vec![card(9, 1)];

    session.select_card(0, &mut events).expect("discard play");
    assert!(session
        .state
        .board
        .iter()
        .any(|board_card| board_card.id == card(7, 1).id));
    assert!(session.state.player_collection.is_empty());
}

#[test]
fn board_selection_without_hand_selection_is_rejected() {
    let mut session = GameSession::new(4);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    scripted_player_turn(&mut session);
    assert!(matches!(
        session.select_board_card(0, &mut events),
        Err(GameError::NoSelection)
    ));
}

fn open_go_stop(session: &mut GameSession, decider: Seat, points: u32) {
    session.state.phase = Phase::GoStop;
    session.state.go_stop = Some(GoStopState {
        decider,
        current_points: points,
        ticks_left: GO_STOP_TICKS,
        resolved: false,
    });
}

#[test]
fn go_continues_play_and_counts() {
    let mut session = GameSession::new(6);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    session.state.player_score = 7;
    session.state.ai_score = 3;
    session.state.go_count = 0;
    open_go_stop(&mut session, Seat::Player, 7);

    session
        .select_go_stop(GoStopChoice::Go, &mut events)
        .expect("go");
    assert_eq!(session.state.go_count, 1);
    assert_eq!(session.state.go_points, vec![7]);
    assert_eq!(session.state.phase, Phase::AiTurn);
    assert!(session.state.result.is_none());
}

#[test]
fn stop_ends_game_with_go_bonus_on_both_sides() {
    let mut session = GameSession::new(7);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    session.state.player_score = 7;
    session.state.ai_score = 3;
    session.state.go_count = 2;
    open_go_stop(&mut session, Seat::Player, 7);

    session
        .select_go_stop(GoStopChoice::Stop, &mut events)
        .expect("stop");
    let result = session.state.result.expect("result");
    assert_eq!(result.reason, EndReason::Stopped);
    // The go bonus lands on both totals, not only the stopping side's.
    assert_eq!(result.player_score, 9);
    assert_eq!(result.ai_score, 5);
    assert!(result.player_won);
}

#[test]
fn countdown_expiry_defaults_to_stop_with_timeout_reason() {
    let mut session = GameSession::new(8);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    session.state.player_score = 7;
    open_go_stop(&mut session, Seat::Player, 7);

    for _ in 0..GO_STOP_TICKS {
        session.tick_go_stop(&mut events).expect("tick");
    }
    let result = session.state.result.expect("result");
    assert_eq!(result.reason, EndReason::TimeoutStopped);
}

#[test]
fn go_stop_resolution_races_resolve_once() {
    let mut session = GameSession::new(9);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    session.state.player_score = 7;
    open_go_stop(&mut session, Seat::Player, 7);

    // A tick that fires in the same instant as the explicit choice must be
    // a rejected no-op once the guard is set.
    if let Some(prompt) = session.state.go_stop.as_mut() {
        prompt.resolved = true;
    }
    assert!(matches!(
        session.tick_go_stop(&mut events),
        Err(GameError::AlreadyResolved)
    ));
    assert!(matches!(
        session.select_go_stop(GoStopChoice::Go, &mut events),
        Err(GameError::AlreadyResolved)
    ));
    assert_eq!(session.state.go_count, 0);
}

#[test]
fn tie_leaves_player_as_non_winner() {
    let mut session = GameSession::new(10);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    session.state.player_score = 7;
    session.state.ai_score = 7;
    open_go_stop(&mut session, Seat::Player, 7);

    session
        .select_go_stop(GoStopChoice::Stop, &mut events)
        .expect("stop");
    let result = session.state.result.expect("result");
    assert!(!result.player_won);
    assert_eq!(result.reward, 10);
}

#[test]
fn reward_formula_credits_the_profile() {
    let mut session = GameSession::new(12);
    session.set_profile(Some(Box::new(MemoryProfile::default())));
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    session.state.player_score = 9;
    session.state.ai_score = 3;
    session.state.go_count = 1;
    open_go_stop(&mut session, Seat::Player, 9);

    session
        .select_go_stop(GoStopChoice::Stop, &mut events)
        .expect("stop");
    let result = session.state.result.expect("result");
    assert_eq!(result.player_score, 10);
    assert_eq!(result.reward, 200);
    assert_eq!(session.profile_mut().expect("profile").coins(), 200);
}

#[test]
fn exhaustion_terminates_the_match() {
    let mut session = GameSession::new(13);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    scripted_player_turn(&mut session);
    // Drain the deck; the last hand card is about to be discarded.
    while session.deck.draw().is_some() {}
    session.state.player_hand = vec![card(7, 1)];
    session.state.board = vec![card(9, 1)];

    session.select_card(0, &mut events).expect("final play");
    assert_eq!(session.state.phase, Phase::GameOver);
    let result = session.state.result.expect("result");
    assert_eq!(result.reason, EndReason::Exhausted);
}

#[test]
fn stale_ticket_from_previous_game_is_ignored() {
    let mut session = GameSession::new(14);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    // Force an AI pending action regardless of the coin flip.
    session.state.phase = Phase::AiTurn;
    session.state.turn = Seat::Ai;
    session.scheduler.schedule(matgo_core::PendingAction::AiPlay);
    let stale = session.scheduler.take().expect("pending");

    session.start_new_game(&mut events);
    let hand_before = session.state.hand(session.state.turn).len();
    session.dispatch(stale, &mut events).expect("stale dispatch");
    assert_eq!(session.state.hand(session.state.turn).len(), hand_before);
}

#[test]
fn ai_turn_without_strategy_falls_back_to_a_legal_play() {
    let mut session = GameSession::new(15);
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    session.state.phase = Phase::AiTurn;
    session.state.turn = Seat::Ai;
    session.state.ai_hand = vec![card(3, 3)];
    session.state.board = vec![card(3, 1), card(9, 1)];

    session.play_ai_turn(&mut events).expect("fallback play");
    // The only hand card matched month 3, so the fallback must capture.
    assert_eq!(session.state.ai_collection.len(), 2);
    assert!(session.state.ai_collection.contains(card(3, 3).id));
    assert!(session.state.ai_collection.contains(card(3, 1).id));
}
