use matgo_ai::{strategy_for, Difficulty};
use matgo_core::{
    EventBus, GameSession, GoStopChoice, Phase, ProfileStore, Seat, Strategy, TableView,
};
use matgo_store::{default_profile_path, FileProfile};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

mod view;

const AI_TURN_DELAY: Duration = Duration::from_millis(600);
const GO_STOP_TICK_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy)]
struct CliOptions {
    seed: Option<u64>,
    difficulty: Option<Difficulty>,
    auto: bool,
    games: u32,
}

const USAGE: &str = "usage: matgo-cli [--seed N] [--difficulty easy|normal|hard] [--auto] [--games N]

interactive commands:
  <n>        select hand card n (or board card n while a capture is open)
  play <n>   select hand card n explicitly
  take <n>   capture board card n with the selected hand card
  state      reprint the table
  settings   print the stored settings document
  coins      print the coin total
  new        abandon the game and start another
  quit       exit
go/stop prompt: type go or stop, or press enter to let the countdown run.";

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions {
        seed: None,
        difficulty: None,
        auto: false,
        games: 1,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = Some(value.parse().map_err(|_| format!("bad seed: {value}"))?);
            }
            "--difficulty" => {
                let value = args.next().ok_or("--difficulty needs a value")?;
                options.difficulty = Some(value.parse().map_err(|err| format!("{err}"))?);
            }
            "--auto" => options.auto = true,
            "--games" => {
                let value = args.next().ok_or("--games needs a value")?;
                options.games = value.parse().map_err(|_| format!("bad game count: {value}"))?;
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument: {other}\n{USAGE}")),
        }
    }
    Ok(options)
}

fn main() {
    env_logger::init();
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let profile = default_profile_path().map(FileProfile::open);
    let mut settings = profile
        .as_ref()
        .map(|profile| profile.load())
        .unwrap_or_default();
    let difficulty = options
        .difficulty
        .or_else(|| settings.difficulty.parse().ok())
        .unwrap_or_default();
    settings.difficulty = difficulty.as_str().to_string();

    let mut session = match options.seed {
        Some(seed) => GameSession::new(seed),
        None => GameSession::from_entropy(),
    };
    session.set_strategy(Some(strategy_for(difficulty)));
    if let Some(mut profile) = profile {
        profile.save(&settings);
        session.set_profile(Some(Box::new(profile)));
    }

    println!("matgo - seed {}, difficulty {}", session.seed(), difficulty.as_str());
    if options.auto {
        run_auto(&mut session, difficulty, options.games);
    } else {
        run_interactive(&mut session);
    }
}

fn read_line(stdin: &io::Stdin) -> Option<String> {
    print!("> ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
        Err(_) => None,
    }
}

fn run_interactive(session: &mut GameSession) {
    let stdin = io::stdin();
    let mut events = EventBus::default();
    session.start_new_game(&mut events);
    view::print_events(&mut events);

    loop {
        match session.state.phase {
            Phase::AiTurn => {
                if let Some(ticket) = session.scheduler.take() {
                    thread::sleep(AI_TURN_DELAY);
                    if let Err(err) = session.dispatch(ticket, &mut events) {
                        log::warn!("scheduled play failed: {err}");
                    }
                } else if let Err(err) = session.play_ai_turn(&mut events) {
                    log::warn!("ai play failed: {err}");
                }
                view::print_events(&mut events);
            }
            Phase::PlayerTurn => {
                view::print_table(session);
                let Some(line) = read_line(&stdin) else { break };
                if !handle_player_command(session, &line, &mut events) {
                    break;
                }
                view::print_events(&mut events);
            }
            Phase::GoStop => {
                let prompt = session.state.go_stop;
                if prompt.map(|prompt| prompt.decider) == Some(Seat::Ai) {
                    // The opponent's call; there is no opponent go/stop
                    // policy, so the countdown runs out to the default stop.
                    thread::sleep(GO_STOP_TICK_DELAY);
                    let outcome = match session.scheduler.take() {
                        Some(ticket) => session.dispatch(ticket, &mut events),
                        None => session.tick_go_stop(&mut events),
                    };
                    if let Err(err) = outcome {
                        log::warn!("countdown step failed: {err}");
                    }
                    view::print_events(&mut events);
                    continue;
                }
                let ticks = prompt.map(|prompt| prompt.ticks_left).unwrap_or(0);
                println!("go or stop? (enter to wait, {ticks} tick(s) left)");
                let Some(line) = read_line(&stdin) else { break };
                let outcome = match line.as_str() {
                    "go" => session.select_go_stop(GoStopChoice::Go, &mut events),
                    "stop" => session.select_go_stop(GoStopChoice::Stop, &mut events),
                    _ => {
                        thread::sleep(GO_STOP_TICK_DELAY);
                        match session.scheduler.take() {
                            Some(ticket) => session.dispatch(ticket, &mut events),
                            None => session.tick_go_stop(&mut events),
                        }
                    }
                };
                if let Err(err) = outcome {
                    println!("({err})");
                }
                view::print_events(&mut events);
            }
            Phase::GameOver => {
                view::print_result(session);
                println!("play again? [y/N]");
                match read_line(&stdin) {
                    Some(answer) if answer == "y" || answer == "yes" => {
                        session.start_new_game(&mut events);
                        view::print_events(&mut events);
                    }
                    _ => break,
                }
            }
            Phase::Idle | Phase::Dealing => {
                // Transient; dealing completes inside start_new_game.
            }
        }
    }
}

/// Returns false when the player asked to quit.
fn handle_player_command(session: &mut GameSession, line: &str, events: &mut EventBus) -> bool {
    let mut words = line.split_whitespace();
    let outcome = match (words.next(), words.next()) {
        (None, _) => Ok(()),
        (Some("quit"), _) | (Some("exit"), _) => return false,
        (Some("help"), _) | (Some("?"), _) => {
            println!("{USAGE}");
            Ok(())
        }
        (Some("state"), _) | (Some("board"), _) => {
            view::print_table(session);
            Ok(())
        }
        (Some("settings"), _) => {
            if let Some(profile) = session.profile_mut() {
                let settings = profile.load();
                match serde_json::to_string_pretty(&settings) {
                    Ok(body) => println!("{body}"),
                    Err(err) => println!("(settings unavailable: {err})"),
                }
            } else {
                println!("(no profile attached)");
            }
            Ok(())
        }
        (Some("coins"), _) => {
            match session.profile_mut() {
                Some(profile) => println!("coin total: {}", profile.coins()),
                None => println!("(no profile attached)"),
            }
            Ok(())
        }
        (Some("new"), _) => {
            session.start_new_game(events);
            Ok(())
        }
        (Some("take"), Some(value)) => match value.parse() {
            Ok(index) => session.select_board_card(index, events),
            Err(_) => {
                println!("take needs a board index");
                Ok(())
            }
        },
        // Re-selects a hand card even while a capture is open.
        (Some("play"), Some(value)) => match value.parse() {
            Ok(index) => session.select_card(index, events),
            Err(_) => {
                println!("play needs a hand index");
                Ok(())
            }
        },
        (Some(value), _) => match value.parse::<usize>() {
            Ok(index) => {
                if session.state.selection.is_some() {
                    session.select_board_card(index, events)
                } else {
                    session.select_card(index, events)
                }
            }
            Err(_) => {
                println!("unknown command: {value} (help for a list)");
                Ok(())
            }
        },
    };
    if let Err(err) = outcome {
        println!("({err})");
    }
    true
}

/// Strategy-vs-strategy demonstration: the configured strategy drives both
/// seats through the public command surface, go/stop resolves by countdown.
fn run_auto(session: &mut GameSession, difficulty: Difficulty, games: u32) {
    let driver = strategy_for(difficulty);
    let mut events = EventBus::default();
    let mut wins = 0u32;
    for game in 1..=games {
        session.start_new_game(&mut events);
        view::print_events(&mut events);
        let mut steps = 0u32;
        while session.state.phase != Phase::GameOver {
            match session.state.phase {
                Phase::AiTurn => {
                    let outcome = match session.scheduler.take() {
                        Some(ticket) => session.dispatch(ticket, &mut events),
                        None => session.play_ai_turn(&mut events),
                    };
                    if let Err(err) = outcome {
                        log::warn!("auto ai step failed: {err}");
                    }
                }
                Phase::GoStop => {
                    let outcome = match session.scheduler.take() {
                        Some(ticket) => session.dispatch(ticket, &mut events),
                        None => session.tick_go_stop(&mut events),
                    };
                    if let Err(err) = outcome {
                        log::warn!("auto countdown step failed: {err}");
                    }
                }
                Phase::PlayerTurn => drive_player_seat(session, driver.as_ref(), &mut events),
                _ => {}
            }
            view::print_events(&mut events);
            steps += 1;
            if steps > 500 {
                log::error!("auto game {game} stalled, abandoning");
                break;
            }
        }
        view::print_result(session);
        if session
            .state
            .result
            .map(|result| result.player_won)
            .unwrap_or(false)
        {
            wins += 1;
        }
    }
    println!("auto finished: {wins}/{games} wins for the driven seat");
}

/// Feeds the player seat from a strategy. The snapshot is built from the
/// driven seat's perspective: its own captures go in the `ai_collection`
/// slot, the true AI's captures in the opponent slot.
fn drive_player_seat(session: &mut GameSession, strategy: &dyn Strategy, events: &mut EventBus) {
    let decision = {
        let state = &session.state;
        let snapshot = TableView {
            hand: &state.player_hand,
            board: &state.board,
            player_collection: &state.ai_collection,
            ai_collection: &state.player_collection,
        };
        strategy.decide(&snapshot)
    };
    let play = decision.and_then(|decision| {
        let hand_index = session
            .state
            .player_hand
            .iter()
            .position(|card| card.id == decision.card)?;
        let board_index = decision.matching.and_then(|target| {
            session
                .state
                .board
                .iter()
                .position(|card| card.id == target)
        });
        Some((hand_index, board_index))
    });
    let (hand_index, board_index) = play.unwrap_or((0, None));
    if let Err(err) = session.select_card(hand_index, events) {
        log::warn!("auto select failed: {err}");
        return;
    }
    if let Some(selection) = session.state.selection.clone() {
        let target = board_index
            .filter(|index| selection.matches.contains(index))
            .unwrap_or(selection.matches[0]);
        if let Err(err) = session.select_board_card(target, events) {
            log::warn!("auto capture failed: {err}");
        }
    }
}
