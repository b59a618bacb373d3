use matgo_core::{month_name, Card, Category, Event, EventBus, GameSession, ProfileStore, Seat};

pub fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "you",
        Seat::Ai => "opponent",
    }
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Kwang => "kwang",
        Category::Animal => "animal",
        Category::Ribbon => "ribbon",
        Category::Junk => "junk",
    }
}

pub fn card_label(card: &Card) -> String {
    format!(
        "{} [{}/{}]",
        card.name,
        month_name(card.month),
        category_name(card.category)
    )
}

pub fn print_table(session: &GameSession) {
    let state = &session.state;
    println!();
    println!(
        "round {} | deck {} | you {} pts | opponent {} pts | go x{}",
        state.round,
        session.deck.remaining(),
        state.player_score,
        state.ai_score,
        state.go_count
    );
    println!("board:");
    for (index, card) in state.board.iter().enumerate() {
        println!("  {index}: {}", card_label(card));
    }
    println!("hand:");
    for (index, card) in state.player_hand.iter().enumerate() {
        println!("  {index}: {}", card_label(card));
    }
    let yours = state.player_collection.counts();
    let theirs = state.ai_collection.counts();
    println!(
        "captured: you k{}/a{}/r{}/j{} | opponent k{}/a{}/r{}/j{}",
        yours.kwang,
        yours.animal,
        yours.ribbon,
        yours.junk,
        theirs.kwang,
        theirs.animal,
        theirs.ribbon,
        theirs.junk
    );
    if let Some(selection) = &state.selection {
        let card = &state.player_hand[selection.hand_index];
        println!(
            "selected {} - take one of the matching board cards {:?}",
            card_label(card),
            selection.matches
        );
    }
}

pub fn print_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::GameStarted { first } => {
                println!("new game, {} start(s)", seat_name(first));
            }
            Event::CardsDealt { hand, board } => {
                println!("dealt {hand} cards each, {board} on the board");
            }
            Event::CardPlayed {
                seat,
                played,
                captured,
            } => match captured {
                Some(captured) => println!(
                    "{} captured {} with {}",
                    seat_name(seat),
                    card_label(&captured),
                    card_label(&played)
                ),
                None => println!(
                    "{} discarded {} to the board",
                    seat_name(seat),
                    card_label(&played)
                ),
            },
            Event::ScoreGained { seat, points } => {
                println!("{} gained {points} point(s)", seat_name(seat));
            }
            Event::GoStopPrompt {
                seat,
                current_points,
            } => {
                println!(
                    "{} reached {current_points} point(s) - go or stop?",
                    seat_name(seat)
                );
            }
            Event::GoCalled { seat, go_count } => {
                println!("{} called GO ({go_count})", seat_name(seat));
            }
            Event::GameOver { result } => {
                let verdict = if result.player_won { "you win" } else { "you lose" };
                println!(
                    "game over: {verdict} ({} : {}), reward {} coins",
                    result.player_score, result.ai_score, result.reward
                );
            }
            Event::StateChanged { .. } => {}
        }
    }
}

pub fn print_result(session: &mut GameSession) {
    if let Some(result) = session.state.result {
        println!(
            "final score {} : {} ({:?})",
            result.player_score, result.ai_score, result.reason
        );
        if let Some(profile) = session.profile_mut() {
            println!("coin total: {}", profile.coins());
        }
    }
}
