//! Interactive deck dealing example.
//!
//! Set `RUST_LOG=deckrs=trace` to see the options being applied.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, DeckBuilder, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Deck dealing example (type 'q' to quit)");

    let Some(decks) = prompt_usize("Number of decks: ") else {
        return;
    };
    let Some(jokers) = prompt_usize("Jokers to add: ") else {
        return;
    };
    let Ok(jokers) = u8::try_from(jokers) else {
        println!("At most {} jokers are supported.", u8::MAX);
        return;
    };
    let no_faces = matches!(prompt_line("Remove face cards? (y/n): ").as_str(), "y" | "yes");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut cards = DeckBuilder::new()
        .with_decks(decks)
        .with_jokers(jokers)
        .with_filter(move |card: &Card| no_faces && card.rank().is_some_and(|r| r.value() > 10))
        .with_seeded_shuffle(seed)
        .build();

    println!("Built {} cards (seed {seed}).", cards.len());

    loop {
        if cards.is_empty() {
            println!("The deck is empty.");
            break;
        }

        let Some(count) = prompt_usize(&format!("Deal how many? ({} left): ", cards.len())) else {
            break;
        };

        let count = count.min(cards.len());
        let hand: Vec<Card> = cards.drain(..count).collect();
        println!("{}", format_hand(&hand));
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn format_hand(hand: &[Card]) -> String {
    hand.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club => "32",
        Suit::Spade => "34",
        Suit::Joker => "35",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
