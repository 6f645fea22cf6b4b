//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_engine::{Action, Card, GameConfig, GamePhase, RoundEngine, Snapshot, Suit};

fn main() {
    println!("Blackjack CLI example (bet 0 to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let config = GameConfig::builder().build().expect("default config is valid");
    let mut table = RoundEngine::new(config, seed);

    loop {
        let bankroll = table.bankroll();
        if bankroll <= 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let Some(bet) = prompt_i64(&format!("Bet amount (1-{bankroll}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if !table.start_round(bet) {
            println!("Bet error: {}", table.message());
            continue;
        }
        if !table.deal_initial() {
            println!("Deal error: {}", table.message());
            continue;
        }

        if table.phase() == GamePhase::InsuranceOffer {
            println!("Dealer shows an Ace. Insurance offered.");
            let take = matches!(prompt_line("Take insurance? (y/n): ").as_str(), "y" | "yes");
            if !table.take_insurance(take) {
                println!("Insurance error: {}", table.message());
            }
        }

        while table.phase() == GamePhase::PlayerTurn {
            print_table(&table.snapshot());

            let actions = table.available_actions();
            println!("{}", format_actions(&actions));
            let input = prompt_line("Action: ");

            let action = match input.as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::Double,
                "p" | "split" => Action::Split,
                "u" | "surrender" => Action::Surrender,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if !actions.contains(&action) {
                println!("That action isn't available right now.");
                continue;
            }
            if !table.act(action) {
                println!("Action error: {}", table.message());
            }
        }

        if table.phase() == GamePhase::DealerTurn && !table.dealer_turn() {
            println!("Dealer error: {}", table.message());
        }

        if table.phase() == GamePhase::RoundOver {
            print_table(&table.snapshot());
            println!("Round complete. Bankroll: {}", table.bankroll());
            table.next_round();
        }
    }
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

fn prompt_i64(prompt: &str) -> Option<i64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &Snapshot) {
    println!(
        "\nDealer: {} (running count {}, true count {:.1})",
        format_dealer_cards(&snapshot.dealer_cards, snapshot.dealer_hole_revealed),
        snapshot.running_count,
        snapshot.true_count
    );

    for (index, hand) in snapshot.hands.iter().enumerate() {
        let marker = if index == snapshot.active_hand_index {
            "*"
        } else {
            " "
        };
        let outcome = hand
            .outcome
            .map_or_else(String::new, |outcome| format!(" ({outcome})"));
        println!(
            "{marker} Hand {}: {} | total {} | bet {}{outcome}",
            hand.id,
            format_cards(&hand.cards),
            hand.total,
            hand.bet,
        );
    }
    println!();
}

fn format_actions(actions: &[Action]) -> String {
    let labels = [
        (Action::Hit, "hit", "h"),
        (Action::Stand, "stand", "s"),
        (Action::Double, "double", "d"),
        (Action::Split, "split", "p"),
        (Action::Surrender, "surrender", "u"),
    ];
    let parts: Vec<String> = labels
        .into_iter()
        .map(|(action, label, key)| format_action(label, key, actions.contains(&action)))
        .collect();
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed { colorize(&text, "32") } else { colorize(&text, "90") }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer_cards(cards: &[Card], hole_revealed: bool) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    if hole_revealed || cards.len() == 1 {
        let mut parts: Vec<String> = cards.iter().map(format_card).collect();
        if !hole_revealed {
            parts.push("??".to_string());
        }
        parts.join(" ")
    } else {
        format_cards(cards)
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    let colored_rank = colorize(&card.rank.to_string(), color_code);
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
