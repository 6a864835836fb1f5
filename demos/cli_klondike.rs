//! CLI solitaire example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use klondike::{Game, GameOptions, Outcome, Renderer, TextRenderer, Zone};

fn main() {
    env_logger::init();
    println!("Klondike CLI example (type 'h' for help, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut renderer = TextRenderer;
    let mut started = Instant::now();

    loop {
        println!("\n{}", renderer.draw(&game.view()));

        if game.is_won() {
            println!(
                "You won with {} activations in {} seconds.",
                game.activations(),
                started.elapsed().as_secs()
            );
            match prompt_line("Play again? (y/n): ").as_deref() {
                Some("y" | "yes") => {
                    game.restart();
                    started = Instant::now();
                    continue;
                }
                _ => break,
            }
        }

        let Some(input) = prompt_line("> ") else {
            break;
        };
        let zone = match input.as_str() {
            "q" | "quit" => break,
            "h" | "help" => {
                print_help();
                continue;
            }
            "n" | "new" => {
                game.restart();
                started = Instant::now();
                continue;
            }
            other => match parse_zone(other) {
                Some(zone) => zone,
                None => {
                    println!("Unknown command.");
                    continue;
                }
            },
        };

        match game.activate(zone) {
            Ok(Outcome::Rejected) => println!("That run does not fit there."),
            Ok(_) => {}
            Err(err) => println!("Error: {err}"),
        }
    }

    println!("Goodbye.");
}

fn parse_zone(input: &str) -> Option<Zone> {
    match input {
        "s" | "stock" => Some(Zone::Stock),
        "w" | "waste" => Some(Zone::Waste),
        _ => {
            let (kind, index) = input.split_at_checked(1)?;
            let index = index.parse().ok()?;
            match kind {
                "f" => Some(Zone::Foundation(index)),
                "p" => Some(Zone::Tableau(index)),
                _ => None,
            }
        }
    }
}

fn print_help() {
    println!("  s        activate the stock (draw three, or recycle the waste)");
    println!("  w        pick up or put down the waste card");
    println!("  f0..f3   activate a foundation");
    println!("  p0..p6   activate a tableau pile");
    println!("  n        deal a new game");
    println!("  q        quit");
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}
