//! Interactive CLI mode
//!
//! Text-based loop against a human counterpart who knows the secret.

use crate::core::{Feedback, MAX_LENGTH, Pin};
use crate::solver::expected::calculate_metrics;
use crate::solver::{Strategy, filter_candidates};
use crate::universe;
use std::io::{self, Write};

/// Run the interactive solver loop
///
/// Prompts for the pin length, then the counterpart thinks of a secret pin
/// of that length and types back the feedback triple after each suggested
/// guess.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solver cannot provide a valid guess.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive<S: Strategy>(strategy: &S) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Pin Cracker - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let Some(length) = prompt_length()? else {
        println!("\n👋 Thanks for playing!\n");
        return Ok(());
    };

    println!("\nThink of a secret {length}-digit pin. I'll guess it.");
    println!("After each guess, enter the feedback as two or three numbers:\n");
    println!("  - correct digits in the correct position");
    println!("  - correct digits in the wrong position");
    println!("  - digits not in the pin at all (optional, inferred if omitted)\n");
    println!("Example: '1 2' means 1 exact and 2 misplaced.");
    println!("Type 'win' if a guess is exactly right.\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last feedback\n");

    let mut history: Vec<(Pin, Feedback)> = Vec::new();
    let mut turn = 1;

    loop {
        let candidates = candidates_for(length, &history);

        if candidates.is_empty() {
            println!("\n❌ No candidates remain! Some feedback must be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" | "u" => {
                    if history.pop().is_some() {
                        turn -= 1;
                        println!("✓ Undone! Back to turn {turn}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" | "n" => {
                    history.clear();
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        }

        let guess = next_guess(strategy, length, &history, &candidates)
            .ok_or("No valid guesses available")?;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", candidates.len());
        println!("────────────────────────────────────────────────────────────");

        let metrics = calculate_metrics(&guess, &candidates);

        println!("\n📊 Suggested guess: {guess}");
        println!("   Partitions:       {}", metrics.partitions);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!("   Worst case:       {} candidates\n", metrics.max_partition);

        if candidates.len() <= 10 {
            println!("Remaining candidates:");
            for candidate in candidates.iter().take(10) {
                println!("  • {candidate}");
            }
            println!();
        }

        let feedback = loop {
            let input =
                get_user_input("Enter feedback (e.g. '1 2', 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        turn -= 1;
                        println!("✓ Undone! Back to turn {turn}\n");
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some(Feedback::solved(length));
                }
                _ => match Feedback::parse(&input, length) {
                    Ok(parsed) => break Some(parsed),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        if let Some(feedback) = feedback {
            history.push((guess, feedback));

            if feedback.is_perfect() {
                use crate::output::formatters::feedback_summary;
                use colored::Colorize;

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    format!("    🎉  P I N   C R A C K E D :  {guess}  🎉    ")
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(70).bright_cyan());

                println!(
                    "\n  Secret found in {} {}",
                    turn.to_string().bright_cyan().bold(),
                    if turn == 1 { "round" } else { "rounds" }
                );

                println!("\n  Guess history:");
                for (i, (pin, fb)) in history.iter().enumerate() {
                    println!(
                        "    {}. {} {}",
                        (i + 1).to_string().bright_black(),
                        pin.to_string().bright_white().bold(),
                        feedback_summary(*fb)
                    );
                }

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!();

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        history.clear();
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }

            turn += 1;
        }
    }
}

/// Ask for the pin length until a usable one arrives, or `None` on quit
fn prompt_length() -> Result<Option<usize>, String> {
    loop {
        let input = get_user_input(&format!("Pin length (1-{MAX_LENGTH})"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(None),
            _ => match input.parse::<usize>() {
                Ok(n) if (1..=MAX_LENGTH).contains(&n) => return Ok(Some(n)),
                _ => println!("❌ Enter a whole number between 1 and {MAX_LENGTH}\n"),
            },
        }
    }
}

/// Fold the full pin space through every recorded feedback
fn candidates_for(length: usize, history: &[(Pin, Feedback)]) -> Vec<Pin> {
    let mut candidates: Vec<Pin> = universe::all_pins(length).collect();
    for (guess, feedback) in history {
        candidates = filter_candidates(&candidates, guess, *feedback);
    }
    candidates
}

/// Next guess for the current history
///
/// The opening guess is fixed; selecting over the untouched pin space would
/// be quadratic for no benefit.
fn next_guess<S: Strategy>(
    strategy: &S,
    length: usize,
    history: &[(Pin, Feedback)],
    candidates: &[Pin],
) -> Option<Pin> {
    if history.is_empty() {
        Some(Pin::ascending(length))
    } else {
        strategy.select_guess(candidates)
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
