//! Interactive play loop. Reads commands from stdin or a script file,
//! prints responses, and stops on game end or a quit phrase.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use tv_core::Session;

const QUIT_PHRASES: [&str; 3] = ["quit", "q", "exit"];

pub fn run(
    story: &str,
    script: Option<&Path>,
    transcript: Option<&Path>,
    no_hints: bool,
) -> Result<(), String> {
    let world = super::build_story(story)?;
    let mut session = Session::new(world);
    session.show_trigger_hints(!no_hints);

    println!("  {} {story}\n", "Playing".bold());
    println!("{}", session.describe());

    match script {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("cannot read script {}: {e}", path.display()))?;
            play_lines(&mut session, content.lines().map(String::from));
        }
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            let mut line = String::new();

            loop {
                print!("> ");
                io::stdout().flush().map_err(|e| e.to_string())?;

                line.clear();
                match reader.read_line(&mut line) {
                    Ok(0) => break, // EOF
                    Err(e) => return Err(e.to_string()),
                    _ => {}
                }
                if !play_one(&mut session, &line) {
                    break;
                }
            }
        }
    }

    println!("{}", "THE GAME HAS ENDED.".bold());

    if let Some(path) = transcript {
        fs::write(path, session.history().export_text())
            .map_err(|e| format!("cannot write transcript {}: {e}", path.display()))?;
        println!("  Transcript written to {}", path.display());
    }

    Ok(())
}

fn play_lines(session: &mut Session, lines: impl Iterator<Item = String>) {
    for line in lines {
        if !play_one(session, &line) {
            break;
        }
    }
}

/// Process one input line. Returns false when the loop should stop.
fn play_one(session: &mut Session, line: &str) -> bool {
    let input = line.trim();
    if input.is_empty() {
        return true;
    }
    if QUIT_PHRASES.iter().any(|p| input.eq_ignore_ascii_case(p)) {
        return false;
    }

    let response = session.parse_command(input);
    if !response.text.is_empty() {
        println!("{}\n", response.text);
    }
    !response.ended
}
