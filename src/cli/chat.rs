//! CLI `chat` command — the interactive loop over the engine.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::config::CrumbConfig;
use crate::engine::{ChatEngine, Reply};
use crate::engine::router::Intent;

const GREETING: &str =
    "Hello, I am your AI baking chatbot. Ask me about a recipe or baking technique!";
const NO_ANSWER: &str = "I'm sorry, I don't have an answer for that. \
     Please try asking about a specific recipe or baking technique.";
const NO_RECIPES: &str = "I'm sorry, I couldn't find any recipes that match your request. \
     Please try a different query.";

/// Run the interactive loop until EOF or `quit`.
pub fn run(config: &CrumbConfig) -> Result<()> {
    let engine = ChatEngine::from_config(config)?;

    println!("{GREETING}");
    println!("(type 'quit' to exit)");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = engine.respond(line)?;
        println!("crumb> {}", render(&reply));
        println!();
    }

    Ok(())
}

/// Map an engine reply to the text shown to the user. The engine itself never
/// produces user-facing prose; all fallback wording lives here.
pub fn render(reply: &Reply) -> String {
    match reply {
        Reply::EmptyQuery => GREETING.to_string(),
        Reply::Answer(answer) => answer.answer.clone(),
        Reply::Recommendations(recs) => {
            let mut text = String::from("Here are some recipes you might like:");
            for rec in recs {
                text.push_str(&format!("\n- {}", rec.name));
            }
            text
        }
        Reply::NoMatch(Intent::FactLookup) => NO_ANSWER.to_string(),
        Reply::NoMatch(Intent::Recommendation) => NO_RECIPES.to_string(),
    }
}
