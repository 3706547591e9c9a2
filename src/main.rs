// src/main.rs

use std::io::Write;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use tokio::io::AsyncBufReadExt;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use gupshup::chat::{TurnEngine, generate_session_id};
use gupshup::config::CONFIG;
use gupshup::llm::{CompletionBackend, GroqClient};
use gupshup::persona::Persona;

#[derive(Parser, Debug)]
#[command(name = "gupshup", about = "Memory and personality engine demo")]
struct Args {
    /// Session identifier; a fresh one is generated when omitted
    #[arg(long)]
    session: Option<String>,

    /// Persona label: neutral, calm_mentor, witty_friend, therapist
    #[arg(long)]
    persona: Option<String>,

    /// Override the configured model id
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = Level::from_str(&CONFIG.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut session_id = args.session.unwrap_or_else(generate_session_id);
    let mut persona = args.persona.unwrap_or_else(|| CONFIG.default_persona.clone());
    // Validate up front so a typo on the command line fails fast.
    persona.parse::<Persona>()?;

    let mut client = GroqClient::new()?;
    if let Some(model) = args.model {
        client.model = model;
    }
    info!(model = %client.model, session = %session_id, persona = %persona, "starting gupshup");

    let backend: Arc<dyn CompletionBackend> = Arc::new(client);
    let mut engine = TurnEngine::new(backend);

    println!("gupshup: memory & personality demo. Type a message, or /help.");
    prompt()?;

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        if line.is_empty() {
            prompt()?;
            continue;
        }

        if line == "/quit" || line == "/exit" {
            break;
        } else if line == "/help" {
            println!("commands:");
            println!("  /persona <label>   switch persona ({})", persona_labels());
            println!("  /session <id>      switch session");
            println!("  /memory            show the stored memory summary");
            println!("  /quit              exit");
        } else if let Some(rest) = line.strip_prefix("/persona ") {
            match rest.trim().parse::<Persona>() {
                Ok(p) => {
                    persona = p.to_string();
                    println!("persona set to {persona}");
                }
                Err(e) => println!("{e}"),
            }
        } else if let Some(rest) = line.strip_prefix("/session ") {
            session_id = rest.trim().to_string();
            println!("session set to {session_id}");
        } else if line == "/memory" {
            println!("{}", engine.memory_summary(&session_id));
        } else {
            match engine.run_turn(&session_id, &persona, line).await {
                Ok(outcome) => {
                    println!("\n[neutral]\n{}\n", outcome.neutral_reply);
                    println!("[{persona}]\n{}\n", outcome.persona_reply);
                }
                Err(e) => error!("turn failed: {e:#}"),
            }
        }

        prompt()?;
    }

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn persona_labels() -> String {
    Persona::ALL
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
