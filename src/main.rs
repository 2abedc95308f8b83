use anyhow::Result;
use calchat::config::Config;
use calchat::models::{Sender, Turn};
use calchat::session::ChatSession;
use calchat::transport::WebhookTransport;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let session = ChatSession::new(WebhookTransport::new(config.webhook_url));

    // Show the seeded greeting before the first prompt.
    let mut rendered = 0;
    rendered += render_turns(&session.snapshot().log[rendered..]);

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                session.submit(&line).await;

                let snapshot = session.snapshot();
                rendered += render_turns(&snapshot.log[rendered..]);
                if snapshot.last_error.is_some() {
                    eprintln!("(!) Failed to send message. Please try again.");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn render_turns(turns: &[Turn]) -> usize {
    for turn in turns {
        let who = match turn.sender {
            Sender::User => "you",
            Sender::Bot => "bot",
        };
        println!("[{}] {}: {}", turn.created_at.format("%H:%M"), who, turn.text);
    }
    turns.len()
}
