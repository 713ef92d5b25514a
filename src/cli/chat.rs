use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::chat::Session;
use crate::core::{AppConfig, logging};
use crate::openai::OpenAiClient;

pub async fn run(config: AppConfig) -> Result<()> {
    // Keep logging quiet so it doesn't get in the way of the
    // conversation. Use `RUST_LOG` to see more.
    logging::init(&format!("{}=warn", env!("CARGO_CRATE_NAME")));

    let mut rl = DefaultEditor::new()?;
    let client = OpenAiClient::from(&config);
    let mut session = Session::new(Box::new(client), &config.openai_model);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;

                match session.submit(&line).await {
                    Ok(reply) => println!("{}", reply),
                    // The session is unchanged so the user can just
                    // try again
                    Err(err) => {
                        tracing::debug!("Chat turn failed: {:?}", err);
                        println!("Error: {}", err);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
