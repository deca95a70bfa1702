// Console prompt adapter - Interactive questions on stdin/stdout

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::domain::errors::*;
use crate::ports::*;

/// Prompt adapter reading answers line by line from stdin
pub struct ConsolePromptAdapter {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsolePromptAdapter {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for ConsolePromptAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptPort for ConsolePromptAdapter {
    async fn ask(&self, question: &str) -> Result<Option<String>, DomainError> {
        let mut stdout = tokio::io::stdout();
        let prompt = format!("\n{}\n", question);
        stdout
            .write_all(prompt.as_bytes())
            .await
            .map_err(|e| DomainError::Console(format!("Failed to write prompt: {}", e)))?;
        stdout
            .flush()
            .await
            .map_err(|e| DomainError::Console(format!("Failed to write prompt: {}", e)))?;

        let mut lines = self.lines.lock().await;
        lines
            .next_line()
            .await
            .map_err(|e| DomainError::Console(format!("Failed to read answer: {}", e)))
    }

    async fn say(&self, message: &str) {
        println!("{}", message);
    }
}
