//! Interactive terminal client for a running gateway.
//!
//! Reads prompts line by line, posts each one to the relay route and prints
//! the generated text. Typing `exit` (any case) or closing the input ends the
//! session. Transport and HTTP failures are printed and the loop continues.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::error::Result;
use crate::models::relay::{PromptRequest, PromptResponse};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Relay endpoint used when `--url` is not given.
pub const DEFAULT_GATEWAY_URL: &str = "http://gemini-gateway.local/gemini";

const EXIT_COMMAND: &str = "exit";
const INPUT_PROMPT: &str = "Enter your prompt for Gemini (type 'exit' to quit): ";

/// HTTP client for the gateway's `POST /gemini` route.
pub struct GatewayClient {
    http_client: reqwest::Client,
    url: String,
}

impl GatewayClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one prompt and return the `response` field of the reply.
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        let request = PromptRequest {
            prompt: prompt.to_string(),
        };

        let reply: PromptResponse = self
            .http_client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(reply.response)
    }
}

/// Run the read-ask-print loop until `exit` or end of input.
pub async fn run<R, W>(client: &GatewayClient, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(INPUT_PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            output.write_all(b"\n").await?;
            break;
        };
        let prompt = line.trim_end_matches('\r');

        if prompt.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        debug!(url = client.url(), prompt_len = prompt.len(), "Sending prompt");
        let message = match client.ask(prompt).await {
            Ok(text) => format!("Gemini response: {}\n", text),
            Err(e) => format!("Error connecting to the server: {}\n", e),
        };
        output.write_all(message.as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}

/// [`run`] over the process's stdin and stdout.
pub async fn run_stdio(url: &str) -> Result<()> {
    let client = GatewayClient::new(url)?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run(&client, stdin, tokio::io::stdout()).await
}
