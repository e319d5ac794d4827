use crate::chat::{ChatMessage, ChatRequest, ChatResponse};
use crate::client::{ChatCompletions, ZaiClient};
use crate::config::Config;
use crate::error::{Error, Result};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::io::{self, Write};

pub fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| Error::config("API key contains characters not allowed in a header"))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Spinner shown on stderr while waiting for `model`; stdout carries only the reply.
pub fn create_spinner(model: &str) -> ProgressBar {
    let spinner = ProgressBar::with_draw_target(!0, ProgressDrawTarget::stderr());
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["◐", "◓", "◑", "◒", "●"])
            .template("{spinner:.green} {msg} {elapsed:.dim}"),
    );
    spinner.set_message(format!("Waiting for {}...", model));
    spinner.enable_steady_tick(120);

    spinner
}

pub fn build_chat_request(config: &Config) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage::system(config.system_prompt.as_str()),
            ChatMessage::user(config.user_prompt.as_str()),
        ],
        temperature: config.temperature,
    }
}

/// Takes the text of the first choice. A `null` content counts as empty text.
pub fn extract_reply(response: ChatResponse) -> Result<String> {
    if let Some(usage) = &response.usage {
        info!(
            "tokens: prompt={:?} completion={:?} total={:?}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(Error::EmptyChoices)?;
    debug!(
        "choice index={:?} role={:?} finish_reason={:?}",
        choice.index, choice.message.role, choice.finish_reason
    );
    if let Some(reasoning) = &choice.message.reasoning_content {
        debug!("reasoning: {}", reasoning);
    }

    Ok(choice.message.content.unwrap_or_default())
}

/// Sends one request and writes the first reply, newline-terminated, to `out`.
/// Nothing is written unless a reply was extracted.
pub async fn run_prompt<C, W>(client: &C, config: &Config, out: &mut W) -> Result<()>
where
    C: ChatCompletions + ?Sized,
    W: Write,
{
    let request = build_chat_request(config);
    let spinner = create_spinner(&request.model);

    let response = client.create(&request).await;
    spinner.finish_and_clear();

    let reply = extract_reply(response?)?;
    writeln!(out, "{}", reply)?;
    out.flush()?;
    Ok(())
}

pub async fn process_command(args: &[String]) -> Result<()> {
    let config = Config::from_env()?.with_prompt_args(args);
    debug!("using model {} at {}", config.model, config.base_url);

    let client = ZaiClient::new(config.api_key.clone(), config.base_url.clone())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_prompt(&client, &config, &mut out).await
}
