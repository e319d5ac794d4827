use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ENV_API_KEY, ENV_BASE_URL, ENV_MODEL,
    ENV_SYSTEM_PROMPT, ENV_TEMPERATURE,
};
use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " GLM ".yellow());
    println!("Usage:");
    println!("  {} [prompt]", "glm".bold().green());
    println!("\nOptions:");
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nArguments:");
    println!(
        "  {}  Text sent as the user message. Without it a short self-introduction is requested.",
        "[prompt]".bold().green()
    );
    println!("\nEnvironment (also read from .env):");
    println!("  {}  API key (required).", ENV_API_KEY.bold().cyan());
    println!(
        "  {}  Endpoint root (default {}).",
        ENV_BASE_URL.bold().cyan(),
        DEFAULT_BASE_URL
    );
    println!(
        "  {}  Model identifier (default {}).",
        ENV_MODEL.bold().cyan(),
        DEFAULT_MODEL
    );
    println!(
        "  {}  Sampling temperature in [0, 1] (default {}).",
        ENV_TEMPERATURE.bold().cyan(),
        DEFAULT_TEMPERATURE
    );
    println!(
        "  {}  System message.",
        ENV_SYSTEM_PROMPT.bold().cyan()
    );
    println!("\nExamples:");
    println!("  {}", "glm".bold().green());
    println!(
        "  {} What is the capital of California?",
        "glm".bold().green()
    );
    println!(
        "  {} {}",
        format!("{}=glm-4.5", ENV_MODEL).bold().magenta(),
        "glm Write a haiku about Rust".bold().green()
    );
    println!("{:━^60}", "".yellow());
}
