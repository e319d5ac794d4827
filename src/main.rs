mod chat;
mod client;
mod config;
mod constants;
mod error;
mod print_help;
mod utils;

use crate::constants::{FLAG_HELP_LONG, FLAG_HELP_SHORT};
use crate::print_help::print_help;
use crate::utils::process_command;
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args
        .iter()
        .skip(1)
        .any(|arg| arg == FLAG_HELP_SHORT || arg == FLAG_HELP_LONG)
    {
        print_help();
        return Ok(());
    }

    process_command(&args).await?;
    Ok(())
}
