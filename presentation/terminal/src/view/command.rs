use business::domain::shared::value_objects::ProductId;
use clap::{Parser, Subcommand};

/// One line of session input. The first token names the command.
#[derive(Debug, Parser)]
#[command(
    name = "cart",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Add a product to the cart
    Add {
        id: ProductId,
        #[arg(default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// One more of a product already in the cart
    #[command(name = "inc", visible_aliases = ["+", "increment"])]
    Increment { id: ProductId },
    /// One less, removes the product at zero
    #[command(name = "dec", visible_alias = "decrement")]
    Decrement { id: ProductId },
    /// Set the quantity, zero or below removes the product
    Set {
        id: ProductId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    #[command(visible_alias = "rm")]
    Remove { id: ProductId },
    /// Remove every product
    #[command(visible_alias = "remove-all")]
    Clear,
    /// Toggle the like marker of a product
    Like { id: ProductId },
    /// Show the cart
    #[command(visible_alias = "ls")]
    List,
    /// Print the cart summary as JSON
    Json,
    /// Validate the order
    Validate,
    /// Cancel the order
    Cancel,
    /// Leave the session
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

/// Parses one input line. `help` and `?` come back as a `DisplayHelp` error.
pub fn parse_command(line: &str) -> Result<Command, clap::Error> {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if let Some(verb) = tokens.first_mut() {
        *verb = match verb.to_ascii_lowercase().as_str() {
            // clap reads a lone "-" as a value, never as a subcommand
            "-" => "dec".to_string(),
            "?" => "help".to_string(),
            other => other.to_string(),
        };
    }
    CommandLine::try_parse_from(tokens).map(|line| line.command)
}
