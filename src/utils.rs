/// Utility functions for user interaction.
use crate::error::Result;
use std::io::{self, Write};

/// Prompt user for confirmation before deleting `target`.
pub fn confirm_deletion(target: &str, force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    print!("About to delete {target}. Continue? (y/N): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
