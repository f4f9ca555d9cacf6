//! Interactive prompts. Both readers are generic over `BufRead` so tests
//! can feed canned lines through a `Cursor`.

use crate::scoring::RiskLevel;
use std::io::{self, BufRead, Write};

/// Prompt until a valid 1-based sector number is entered; returns the
/// 0-based index. Out-of-range and non-numeric input both re-prompt.
pub fn prompt_sector_choice<R: BufRead>(input: &mut R, sector_count: usize) -> io::Result<usize> {
    loop {
        print!("Enter the number for your chosen sector: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no sector selected",
            ));
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=sector_count).contains(&choice) => return Ok(choice - 1),
            Ok(_) => println!("Invalid choice, try again."),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Prompt once for a risk level. Anything outside {low, medium, high}
/// falls back to medium with a warning; there is deliberately no re-prompt
/// loop for this field.
pub fn prompt_risk_level<R: BufRead>(input: &mut R) -> io::Result<RiskLevel> {
    print!("Enter risk level (low / medium / high): ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(match RiskLevel::parse(&line) {
        Some(risk) => risk,
        None => {
            println!("Invalid risk level, defaulting to medium.");
            RiskLevel::Medium
        }
    })
}
