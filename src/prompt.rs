use std::io::{self, Write};

use crate::error::Result;
use crate::types::RunMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAnswer {
    Yes,
    No,
}

/// Ask a yes/no question on stdin. With `--yes` every prompt answers
/// affirmatively without reading input.
pub fn confirm(question: &str, default: DefaultAnswer, run_mode: RunMode) -> Result<bool> {
    let suffix = match default {
        DefaultAnswer::Yes => "[Y/n]",
        DefaultAnswer::No => "[y/N]",
    };
    if run_mode.assume_yes {
        println!("{} {} y", question, suffix);
        return Ok(true);
    }
    print!("{} {} ", question, suffix);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(parse_answer(&answer, default))
}

fn parse_answer(input: &str, default: DefaultAnswer) -> bool {
    let answer = input.trim().to_ascii_lowercase();
    match default {
        // Only an explicit "y" accepts a destructive action.
        DefaultAnswer::No => answer == "y",
        // Only an explicit "n" declines the proceed gate.
        DefaultAnswer::Yes => answer != "n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_no_requires_explicit_y() {
        assert!(parse_answer("y\n", DefaultAnswer::No));
        assert!(parse_answer(" Y \n", DefaultAnswer::No));
        assert!(!parse_answer("\n", DefaultAnswer::No));
        assert!(!parse_answer("yes\n", DefaultAnswer::No));
        assert!(!parse_answer("n\n", DefaultAnswer::No));
    }

    #[test]
    fn default_yes_declines_only_on_n() {
        assert!(parse_answer("\n", DefaultAnswer::Yes));
        assert!(parse_answer("y\n", DefaultAnswer::Yes));
        assert!(!parse_answer("n\n", DefaultAnswer::Yes));
        assert!(!parse_answer(" N \n", DefaultAnswer::Yes));
    }
}
