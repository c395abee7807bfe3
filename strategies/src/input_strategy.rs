use std::io::{self, Write};

use regex::Regex;
use types::{AnswerStrategy, QuizStep};

/// Asks the person at the terminal.
#[derive(Debug, Default)]
pub struct InputStrategy {}

impl AnswerStrategy for InputStrategy {
    fn select_answer(&mut self, step: &QuizStep) -> bool {
        print_step(step);

        let mut buf = String::new();
        loop {
            match answer_from_stdin(&mut buf) {
                Ok(answer) => return answer,
                Err(InputError::Closed) => {
                    log::warn!("Stdin closed, answering no to {}", step.question_number);
                    return false;
                }
                Err(InputError::Invalid(err)) => {
                    buf.clear();
                    log::error!("Error parsing answer from stdin: {err}")
                }
            }
        }
    }
}

/// Asks a yes/no question on the terminal. A closed stdin counts as no.
pub fn confirm(prompt: &str) -> bool {
    println!("{prompt}");
    let mut buf = String::new();
    loop {
        match answer_from_stdin(&mut buf) {
            Ok(answer) => return answer,
            Err(InputError::Closed) => return false,
            Err(InputError::Invalid(err)) => {
                buf.clear();
                log::error!("Error parsing answer from stdin: {err}")
            }
        }
    }
}

enum InputError {
    Closed,
    Invalid(String),
}

fn print_step(step: &QuizStep) {
    println!("--- Question {} ---", step.question_number);
    println!("Movie: {}", step.image);
    println!("{}", step.question);
}

fn answer_from_stdin(buf: &mut String) -> Result<bool, InputError> {
    print!("Your answer (yes/no)? >> ");
    let _ = io::stdout().flush();
    match io::stdin().read_line(buf) {
        Ok(0) => Err(InputError::Closed),
        Ok(_) => answer_from_str(buf).map_err(InputError::Invalid),
        Err(err) => Err(InputError::Invalid(format!(
            "Error reading line from stdin: {err}"
        ))),
    }
}

/// Parses a typed yes/no answer. English and Russian spellings are accepted.
pub fn answer_from_str(input: &str) -> Result<bool, String> {
    let input = input.trim().to_lowercase();
    let re = Regex::new(r"^(?:(?<yes>y|yes|д|да)|(?<no>n|no|н|нет))$").expect("Valid answer regex");
    let Some(caps) = re.captures(&input) else {
        return Err(format!("Expected yes or no, got: {input:?}"));
    };
    if caps.name("yes").is_some() {
        Ok(true)
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_from_str_accepts_yes() {
        for input in ["y", "yes", "YES\n", "  Yes ", "да", "Да", "д"] {
            assert_eq!(answer_from_str(input), Ok(true), "input: {input:?}");
        }
    }

    #[test]
    fn test_answer_from_str_accepts_no() {
        for input in ["n", "no", "No\n", "нет", "НЕТ", "н"] {
            assert_eq!(answer_from_str(input), Ok(false), "input: {input:?}");
        }
    }

    #[test]
    fn test_answer_from_str_rejects_garbage() {
        for input in ["", "maybe", "yesno", "y e s", "1"] {
            assert!(answer_from_str(input).is_err(), "input: {input:?}");
        }
    }
}
