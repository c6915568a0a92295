//! Picking one of several installed gem versions

use crate::error::ScaffoldError;
use crate::installed::GemSpecification;

/// Response that ends the prompt without a selection
pub const QUIT: &str = "q";

/// Prompt shown when asking for a choice
pub const PROMPT: &str = "Please pick one (or type 'q' to quit):";

/// Outcome of a single-shot selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the candidates
    Picked(usize),
    Quit,
}

/// Candidates as a 1-based numbered list, one line each (`1. name version`)
pub fn numbered_list(candidates: &[GemSpecification]) -> Vec<String> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, spec)| format!("{}. {} {}", index + 1, spec.name, spec.version))
        .collect()
}

/// Resolve a user response against the candidates.
///
/// `q` quits. An integer in `1..=len` picks that candidate. Anything else is an
/// invalid selection; there is no retry.
pub fn choose<T>(candidates: &[T], response: &str) -> Result<Selection, ScaffoldError> {
    if response == QUIT {
        return Ok(Selection::Quit);
    }

    match response.trim().parse::<usize>() {
        Ok(number) if (1..=candidates.len()).contains(&number) => {
            Ok(Selection::Picked(number - 1))
        }
        _ => Err(ScaffoldError::InvalidSelection {
            response: response.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn candidates() -> Vec<GemSpecification> {
        ["1.0.0", "1.1.0", "2.0.0"]
            .iter()
            .map(|version| GemSpecification {
                name: "sample_gem".to_string(),
                version: version.to_string(),
                path: PathBuf::from(format!("/gems/sample_gem-{}", version)),
            })
            .collect()
    }

    #[test]
    fn test_numbered_list_is_one_based() {
        assert_eq!(
            numbered_list(&candidates()),
            vec![
                "1. sample_gem 1.0.0",
                "2. sample_gem 1.1.0",
                "3. sample_gem 2.0.0"
            ]
        );
    }

    #[test]
    fn test_choose_valid_number() {
        assert_eq!(choose(&candidates(), "2").unwrap(), Selection::Picked(1));
        assert_eq!(choose(&candidates(), "1").unwrap(), Selection::Picked(0));
        assert_eq!(choose(&candidates(), " 3 ").unwrap(), Selection::Picked(2));
    }

    #[test]
    fn test_choose_quit() {
        assert_eq!(choose(&candidates(), "q").unwrap(), Selection::Quit);
    }

    #[test]
    fn test_quit_is_case_sensitive() {
        assert!(matches!(
            choose(&candidates(), "Q"),
            Err(ScaffoldError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_choose_out_of_range() {
        for response in ["9", "0", "-1"] {
            match choose(&candidates(), response) {
                Err(ScaffoldError::InvalidSelection { response: r }) => assert_eq!(r, response),
                other => panic!("expected invalid selection for {}, got {:?}", response, other),
            }
        }
    }

    #[test]
    fn test_choose_non_numeric() {
        assert!(choose(&candidates(), "two").is_err());
        assert!(choose(&candidates(), "").is_err());
        assert!(choose(&candidates(), "2abc").is_err());
    }

    #[test]
    fn test_choose_without_candidates() {
        let empty: Vec<GemSpecification> = Vec::new();
        assert!(choose(&empty, "1").is_err());
    }
}
