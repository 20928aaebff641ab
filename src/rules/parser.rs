use crate::error::{AntError, Result};
use crate::rules::{Rule, Turn};
use crate::topology::Topology;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Split an LR string into turns, always taking the longest matching token
/// so multi-character tokens such as `R1` win over `R`.
fn tokenize(topology: Topology, lr_string: &str) -> Result<Vec<Turn>> {
    let table = topology.lr_token_table();
    let upper = lr_string.to_ascii_uppercase();
    let mut turns = Vec::with_capacity(upper.len());
    let mut offset = 0;

    while offset < upper.len() {
        let rest = &upper[offset..];
        let (token, turn) = table
            .iter()
            .filter(|(token, _)| rest.starts_with(token))
            .max_by_key(|(token, _)| token.len())
            .ok_or_else(|| AntError::InvalidLrToken {
                topology,
                offset,
                rest: lr_string[offset..].to_string(),
            })?;
        turns.push(*turn);
        offset += token.len();
    }

    Ok(turns)
}

/// Compile an LR string into rules for ant colour 0.
///
/// The i-th token handles cell colour `i`: it repaints the cell to
/// `(i + 1) % tokens` and turns by the token's amount, so the cell colours
/// cycle while the ant stays in colour 0.
pub fn compile_lr_string(topology: Topology, lr_string: &str) -> Result<Vec<Rule>> {
    let turns = tokenize(topology, lr_string)?;
    let count = turns.len() as u32;

    Ok(turns
        .into_iter()
        .enumerate()
        .map(|(i, turn)| {
            let colour = i as u32;
            Rule::new(0, colour, 0, (colour + 1) % count, turn)
        })
        .collect())
}

/// Parse explicit rules, one `ant,cell,new_ant,new_cell,turn` per line.
/// Blank lines and `#` comments are skipped.
pub fn parse_rules(src: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for (number, raw) in src.lines().enumerate() {
        if let Some(rule) = parse_line(raw, number + 1)? {
            rules.push(rule);
        }
    }
    Ok(rules)
}

/// Parse explicit rules from a file path
pub fn parse_rules_file(path: impl AsRef<Path>) -> Result<Vec<Rule>> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(16 * 1024, file);

    let mut rules = Vec::with_capacity(64);
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(rule) = parse_line(&line, number + 1)? {
            rules.push(rule);
        }
    }
    Ok(rules)
}

fn parse_line(raw: &str, number: usize) -> Result<Option<Rule>> {
    let line = match raw.find('#') {
        Some(hash) => &raw[..hash],
        None => raw,
    }
    .trim();

    if line.is_empty() {
        return Ok(None);
    }

    line.parse().map(Some).map_err(|err| match err {
        AntError::InvalidRule { text, reason } => AntError::InvalidRule {
            text,
            reason: format!("line {number}: {reason}"),
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{AntColour, CellColour};

    #[test]
    fn test_compile_square_lr() {
        let rules = compile_lr_string(Topology::Square, "LR").unwrap();

        assert_eq!(rules, vec![Rule::new(0, 0, 0, 1, 4), Rule::new(0, 1, 0, 0, 2)]);
    }

    #[test]
    fn test_compile_is_case_insensitive() {
        assert_eq!(
            compile_lr_string(Topology::Square, "rl").unwrap(),
            compile_lr_string(Topology::Square, "RL").unwrap()
        );
    }

    #[test]
    fn test_compile_synonyms() {
        let rules = compile_lr_string(Topology::Square, "FNBU").unwrap();
        let turns: Vec<_> = rules.iter().map(|r| r.turn).collect();

        assert_eq!(turns, vec![1, 1, 3, 3]);
        assert_eq!(rules[3].new_cell_colour, CellColour(0));
    }

    #[test]
    fn test_hex_prefers_longest_token() {
        let rules = compile_lr_string(Topology::Hexagonal, "R2RL1L").unwrap();
        let turns: Vec<_> = rules.iter().map(|r| r.turn).collect();

        assert_eq!(turns, vec![3, 2, 6, 6]);
        assert_eq!(rules.len(), 4);
        assert!(rules.iter().all(|r| r.ant_colour == AntColour(0)));
        assert!(rules.iter().all(|r| r.new_ant_colour == AntColour(0)));
    }

    #[test]
    fn test_hex_full_vocabulary() {
        let rules = compile_lr_string(Topology::Hexagonal, "FRIBEL").unwrap();
        let turns: Vec<_> = rules.iter().map(|r| r.turn).collect();
        assert_eq!(turns, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_triangle_tokens() {
        let rules = compile_lr_string(Topology::Triangular, "RBL").unwrap();
        let turns: Vec<_> = rules.iter().map(|r| r.turn).collect();

        assert_eq!(turns, vec![1, 2, 3]);
        assert!(compile_lr_string(Topology::Triangular, "F").is_err());
    }

    #[test]
    fn test_unknown_token_reports_offset() {
        let err = compile_lr_string(Topology::Square, "LRxR").unwrap_err();
        assert!(matches!(
            err,
            AntError::InvalidLrToken { topology: Topology::Square, offset: 2, ref rest } if rest == "xR"
        ));
    }

    #[test]
    fn test_dangling_digit_is_rejected() {
        // "1" on its own is not a token, only as part of "R1"/"L1"
        assert!(compile_lr_string(Topology::Hexagonal, "R1").is_ok());
        assert!(compile_lr_string(Topology::Hexagonal, "1R").is_err());
        assert!(compile_lr_string(Topology::Square, "R1").is_err());
    }

    #[test]
    fn test_empty_lr_string() {
        assert!(compile_lr_string(Topology::Square, "").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rules_skips_comments() {
        let src = "# turmite\n0,0,1,1,2\n\n  1,0,0,1,4 # back to zero\n";
        let rules = parse_rules(src).unwrap();

        assert_eq!(rules, vec![Rule::new(0, 0, 1, 1, 2), Rule::new(1, 0, 0, 1, 4)]);
    }

    #[test]
    fn test_parse_rules_reports_line() {
        let err = parse_rules("0,0,0,1,2\n0,0,zero,1,2\n").unwrap_err();
        assert!(matches!(err, AntError::InvalidRule { ref reason, .. } if reason.starts_with("line 2:")));
    }
}
