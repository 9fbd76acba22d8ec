//! Text parser for machine lines
//!
//! One machine per line: an optional `[...]` indicator pattern, zero or more
//! `(...)` button groups, then a required `{...}` target section, e.g.
//! `(3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}`.

use super::instance::{Pattern, PuzzleInstance};
use crate::error::SolveError;
use std::str::FromStr;

/// Parse one trimmed, non-empty line into a machine instance.
pub fn parse_line(line: &str) -> Result<PuzzleInstance, SolveError> {
    let line = line.trim();
    let pattern = parse_pattern(line)?;
    let groups = parse_groups(line)?;
    let target = parse_target(line)?;

    Ok(PuzzleInstance {
        pattern,
        groups,
        target,
    })
}

/// Parse the optional `[...]` section. `.` is an off light, `#` an on light.
fn parse_pattern(line: &str) -> Result<Option<Pattern>, SolveError> {
    let Some(open) = line.find('[') else {
        return Ok(None);
    };
    let close = line[open + 1..]
        .find(']')
        .map(|offset| open + 1 + offset)
        .ok_or_else(|| SolveError::UnmatchedBracket {
            line: line.to_string(),
        })?;

    let inside = &line[open + 1..close];
    if inside.is_empty() {
        return Err(SolveError::EmptySection {
            section: "pattern [...]",
            line: line.to_string(),
        });
    }

    let mut pattern = Pattern::with_capacity(inside.len());
    for ch in inside.chars() {
        match ch {
            '.' => pattern.push(false),
            '#' => pattern.push(true),
            _ => return Err(SolveError::BadPatternChar { found: ch }),
        }
    }
    Ok(Some(pattern))
}

/// Parse every `(...)` group before the target braces, in line order.
fn parse_groups(line: &str) -> Result<Vec<Vec<usize>>, SolveError> {
    // Groups sit before the target section; stop scanning at the first '{'.
    let section = match line.find('{') {
        Some(brace) => &line[..brace],
        None => line,
    };

    let mut groups = Vec::new();
    let mut pos = 0;
    while let Some(offset) = section[pos..].find('(') {
        let open = pos + offset;
        let close = section[open + 1..]
            .find(')')
            .map(|offset| open + 1 + offset)
            .ok_or_else(|| SolveError::UnmatchedParen {
                line: line.to_string(),
            })?;

        let inside = section[open + 1..close].trim();
        if inside.is_empty() {
            // A button wired to nothing; legal, contributes a zero column.
            groups.push(Vec::new());
        } else {
            groups.push(parse_int_list(inside)?);
        }
        pos = close + 1;
    }

    Ok(groups)
}

/// Parse the required `{...}` target section.
fn parse_target(line: &str) -> Result<Vec<u64>, SolveError> {
    let open = line.find('{').ok_or_else(|| SolveError::MissingTarget {
        line: line.to_string(),
    })?;
    let close = line[open + 1..]
        .find('}')
        .map(|offset| open + 1 + offset)
        .ok_or_else(|| SolveError::MissingTarget {
            line: line.to_string(),
        })?;

    let inside = line[open + 1..close].trim();
    if inside.is_empty() {
        return Err(SolveError::EmptySection {
            section: "target {...}",
            line: line.to_string(),
        });
    }
    parse_int_list(inside)
}

fn parse_int_list<T: FromStr>(inside: &str) -> Result<Vec<T>, SolveError> {
    inside.split(',').map(parse_int).collect()
}

fn parse_int<T: FromStr>(token: &str) -> Result<T, SolveError> {
    let token = token.trim();
    token.parse().map_err(|_| SolveError::BadInteger {
        token: token.to_string(),
    })
}
