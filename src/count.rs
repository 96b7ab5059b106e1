//! Lenient atom counting over a textual chemical formula.
//!
//! [`count_atoms`] is a total function: every input produces a number,
//! every malformed construct degrades to skip-and-continue. This is the
//! surface meant for formulas embedded in larger strings (names with
//! charge annotations, stray punctuation, unbalanced parentheses) where
//! one bad row must not abort a batch. [`count_atoms_report`] is the same
//! scan, additionally reporting which character spans were discarded.
//!
//! Element tokens are not validated against the periodic table here; any
//! uppercase letter plus trailing lowercase letters counts as one atom.
//! For checked parsing use [`crate::formula::parse_formula`].

/// A half-open range of character positions the scan discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Result of [`count_atoms_report`]: the total plus the spans that
/// contributed nothing to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CountReport {
    pub total: f64,
    pub skipped: Vec<Span>,
}

/// Count the atoms described by a chemical formula.
///
/// Multiplicities may be fractional ("H2.5" counts 2.5 atoms); the total
/// is therefore an `f64`, though well-formed formulas yield whole numbers.
/// Never panics or errors.
///
/// ```
/// use chemformula::count_atoms;
///
/// assert_eq!(count_atoms("H2O"), 3.0);
/// assert_eq!(count_atoms("Ca(OH)2"), 5.0);
/// assert_eq!(count_atoms(""), 0.0);
/// ```
pub fn count_atoms(formula: &str) -> f64 {
    if formula.is_empty() {
        return 0.0;
    }
    let chars: Vec<char> = formula.chars().collect();
    let mut skipped = Vec::new();
    scan(&chars, 0, &mut skipped)
}

/// Count atoms and report the character spans the scan discarded
/// (stray characters, unmatched parentheses, unparsable multiplicities).
pub fn count_atoms_report(formula: &str) -> CountReport {
    if formula.is_empty() {
        return CountReport {
            total: 0.0,
            skipped: Vec::new(),
        };
    }
    let chars: Vec<char> = formula.chars().collect();
    let mut skipped = Vec::new();
    let total = scan(&chars, 0, &mut skipped);
    CountReport { total, skipped }
}

// `base` is the absolute position of chars[0] in the original string, so
// recursive calls over group interiors report absolute spans.
fn scan(chars: &[char], base: usize, skipped: &mut Vec<Span>) -> f64 {
    let mut total = 0.0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '(' {
            match matching_paren(chars, i) {
                Some(close) => {
                    let inner = scan(&chars[i + 1..close], base + i + 1, skipped);
                    let mut j = close + 1;
                    let multiplier = parse_multiplicity(chars, &mut j, base, skipped);
                    total += inner * multiplier;
                    i = j;
                }
                None => {
                    // Unbalanced: the stray '(' is ordinary text.
                    push_skip(skipped, base + i, base + i + 1);
                    i += 1;
                }
            }
        } else if chars[i].is_ascii_uppercase() {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_lowercase() {
                j += 1;
            }
            total += parse_multiplicity(chars, &mut j, base, skipped);
            i = j;
        } else {
            // Lowercase out of place, orphan digit, punctuation, whitespace.
            push_skip(skipped, base + i, base + i + 1);
            i += 1;
        }
    }

    total
}

// Position of the ')' matching the '(' at `open`, or None if unbalanced.
fn matching_paren(chars: &[char], open: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut j = open + 1;
    while j < chars.len() {
        match chars[j] {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

// Consume a run of digits and dots starting at *i. Returns the parsed
// multiplier, defaulting to 1 when the run is empty or fails to parse
// (e.g. two decimal points). The cursor advances past the run either way.
fn parse_multiplicity(chars: &[char], i: &mut usize, base: usize, skipped: &mut Vec<Span>) -> f64 {
    let start = *i;
    while *i < chars.len() && (chars[*i].is_ascii_digit() || chars[*i] == '.') {
        *i += 1;
    }
    if *i == start {
        return 1.0;
    }
    let text: String = chars[start..*i].iter().collect();
    match text.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            push_skip(skipped, base + start, base + *i);
            1.0
        }
    }
}

fn push_skip(skipped: &mut Vec<Span>, start: usize, end: usize) {
    if let Some(last) = skipped.last_mut() {
        if last.end == start {
            last.end = end;
            return;
        }
    }
    skipped.push(Span { start, end });
}
