//! Strict formula parsing.
//!
//! [`parse_formula`] turns "Ca(OH)2" into a [`Composition`], rejecting
//! anything that is not a well-formed formula: unknown element symbols,
//! stray characters, unbalanced parentheses, malformed counts. For the
//! lenient never-failing surface see [`crate::count::count_atoms`].

pub mod error;
mod tokenizer;

use crate::composition::Composition;
pub use error::FormulaError;
use tokenizer::Token;

pub fn parse_formula(s: &str) -> Result<Composition, FormulaError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(FormulaError::EmptyInput);
    }
    let tokens = tokenizer::tokenize(trimmed)?;
    build_composition(&tokens)
}

// One pass over the token stream. A count token scales the symbol or the
// parenthesized group immediately before it; the stack holds the
// compositions of groups still open.
fn build_composition(tokens: &[Token]) -> Result<Composition, FormulaError> {
    let mut stack: Vec<(usize, Composition)> = Vec::new();
    let mut current = Composition::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Symbol { element, .. } => {
                let mut count = 1.0;
                if let Some(Token::Count { value, .. }) = tokens.get(i + 1) {
                    count = *value;
                    i += 1;
                }
                current.add(*element, count);
            }
            Token::OpenParen(pos) => {
                stack.push((*pos, std::mem::take(&mut current)));
            }
            Token::CloseParen(pos) => {
                let (_, parent) = stack
                    .pop()
                    .ok_or(FormulaError::UnmatchedParen { pos: *pos })?;
                let mut group = std::mem::replace(&mut current, parent);
                if let Some(Token::Count { value, .. }) = tokens.get(i + 1) {
                    group.scale(*value);
                    i += 1;
                }
                current.merge(&group);
            }
            Token::Count { pos, .. } => {
                return Err(FormulaError::LeadingCount { pos: *pos });
            }
        }
        i += 1;
    }

    if let Some((pos, _)) = stack.pop() {
        return Err(FormulaError::UnmatchedParen { pos });
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count_atoms;
    use crate::element::Element;

    #[test]
    fn water() {
        let c = parse_formula("H2O").unwrap();
        assert_eq!(c.count_of(Element::H), 2.0);
        assert_eq!(c.count_of(Element::O), 1.0);
        assert_eq!(c.atom_count(), 3.0);
    }

    #[test]
    fn methane() {
        let c = parse_formula("CH4").unwrap();
        assert_eq!(c.atom_count(), 5.0);
    }

    #[test]
    fn calcium_hydroxide() {
        let c = parse_formula("Ca(OH)2").unwrap();
        assert_eq!(c.count_of(Element::Ca), 1.0);
        assert_eq!(c.count_of(Element::O), 2.0);
        assert_eq!(c.count_of(Element::H), 2.0);
    }

    #[test]
    fn trimethylamine() {
        let c = parse_formula("N(CH3)3").unwrap();
        assert_eq!(c.count_of(Element::C), 3.0);
        assert_eq!(c.count_of(Element::H), 9.0);
        assert_eq!(c.atom_count(), 13.0);
    }

    #[test]
    fn nested_groups() {
        let c = parse_formula("(C(OH)2)2").unwrap();
        assert_eq!(c.count_of(Element::C), 2.0);
        assert_eq!(c.count_of(Element::O), 4.0);
        assert_eq!(c.count_of(Element::H), 4.0);
    }

    #[test]
    fn group_without_count() {
        let c = parse_formula("C(OH)").unwrap();
        assert_eq!(c.atom_count(), 3.0);
    }

    #[test]
    fn fractional_stoichiometry() {
        let c = parse_formula("CaSO4(H2O)0.5").unwrap();
        assert_eq!(c.count_of(Element::H), 1.0);
        assert_eq!(c.count_of(Element::O), 4.5);
        assert_eq!(c.atom_count(), 7.5);
    }

    #[test]
    fn whitespace_trimmed() {
        let c = parse_formula("  H2O  ").unwrap();
        assert_eq!(c.atom_count(), 3.0);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(parse_formula("").unwrap_err(), FormulaError::EmptyInput);
        assert_eq!(parse_formula("   ").unwrap_err(), FormulaError::EmptyInput);
    }

    #[test]
    fn unmatched_open_rejected() {
        assert_eq!(
            parse_formula("H2O(").unwrap_err(),
            FormulaError::UnmatchedParen { pos: 3 }
        );
        assert_eq!(
            parse_formula("(H2O").unwrap_err(),
            FormulaError::UnmatchedParen { pos: 0 }
        );
    }

    #[test]
    fn unmatched_close_rejected() {
        assert_eq!(
            parse_formula("H2O)").unwrap_err(),
            FormulaError::UnmatchedParen { pos: 3 }
        );
    }

    #[test]
    fn leading_count_rejected() {
        assert_eq!(
            parse_formula("2H").unwrap_err(),
            FormulaError::LeadingCount { pos: 0 }
        );
        assert_eq!(
            parse_formula("(2H)").unwrap_err(),
            FormulaError::LeadingCount { pos: 1 }
        );
    }

    #[test]
    fn structural_punctuation_rejected() {
        // The lenient counter accepts these; the strict parser does not.
        assert!(parse_formula("CH3C(OH)=NH").is_err());
    }

    #[test]
    fn agrees_with_lenient_counter_when_accepted() {
        for s in [
            "H2O",
            "CH4",
            "Ca(OH)2",
            "N(CH3)3",
            "(H2O)2(CO2)3",
            "CaSO4(H2O)0.5",
            "C6H12O6",
            "Al2(SO4)3",
        ] {
            let c = parse_formula(s).unwrap();
            assert_eq!(c.atom_count(), count_atoms(s), "mismatch on {s}");
        }
    }
}
