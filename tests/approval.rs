use serde::Deserialize;

use chemformula::{count_atoms, count_atoms_report, parse_formula};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[derive(Deserialize)]
struct FormulaEntry {
    formula: String,
    atoms: f64,
    strict: bool,
    hill: Option<String>,
    weight: Option<f64>,
}

fn entries() -> Vec<FormulaEntry> {
    serde_json::from_str(include_str!("approval_data/formulas.json")).unwrap()
}

#[test]
fn lenient_counts_match_fixture() {
    for entry in entries() {
        let got = count_atoms(&entry.formula);
        assert_eq!(
            got, entry.atoms,
            "count_atoms({:?}) = {got}, fixture says {}",
            entry.formula, entry.atoms
        );
    }
}

#[test]
fn report_totals_match_fixture() {
    for entry in entries() {
        let report = count_atoms_report(&entry.formula);
        assert_eq!(
            report.total, entry.atoms,
            "report total for {:?}",
            entry.formula
        );
    }
}

#[test]
fn strict_parse_agrees_where_accepted() {
    for entry in entries() {
        let result = parse_formula(&entry.formula);
        if !entry.strict {
            assert!(
                result.is_err(),
                "expected strict rejection of {:?}",
                entry.formula
            );
            continue;
        }
        let composition =
            result.unwrap_or_else(|e| panic!("strict parse of {:?} failed: {e}", entry.formula));
        assert_eq!(
            composition.atom_count(),
            entry.atoms,
            "strict atom count for {:?}",
            entry.formula
        );
        if let Some(hill) = &entry.hill {
            assert_eq!(
                &composition.hill_formula(),
                hill,
                "hill for {:?}",
                entry.formula
            );
        }
        if let Some(weight) = entry.weight {
            assert!(
                approx_eq(composition.molecular_weight(), weight, 0.01),
                "weight for {:?}: got {}, fixture says {weight}",
                entry.formula,
                composition.molecular_weight()
            );
        }
    }
}
