pub mod composition;
pub mod count;
pub mod element;
pub mod formula;

pub use composition::Composition;
pub use count::{count_atoms, count_atoms_report, CountReport, Span};
pub use element::Element;
pub use formula::{parse_formula, FormulaError};
