//! Element compositions and molecular weight.
//!
//! A [`Composition`] is what the strict parser produces: an ordered map
//! from [`Element`] to count. Counts are `f64` because group
//! multiplicities may be fractional (hydrates are often written with
//! fractional stoichiometry, e.g. "CaSO4(H2O)0.5").

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write;

use crate::element::Element;

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Composition {
    counts: BTreeMap<Element, f64>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Count of one element, 0 if absent.
    pub fn count_of(&self, element: Element) -> f64 {
        self.counts.get(&element).copied().unwrap_or(0.0)
    }

    pub fn add(&mut self, element: Element, count: f64) {
        *self.counts.entry(element).or_insert(0.0) += count;
    }

    /// Iterate in atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.counts.iter().map(|(e, c)| (*e, *c))
    }

    /// Multiply every count, in place. Used when a parenthesized group
    /// closes with a multiplicity.
    pub fn scale(&mut self, factor: f64) {
        for count in self.counts.values_mut() {
            *count *= factor;
        }
    }

    pub fn merge(&mut self, other: &Composition) {
        for (element, count) in other.iter() {
            self.add(element, count);
        }
    }

    /// Total atom count, the sum of all element counts.
    pub fn atom_count(&self) -> f64 {
        self.counts.values().sum()
    }

    /// Molecular weight in daltons, from standard atomic weights.
    pub fn molecular_weight(&self) -> f64 {
        self.iter()
            .fold(0.0, |acc, (e, c)| acc + c * e.atomic_weight())
    }

    /// Render as a Hill system string: C first, then H, then remaining
    /// elements alphabetically by symbol. Without carbon all elements are
    /// alphabetical. Count 1 is omitted; whole counts print as integers,
    /// fractional counts as decimals.
    pub fn hill_formula(&self) -> String {
        let mut rest: Vec<(&'static str, f64)> = Vec::new();
        let mut carbon = 0.0;
        let mut hydrogen = 0.0;
        for (element, count) in self.iter() {
            match element {
                Element::C => carbon = count,
                Element::H => hydrogen = count,
                _ => rest.push((element.symbol(), count)),
            }
        }
        rest.sort_by(|a, b| a.0.cmp(b.0));

        let mut result = String::new();
        if carbon > 0.0 {
            append_element(&mut result, "C", carbon);
            if hydrogen > 0.0 {
                append_element(&mut result, "H", hydrogen);
            }
        } else if hydrogen > 0.0 {
            // No carbon: H sorts alphabetically with the rest.
            let at = rest.partition_point(|(sym, _)| *sym < "H");
            rest.insert(at, ("H", hydrogen));
        }
        for (symbol, count) in rest {
            append_element(&mut result, symbol, count);
        }
        result
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hill_formula())
    }
}

fn append_element(buf: &mut String, symbol: &str, count: f64) {
    buf.push_str(symbol);
    if count != 1.0 {
        if count == count.trunc() {
            write!(buf, "{}", count as i64).unwrap();
        } else {
            write!(buf, "{count}").unwrap();
        }
    }
}
