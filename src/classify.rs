use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Taken,
    Excluded,
    Skipped,
}

#[derive(Debug)]
pub struct TaxonFilter {
    pub take: HashSet<String>,
    pub exclude: HashSet<String>,
}

impl TaxonFilter {
    pub fn new(take: HashSet<String>, exclude: HashSet<String>) -> Self {
        Self { take, exclude }
    }

    // Precedence: invalid taxID skips, exclude beats take, an empty take set
    // passes everything else through.
    pub fn decide(&self, tax_id: &str) -> Decision {
        if !is_valid_tax_id(tax_id) {
            return Decision::Skipped;
        }
        if self.exclude.contains(tax_id) {
            return Decision::Excluded;
        }
        if self.take.is_empty() || self.take.contains(tax_id) {
            return Decision::Taken;
        }
        Decision::Skipped
    }
}

// ASCII digits only and numerically >= 1, checked without integer parsing so
// arbitrarily long digit strings behave like unbounded ints ("007" is valid,
// "000" is not).
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    !tax_id.is_empty()
        && tax_id.bytes().all(|b| b.is_ascii_digit())
        && tax_id.bytes().any(|b| b != b'0')
}
