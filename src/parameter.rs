use crate::error::ValidationError;

/// Validated input for one grouping run.
///
/// Only obtainable through [`Parameter::new`], so every value in circulation
/// satisfies `0 < g <= n` and carries a usable delimiter.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Parameter {
    max_number: usize,
    group_count: usize,
    delimiter: String,
    min_group_size: usize,
    overflow_group_count: usize,
}

impl Parameter {
    pub fn new(n: i64, g: i64, delimiter: &str) -> Result<Self, ValidationError> {
        if n <= 0 {
            return Err(ValidationError::NonPositiveMaxNumber(n));
        }
        if g <= 0 {
            return Err(ValidationError::NonPositiveGroupCount(g));
        }
        if n < g {
            return Err(ValidationError::FewerNumbersThanGroups { n, g });
        }
        if delimiter.is_empty() {
            return Err(ValidationError::EmptyDelimiter);
        }
        if is_integer_literal(delimiter) {
            return Err(ValidationError::NumericDelimiter(delimiter.to_string()));
        }

        let max_number =
            usize::try_from(n).map_err(|_| ValidationError::NonPositiveMaxNumber(n))?;
        let group_count =
            usize::try_from(g).map_err(|_| ValidationError::NonPositiveGroupCount(g))?;

        Ok(Parameter {
            max_number,
            group_count,
            delimiter: delimiter.to_string(),
            min_group_size: max_number / group_count,
            overflow_group_count: max_number % group_count,
        })
    }

    pub fn max_number(&self) -> usize {
        self.max_number
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    pub fn overflow_group_count(&self) -> usize {
        self.overflow_group_count
    }

    /// Size of the `index`-th group. The first `overflow_group_count` groups
    /// get one extra element.
    pub fn group_size(&self, index: usize) -> usize {
        if index < self.overflow_group_count() {
            self.min_group_size() + 1
        } else {
            self.min_group_size()
        }
    }
}

/// Optional sign followed by ASCII digits, leading zeros included.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
