use strum_macros::{Display, EnumIter, EnumString};

/// Logical combinators of the domain language.
///
/// All three are prefix operators. AND and OR take two terms, NOT takes one.
/// AND is the implicit default between adjacent terms, so it never appears on
/// the wire: [`FilterOperator::symbol`] returns `None` for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum FilterOperator {
    And,
    Or,
    Not,
}

impl FilterOperator {
    /// Protocol symbol, or `None` for the zero-width AND
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            FilterOperator::And => None,
            FilterOperator::Or => Some("|"),
            FilterOperator::Not => Some("!"),
        }
    }

    /// Number of following terms the operator consumes
    pub fn arity(&self) -> usize {
        match self {
            FilterOperator::And | FilterOperator::Or => 2,
            FilterOperator::Not => 1,
        }
    }

    /// Maps a protocol symbol back to its operator. `&` is accepted even though
    /// it is never emitted.
    pub fn from_symbol(symbol: &str) -> Option<FilterOperator> {
        match symbol {
            "&" => Some(FilterOperator::And),
            "|" => Some(FilterOperator::Or),
            "!" => Some(FilterOperator::Not),
            _ => None,
        }
    }
}
