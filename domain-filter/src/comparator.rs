use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Comparison symbols understood by the remote search endpoints.
///
/// Leaves accept any comparator string; this list is a convenience for
/// callers who want to avoid typos. `parent_left` and `parent_right` are the
/// hierarchy pseudo-comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
pub enum Comparator {
    #[strum(serialize = "=")]
    Equal,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = ">")]
    GreaterThan,
    #[strum(serialize = ">=")]
    GreaterThanOrEqual,
    #[strum(serialize = "<")]
    LessThan,
    #[strum(serialize = "<=")]
    LessThanOrEqual,
    #[strum(serialize = "like")]
    Like,
    #[strum(serialize = "ilike")]
    Ilike,
    #[strum(serialize = "in")]
    In,
    #[strum(serialize = "not in")]
    NotIn,
    #[strum(serialize = "child_of")]
    ChildOf,
    #[strum(serialize = "parent_left")]
    ParentLeft,
    #[strum(serialize = "parent_right")]
    ParentRight,
}

impl Comparator {
    pub fn is_known(symbol: &str) -> bool {
        Comparator::iter().any(|c| c.as_ref() == symbol)
    }
}

impl From<Comparator> for String {
    fn from(comparator: Comparator) -> Self {
        comparator.as_ref().to_string()
    }
}
