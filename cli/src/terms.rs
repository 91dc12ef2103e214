use domain_filter::{FilterCollection, FilterOperator};
use serde_json::Value;
use std::str::FromStr;

/// A single command-line domain term
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Operator(FilterOperator),
    Leaf {
        field: String,
        comparator: String,
        value: Value,
    },
}

impl FromStr for Term {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(op) = FilterOperator::from_symbol(s) {
            return Ok(Term::Operator(op));
        }
        if !s.contains(':') {
            return FilterOperator::from_str(s).map(Term::Operator).map_err(|_| {
                anyhow::anyhow!(
                    "Unknown operator '{}', expected one of & | ! and or not",
                    s
                )
            });
        }

        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(field), Some(comparator), Some(value)) => {
                // Values that are not valid JSON are taken as plain strings
                let value = serde_json::from_str(value)
                    .unwrap_or_else(|_| Value::String(value.to_string()));
                Ok(Term::Leaf {
                    field: field.trim().to_string(),
                    comparator: comparator.trim().to_string(),
                    value,
                })
            }
            _ => anyhow::bail!(
                "Expected format: `field:comparator:value` or an operator, found {}",
                s
            ),
        }
    }
}

/// Appends the terms to a fresh collection, preserving their order
pub fn build_filters(terms: &[String]) -> anyhow::Result<FilterCollection> {
    let mut filters = FilterCollection::new();
    for (position, raw) in terms.iter().enumerate() {
        let term = Term::from_str(raw)
            .map_err(|e| anyhow::anyhow!("Term {} ('{}'): {}", position + 1, raw, e))?;
        log::debug!("Term {}: {:?}", position + 1, term);
        match term {
            Term::Operator(op) => filters.add_operator(op),
            Term::Leaf {
                field,
                comparator,
                value,
            } => filters
                .add(field, comparator, value)
                .map_err(|e| anyhow::anyhow!("Term {} ('{}'): {}", position + 1, raw, e))?,
        }
    }
    Ok(filters)
}
