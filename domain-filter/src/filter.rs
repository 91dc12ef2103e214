use crate::errors::FilterError;
use crate::operator::FilterOperator;
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// One element of a domain: a comparison leaf or an explicit logical operator.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterToken {
    Leaf {
        field: String,
        comparator: String,
        value: Value,
    },
    Operator(FilterOperator),
}

impl FilterToken {
    /// Wire form: `[field, comparator, value]` for a leaf, the operator symbol
    /// otherwise. A collection never stores AND, so `"&"` only shows up for
    /// tokens built by hand.
    pub fn to_wire(&self) -> Value {
        match self {
            FilterToken::Leaf {
                field,
                comparator,
                value,
            } => Value::Array(vec![
                Value::String(field.clone()),
                Value::String(comparator.clone()),
                value.clone(),
            ]),
            FilterToken::Operator(op) => Value::String(op.symbol().unwrap_or("&").to_string()),
        }
    }
}

impl Serialize for FilterToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterToken::Leaf {
                field,
                comparator,
                value,
            } => (field, comparator, value).serialize(serializer),
            FilterToken::Operator(op) => serializer.serialize_str(op.symbol().unwrap_or("&")),
        }
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterToken::Leaf {
                field,
                comparator,
                value,
            } => write!(
                f,
                "({}, {}, {})",
                Value::String(field.clone()),
                Value::String(comparator.clone()),
                value
            ),
            FilterToken::Operator(op) => write!(f, "\"{}\"", op.symbol().unwrap_or("&")),
        }
    }
}

/// Ordered builder for search domains.
///
/// The remote system reads the materialized sequence in prefix notation:
/// `"|"` combines the next two terms, `"!"` negates the next one, and
/// adjacent terms without an operator are AND-ed. The collection keeps tokens
/// exactly where they are put and performs no arity checking unless
/// [`FilterCollection::validate`] is called.
///
/// ```
/// use domain_filter::{FilterCollection, FilterOperator};
///
/// let mut filters = FilterCollection::new();
/// filters.add_operator(FilterOperator::Or);
/// filters.add("type", "=", "many2one").unwrap();
/// filters.add("type", "=", "many2many").unwrap();
/// assert_eq!(
///     serde_json::to_string(&filters).unwrap(),
///     r#"["|",["type","=","many2one"],["type","=","many2many"]]"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCollection {
    tokens: Vec<FilterToken>,
}

impl FilterCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a comparison leaf.
    pub fn add<F, C, V>(&mut self, field: F, comparator: C, value: V) -> Result<(), FilterError>
    where
        F: Into<String>,
        C: Into<String>,
        V: Into<Value>,
    {
        self.insert(self.tokens.len(), field, comparator, value)
    }

    /// Inserts a comparison leaf at `index`, shifting later tokens right.
    ///
    /// `field` and `comparator` must be non-empty. The comparator is passed
    /// through verbatim and the value is never inspected.
    pub fn insert<F, C, V>(
        &mut self,
        index: usize,
        field: F,
        comparator: C,
        value: V,
    ) -> Result<(), FilterError>
    where
        F: Into<String>,
        C: Into<String>,
        V: Into<Value>,
    {
        let field = field.into();
        if field.is_empty() {
            tracing::debug!(index, "rejected filter leaf without field name");
            return Err(FilterError::InvalidArgument { parameter: "field" });
        }
        let comparator = comparator.into();
        if comparator.is_empty() {
            tracing::debug!(index, field = %field, "rejected filter leaf without comparator");
            return Err(FilterError::InvalidArgument {
                parameter: "comparator",
            });
        }
        self.check_index(index)?;

        tracing::trace!(index, field = %field, comparator = %comparator, "insert filter leaf");
        self.tokens.insert(
            index,
            FilterToken::Leaf {
                field,
                comparator,
                value: value.into(),
            },
        );
        Ok(())
    }

    /// Appends a logical operator. AND adds nothing.
    pub fn add_operator(&mut self, operator: FilterOperator) {
        if operator.symbol().is_some() {
            tracing::trace!(
                index = self.tokens.len(),
                operator = %operator,
                "append filter operator"
            );
            self.tokens.push(FilterToken::Operator(operator));
        }
    }

    /// Inserts a logical operator at `index`, shifting later tokens right.
    ///
    /// AND is the implicit combinator of the domain language and is never
    /// materialized, so inserting it is a no-op that succeeds for any index.
    pub fn insert_operator(
        &mut self,
        index: usize,
        operator: FilterOperator,
    ) -> Result<(), FilterError> {
        match operator {
            FilterOperator::And => Ok(()),
            FilterOperator::Or | FilterOperator::Not => {
                self.check_index(index)?;
                tracing::trace!(index, operator = %operator, "insert filter operator");
                self.tokens.insert(index, FilterToken::Operator(operator));
                Ok(())
            }
        }
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Number of tokens, leaves and explicit operators alike
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FilterToken> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[FilterToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterToken> {
        self.tokens.iter()
    }

    /// Snapshot of the domain in the shape search and read calls expect.
    /// The returned vector is owned and unaffected by later mutation.
    pub fn materialize(&self) -> Vec<Value> {
        self.tokens.iter().map(FilterToken::to_wire).collect()
    }

    /// Checks that every operator is followed by as many terms as its arity.
    ///
    /// Scans right to left counting complete terms: a leaf adds one, NOT
    /// consumes one and yields one, OR consumes two and yields one. An empty
    /// domain is valid.
    pub fn validate(&self) -> Result<(), FilterError> {
        let mut terms = 0usize;
        for (position, token) in self.tokens.iter().enumerate().rev() {
            match token {
                FilterToken::Leaf { .. } => terms += 1,
                FilterToken::Operator(op) => {
                    let arity = op.arity();
                    if terms < arity {
                        let reason = format!(
                            "{} expects {} following term(s), found {}",
                            op, arity, terms
                        );
                        tracing::debug!(position, %reason, "domain validation failed");
                        return Err(FilterError::MalformedDomain { position, reason });
                    }
                    terms -= arity - 1;
                }
            }
        }
        Ok(())
    }

    /// [`FilterCollection::materialize`] preceded by [`FilterCollection::validate`]
    pub fn materialize_validated(&self) -> Result<Vec<Value>, FilterError> {
        self.validate()?;
        Ok(self.materialize())
    }

    fn check_index(&self, index: usize) -> Result<(), FilterError> {
        if index > self.tokens.len() {
            return Err(FilterError::IndexOutOfBounds {
                index,
                len: self.tokens.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FilterCollection {
    type Item = &'a FilterToken;
    type IntoIter = std::slice::Iter<'a, FilterToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl Serialize for FilterCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.tokens)
    }
}

impl fmt::Display for FilterCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", token)?;
        }
        write!(f, "]")
    }
}
