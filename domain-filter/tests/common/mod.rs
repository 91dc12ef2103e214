#![allow(dead_code)]

use domain_filter::{FilterCollection, FilterOperator};

/// Partners named ABC from Belgium or Germany whose language is not English
pub fn partner_domain() -> FilterCollection {
    let mut filters = FilterCollection::new();
    filters.add("name", "=", "ABC").unwrap();
    filters.add_operator(FilterOperator::Not);
    filters.add("language.code", "=", "en_US").unwrap();
    filters.add_operator(FilterOperator::Or);
    filters.add("country_id.code", "=", "be").unwrap();
    filters.add("country_id.code", "=", "de").unwrap();
    filters
}

pub fn leaves(count: usize) -> FilterCollection {
    let mut filters = FilterCollection::new();
    for i in 0..count {
        filters.add(format!("field_{}", i), "=", i).unwrap();
    }
    filters
}
