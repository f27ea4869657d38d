//! Shared join and ranking helpers
//!
//! Reports start from the same join, order lines matched to their order,
//! and end with the same deterministic selections: rank descending by
//! revenue with ties broken by ascending key, or pick the single top entry
//! of a partition.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{Money, Order, OrderId, OrderLine};

/// An order line joined to its order, with the line revenue computed
#[derive(Debug, Clone, Copy)]
pub struct LineFact<'a> {
    pub order: &'a Order,
    pub line: &'a OrderLine,
    pub revenue: Money,
}

/// Inner join of order lines to orders
///
/// Lines whose order is absent are dropped.
pub fn join_lines<'a>(orders: &'a [Order], lines: &'a [OrderLine]) -> Vec<LineFact<'a>> {
    let by_id: HashMap<OrderId, &Order> = index_by(orders, |o| o.order_id);
    lines
        .iter()
        .filter_map(|line| {
            by_id.get(&line.order_id).map(|order| LineFact {
                order,
                line,
                revenue: line.revenue(),
            })
        })
        .collect()
}

/// Sum of line revenue over every order line
pub fn total_revenue(lines: &[OrderLine]) -> Money {
    lines.iter().map(OrderLine::revenue).sum()
}

/// Build a lookup table keyed by `key`; later duplicates win
pub fn index_by<K, T, F>(items: &[T], key: F) -> HashMap<K, &T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items.iter().map(|item| (key(item), item)).collect()
}

/// Sort by value descending; equal values keep ascending key order
pub fn rank_desc<K: Ord, V: Ord>(entries: &mut [(K, V)]) {
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
}

/// The entry with the greatest value; ties go to the smallest key
pub fn top_entry<K: Ord, V: Ord>(entries: impl IntoIterator<Item = (K, V)>) -> Option<(K, V)> {
    entries.into_iter().fold(None, |best, (key, value)| match best {
        Some((best_key, best_value))
            if best_value > value || (best_value == value && best_key <= key) =>
        {
            Some((best_key, best_value))
        }
        _ => Some((key, value)),
    })
}
