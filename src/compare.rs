//! Result equivalence for sql-drill.
//!
//! Decides whether a candidate result carries the same data as the
//! reference result. The quiz rewards selecting the right data, not
//! matching column layout: column names, column order, and row order
//! are all ignored, while duplicate values and duplicate rows keep
//! their multiplicity.
//!
//! Each row collapses to a value-multiset (its cell values with column
//! identity discarded) and the result set collapses to a multiset of
//! those row-multisets. Two results are equivalent iff the collapsed
//! forms are equal. Value equality is exact; no floating-point
//! tolerance is applied.

use crate::db::{QueryResult, Value};
use std::cmp::Ordering;

/// Returns true if the candidate result is semantically equivalent to
/// the reference result.
///
/// Callers must only invoke this when both executions succeeded; a
/// failed query is never equivalent to anything and never reaches this
/// function.
pub fn equivalent(candidate: &QueryResult, reference: &QueryResult) -> bool {
    if candidate.rows.len() != reference.rows.len() {
        return false;
    }

    let candidate_rows = collapse(candidate);
    let reference_rows = collapse(reference);

    candidate_rows
        .iter()
        .zip(&reference_rows)
        .all(|(a, b)| row_cmp(a, b) == Ordering::Equal)
}

/// Collapses a result set into its canonical form: values sorted within
/// each row, rows sorted within the set. Sorting under a total order
/// makes multiset equality a pairwise walk.
fn collapse(result: &QueryResult) -> Vec<Vec<&Value>> {
    let mut rows: Vec<Vec<&Value>> = result
        .rows
        .iter()
        .map(|row| {
            let mut values: Vec<&Value> = row.iter().collect();
            values.sort_by(|a, b| value_cmp(a, b));
            values
        })
        .collect();

    rows.sort_by(|a, b| row_cmp(a, b));
    rows
}

/// Compares two sorted rows: arity first, then values in order.
fn row_cmp(a: &[&Value], b: &[&Value]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| value_cmp(x, y))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    })
}

/// Total order over values. Numerics compare across the Int/Float
/// divide so that `1` equals `1.0`, matching SQL's own coercion; every
/// other cross-type pair orders by type rank and is never equal. Floats
/// use `total_cmp`, so equality stays exact.
fn value_cmp(a: &Value, b: &Value) -> Ordering {
    use Value::*;

    match (a, b) {
        (Null, Null) => Ordering::Equal,
        (Bool(x), Bool(y)) => x.cmp(y),
        (Int(x), Int(y)) => x.cmp(y),
        (Float(x), Float(y)) => x.total_cmp(y),
        (Int(x), Float(y)) => (*x as f64).total_cmp(y),
        (Float(x), Int(y)) => x.total_cmp(&(*y as f64)),
        (Text(x), Text(y)) => x.cmp(y),
        (Date(x), Date(y)) => x.cmp(y),
        (Timestamp(x), Timestamp(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) => 2,
        Value::Text(_) => 3,
        Value::Date(_) => 4,
        Value::Timestamp(_) => 5,
    }
}
