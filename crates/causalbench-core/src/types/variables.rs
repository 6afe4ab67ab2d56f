//! Ordered variable lists and the inclusion order between them.
//!
//! A variable list is an ordered sequence of names without duplicates.
//! The empty list is contained in every list.

use super::collections::FxHashSet;
use crate::errors::VariableError;

/// Whether a list contains an element more than once.
pub fn has_duplicates<S: AsRef<str>>(list: &[S]) -> bool {
    let mut seen = FxHashSet::default();
    !list.iter().all(|v| seen.insert(v.as_ref()))
}

/// Error if any of the passed lists contains duplicates.
pub fn enforce_no_duplicates<S: AsRef<str>>(lists: &[&[S]]) -> Result<(), VariableError> {
    for list in lists {
        if has_duplicates(list) {
            return Err(VariableError::Duplicates(to_owned(list)));
        }
    }
    Ok(())
}

fn to_owned<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    list.iter().map(|v| v.as_ref().to_string()).collect()
}

fn as_set<S: AsRef<str>>(list: &[S]) -> FxHashSet<&str> {
    list.iter().map(|v| v.as_ref()).collect()
}

/// Whether every element of `sub` is in `sup` (as sets).
fn contained_in<S: AsRef<str>>(sub: &[S], sup: &[S]) -> bool {
    let sup = as_set(sup);
    sub.iter().all(|v| sup.contains(v.as_ref()))
}

/// Returns the list that contains the other one. `first` wins on equality.
pub fn superlist<'a, S: AsRef<str>>(first: &'a [S], second: &'a [S]) -> Result<&'a [S], VariableError> {
    enforce_no_duplicates(&[first, second])?;
    if contained_in(second, first) {
        Ok(first)
    } else if contained_in(first, second) {
        Ok(second)
    } else {
        Err(VariableError::Incomparable {
            first: to_owned(first),
            second: to_owned(second),
        })
    }
}

/// Returns the list that is contained in the other one. `first` wins on equality.
pub fn sublist<'a, S: AsRef<str>>(first: &'a [S], second: &'a [S]) -> Result<&'a [S], VariableError> {
    enforce_no_duplicates(&[first, second])?;
    if contained_in(first, second) {
        Ok(first)
    } else if contained_in(second, first) {
        Ok(second)
    } else {
        Err(VariableError::Incomparable {
            first: to_owned(first),
            second: to_owned(second),
        })
    }
}

/// Whether `first` is a (non-strict) subset of `second`.
///
/// Errors when either list has duplicates or neither contains the other.
pub fn variables_increase<S: AsRef<str>>(first: &[S], second: &[S]) -> Result<bool, VariableError> {
    sublist(first, second)?;
    Ok(contained_in(first, second))
}

/// Whether the elements common to both lists appear in the same relative order.
///
/// Errors when neither list contains the other.
pub fn same_order<S: AsRef<str>>(first: &[S], second: &[S]) -> Result<bool, VariableError> {
    superlist(first, second)?;
    let (sup, sub) = if contained_in(second, first) {
        (first, second)
    } else {
        (second, first)
    };
    let sub_set = as_set(sub);
    let reduced: Vec<&str> = sup
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| sub_set.contains(v))
        .collect();
    Ok(reduced.len() == sub.len() && reduced.iter().zip(sub).all(|(a, b)| *a == b.as_ref()))
}

/// Variables of `previous` missing from `next`, in `previous` order.
pub fn removed_variables<S: AsRef<str>>(previous: &[S], next: &[S]) -> Vec<String> {
    let next = as_set(next);
    previous
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| !next.contains(v))
        .map(str::to_string)
        .collect()
}
