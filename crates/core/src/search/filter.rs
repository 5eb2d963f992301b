//! Predicate composition for search queries.
//!
//! A [`FilterClause`] pairs a string field selector with the caller's driving
//! value. Clauses whose driving value is blank are dropped. The remaining
//! clauses are folded left-to-right with one [`CombineMode`] and the result is
//! joined to a base guard predicate, yielding one boxed [`Predicate`].

use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// A single-argument boolean test over an entity.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Logical operator applied uniformly between every present clause of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    And,
    Or,
}

impl CombineMode {
    /// Joins two predicates with this operator. `lhs` is always evaluated first
    /// and short-circuits `rhs`.
    pub fn combine<T: 'static>(self, lhs: Predicate<T>, rhs: Predicate<T>) -> Predicate<T> {
        match self {
            CombineMode::And => Box::new(move |entity: &T| lhs(entity) && rhs(entity)),
            CombineMode::Or => Box::new(move |entity: &T| lhs(entity) || rhs(entity)),
        }
    }
}

impl FromStr for CombineMode {
    type Err = SearchError;

    /// Parses `AND` / `OR` (case-insensitive, surrounding whitespace ignored).
    /// Anything else is rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("and") {
            Ok(CombineMode::And)
        } else if trimmed.eq_ignore_ascii_case("or") {
            Ok(CombineMode::Or)
        } else {
            Err(SearchError::UnsupportedCombineMode(s.to_string()))
        }
    }
}

impl fmt::Display for CombineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombineMode::And => f.write_str("AND"),
            CombineMode::Or => f.write_str("OR"),
        }
    }
}

/// An optional case-insensitive substring criterion on one string field.
pub struct FilterClause<T> {
    field: fn(&T) -> &str,
    value: Option<String>,
}

impl<T: 'static> FilterClause<T> {
    /// Creates a clause testing `field` against `value`.
    pub fn new(field: fn(&T) -> &str, value: Option<&str>) -> Self {
        Self {
            field,
            value: value.map(str::to_string),
        }
    }

    /// Returns `true` when the driving value is missing, empty, or whitespace-only.
    pub fn is_absent(&self) -> bool {
        self.value.as_deref().map_or(true, |v| v.trim().is_empty())
    }

    /// Builds the clause predicate, or `None` for an absent clause.
    ///
    /// Both sides are uppercased before the containment test. The driving value
    /// is not trimmed.
    pub fn into_predicate(self) -> Option<Predicate<T>> {
        if self.is_absent() {
            return None;
        }
        let needle = self.value?.to_uppercase();
        let field = self.field;
        Some(Box::new(move |entity: &T| {
            field(entity).to_uppercase().contains(&needle)
        }))
    }
}

/// Folds `clauses` into a single predicate guarded by `base`.
///
/// Present clauses are combined strictly left-to-right with `mode`. The folded
/// clause chain is then AND-ed onto `base`, so `base` always holds for a match
/// and `OR` yields "matches any present clause". With no present clauses the
/// result is `base` itself.
pub fn compose<T: 'static>(
    base: Predicate<T>,
    clauses: Vec<FilterClause<T>>,
    mode: CombineMode,
) -> Predicate<T> {
    let mut folded: Option<Predicate<T>> = None;
    for clause in clauses {
        let Some(test) = clause.into_predicate() else {
            continue;
        };
        folded = Some(match folded {
            None => test,
            Some(acc) => mode.combine(acc, test),
        });
    }
    match folded {
        Some(chain) => CombineMode::And.combine(base, chain),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Item {
        id: &'static str,
        name: &'static str,
        tag: &'static str,
    }

    fn item_name(item: &Item) -> &str {
        item.name
    }

    fn item_tag(item: &Item) -> &str {
        item.tag
    }

    fn base() -> Predicate<Item> {
        Box::new(|item: &Item| !item.id.trim().is_empty())
    }

    fn always(result: bool) -> Predicate<Item> {
        Box::new(move |_: &Item| result)
    }

    fn item(id: &'static str, name: &'static str, tag: &'static str) -> Item {
        Item { id, name, tag }
    }

    #[test]
    fn test_parse_combine_mode() {
        assert_eq!("AND".parse::<CombineMode>().unwrap(), CombineMode::And);
        assert_eq!("or".parse::<CombineMode>().unwrap(), CombineMode::Or);
        assert_eq!(" Or ".parse::<CombineMode>().unwrap(), CombineMode::Or);
    }

    #[test]
    fn test_parse_unknown_combine_mode_is_error() {
        for raw in ["", "XOR", "ANDOR", "1", "not"] {
            let err = raw.parse::<CombineMode>().unwrap_err();
            assert!(matches!(err, SearchError::UnsupportedCombineMode(ref s) if s == raw));
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in [CombineMode::And, CombineMode::Or] {
            assert_eq!(mode.to_string().parse::<CombineMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_combine_truth_tables() {
        let x = item("1", "", "");
        for (l, r) in [(false, false), (false, true), (true, false), (true, true)] {
            assert_eq!(CombineMode::And.combine(always(l), always(r))(&x), l && r);
            assert_eq!(CombineMode::Or.combine(always(l), always(r))(&x), l || r);
        }
    }

    #[test]
    fn test_combine_short_circuits_rhs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = {
            let calls = calls.clone();
            move |result: bool| -> Predicate<Item> {
                let calls = calls.clone();
                Box::new(move |_: &Item| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    result
                })
            }
        };
        let x = item("1", "", "");

        assert!(!CombineMode::And.combine(always(false), counted(true))(&x));
        assert!(CombineMode::Or.combine(always(true), counted(false))(&x));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(CombineMode::And.combine(always(true), counted(true))(&x));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_blank_values_are_absent() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let clause = FilterClause::new(item_name, value);
            assert!(clause.is_absent());
            assert!(clause.into_predicate().is_none());
        }
        assert!(!FilterClause::new(item_name, Some("w")).is_absent());
    }

    #[test]
    fn test_clause_is_case_insensitive() {
        let test = FilterClause::new(item_name, Some("wid")).into_predicate().unwrap();
        assert!(test(&item("1", "WIDGET", "")));
        assert!(test(&item("2", "Widget", "")));
        assert!(test(&item("3", "a widget", "")));
        assert!(!test(&item("4", "Gadget", "")));
    }

    #[test]
    fn test_clause_value_is_not_trimmed() {
        let test = FilterClause::new(item_name, Some(" pro")).into_predicate().unwrap();
        assert!(test(&item("1", "Widget Pro", "")));
        assert!(!test(&item("2", "Professional", "")));
    }

    #[test]
    fn test_compose_without_clauses_is_base() {
        for mode in [CombineMode::And, CombineMode::Or] {
            let predicate = compose(
                base(),
                vec![
                    FilterClause::new(item_name, None),
                    FilterClause::new(item_tag, Some(" ")),
                ],
                mode,
            );
            assert!(predicate(&item("1", "anything", "x")));
            assert!(!predicate(&item("  ", "anything", "x")));
        }
    }

    #[test]
    fn test_compose_single_clause_same_in_both_modes() {
        let items = [
            item("1", "Widget", "A"),
            item("2", "Gadget", "B"),
            item("3", "Widget Pro", "B"),
        ];
        let and = compose(
            base(),
            vec![
                FilterClause::new(item_name, Some("widget")),
                FilterClause::new(item_tag, None),
            ],
            CombineMode::And,
        );
        let or = compose(
            base(),
            vec![
                FilterClause::new(item_name, Some("widget")),
                FilterClause::new(item_tag, None),
            ],
            CombineMode::Or,
        );
        for x in &items {
            assert_eq!(and(x), or(x));
        }
        assert!(or(&items[0]));
        assert!(!or(&items[1]));
    }

    #[test]
    fn test_compose_two_clauses() {
        let clauses = || {
            vec![
                FilterClause::new(item_name, Some("widget")),
                FilterClause::new(item_tag, Some("b")),
            ]
        };
        let and = compose(base(), clauses(), CombineMode::And);
        let or = compose(base(), clauses(), CombineMode::Or);

        let widget_a = item("1", "Widget", "A");
        let gadget_b = item("2", "Gadget", "B");
        let widget_b = item("3", "Widget Pro", "B");
        let other = item("4", "Sprocket", "C");

        assert!(!and(&widget_a));
        assert!(!and(&gadget_b));
        assert!(and(&widget_b));
        assert!(!and(&other));

        assert!(or(&widget_a));
        assert!(or(&gadget_b));
        assert!(or(&widget_b));
        assert!(!or(&other));
    }

    #[test]
    fn test_base_guards_every_mode() {
        let blank_id = item(" ", "Widget", "B");
        for mode in [CombineMode::And, CombineMode::Or] {
            let predicate = compose(
                base(),
                vec![
                    FilterClause::new(item_name, Some("widget")),
                    FilterClause::new(item_tag, Some("b")),
                ],
                mode,
            );
            assert!(!predicate(&blank_id));
        }
    }

    #[test]
    fn test_compose_is_left_fold_over_three_clauses() {
        fn item_id(item: &Item) -> &str {
            item.id
        }
        // (name ~ "a" OR tag ~ "x") OR id ~ "9"
        let or = compose(
            base(),
            vec![
                FilterClause::new(item_name, Some("a")),
                FilterClause::new(item_tag, Some("x")),
                FilterClause::new(item_id, Some("9")),
            ],
            CombineMode::Or,
        );
        assert!(or(&item("1", "abc", "")));
        assert!(or(&item("2", "zzz", "x")));
        assert!(or(&item("9", "zzz", "")));
        assert!(!or(&item("3", "zzz", "y")));

        let and = compose(
            base(),
            vec![
                FilterClause::new(item_name, Some("a")),
                FilterClause::new(item_tag, Some("x")),
                FilterClause::new(item_id, Some("9")),
            ],
            CombineMode::And,
        );
        assert!(and(&item("9", "abc", "x")));
        assert!(!and(&item("1", "abc", "x")));
    }
}
