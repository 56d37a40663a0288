//!
//! Mock HMMs for testing
//!
use super::model::HmmModel;
use super::state::{st, sy, State};
use super::table::{EmissionTable, TransitionTable};
use crate::prob::p;

///
/// Tables of the 3-state cat mood model
///
/// ```text
/// #      -> happy 0.5, grumpy 0.5, hungry 0
/// happy  -> happy 0.5, grumpy 0.1, hungry 0.4
/// grumpy -> happy 0.6, grumpy 0.3, hungry 0.1
/// hungry -> happy 0.1, grumpy 0.6, hungry 0.3
///
/// happy  emits silent 0.2, meow 0.3, purr 0.5
/// grumpy emits silent 0.5, meow 0.4, purr 0.1
/// hungry emits silent 0.2, meow 0.6, purr 0.2
/// ```
///
pub fn mock_cat_tables() -> (TransitionTable, EmissionTable) {
    let transitions = vec![
        (State::start(), st("happy"), p(0.5)),
        (State::start(), st("grumpy"), p(0.5)),
        (State::start(), st("hungry"), p(0.0)),
        (st("happy"), st("happy"), p(0.5)),
        (st("happy"), st("grumpy"), p(0.1)),
        (st("happy"), st("hungry"), p(0.4)),
        (st("grumpy"), st("happy"), p(0.6)),
        (st("grumpy"), st("grumpy"), p(0.3)),
        (st("grumpy"), st("hungry"), p(0.1)),
        (st("hungry"), st("happy"), p(0.1)),
        (st("hungry"), st("grumpy"), p(0.6)),
        (st("hungry"), st("hungry"), p(0.3)),
    ]
    .into_iter()
    .collect();
    let emissions = vec![
        (st("happy"), sy("silent"), p(0.2)),
        (st("happy"), sy("meow"), p(0.3)),
        (st("happy"), sy("purr"), p(0.5)),
        (st("grumpy"), sy("silent"), p(0.5)),
        (st("grumpy"), sy("meow"), p(0.4)),
        (st("grumpy"), sy("purr"), p(0.1)),
        (st("hungry"), sy("silent"), p(0.2)),
        (st("hungry"), sy("meow"), p(0.6)),
        (st("hungry"), sy("purr"), p(0.2)),
    ]
    .into_iter()
    .collect();
    (transitions, emissions)
}

///
/// 3-state cat mood model
///
pub fn mock_cat() -> HmmModel {
    let (transitions, emissions) = mock_cat_tables();
    HmmModel::build(transitions, emissions).unwrap()
}

///
/// Deterministic cycle `a -> b -> c -> a` with one-to-one emissions
/// `a: x, b: y, c: z`. The initial state is uniform on `{a, b, c}`.
///
pub fn mock_one_hot_cycle() -> HmmModel {
    let third = p(1.0 / 3.0);
    let transitions = vec![
        (State::start(), st("a"), third),
        (State::start(), st("b"), third),
        (State::start(), st("c"), third),
        (st("a"), st("b"), p(1.0)),
        (st("b"), st("c"), p(1.0)),
        (st("c"), st("a"), p(1.0)),
    ]
    .into_iter()
    .collect();
    let emissions = vec![
        (st("a"), sy("x"), p(1.0)),
        (st("b"), sy("y"), p(1.0)),
        (st("c"), sy("z"), p(1.0)),
    ]
    .into_iter()
    .collect();
    HmmModel::build(transitions, emissions).unwrap()
}
