//! Property-based tests for registry construction and the machine runtime.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated transition tables.

use proptest::prelude::*;
use std::collections::BTreeMap;
use switchyard::{ActionId, BuildError, Machine, RegistryBuilder, StateId, TransitionTable};

const STATE_POOL: &[&str] = &["NEW", "STARTED", "PAUSED", "DONE", "DEAD"];
const ACTION_POOL: &[&str] = &["START", "PAUSE", "RESUME", "COMPLETE", "KILL"];

fn state_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(STATE_POOL)
}

fn action_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ACTION_POOL)
}

prop_compose! {
    /// A conflict-free edge set: keying by (state, action) makes the
    /// transition relation a partial function by construction.
    fn arbitrary_edges()(
        edges in prop::collection::btree_map(
            (state_name(), action_name()),
            state_name(),
            1..12,
        )
    ) -> BTreeMap<(&'static str, &'static str), &'static str> {
        edges
    }
}

fn table_of(edges: &BTreeMap<(&'static str, &'static str), &'static str>) -> TransitionTable {
    let mut table = TransitionTable::new();
    for (&(state, action), &target) in edges {
        table.insert(state, action, target);
    }
    table
}

fn default_of(edges: &BTreeMap<(&'static str, &'static str), &'static str>) -> &'static str {
    edges.keys().next().expect("edge set is non-empty").0
}

proptest! {
    #[test]
    fn machine_starts_at_the_default_state(edges in arbitrary_edges()) {
        let machine = Machine::from_table(&table_of(&edges), default_of(&edges)).unwrap();
        prop_assert_eq!(machine.current_state(), default_of(&edges));
    }

    #[test]
    fn reset_always_returns_the_default_state(edges in arbitrary_edges()) {
        let mut machine = Machine::from_table(&table_of(&edges), default_of(&edges)).unwrap();

        // From wherever a few transitions lead, reset lands on the default.
        for &action in ACTION_POOL {
            let _ = machine.transition(action);
        }

        prop_assert_eq!(machine.reset(), StateId::from(default_of(&edges)));
        prop_assert_eq!(machine.current_state(), default_of(&edges));
    }

    #[test]
    fn every_target_is_a_registry_member(edges in arbitrary_edges()) {
        let machine = Machine::from_table(&table_of(&edges), default_of(&edges)).unwrap();
        let registry = machine.registry();

        for (&(state, _), &target) in &edges {
            prop_assert!(registry.contains(state));
            prop_assert!(registry.contains(target));
        }
    }

    #[test]
    fn construction_is_order_independent(edges in arbitrary_edges()) {
        let default = default_of(&edges);

        let mut forward = RegistryBuilder::new();
        for (&(state, action), &target) in &edges {
            forward = forward.transition(state, action, target).unwrap();
        }
        let forward = forward.default_state(default).build().unwrap();

        let mut backward = RegistryBuilder::new();
        for (&(state, action), &target) in edges.iter().rev() {
            backward = backward.transition(state, action, target).unwrap();
        }
        let backward = backward.default_state(default).build().unwrap();

        prop_assert_eq!(forward.state_count(), backward.state_count());
        for (&(state, action), &target) in &edges {
            prop_assert_eq!(forward.target(state, action), Some(&StateId::from(target)));
            prop_assert_eq!(backward.target(state, action), Some(&StateId::from(target)));
        }
    }

    #[test]
    fn transition_is_a_pure_function_of_state_and_action(
        edges in arbitrary_edges(),
        action in action_name(),
    ) {
        let mut machine = Machine::from_table(&table_of(&edges), default_of(&edges)).unwrap();

        let first = machine.transition(action);
        machine.reset();
        let second = machine.transition(action);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn failed_transition_leaves_the_state_unchanged(
        edges in arbitrary_edges(),
        action in action_name(),
    ) {
        let mut machine = Machine::from_table(&table_of(&edges), default_of(&edges)).unwrap();
        let before = machine.current_state().clone();

        if machine.transition(action).is_err() {
            prop_assert_eq!(machine.current_state(), &before);
        }
    }

    #[test]
    fn what_next_never_moves_the_machine(
        edges in arbitrary_edges(),
        state in state_name(),
        action in action_name(),
    ) {
        let machine = Machine::from_table(&table_of(&edges), default_of(&edges)).unwrap();
        let before = machine.current_state().clone();

        let _ = machine.what_next(state, action);

        prop_assert_eq!(machine.current_state(), &before);
    }

    #[test]
    fn what_next_agrees_with_transition(edges in arbitrary_edges(), action in action_name()) {
        let mut machine = Machine::from_table(&table_of(&edges), default_of(&edges)).unwrap();
        let here = machine.current_state().clone();

        let predicted = machine.what_next(here.as_str(), action).unwrap();
        let moved = machine.transition(action).ok();

        prop_assert_eq!(predicted, moved);
    }

    #[test]
    fn agreeing_duplicates_never_fail(edges in arbitrary_edges()) {
        let table = table_of(&edges);
        let result = RegistryBuilder::new()
            .table(&table)
            .unwrap()
            .table(&table)
            .unwrap()
            .default_state(default_of(&edges))
            .build();

        prop_assert!(result.is_ok());
    }

    #[test]
    fn contradictory_redeclaration_always_conflicts(edges in arbitrary_edges()) {
        let (&(state, action), &target) = edges.iter().next().unwrap();
        // A target name outside the pool cannot collide with the recorded one.
        let result = RegistryBuilder::new()
            .table(&table_of(&edges))
            .unwrap()
            .transition(state, action, "UNRELATED");

        let err = result.map(|_| ()).unwrap_err();
        prop_assert_eq!(err, BuildError::ConflictingTarget {
            state: StateId::from(state),
            action: ActionId::from(action),
            existing: StateId::from(target),
            attempted: StateId::from("UNRELATED"),
        });
    }

    #[test]
    fn absent_default_always_fails_construction(edges in arbitrary_edges()) {
        let result = Machine::from_table(&table_of(&edges), "NOT_IN_POOL");
        prop_assert_eq!(
            result.map(|_| ()).unwrap_err(),
            BuildError::UnknownDefaultState(StateId::from("NOT_IN_POOL"))
        );
    }

    #[test]
    fn table_roundtrips_through_json(edges in arbitrary_edges()) {
        let table = table_of(&edges);
        let json = serde_json::to_string(&table).unwrap();
        let back = TransitionTable::from_json(&json).unwrap();
        prop_assert_eq!(back, table);
    }
}
