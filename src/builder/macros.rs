//! Macros for writing transition tables as literals.

/// Build a [`TransitionTable`](crate::TransitionTable) from a literal layout.
///
/// Each entry maps a state to the actions it accepts; a state with an empty
/// block is declared without outgoing transitions. The result is ordinary
/// table data - validation still happens when a builder consumes it.
///
/// # Example
///
/// ```
/// use switchyard::{transition_table, Machine};
///
/// let table = transition_table! {
///     "NEW" => { "START" => "STARTED" },
///     "STARTED" => { "COMPLETE" => "NEW" },
/// };
///
/// let mut machine = Machine::from_table(&table, "NEW").unwrap();
/// assert_eq!(machine.transition("START").unwrap(), "STARTED");
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $state:expr => {
                $( $action:expr => $target:expr ),* $(,)?
            }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::TransitionTable::new();
        $(
            table.declare($state);
            $(
                table.insert($state, $action, $target);
            )*
        )*
        table
    }};
}
