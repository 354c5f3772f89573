use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition function.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the old state and return the next one. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `R` over `state` in place.
///
/// Returns `true` when the state actually changed.
pub fn apply<R: Reducer>(state: &mut R::State, intent: R::Intent) -> bool {
    let next = R::reduce(state.clone(), intent);
    if next == *state {
        return false;
    }
    *state = next;
    true
}
