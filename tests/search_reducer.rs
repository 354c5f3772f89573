use nlsearch::client::SearchResponse;
use nlsearch::ui::mvi::apply;
use nlsearch::ui::search::{SearchIntent, SearchPhase, SearchReducer, SearchState};

fn step(state: &mut SearchState, intent: SearchIntent) -> bool {
    apply::<SearchReducer>(state, intent)
}

#[test]
fn full_cycle_reports_changes() {
    let mut state = SearchState::default();

    assert!(step(
        &mut state,
        SearchIntent::QueryChanged {
            text: "expired".into()
        }
    ));
    assert!(!step(
        &mut state,
        SearchIntent::QueryChanged {
            text: "expired".into()
        }
    ));

    assert!(step(
        &mut state,
        SearchIntent::Submitted {
            query: "expired".into()
        }
    ));
    assert_eq!(state.phase(), SearchPhase::Searching);

    let generation = state.generation;
    assert!(step(
        &mut state,
        SearchIntent::Succeeded {
            generation,
            response: SearchResponse::default(),
        }
    ));
    assert!(step(
        &mut state,
        SearchIntent::Settled {
            generation
        }
    ));
    assert_eq!(state.phase(), SearchPhase::Done { count: 0 });
    assert_eq!(state.query, "");
}

#[test]
fn stale_intents_do_not_count_as_changes() {
    let mut state = SearchState::default();
    step(
        &mut state,
        SearchIntent::Submitted {
            query: "a".into(),
        },
    );
    step(
        &mut state,
        SearchIntent::Submitted {
            query: "b".into(),
        },
    );

    assert!(!step(
        &mut state,
        SearchIntent::Failed {
            generation: 1,
            message: "late".into()
        }
    ));
    assert!(!step(&mut state, SearchIntent::Settled { generation: 1 }));
    assert!(state.loading);
    assert_eq!(state.last_search_query, "b");
}
