//! Model-View-Intent primitives shared by the search screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State is a plain value, intents are discrete events (key presses,
//! service replies) and reducers are the only place state changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{apply, Reducer};
pub use state::UiState;
