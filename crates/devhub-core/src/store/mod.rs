// ── Resource store ──
//
// One store per resource type: the fetched collection, the loading flag,
// and the last error. Transitions are pure (`state`); the async driver
// (`resource_store`) issues requests and feeds results back in.

mod resource_store;
mod state;

pub use resource_store::{MutationOutcome, ResourceStore};
pub use state::{StoreEvent, StoreState};
