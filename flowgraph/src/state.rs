//! Run state: an open mapping threaded through step invocations.
//!
//! One state value flows through a run, **state-in, state-out**: each step
//! receives the current state and returns an update that is merged back in.

use serde_json::{Map, Value};

/// State carried through a run: string keys to arbitrary JSON values
/// (string/number/bool/list/nested mapping).
///
/// Keys are only ever added or overwritten; there is no deletion primitive,
/// so keys accumulate monotonically across a successful run.
pub type State = Map<String, Value>;

/// Merges a step's returned update into the accumulated state.
///
/// Keys present in `update` overwrite or add; keys absent from `update`
/// are preserved. A step that returns only the keys it produced therefore
/// carries the rest of the state forward untouched.
pub fn merge(state: &mut State, update: State) {
    for (key, value) in update {
        state.insert(key, value);
    }
}
