use crate::api::{GridState, GridUpdate};
use crate::interaction::InteractionDelta;

/// Notification stream exposed to plugins.
#[derive(Debug, Clone)]
pub enum GridEvent {
    /// Sent once to a plugin when it is registered.
    Ready,
    /// States were recomputed; carries the options that triggered it.
    Update { options: GridUpdate },
    /// An interaction delta was applied, after its update.
    Interact { delta: InteractionDelta },
}

/// Observer hook interface.
///
/// Plugins read the freshly computed grid state synchronously and cannot
/// mutate the grid from inside the callback.
pub trait GridPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &GridEvent, state: &GridState);
}
