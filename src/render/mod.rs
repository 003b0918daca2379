mod frame;
mod null_renderer;
mod primitives;

pub use frame::{AxisFrame, GridFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{LabelAnchor, Segment, StrokeBatch};

use crate::api::GridState;
use crate::error::GridResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive the latest grid snapshot after every update and must not
/// keep it past the call. [`GridFrame::from_state`] turns it into ratio-space
/// draw geometry.
pub trait Renderer {
    fn render(&mut self, state: &GridState) -> GridResult<()>;
}
