use crate::api::GridState;
use crate::error::{GridError, GridResult};
use crate::render::{GridFrame, Renderer};

/// No-op renderer used by tests and headless grids.
///
/// It still builds and validates the frame so tests catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, state: &GridState) -> GridResult<()> {
        let frame = GridFrame::from_state(state);
        frame
            .validate()
            .map_err(|err| GridError::Render(err.to_string()))?;
        self.render_count += 1;
        self.last_line_count = frame.line_count();
        self.last_label_count = frame.label_count();
        Ok(())
    }
}
