use tracing::trace;

use crate::error::{GridError, GridResult};
use crate::extensions::{GridEvent, GridPlugin};
use crate::render::Renderer;

use super::Grid;

impl<R: Renderer> Grid<R> {
    /// Registers a plugin with a unique identifier and sends it
    /// [`GridEvent::Ready`].
    pub fn register_plugin(&mut self, mut plugin: Box<dyn GridPlugin>) -> GridResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(GridError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(GridError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        plugin.on_event(&GridEvent::Ready, &self.state);
        self.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.plugins.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    pub(super) fn emit(&mut self, event: &GridEvent) {
        for plugin in &mut self.plugins {
            trace!(plugin = plugin.id(), "dispatching grid event");
            plugin.on_event(event, &self.state);
        }
    }
}
