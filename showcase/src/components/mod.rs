//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod actions;
mod canvas;
mod controls;
mod docs;
mod sidebar;

pub use actions::{ActionEntry, ActionsLog};
pub use canvas::StoryCanvas;
pub use controls::ControlsPanel;
pub use docs::DocsPanel;
pub use sidebar::StorySidebar;
