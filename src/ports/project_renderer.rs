//! Project file rendering port.

use crate::domain::{AppError, ProjectModel};

/// Renders the text of a component project file.
pub trait ProjectRenderer {
    fn render(&self, model: &ProjectModel) -> Result<String, AppError>;
}
