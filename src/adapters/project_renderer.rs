//! `ProjectRenderer` backed by embedded minijinja templates.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, ProjectModel};
use crate::ports::ProjectRenderer;

static TEMPLATE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const PROJECT_TEMPLATE: &str = "project.vcxproj.j2";

/// Renders component project files from the embedded templates.
pub struct MinijinjaProjectRenderer {
    env: Environment<'static>,
}

impl MinijinjaProjectRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);

        for file in TEMPLATE_DIR.files() {
            let (Some(name), Some(content)) = (file.path().to_str(), file.contents_utf8()) else {
                return Err(template_error(
                    &file.path().to_string_lossy(),
                    "template is not valid UTF-8",
                ));
            };
            env.add_template(name, content).map_err(|e| template_error(name, e))?;
        }

        Ok(Self { env })
    }
}

impl ProjectRenderer for MinijinjaProjectRenderer {
    fn render(&self, model: &ProjectModel) -> Result<String, AppError> {
        let template =
            self.env.get_template(PROJECT_TEMPLATE).map_err(|e| template_error(PROJECT_TEMPLATE, e))?;
        template.render(model).map_err(|e| template_error(PROJECT_TEMPLATE, e))
    }
}

fn template_error(template: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template.to_string(), reason: err.to_string() }
}
