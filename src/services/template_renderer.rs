//! Rendering of generated files from embedded minijinja templates.

use include_dir::{Dir, include_dir};
use minijinja::Environment;
use serde::Serialize;

use crate::domain::{AppError, GeneratedFile};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Template environment holding every generated-file template.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer").finish_non_exhaustive()
    }
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);

        for file in GeneratedFile::ALL {
            let name = file.template_name();
            let source = TEMPLATES_DIR
                .get_file(name)
                .and_then(|f| f.contents_utf8())
                .ok_or_else(|| AppError::Template {
                    name: name.to_string(),
                    details: "template is not embedded".to_string(),
                })?;
            env.add_template(name, source).map_err(|e| AppError::Template {
                name: name.to_string(),
                details: e.to_string(),
            })?;
        }

        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, file: GeneratedFile, values: &S) -> Result<String, AppError> {
        let name = file.template_name();
        let template = self.env.get_template(name).map_err(|e| AppError::Template {
            name: name.to_string(),
            details: e.to_string(),
        })?;

        template
            .render(values)
            .map_err(|e| AppError::Template { name: name.to_string(), details: e.to_string() })
    }
}
