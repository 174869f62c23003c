pub mod adapters;
pub mod archive;
mod template_renderer;

pub use adapters::{CommandProcessRunner, HttpReleaseClient, RegistryEnvironment, SubstDriveMapper};
pub use template_renderer::TemplateRenderer;
