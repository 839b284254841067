use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Members directory '{}' not found!", .0.display())]
    MembersDirNotFound(PathBuf),

    #[error("could not locate the program directory: {0}")]
    ProgramDir(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("could not register report template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("could not render report: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("could not save report: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
