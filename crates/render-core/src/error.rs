use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: f32, y: f32 },
    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),
    #[error("Font '{0}' was not registered with the document")]
    FontNotRegistered(&'static str),
    #[error("Document not started")]
    DocumentNotStarted,
    #[error("Document already finished")]
    DocumentFinished,
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
