use crate::error::Result;
use bytes::Bytes;
use std::path::Path;

pub const MAX_RESUME_BYTES: u64 = 5_000_000;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_UNKNOWN: &str = "application/octet-stream";

pub const ACCEPTED_RESUME_TYPES: [&str; 3] = [MIME_PDF, MIME_DOC, MIME_DOCX];

/// An attached résumé, held in memory until the form is submitted or reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeError {
    #[error("File size must be less than 5MB")]
    TooLarge { size: u64 },

    #[error("File must be PDF or Word document")]
    UnsupportedType { content_type: String },

    #[error("Please upload your resume")]
    Missing,
}

impl ResumeError {
    pub fn code(&self) -> &'static str {
        match self {
            ResumeError::TooLarge { .. } => "file_too_large",
            ResumeError::UnsupportedType { .. } => "unsupported_file_type",
            ResumeError::Missing => "resume_required",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            ResumeError::TooLarge { .. } => "form.error.fileTooLarge",
            ResumeError::UnsupportedType { .. } => "form.error.unsupportedFileType",
            ResumeError::Missing => "form.error.resumeRequired",
        }
    }
}

impl ResumeFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Reads a file into memory, inferring its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume.bin")
            .to_string();
        let content_type = mime_for_file_name(&file_name);
        Ok(Self::new(file_name, content_type, data))
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn check(&self) -> std::result::Result<(), ResumeError> {
        let size = self.size();
        if size > MAX_RESUME_BYTES {
            return Err(ResumeError::TooLarge { size });
        }
        if !ACCEPTED_RESUME_TYPES.contains(&self.content_type.as_str()) {
            return Err(ResumeError::UnsupportedType {
                content_type: self.content_type.clone(),
            });
        }
        Ok(())
    }
}

/// Checks an optional attachment; absence is its own failure.
pub fn check_resume(resume: Option<&ResumeFile>) -> std::result::Result<&ResumeFile, ResumeError> {
    let resume = resume.ok_or(ResumeError::Missing)?;
    resume.check()?;
    Ok(resume)
}

pub fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => MIME_PDF,
        "doc" => MIME_DOC,
        "docx" => MIME_DOCX,
        _ => MIME_UNKNOWN,
    }
}
