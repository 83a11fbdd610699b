use crate::snapshot::PNG_MIME;

pub const NOTE_EXPORT_NAME: &str = "MyNote.txt";
pub const DRAWING_EXPORT_NAME: &str = "MyDrawing.png";
pub const TEXT_MIME: &str = "text/plain";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportBody {
    /// Raw text, downloaded through a blob URL.
    Text(String),
    /// A data URL the browser can download directly.
    DataUrl(String),
}

/// A user-triggered download. Not part of persisted state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Export {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub body: ExportBody,
}

impl Export {
    pub fn note(text: &str) -> Self {
        Self {
            file_name: NOTE_EXPORT_NAME,
            mime: TEXT_MIME,
            body: ExportBody::Text(text.to_string()),
        }
    }

    pub fn drawing(data_url: String) -> Self {
        Self {
            file_name: DRAWING_EXPORT_NAME,
            mime: PNG_MIME,
            body: ExportBody::DataUrl(data_url),
        }
    }
}
