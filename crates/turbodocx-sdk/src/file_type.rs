/*
[INPUT]:  Raw document bytes supplied for upload
[OUTPUT]: Inferred MIME type and file extension
[POS]:    Utility layer - magic-byte sniffing for multipart uploads
[UPDATE]: When the backend accepts new document formats
*/

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK";
const ZIP_SCAN_LIMIT: usize = 2000;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";
pub const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// Result of sniffing a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileType {
    pub mime_type: &'static str,
    pub extension: &'static str,
}

impl FileType {
    pub const PDF: FileType = FileType {
        mime_type: PDF_MIME,
        extension: "pdf",
    };
    pub const DOCX: FileType = FileType {
        mime_type: DOCX_MIME,
        extension: "docx",
    };
    pub const PPTX: FileType = FileType {
        mime_type: PPTX_MIME,
        extension: "pptx",
    };
    pub const UNKNOWN: FileType = FileType {
        mime_type: OCTET_STREAM_MIME,
        extension: "bin",
    };

    /// Detect the file type from leading bytes.
    ///
    /// ZIP containers are told apart by the `ppt/` or `word/` entry names in
    /// their first 2000 bytes; a ZIP with neither marker is reported as docx.
    pub fn detect(bytes: &[u8]) -> FileType {
        if bytes.starts_with(PDF_MAGIC) {
            return FileType::PDF;
        }

        if bytes.starts_with(ZIP_MAGIC) {
            let head = &bytes[..bytes.len().min(ZIP_SCAN_LIMIT)];
            if contains(head, b"ppt/") {
                return FileType::PPTX;
            }
            return FileType::DOCX;
        }

        FileType::UNKNOWN
    }

    /// Filename used when the caller supplies none
    pub fn default_file_name(&self) -> String {
        format!("document.{}", self.extension)
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle)
}
