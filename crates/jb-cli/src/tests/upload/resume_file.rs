use crate::upload::{DocumentKind, ImageKind, ProfilePicture, ResumeFile, UploadError};

use tempfile::TempDir;

#[test]
fn test_kind_inferred_case_insensitively() {
    assert_eq!(DocumentKind::from_name("cv.PDF"), Some(DocumentKind::Pdf));
    assert_eq!(DocumentKind::from_name("cv.Doc"), Some(DocumentKind::Doc));
    assert_eq!(DocumentKind::from_name("my.cv.docx"), Some(DocumentKind::Docx));
    assert_eq!(DocumentKind::from_name("resume.exe"), None);
    assert_eq!(DocumentKind::from_name("pdf"), None);
}

#[test]
fn test_mime_types() {
    assert_eq!(DocumentKind::Pdf.mime(), "application/pdf");
    assert_eq!(DocumentKind::Doc.mime(), "application/msword");
    assert!(DocumentKind::Docx.mime().ends_with("wordprocessingml.document"));
    assert_eq!(ImageKind::Jpeg.mime(), "image/jpeg");
}

#[test]
fn test_size_label_two_decimals_in_mb() {
    let file = ResumeFile::new("resume.pdf", vec![0u8; 2 * 1024 * 1024]).unwrap();
    assert_eq!(file.size_label(), "2.00 MB");

    let small = ResumeFile::new("resume.pdf", vec![0u8; 1536 * 1024]).unwrap();
    assert_eq!(small.size_label(), "1.50 MB");
}

#[test]
fn test_new_rejects_unknown_extension() {
    let result = ResumeFile::new("resume.exe", vec![1, 2, 3]);

    assert!(matches!(
        result,
        Err(UploadError::UnsupportedFileType { ref name, .. }) if name == "resume.exe"
    ));
}

#[test]
fn test_from_path_reads_bytes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Resume.DOCX");
    std::fs::write(&path, b"docx bytes").unwrap();

    let file = ResumeFile::from_path(&path).unwrap();

    assert_eq!(file.name, "Resume.DOCX");
    assert_eq!(file.kind, DocumentKind::Docx);
    assert_eq!(file.bytes, b"docx bytes".to_vec());
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();

    let result = ResumeFile::from_path(&temp.path().join("missing.pdf"));

    assert!(matches!(result, Err(UploadError::Io { .. })));
}

#[test]
fn test_profile_picture_accepts_png_and_jpeg_only() {
    assert!(ProfilePicture::new("me.png", vec![1]).is_ok());
    assert!(ProfilePicture::new("me.JPG", vec![1]).is_ok());
    assert!(ProfilePicture::new("me.jpeg", vec![1]).is_ok());
    assert!(matches!(
        ProfilePicture::new("me.gif", vec![1]),
        Err(UploadError::UnsupportedFileType { .. })
    ));
}
