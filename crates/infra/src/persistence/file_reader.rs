use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use log::warn;
use novel_count_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading documents with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> io::Result<File> {
        File::open(path)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the file as text, replacing invalid UTF-8 with U+FFFD.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn read_text(path: &Path) -> InfraResult<Option<String>> {
        match Self::read_to_end(path) {
            Ok(bytes) => Ok(Some(decode(bytes, &path.display().to_string()))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InfrastructureError::FileRead { path: path.to_path_buf(), source }),
        }
    }

    /// Read all of `reader` as text, with the same lossy decoding as [`Self::read_text`].
    pub fn read_text_from<R: Read>(mut reader: R) -> InfraResult<String> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(|source| InfrastructureError::StdinRead { source })?;
        Ok(decode(buf, "<stdin>"))
    }
}

fn decode(bytes: Vec<u8>, origin: &str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!("{origin} is not valid UTF-8; invalid bytes are replaced");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileReader::read_text(&dir.path().join("absent.txt")).unwrap().is_none());
    }

    #[test]
    fn reads_utf8_text() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("原稿です".as_bytes()).unwrap();
        assert_eq!(FileReader::read_text(file.path()).unwrap().as_deref(), Some("原稿です"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = FileReader::read_text_from(&b"ab\xFFc"[..]).unwrap();
        assert_eq!(text, "ab\u{FFFD}c");
    }
}
