/// Physical package access: the ZIP container underneath an OPC package.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Physical package writer for creating OPC packages.
///
/// Handles the low-level writing of parts to an in-memory ZIP archive.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_with(pack_uri, blob, CompressionMethod::Deflated)
    }

    /// Write a part to the package without compression.
    ///
    /// Already-compressed media (PNG, JPEG) gains nothing from Deflate.
    pub fn write_stored(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.write_with(pack_uri, blob, CompressionMethod::Stored)
    }

    fn write_with(
        &mut self,
        pack_uri: &PackURI,
        blob: &[u8],
        method: CompressionMethod,
    ) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(method);
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical package reader over an in-memory ZIP archive.
pub struct PhysPkgReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PhysPkgReader {
    /// Open package bytes.
    pub fn new(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Read the full content of a part.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(pack_uri.membername())
            .map_err(|_| OoxmlError::PartNotFound(pack_uri.to_string()))?;
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/ppt/presentation.xml").unwrap();
        writer.write(&pack_uri, b"<p:presentation/>").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::new(zip_data).unwrap();
        assert_eq!(reader.member_names(), vec!["ppt/presentation.xml".to_string()]);
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"<p:presentation/>");
    }

    #[test]
    fn test_stored_media() {
        let mut writer = PhysPkgWriter::new();
        let media = PackURI::new("/ppt/media/image1.png").unwrap();
        writer.write_stored(&media, &[0x89, b'P', b'N', b'G']).unwrap();
        let mut reader = PhysPkgReader::new(writer.finish().unwrap()).unwrap();

        assert_eq!(reader.member_names(), vec!["ppt/media/image1.png".to_string()]);
        assert_eq!(reader.blob_for(&media).unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_missing_part() {
        let writer = PhysPkgWriter::new();
        let mut reader = PhysPkgReader::new(writer.finish().unwrap()).unwrap();
        let missing = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert!(matches!(
            reader.blob_for(&missing),
            Err(OoxmlError::PartNotFound(_))
        ));
    }
}
