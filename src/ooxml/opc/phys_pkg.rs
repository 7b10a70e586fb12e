//! Physical (ZIP) layer of an OPC package.
//!
//! The writer stores every member with Deflate compression and a fixed
//! modification time, so the same parts always produce the same bytes.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_URI, PackURI};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Physical package writer for creating OPC packages in memory.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Write a part to the package with Deflate compression.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(pack_uri.membername(), self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the complete ZIP archive.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
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
    /// Open a package held in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data))?;
        Ok(Self { archive })
    }

    /// Open a package file.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Binary content of a member.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(pack_uri.membername())
            .map_err(|_| OpcError::PartNotFound(pack_uri.to_string()))?;
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// The `[Content_Types].xml` content.
    pub fn content_types_xml(&mut self) -> Result<Vec<u8>> {
        let uri = PackURI::new(CONTENT_TYPES_URI).map_err(OpcError::InvalidPackUri)?;
        self.blob_for(&uri)
    }

    /// Relationships XML for a source, or `None` if it has none.
    pub fn rels_xml_for(&mut self, source_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = source_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        match self.blob_for(&rels_uri) {
            Ok(blob) => Ok(Some(blob)),
            Err(OpcError::PartNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All member names, in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect::<Vec<_>>()
    }

    /// Number of members in the archive.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}
