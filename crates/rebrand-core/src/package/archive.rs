//! Generic read/write access to zip-packaged documents.
//!
//! All three OOXML formats are zip containers of XML parts. Rewriting goes
//! through [`rewrite_entries`], which raw-copies every untouched entry so its
//! compressed bytes and compression method survive unchanged.

use crate::error::{RebrandError, Result};
use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Read, Write};
use zip::read::ZipArchive;
use zip::result::ZipError;
use zip::write::ZipWriter;
use zip::CompressionMethod;

fn open_archive(bytes: &[u8]) -> Result<ZipArchive<Cursor<&[u8]>>> {
    Ok(ZipArchive::new(Cursor::new(bytes))?)
}

/// Entry paths in central-directory order.
pub fn list_entries(bytes: &[u8]) -> Result<Vec<String>> {
    let mut archive = open_archive(bytes)?;
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index_raw(i)?.name().to_string());
    }
    Ok(names)
}

pub fn read_entry(bytes: &[u8], path: &str) -> Result<Vec<u8>> {
    let mut archive = open_archive(bytes)?;
    let mut file = match archive.by_name(path) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => {
            return Err(RebrandError::EntryNotFound {
                path: path.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    let mut content = Vec::with_capacity(prealloc_for(file.size()));
    file.read_to_end(&mut content)?;
    Ok(content)
}

/// Upper bound on buffer space reserved up front from a size declared in a
/// zip header. Larger entries still read fully; the buffer just grows.
const MAX_PREALLOC: usize = 1 << 20;

/// Capacity to reserve for an entry whose header claims `declared` bytes.
pub(crate) fn prealloc_for(declared: u64) -> usize {
    usize::try_from(declared).unwrap_or(usize::MAX).min(MAX_PREALLOC)
}

/// Produce a new archive with the entries named in `replacements` swapped out.
///
/// Entry order is preserved. Keys that name no existing entry are ignored.
pub fn rewrite_entries(bytes: &[u8], replacements: &HashMap<String, Vec<u8>>) -> Result<Vec<u8>> {
    rewrite_and_append(bytes, replacements, &[])
}

/// Like [`rewrite_entries`], then append `additions` (deflated) after the
/// original entries. An addition whose name already exists is skipped.
pub fn rewrite_and_append(
    bytes: &[u8],
    replacements: &HashMap<String, Vec<u8>>,
    additions: &[(String, Vec<u8>)],
) -> Result<Vec<u8>> {
    let mut archive = open_archive(bytes)?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::with_capacity(bytes.len())));
    let mut written = HashSet::with_capacity(archive.len());

    for i in 0..archive.len() {
        let file = archive.by_index_raw(i)?;
        written.insert(file.name().to_string());
        let Some(content) = replacements.get(file.name()) else {
            writer.raw_copy_file(file)?;
            continue;
        };

        let name = file.name().to_string();
        let compression = writable_compression(file.compression());
        drop(file);

        let options: zip::write::FileOptions<'_, ()> =
            zip::write::FileOptions::default().compression_method(compression);
        writer.start_file(name, options)?;
        writer.write_all(content)?;
    }

    for (name, content) in additions {
        if !written.insert(name.clone()) {
            log::debug!("not appending '{}': entry already exists", name);
            continue;
        }
        let options: zip::write::FileOptions<'_, ()> =
            zip::write::FileOptions::default().compression_method(CompressionMethod::Deflated);
        writer.start_file(name.as_str(), options)?;
        writer.write_all(content)?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Methods this build can write; anything else is re-deflated.
fn writable_compression(method: CompressionMethod) -> CompressionMethod {
    match method {
        CompressionMethod::Stored => CompressionMethod::Stored,
        _ => CompressionMethod::Deflated,
    }
}

/// Archive-relative file extension including the dot (`.png`), if any.
pub fn entry_extension(path: &str) -> Option<&str> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.rfind('.').map(|idx| &file_name[idx..])
}

/// Final path segment of an entry.
pub fn entry_file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
