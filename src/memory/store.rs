//! Buffer File Format
//!
//! File-backed persistence for replay buffers. A buffer file carries a
//! fixed binary header (magic bytes, format version, save timestamp,
//! record count) followed by a bincode payload of experiences. The
//! header count must match the payload length.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{ReplaykitError, Result};
use crate::memory::Experience;

/// Magic bytes for the buffer file format
const MAGIC: &[u8; 4] = b"RBUF";
/// Current file format version
const FORMAT_VERSION: u32 = 1;

/// Header metadata of a buffer file
#[derive(Debug, Clone, Copy)]
pub struct BufferFileInfo {
    /// File format version
    pub version: u32,
    /// When the buffer was saved (epoch ms)
    pub saved_at_ms: u64,
    /// Number of experiences in the payload
    pub count: u64,
}

/// Write experiences to `path`, creating parent directories as needed.
pub fn write_experiences(path: &Path, experiences: &[Experience]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(MAGIC)?;
    writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
    let saved_at_ms = chrono::Utc::now().timestamp_millis() as u64;
    writer.write_all(&saved_at_ms.to_le_bytes())?;
    writer.write_all(&(experiences.len() as u64).to_le_bytes())?;

    let payload = bincode::serialize(experiences)?;
    writer.write_all(&payload)?;
    writer.flush()?;

    Ok(())
}

/// Read the header of a buffer file without deserializing the payload.
pub fn read_info(path: &Path) -> Result<BufferFileInfo> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_header(&mut reader, path)
}

/// Read all experiences from `path`, validating the header.
pub fn read_experiences(path: &Path) -> Result<Vec<Experience>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let info = read_header(&mut reader, path)?;

    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let experiences: Vec<Experience> = bincode::deserialize(&data)?;

    if experiences.len() as u64 != info.count {
        return Err(ReplaykitError::InvalidFormat(format!(
            "{}: header count {} does not match payload length {}",
            path.display(),
            info.count,
            experiences.len()
        )));
    }

    Ok(experiences)
}

fn read_header<R: Read>(reader: &mut R, path: &Path) -> Result<BufferFileInfo> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(ReplaykitError::InvalidFormat(format!(
            "{} is not a replay buffer file (bad magic bytes)",
            path.display()
        )));
    }

    let mut version_bytes = [0u8; 4];
    reader.read_exact(&mut version_bytes)?;
    let version = u32::from_le_bytes(version_bytes);
    if version != FORMAT_VERSION {
        return Err(ReplaykitError::UnsupportedVersion {
            found: version,
            expected: FORMAT_VERSION,
        });
    }

    let mut ts_bytes = [0u8; 8];
    reader.read_exact(&mut ts_bytes)?;
    let saved_at_ms = u64::from_le_bytes(ts_bytes);

    let mut count_bytes = [0u8; 8];
    reader.read_exact(&mut count_bytes)?;
    let count = u64::from_le_bytes(count_bytes);

    Ok(BufferFileInfo {
        version,
        saved_at_ms,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_experience(action: u32) -> Experience {
        Experience::new(vec![0.0; 4], action, 0.5, vec![1.0; 4], false)
    }

    #[test]
    fn write_then_read_preserves_experiences() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("buffer.rbuf");

        let experiences: Vec<Experience> = (0..25).map(make_experience).collect();
        write_experiences(&path, &experiences).unwrap();

        let loaded = read_experiences(&path).unwrap();
        assert_eq!(loaded, experiences);
    }

    #[test]
    fn read_info_reports_header_without_payload_cost() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("buffer.rbuf");

        let experiences: Vec<Experience> = (0..10).map(make_experience).collect();
        write_experiences(&path, &experiences).unwrap();

        let info = read_info(&path).unwrap();
        assert_eq!(info.version, FORMAT_VERSION);
        assert_eq!(info.count, 10);
        assert!(info.saved_at_ms > 0);
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("buffer.rbuf");

        write_experiences(&path, &[make_experience(0)]).unwrap();
        assert_eq!(read_info(&path).unwrap().count, 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.rbuf");

        let err = read_experiences(&path).unwrap_err();
        assert!(matches!(err, ReplaykitError::Io(_)), "got: {err:?}");
    }

    #[test]
    fn bad_magic_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not_a_buffer.rbuf");
        std::fs::write(&path, b"PKL\0junk that is long enough to read").unwrap();

        let err = read_experiences(&path).unwrap_err();
        assert!(matches!(err, ReplaykitError::InvalidFormat(_)), "got: {err:?}");
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.rbuf");

        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&99u32.to_le_bytes());
        bytes.extend_from_slice(&0u64.to_le_bytes());
        bytes.extend_from_slice(&0u64.to_le_bytes());
        std::fs::write(&path, &bytes).unwrap();

        let err = read_experiences(&path).unwrap_err();
        assert!(
            matches!(
                err,
                ReplaykitError::UnsupportedVersion {
                    found: 99,
                    expected: FORMAT_VERSION
                }
            ),
            "got: {err:?}"
        );
    }

    #[test]
    fn header_count_mismatch_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lying_header.rbuf");

        // Header claims 5 records, payload holds none.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        bytes.extend_from_slice(&0u64.to_le_bytes());
        bytes.extend_from_slice(&5u64.to_le_bytes());
        let empty: Vec<Experience> = Vec::new();
        bytes.extend_from_slice(&bincode::serialize(&empty).unwrap());
        std::fs::write(&path, &bytes).unwrap();

        let err = read_experiences(&path).unwrap_err();
        assert!(matches!(err, ReplaykitError::InvalidFormat(_)), "got: {err:?}");
    }
}
