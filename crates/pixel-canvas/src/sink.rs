//! Image sinks - where rendered PNG bytes go

use std::io;
use std::path::{Path, PathBuf};

/// Destination for an encoded image.
///
/// Receives the whole encoded buffer in one call and replaces whatever
/// the destination held before.
pub trait ImageSink {
    fn put_contents(&mut self, bytes: &[u8]) -> io::Result<()>;
}

/// Writes to a file on disk, creating or truncating it
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for FileSink {
    fn put_contents(&mut self, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(&self.path, bytes)
    }
}

impl ImageSink for Vec<u8> {
    fn put_contents(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.clear();
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<T: ImageSink + ?Sized> ImageSink for &mut T {
    fn put_contents(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).put_contents(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_overwrites() {
        let mut sink = vec![9u8; 10];
        sink.put_contents(&[1, 2, 3]).unwrap();
        assert_eq!(sink, vec![1, 2, 3]);
    }

    #[test]
    fn test_file_sink_overwrites() {
        let path = std::env::temp_dir().join(format!("pixel-canvas-sink-{}.bin", std::process::id()));
        let mut sink = FileSink::new(&path);
        sink.put_contents(b"first contents").unwrap();
        sink.put_contents(b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_sink_missing_directory() {
        let mut sink = FileSink::new("/nonexistent-dir/for/pixel-canvas/out.png");
        assert!(sink.put_contents(b"x").is_err());
    }
}
