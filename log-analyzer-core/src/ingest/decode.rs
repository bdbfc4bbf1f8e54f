use crate::ingest::error::AnalyzeError;
use crate::ingest::locate::LogFileDescriptor;
use crate::ingest::types::Compression;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Forward-only stream of the lines of one log file.
///
/// Each item keeps its trailing `\n`. The file handle (and the gzip decoder,
/// if any) is owned by the stream and closed when it is dropped, whether or
/// not it was read to the end.
pub struct LogLines {
    path: PathBuf,
    reader: Box<dyn BufRead + Send>,
    buf: String,
    done: bool,
}

impl LogLines {
    pub fn open(descriptor: &LogFileDescriptor) -> Result<Self, AnalyzeError> {
        Self::open_path(&descriptor.path, descriptor.compression)
    }

    pub fn open_path(path: &Path, compression: Compression) -> Result<Self, AnalyzeError> {
        let file = File::open(path).map_err(|e| AnalyzeError::open(path, e))?;

        let reader: Box<dyn BufRead + Send> = match compression {
            Compression::Plain => Box::new(BufReader::new(file)),
            Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        };

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            buf: String::new(),
            done: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for LogLines {
    type Item = Result<String, AnalyzeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(std::mem::take(&mut self.buf))),
            Err(e) => {
                // A broken stream is not resumable.
                self.done = true;
                Some(Err(AnalyzeError::read(&self.path, e)))
            }
        }
    }
}
