use std::io::{self, Write};

/// Writer whose every write fails, standing in for a closed stdout pipe.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs a lesson body against an in-memory buffer and returns what it wrote.
pub fn capture(body: impl FnOnce(&mut dyn Write) -> primer_base::PrimerResult<()>) -> String {
    let mut out = Vec::new();
    body(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
