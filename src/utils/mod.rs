use std::io::Write;
pub mod write;

/// Counts bytes written to an underlying sink without seeking.
///
/// This is the writer's `ByteSink`: it is how the xref and trailer
/// writers learn, in terms of the sink's own write order, where each
/// object header and the xref section itself begin. The caller adds the
/// length of the already-existing file (`starting_position`) to
/// [`CountingWriter::count`] to turn a relative count into a real file
/// offset.
pub struct CountingWriter<W> {
    writer: W,
    count: u64,
}

impl<W> CountingWriter<W> {
    pub fn new(writer: W) -> Self {
        CountingWriter { writer, count: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl<W> Write for CountingWriter<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let count = self.writer.write(buf)?;
        self.count += count as u64;
        Ok(count)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
