use derive_more::Deref;
use std::io::{self, Read, Write};

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ReadLen(usize);

/// Tallies what adapters push into the caller's sink.
pub struct CountingWriter<'w, W: ?Sized> {
    w: &'w mut W,
    w_len: usize,
}
impl<'w, W: Write + ?Sized> CountingWriter<'w, W> {
    pub fn new(w: &'w mut W) -> Self {
        Self { w, w_len: 0 }
    }
    pub fn w_len(&self) -> WriteLen {
        WriteLen(self.w_len)
    }
}
impl<'w, W: Write + ?Sized> Write for CountingWriter<'w, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let len = self.w.write(buf)?;
        self.w_len += len;
        Ok(len)
    }
    fn flush(&mut self) -> io::Result<()> {
        self.w.flush()
    }
}

/// Tallies what adapters pull out of the caller's source.
pub struct CountingReader<'r, R: ?Sized> {
    r: &'r mut R,
    r_len: usize,
}
impl<'r, R: Read + ?Sized> CountingReader<'r, R> {
    pub fn new(r: &'r mut R) -> Self {
        Self { r, r_len: 0 }
    }
    pub fn r_len(&self) -> ReadLen {
        ReadLen(self.r_len)
    }
}
impl<'r, R: Read + ?Sized> Read for CountingReader<'r, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = self.r.read(buf)?;
        self.r_len += len;
        Ok(len)
    }
}
