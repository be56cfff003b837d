use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{anyhow, Context};

use crate::error::ScanError;
use crate::scan::{Scanner, Totals};

#[cfg(test)]
mod tests;

/// Default size of a read chunk.
pub const CHUNK: usize = 1024;

/// Byte iterator over a reader which pulls one fixed-size chunk at a time.
pub struct Chunks<R, const N: usize = CHUNK> {
    reader: R,
    /// Cursor position.
    head: usize,
    /// Length of the filled part of the buffer.
    len: usize,
    mem: [u8; N],
}

impl<R, const N: usize> Chunks<R, N>
where
    R: Read,
{
    /// Construct a new chunked reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Chunks;
    ///
    /// let chunks = Chunks::<_, 2>::new(&b"abc"[..]);
    /// let bytes = chunks.collect::<Result<Vec<u8>, _>>()?;
    /// assert_eq!(bytes, b"abc");
    /// # Ok::<_, std::io::Error>(())
    /// ```
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            head: 0,
            len: 0,
            mem: [0; N],
        }
    }

    /// Refill the buffer, returning `false` once the reader is exhausted.
    fn fill(&mut self) -> io::Result<bool> {
        loop {
            match self.reader.read(&mut self.mem) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.head = 0;
                    self.len = n;
                    return Ok(true);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R, const N: usize> Iterator for Chunks<R, N>
where
    R: Read,
{
    type Item = io::Result<u8>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.len {
            match self.fill() {
                Ok(true) => {}
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }

        let b = self.mem[self.head];
        self.head += 1;
        Some(Ok(b))
    }
}

/// Scan a schematic from a reader.
///
/// # Examples
///
/// ```
/// let totals = schematic::scan_reader(&b"617*......\n......755.\n"[..])?;
/// assert_eq!(totals.parts, 617);
/// # Ok::<_, schematic::ScanError>(())
/// ```
pub fn scan_reader<R>(reader: R) -> Result<Totals, ScanError>
where
    R: Read,
{
    let mut scanner = Scanner::new();

    for b in Chunks::<_, CHUNK>::new(reader) {
        scanner.feed(b?)?;
    }

    scanner.finish()
}

/// Open and scan the schematic at the given path.
pub fn scan_path<P>(path: P) -> anyhow::Result<Totals>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    return inner(path).with_context(|| anyhow!("{}", path.display()));

    #[inline]
    fn inner(path: &Path) -> anyhow::Result<Totals> {
        let file = File::open(path)?;
        log::debug!("scanning {}", path.display());
        Ok(scan_reader(file)?)
    }
}
