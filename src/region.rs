//! Splits a target file into preserved lines and one sentinel-bounded
//! generated region, and splices a fresh block into it.
//!
//! Works on raw bytes: lines outside the region need not be UTF-8.

/// Returned when a sentinel appears anything other than zero or two times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpairedSentinel {
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A line outside the region, terminator included.
    Preserved(&'a [u8]),
    GeneratedRegion {
        open: &'a [u8],
        body: Vec<&'a [u8]>,
        close: &'a [u8],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Splice {
    Replaced,
    Appended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetText<'a> {
    sentinel: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> TargetText<'a> {
    pub fn parse(text: &'a [u8], sentinel: &'a str) -> Result<Self, UnpairedSentinel> {
        let count = lines(text).filter(|line| is_sentinel(line, sentinel)).count();
        if count != 0 && count != 2 {
            return Err(UnpairedSentinel { count });
        }

        let mut segments = Vec::new();
        let mut lines = lines(text);
        while let Some(line) = lines.next() {
            if !is_sentinel(line, sentinel) {
                segments.push(Segment::Preserved(line));
                continue;
            }
            let mut body = Vec::new();
            let mut close = None;
            for inner in lines.by_ref() {
                if is_sentinel(inner, sentinel) {
                    close = Some(inner);
                    break;
                }
                body.push(inner);
            }
            // count == 2 guarantees the closing line exists
            let Some(close) = close else {
                return Err(UnpairedSentinel { count });
            };
            segments.push(Segment::GeneratedRegion {
                open: line,
                body,
                close,
            });
        }

        Ok(Self { sentinel, segments })
    }

    /// Rebuilds the file with `block` as the region body.
    ///
    /// Without an existing region, `sentinel + block + sentinel` goes at the
    /// end of the file, on a line of its own.
    pub fn splice(&self, block: &str) -> (Vec<u8>, Splice) {
        let mut out = Vec::new();
        let mut splice = Splice::Appended;

        for seg in &self.segments {
            match seg {
                Segment::Preserved(line) => out.extend_from_slice(line),
                Segment::GeneratedRegion { open, close, .. } => {
                    out.extend_from_slice(open);
                    out.extend_from_slice(block.as_bytes());
                    out.extend_from_slice(close);
                    splice = Splice::Replaced;
                }
            }
        }

        if splice == Splice::Appended {
            if out.last().is_some_and(|b| *b != b'\n') {
                out.push(b'\n');
            }
            out.extend_from_slice(self.sentinel.as_bytes());
            out.push(b'\n');
            out.extend_from_slice(block.as_bytes());
            out.extend_from_slice(self.sentinel.as_bytes());
            out.push(b'\n');
        }

        (out, splice)
    }
}

fn lines(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split_inclusive(|b| *b == b'\n')
}

fn is_sentinel(line: &[u8], sentinel: &str) -> bool {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line == sentinel.as_bytes()
}
