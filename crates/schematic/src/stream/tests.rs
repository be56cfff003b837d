use std::io::{self, Read};

use super::{scan_reader, Chunks};
use crate::error::ScanError;
use crate::scan::scan;

const INPUT: &[u8] = b"\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

/// Reader which hands out a single byte per read, interrupting every other
/// call.
struct Trickle<'a> {
    data: &'a [u8],
    interrupt: bool,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;

        if self.interrupt {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }

        let Some((first, rest)) = self.data.split_first() else {
            return Ok(0);
        };

        let Some(slot) = buf.first_mut() else {
            return Ok(0);
        };

        *slot = *first;
        self.data = rest;
        Ok(1)
    }
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "broken"))
    }
}

#[test]
fn test_chunk_boundaries() {
    let expected = INPUT.to_vec();

    let bytes = Chunks::<_, 3>::new(INPUT)
        .collect::<io::Result<Vec<u8>>>()
        .map_err(|e| e.to_string());
    assert_eq!(bytes, Ok(expected.clone()));

    let bytes = Chunks::<_, 1>::new(INPUT)
        .collect::<io::Result<Vec<u8>>>()
        .map_err(|e| e.to_string());
    assert_eq!(bytes, Ok(expected));
}

#[test]
fn test_interrupted_reads() {
    let reader = Trickle {
        data: INPUT,
        interrupt: false,
    };

    let bytes = Chunks::<_, 8>::new(reader)
        .collect::<io::Result<Vec<u8>>>()
        .map_err(|e| e.to_string());
    assert_eq!(bytes, Ok(INPUT.to_vec()));
}

#[test]
fn test_reader_matches_bytes() {
    let from_reader = scan_reader(INPUT).map_err(|e| e.to_string());
    let from_bytes = scan(INPUT.iter().copied()).map_err(|e| e.to_string());
    assert_eq!(from_reader, from_bytes);
}

#[test]
fn test_read_error() {
    assert!(matches!(scan_reader(Broken), Err(ScanError::Io(..))));
}
