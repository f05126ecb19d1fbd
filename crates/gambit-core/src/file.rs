//! Board files (columns a–h).

use std::fmt;

/// A file (column) on the board, from FileA to FileH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// Total number of files.
    pub const COUNT: usize = 8;

    /// All files in index order.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// Return the index (0..7), which is also the column of a square.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index (0 = FileA, 7 = FileH).
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Parse a lowercase file letter (`'a'..='h'`).
    pub fn from_char(c: char) -> Option<File> {
        if c.is_ascii_lowercase() {
            File::from_index((c as u8).wrapping_sub(b'a'))
        } else {
            None
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = (b'a' + self.index() as u8) as char;
        write!(f, "{c}")
    }
}
