use std::fmt::{self, Display};
use std::str::FromStr;

use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};

#[solution_runner(
    name = "2024 Day 9: Disk Fragmenter",
    parsed = Disk,
    part_one = Day09,
    part_two = Day09
)]
impl super::AdventOfCode2024<9> {}

/*
Input is a dense disk map: a single line of digits alternating between the length of a file and the
length of free space after it. Files are given IDs in order of appearance, starting from 0.

`12345` describes a one-block file, two free blocks, a three-block file, four free blocks, then a
five-block file: `0..111....22222`.
*/

/// A contiguous run of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Extent {
    start: usize,
    len: usize,
}

/// A disk of blocks, each free or holding part of a file.
#[derive(Debug, Clone)]
struct Disk {
    /// The file ID stored in each block, or `None` for free space.
    blocks: Vec<Option<usize>>,
    /// Where each file lives, indexed by file ID.
    files: Vec<Extent>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum ParseDiskMapError {
    #[error("disk map is empty")]
    Empty,

    #[error("disk map has a non-digit character: {0:?}")]
    InvalidDigit(char),
}

impl FromStr for Disk {
    type Err = ParseDiskMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let disk_map = s.trim();
        if disk_map.is_empty() {
            return Err(ParseDiskMapError::Empty);
        }

        let mut blocks = Vec::new();
        let mut files = Vec::new();
        for (index, character) in disk_map.chars().enumerate() {
            let len = character
                .to_digit(10)
                .ok_or(ParseDiskMapError::InvalidDigit(character))? as usize;
            if index % 2 == 0 {
                let file_id = files.len();
                files.push(Extent {
                    start: blocks.len(),
                    len,
                });
                blocks.extend(std::iter::repeat_n(Some(file_id), len));
            } else {
                blocks.extend(std::iter::repeat_n(None, len));
            }
        }

        Ok(Self { blocks, files })
    }
}

impl ParseData for Disk {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        Ok(input.parse()?)
    }
}

/// Renders each block as its file ID, or `.` when free.
impl Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            match block {
                Some(file_id) => write!(f, "{file_id}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Sum each block position multiplied by the file ID it holds.
fn checksum_of(blocks: &[Option<usize>]) -> Option<u64> {
    blocks
        .iter()
        .enumerate()
        .try_fold(0u64, |total, (position, block)| match *block {
            Some(file_id) => {
                let product =
                    u64::try_from(position).ok()?.checked_mul(u64::try_from(file_id).ok()?)?;
                total.checked_add(product)
            }
            None => Some(total),
        })
}

impl Disk {
    fn size(&self) -> usize {
        self.blocks.len()
    }

    fn checksum(&self) -> Option<u64> {
        checksum_of(&self.blocks)
    }
}

/*
The amphipod wants to compact the disk by moving file blocks one at a time from the end of the disk
to the leftmost free block, until there are no gaps between file blocks.

For part 1, compact the disk and return its filesystem checksum: the sum of each block's position
multiplied by the ID of the file it holds. Free blocks are skipped.
*/

impl Disk {
    /// Move blocks one at a time from the end into the leftmost free block.
    fn compacted_blocks(&self) -> Vec<Option<usize>> {
        let mut blocks = self.blocks.clone();
        let mut free = 0;
        let mut last = blocks.len();
        loop {
            while free < last && blocks[free].is_some() {
                free += 1;
            }
            while last > free && blocks[last - 1].is_none() {
                last -= 1;
            }
            if last <= free + 1 {
                break;
            }
            blocks.swap(free, last - 1);
        }
        blocks
    }
}

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = Disk;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        checksum_of(&input.compacted_blocks()).ok_or_else(|| "checksum overflowed".into())
    }
}

/*
Moving single blocks fragments files. Instead, attempt to move whole files once each, in order of
decreasing file ID, into the leftmost span of free blocks that fits the file. A file only moves left;
if no span to its left fits, it stays.

For part 2, compact the disk with whole-file moves and return its filesystem checksum.
*/

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum MoveFileError {
    #[error("no file on the disk has ID {0}")]
    UnknownFile(usize),

    #[error("position {position} is past the end of a disk of {size} blocks")]
    OutOfRange { position: usize, size: usize },

    #[error("block {0} is not free")]
    SpaceOccupied(usize),
}

impl Disk {
    /// Find the first position in `start..end` where a file's length of free blocks begins.
    ///
    /// The free span may extend past `end`.
    fn find_free_space(&self, file_id: usize, start: usize, end: usize) -> Option<usize> {
        let len = self.files.get(file_id)?.len;
        let end = end.min(self.size());
        let mut run_start = start;
        let mut run_len = 0;
        for position in start..self.size() {
            if self.blocks[position].is_some() {
                if position >= end {
                    return None;
                }
                run_start = position + 1;
                run_len = 0;
                continue;
            }
            run_len += 1;
            if run_len >= len {
                return (run_start < end).then_some(run_start);
            }
        }
        None
    }

    /// Move a whole file so it starts at `position`.
    ///
    /// The destination blocks must be free or already hold the file.
    fn move_file(&mut self, file_id: usize, position: usize) -> Result<(), MoveFileError> {
        let extent = *self
            .files
            .get(file_id)
            .ok_or(MoveFileError::UnknownFile(file_id))?;
        let size = self.size();
        let destination_end = position
            .checked_add(extent.len)
            .filter(|&destination_end| destination_end <= size && position < size)
            .ok_or(MoveFileError::OutOfRange { position, size })?;

        if let Some(occupied) = (position..destination_end)
            .find(|&block| self.blocks[block].is_some_and(|other| other != file_id))
        {
            return Err(MoveFileError::SpaceOccupied(occupied));
        }

        for block in &mut self.blocks[extent.start..extent.start + extent.len] {
            *block = None;
        }
        for block in &mut self.blocks[position..destination_end] {
            *block = Some(file_id);
        }
        self.files[file_id].start = position;
        Ok(())
    }

    /// Move each file once, by decreasing ID, into the leftmost free span before it that fits.
    fn compact_files(&mut self) -> Result<(), MoveFileError> {
        for file_id in (0..self.files.len()).rev() {
            let start = self.files[file_id].start;
            if let Some(position) = self.find_free_space(file_id, 0, start) {
                self.move_file(file_id, position)?;
            }
        }
        Ok(())
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = Disk;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut disk = input.clone();
        disk.compact_files()?;
        disk.checksum().ok_or_else(|| "checksum overflowed".into())
    }
}
