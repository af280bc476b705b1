//! Letter grid and the randomized word placement generator.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::config::WordSearchConfig;
use crate::error::PuzzleError;

/// Zero-based grid coordinate (row-major).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed delta; `None` when the result would be negative.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// Directions a word may be laid in. Reversed readings are handled at match time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (dr, dc) unit step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Direction whose step (or its reverse) equals `delta`.
    pub fn from_step(delta: (isize, isize)) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.delta() == delta || d.delta() == (-delta.0, -delta.1))
    }

    /// Valid start rows and columns so a word of `len` stays inside an `n`x`n` grid.
    fn start_ranges(self, n: usize, len: usize) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let (dr, dc) = self.delta();
        let span = n + 1 - len; // number of starts along a moving axis
        let rows = if dr == 0 { 0..n } else { 0..span };
        let cols = match dc {
            0 => 0..n,
            1 => 0..span,
            _ => (len - 1)..n,
        };
        (rows, cols)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    pub part_of_word: bool,
    /// Index into the word list of the last word written here.
    pub word_id: Option<usize>,
    /// Transient drag highlight.
    pub selected: bool,
    /// Part of a word the player has found.
    pub found: bool,
}

/// Recorded location of one hidden word. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPlacement {
    pub word: String,
    pub positions: Vec<Position>,
    pub direction: Direction,
}

impl WordPlacement {
    pub fn start(&self) -> Position {
        self.positions[0]
    }
}

/// Square letter grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos).then(|| &self.cells[pos.row * self.size + pos.col])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    pub fn letter(&self, pos: Position) -> Option<char> {
        self.cell(pos).map(|c| c.letter)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Letters row by row, one string per row.
    pub fn row_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.letter).collect())
            .collect()
    }

    /// Read `len` letters from `start` along `direction`.
    pub fn read(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        let (dr, dc) = direction.delta();
        (0..len)
            .map(|i| {
                let pos = start.offset(dr * i as isize, dc * i as isize)?;
                self.letter(pos)
            })
            .collect()
    }

    pub(crate) fn clear_selected(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
    }
}

/// Generated grid plus the placements hidden in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<WordPlacement>,
}

impl Puzzle {
    pub fn placement(&self, word: &str) -> Option<&WordPlacement> {
        self.placements.iter().find(|p| p.word == word)
    }
}

/// Build a puzzle from `config`, drawing every random choice from `rng`.
///
/// Each word gets `max_attempts` random tries, then an exhaustive scan of all
/// legal spots in shuffled order. If a word has no legal spot the whole grid is
/// regenerated, up to `max_restarts` times.
pub fn generate<R: Rng + ?Sized>(
    config: &WordSearchConfig,
    rng: &mut R,
) -> Result<Puzzle, PuzzleError> {
    config.validate()?;
    let mut restarts = 0;
    loop {
        match try_generate(config, rng) {
            Ok(puzzle) => return Ok(puzzle),
            Err(word) if restarts < config.max_restarts => {
                restarts += 1;
                warn!(word = %word, restarts, "no legal placement left, regenerating grid");
            }
            Err(word) => return Err(PuzzleError::Unplaceable { word, restarts }),
        }
    }
}

/// Working grid where cells may still be empty.
struct Layout {
    size: usize,
    letters: Vec<Option<char>>,
    owners: Vec<Option<usize>>,
}

impl Layout {
    fn new(size: usize) -> Self {
        Self {
            size,
            letters: vec![None; size * size],
            owners: vec![None; size * size],
        }
    }

    fn idx(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Positions for `word` if every target is empty or already agrees.
    fn fit(&self, word: &[char], start: Position, direction: Direction) -> Option<Vec<Position>> {
        let (dr, dc) = direction.delta();
        let mut positions = Vec::with_capacity(word.len());
        for (i, &ch) in word.iter().enumerate() {
            let pos = start.offset(dr * i as isize, dc * i as isize)?;
            if pos.row >= self.size || pos.col >= self.size {
                return None;
            }
            match self.letters[self.idx(pos)] {
                Some(existing) if existing != ch => return None,
                _ => positions.push(pos),
            }
        }
        Some(positions)
    }

    fn write(&mut self, word: &[char], positions: &[Position], word_id: usize) {
        for (&pos, &ch) in positions.iter().zip(word) {
            let idx = self.idx(pos);
            self.letters[idx] = Some(ch);
            self.owners[idx] = Some(word_id);
        }
    }
}

/// One full placement pass; `Err(word)` names the first word with no room.
fn try_generate<R: Rng + ?Sized>(
    config: &WordSearchConfig,
    rng: &mut R,
) -> Result<Puzzle, String> {
    let n = config.grid_size;
    let mut layout = Layout::new(n);
    let mut placements = Vec::with_capacity(config.words.len());

    for (word_id, word) in config.words.iter().enumerate() {
        let chars: Vec<char> = word.chars().collect();
        let found = random_spot(&layout, &chars, config.max_attempts, rng)
            .or_else(|| {
                debug!(word = %word, "random attempts exhausted, scanning all spots");
                scan_spot(&layout, &chars, rng)
            })
            .ok_or_else(|| word.clone())?;
        let (direction, positions) = found;
        layout.write(&chars, &positions, word_id);
        debug!(word = %word, ?direction, start = ?positions[0], "placed word");
        placements.push(WordPlacement {
            word: word.clone(),
            positions,
            direction,
        });
    }

    let alphabet = config.alphabet_letters();
    let cells = layout
        .letters
        .iter()
        .zip(&layout.owners)
        .map(|(letter, owner)| match letter {
            Some(ch) => Cell {
                letter: *ch,
                part_of_word: true,
                word_id: *owner,
                selected: false,
                found: false,
            },
            None => Cell {
                letter: alphabet[rng.gen_range(0..alphabet.len())],
                part_of_word: false,
                word_id: None,
                selected: false,
                found: false,
            },
        })
        .collect();

    Ok(Puzzle {
        grid: Grid { size: n, cells },
        placements,
    })
}

fn random_spot<R: Rng + ?Sized>(
    layout: &Layout,
    word: &[char],
    attempts: u32,
    rng: &mut R,
) -> Option<(Direction, Vec<Position>)> {
    for _ in 0..attempts {
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let (rows, cols) = direction.start_ranges(layout.size, word.len());
        let start = Position::new(rng.gen_range(rows), rng.gen_range(cols));
        if let Some(positions) = layout.fit(word, start, direction) {
            return Some((direction, positions));
        }
    }
    None
}

fn scan_spot<R: Rng + ?Sized>(
    layout: &Layout,
    word: &[char],
    rng: &mut R,
) -> Option<(Direction, Vec<Position>)> {
    let mut candidates: Vec<(Direction, Position)> = Direction::ALL
        .into_iter()
        .flat_map(|direction| {
            let (rows, cols) = direction.start_ranges(layout.size, word.len());
            rows.flat_map(move |r| cols.clone().map(move |c| (direction, Position::new(r, c))))
        })
        .collect();
    candidates.shuffle(rng);
    candidates.into_iter().find_map(|(direction, start)| {
        layout
            .fit(word, start, direction)
            .map(|positions| (direction, positions))
    })
}
