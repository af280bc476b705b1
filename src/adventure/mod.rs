//! Gold & Cash adventure: a two-character cooperative tile puzzle.
//!
//! Gold Guy (WASD) is heavy: he sinks in water but can walk over lava.
//! Cash Girl (arrow keys) floats: water is fine, fire and lava burn her.
//! A level is cleared when both stand on their own exits at the same time.
//!
//! Level grids live in per-level files under `src/adventure/`, like boards in a
//! puzzle book; `levels()` stitches them together in play order.
use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::info;

use crate::error::GameError;

mod adventure_level1;
mod adventure_level2;

// --- Tiles & Levels ----------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Floor,
    GoldStart,
    CashStart,
    /// Pressed down by Gold's weight.
    GoldSwitch,
    /// Triggered by Cash's light touch.
    CashPlate,
    Fire,
    Lava,
    Water,
    GoldKey,
    CashKey,
    TaxTrap,
    RobberPit,
    BankVault,
    GoldExit,
    CashExit,
}

/// Two-letter-ish aliases so level grids read like the design sketches.
pub(crate) mod codes {
    use super::TileKind;

    pub const W: TileKind = TileKind::Wall;
    pub const __: TileKind = TileKind::Floor;
    pub const G: TileKind = TileKind::GoldStart;
    pub const C: TileKind = TileKind::CashStart;
    pub const GW: TileKind = TileKind::GoldSwitch;
    pub const CP: TileKind = TileKind::CashPlate;
    pub const F: TileKind = TileKind::Fire;
    pub const L: TileKind = TileKind::Lava;
    pub const WA: TileKind = TileKind::Water;
    pub const GK: TileKind = TileKind::GoldKey;
    pub const CK: TileKind = TileKind::CashKey;
    pub const T: TileKind = TileKind::TaxTrap;
    pub const R: TileKind = TileKind::RobberPit;
    pub const B: TileKind = TileKind::BankVault;
    pub const EG: TileKind = TileKind::GoldExit;
    pub const EC: TileKind = TileKind::CashExit;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

/// Level grid descriptor (immutable). Flat row-major tiles.
#[derive(Debug)]
pub struct LevelDesc {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub width: u8,
    pub height: u8,
    pub tiles: Vec<TileKind>, // length = width * height
}

impl LevelDesc {
    pub(crate) fn from_rows(
        id: u8,
        name: &'static str,
        description: &'static str,
        rows: &[&[TileKind]],
    ) -> Self {
        let width = rows.first().map_or(0, |r| r.len()) as u8;
        Self {
            id,
            name,
            description,
            width,
            height: rows.len() as u8,
            tiles: rows.iter().flat_map(|r| r.iter().copied()).collect(),
        }
    }

    /// Tile at (x, y); anything off the board reads as wall.
    pub fn tile(&self, x: u8, y: u8) -> TileKind {
        if x >= self.width || y >= self.height {
            return TileKind::Wall;
        }
        self.tiles[y as usize * self.width as usize + x as usize]
    }

    pub fn find(&self, kind: TileKind) -> Option<Coord> {
        let idx = self.tiles.iter().position(|t| *t == kind)?;
        let w = self.width as usize;
        Some(Coord {
            x: (idx % w) as u8,
            y: (idx / w) as u8,
        })
    }
}

pub fn levels() -> &'static [&'static LevelDesc] {
    static LEVELS: OnceLock<Vec<&'static LevelDesc>> = OnceLock::new();
    LEVELS.get_or_init(|| vec![adventure_level1::level1(), adventure_level2::level2()])
}

// --- Characters & Movement ---------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Character {
    Gold,
    Cash,
}

impl Character {
    /// Whether this character may stand on `tile`.
    pub fn can_enter(self, tile: TileKind) -> bool {
        match (self, tile) {
            (_, TileKind::Wall) => false,
            (Character::Gold, TileKind::Water) => false,
            (Character::Cash, TileKind::Fire | TileKind::Lava) => false,
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    fn apply(self, c: Coord) -> Option<Coord> {
        let (x, y) = match self {
            Step::Up => (Some(c.x), c.y.checked_sub(1)),
            Step::Down => (Some(c.x), c.y.checked_add(1)),
            Step::Left => (c.x.checked_sub(1), Some(c.y)),
            Step::Right => (c.x.checked_add(1), Some(c.y)),
        };
        Some(Coord { x: x?, y: y? })
    }
}

/// WASD drives Gold, arrow keys drive Cash.
pub fn key_binding(key: &str) -> Option<(Character, Step)> {
    let binding = match key {
        "w" | "W" => (Character::Gold, Step::Up),
        "s" | "S" => (Character::Gold, Step::Down),
        "a" | "A" => (Character::Gold, Step::Left),
        "d" | "D" => (Character::Gold, Step::Right),
        "ArrowUp" => (Character::Cash, Step::Up),
        "ArrowDown" => (Character::Cash, Step::Down),
        "ArrowLeft" => (Character::Cash, Step::Left),
        "ArrowRight" => (Character::Cash, Step::Right),
        _ => return None,
    };
    Some(binding)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEvent {
    Moved,
    Blocked(Character),
    CollectedKey(Character),
    SwitchActivated,
    PlateActivated,
    TaxTrap,
    RobberPit,
    /// Both exits reached; `next` is the id of the level now loaded.
    LevelComplete { next: u8 },
    GameComplete { score: u32 },
}

impl MoveEvent {
    pub fn message(self) -> &'static str {
        match self {
            MoveEvent::Moved => "",
            MoveEvent::Blocked(Character::Gold) => "Gold Guy is too heavy for that path!",
            MoveEvent::Blocked(Character::Cash) => "Cash Girl can't go through fire!",
            MoveEvent::CollectedKey(Character::Gold) => "Gold Guy collected a gold bar! 🥇",
            MoveEvent::CollectedKey(Character::Cash) => "Cash Girl collected a cash bill! 💵",
            MoveEvent::SwitchActivated => "Gold Guy's weight activated the switch! ⚖️",
            MoveEvent::PlateActivated => "Cash Girl activated the pressure plate! 💨",
            MoveEvent::TaxTrap => "Watch out for tax traps! 📊",
            MoveEvent::RobberPit => "Robber pit ahead! Be careful! 🕳️",
            MoveEvent::LevelComplete { .. } => "Level complete! Moving to next level...",
            MoveEvent::GameComplete { .. } => "Congratulations! You completed all levels! 🎉",
        }
    }
}

/// `max(1000 - moves * 10, 100)`.
pub fn move_score(moves: u32) -> u32 {
    1000u32.saturating_sub(moves.saturating_mul(10)).max(100)
}

// --- Runtime State -----------------------------------------------------------

#[derive(Clone, Debug)]
pub struct AdventureGame {
    level_index: usize,
    gold: Coord,
    cash: Coord,
    gold_keys: u32,
    cash_keys: u32,
    taken_keys: HashSet<Coord>,
    switch_on: bool,
    plate_on: bool,
    moves: u32,
    score: Option<u32>,
}

impl Default for AdventureGame {
    fn default() -> Self {
        Self::new()
    }
}

impl AdventureGame {
    pub fn new() -> Self {
        let mut game = Self {
            level_index: 0,
            gold: Coord { x: 1, y: 1 },
            cash: Coord { x: 6, y: 1 },
            gold_keys: 0,
            cash_keys: 0,
            taken_keys: HashSet::new(),
            switch_on: false,
            plate_on: false,
            moves: 0,
            score: None,
        };
        game.load_level(0);
        game
    }

    /// Jump to level `index` (0-based), resetting positions, keys and switches.
    pub fn select_level(&mut self, index: usize) -> Result<(), GameError> {
        if index >= levels().len() {
            return Err(GameError::OutOfRange {
                what: "level",
                index,
                len: levels().len(),
            });
        }
        self.load_level(index);
        Ok(())
    }

    fn load_level(&mut self, index: usize) {
        let level = levels()[index];
        self.level_index = index;
        if let Some(start) = level.find(TileKind::GoldStart) {
            self.gold = start;
        }
        if let Some(start) = level.find(TileKind::CashStart) {
            self.cash = start;
        }
        self.gold_keys = 0;
        self.cash_keys = 0;
        self.taken_keys.clear();
        self.switch_on = false;
        self.plate_on = false;
    }

    pub fn level(&self) -> &'static LevelDesc {
        levels()[self.level_index]
    }

    /// Tile as currently seen: collected keys read as floor.
    pub fn tile(&self, x: u8, y: u8) -> TileKind {
        let tile = self.level().tile(x, y);
        if matches!(tile, TileKind::GoldKey | TileKind::CashKey)
            && self.taken_keys.contains(&Coord { x, y })
        {
            return TileKind::Floor;
        }
        tile
    }

    /// Handle a key press; unbound keys return `None`.
    pub fn press(&mut self, key: &str) -> Option<Result<MoveEvent, GameError>> {
        let (who, step) = key_binding(key)?;
        Some(self.move_character(who, step))
    }

    pub fn move_character(&mut self, who: Character, step: Step) -> Result<MoveEvent, GameError> {
        if self.score.is_some() {
            return Err(GameError::GameOver);
        }
        let from = self.position(who);
        let Some(to) = step.apply(from) else {
            return Ok(MoveEvent::Blocked(who));
        };
        let tile = self.tile(to.x, to.y);
        if !who.can_enter(tile) {
            return Ok(MoveEvent::Blocked(who));
        }
        match who {
            Character::Gold => self.gold = to,
            Character::Cash => self.cash = to,
        }
        self.moves += 1;

        if self.level().tile(self.gold.x, self.gold.y) == TileKind::GoldExit
            && self.level().tile(self.cash.x, self.cash.y) == TileKind::CashExit
        {
            return Ok(self.finish_level());
        }

        let event = match (who, tile) {
            (Character::Gold, TileKind::GoldKey) => {
                self.gold_keys += 1;
                self.taken_keys.insert(to);
                MoveEvent::CollectedKey(who)
            }
            (Character::Cash, TileKind::CashKey) => {
                self.cash_keys += 1;
                self.taken_keys.insert(to);
                MoveEvent::CollectedKey(who)
            }
            (Character::Gold, TileKind::GoldSwitch) => {
                self.switch_on = true;
                MoveEvent::SwitchActivated
            }
            (Character::Cash, TileKind::CashPlate) => {
                self.plate_on = true;
                MoveEvent::PlateActivated
            }
            (_, TileKind::TaxTrap) => MoveEvent::TaxTrap,
            (_, TileKind::RobberPit) => MoveEvent::RobberPit,
            _ => MoveEvent::Moved,
        };
        Ok(event)
    }

    fn finish_level(&mut self) -> MoveEvent {
        let finished = self.level().id;
        if self.level_index + 1 < levels().len() {
            self.load_level(self.level_index + 1);
            info!(finished, moves = self.moves, "adventure level complete");
            MoveEvent::LevelComplete {
                next: self.level().id,
            }
        } else {
            let score = move_score(self.moves);
            self.score = Some(score);
            info!(score, moves = self.moves, "adventure complete");
            MoveEvent::GameComplete { score }
        }
    }

    /// Back to the first level with zero moves.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn position(&self, who: Character) -> Coord {
        match who {
            Character::Gold => self.gold,
            Character::Cash => self.cash,
        }
    }

    pub fn keys(&self, who: Character) -> u32 {
        match who {
            Character::Gold => self.gold_keys,
            Character::Cash => self.cash_keys,
        }
    }

    pub fn switch_on(&self) -> bool {
        self.switch_on
    }

    pub fn plate_on(&self) -> bool {
        self.plate_on
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }
}
