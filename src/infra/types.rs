use std::fmt;
use std::ops::{Add, Sub};

/// Grid vector, used both as an absolute cell and as a relative displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Squared euclidean length, widened so any pair of `i32` axes fits.
    pub fn len_2(&self) -> i64 {
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        x * x + y * y
    }

    /// Squared length of `self - other`, computed without `i32` overflow.
    pub fn distance_2(&self, other: &Position) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Floor-halves both axes, so (-3, 3) becomes (-2, 1).
    pub fn halved(&self) -> Position {
        Position::new(self.x.div_euclid(2), self.y.div_euclid(2))
    }

    pub fn neighbors(&self) -> [Position; 4] {
        Direction::ALL.map(|direction| *self + direction.step())
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.distance(other) == 1
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order. Policies break ties by position in this array.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn step(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
            Direction::Right => Position::new(1, 0),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// What a brain hands back to the engine for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Direction),
    Stay,
    Ping,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Move(direction) => direction.as_str(),
            Action::Stay => "STAY",
            Action::Ping => "PING",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the four adjacent cells are currently blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Obstruction {
    blocked: [bool; 4],
}

impl Obstruction {
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn blocked_all() -> Self {
        Self { blocked: [true; 4] }
    }

    pub fn from_fn<F>(mut is_blocked: F) -> Self
    where
        F: FnMut(Direction) -> bool,
    {
        Self {
            blocked: Direction::ALL.map(&mut is_blocked),
        }
    }

    pub fn with_blocked(directions: &[Direction]) -> Self {
        Self::from_fn(|direction| directions.contains(&direction))
    }

    pub fn is_blocked(&self, direction: Direction) -> bool {
        self.blocked[direction.index()]
    }

    pub fn set_blocked(&mut self, direction: Direction, blocked: bool) {
        self.blocked[direction.index()] = blocked;
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|direction| !self.is_blocked(*direction))
    }
}
