use crate::core::consts::GRID_SIZE;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Vehicle {
    pub length: i32,
    pub orientation: Orientation,
    pub position: Vec2,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveDirection {
    Forward,
    Backward,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Slide(usize, MoveDirection),
}

/// Cell value 0 is empty, any other value is the 1-based index of the
/// vehicle occupying that cell. The grid is derivable from the vehicle
/// list and is kept alongside it for O(1) collision lookups.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug)]
pub enum MoveUpdate {
    NextState(Board),
    Error(String),
}
