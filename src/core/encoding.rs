use crate::core::consts::GRID_SIZE;
use crate::core::models::Board;

pub const KEY_LENGTH: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Canonical row-major encoding of grid occupancy. A pure function of the
/// grid contents: boards that look the same encode the same, no matter how
/// they were reached.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BoardKey([u8; KEY_LENGTH]);

impl Board {
    pub fn encode(&self) -> BoardKey {
        let mut cells = [0u8; KEY_LENGTH];
        for i in 0..GRID_SIZE as usize {
            for j in 0..GRID_SIZE as usize {
                cells[i * GRID_SIZE as usize + j] = self.grid[i][j];
            }
        }
        BoardKey(cells)
    }
}
