use crate::core::models::{Board, MoveDirection, MoveUpdate, UserAction, Vec2, Vehicle};

pub fn step(board: &Board, action: UserAction) -> MoveUpdate {
    let UserAction::Slide(index, direction) = action;
    let Some(&vehicle) = board.vehicles.get(index) else {
        return MoveUpdate::Error(format!("no vehicle with index {}", index));
    };

    let heading = vehicle.heading();
    let probe = match direction {
        MoveDirection::Forward => vehicle.forward_probe(),
        MoveDirection::Backward => vehicle.backward_probe(),
    };

    if !probe.in_bounds() {
        return MoveUpdate::Error("cannot slide out of bounds".to_string());
    }
    let blocked = match direction {
        MoveDirection::Forward => collides_forward(board, &vehicle),
        MoveDirection::Backward => collides_backward(board, &vehicle),
    };
    if blocked {
        return MoveUpdate::Error("cannot slide into another vehicle".to_string());
    }

    let new_position = match direction {
        MoveDirection::Forward => Vec2 {
            i: vehicle.position.i + heading.i,
            j: vehicle.position.j + heading.j,
        },
        MoveDirection::Backward => Vec2 {
            i: vehicle.position.i - heading.i,
            j: vehicle.position.j - heading.j,
        },
    };

    // Copy the whole board, then clear the old footprint and stamp the
    // new one, so the grid and the vehicle list change together.
    let mut next = board.clone();
    let id = (index + 1) as u8;
    for cell in vehicle.occupied_cells() {
        next.grid[cell.i as usize][cell.j as usize] = 0;
    }
    next.vehicles[index].position = new_position;
    let moved = next.vehicles[index];
    for cell in moved.occupied_cells() {
        next.grid[cell.i as usize][cell.j as usize] = id;
    }
    MoveUpdate::NextState(next)
}

// Both probes look at exactly one cell: the one beyond the moving edge.
// Every cell in between is covered by the vehicle itself, so a non-empty
// probe cell always belongs to a different vehicle.
pub fn collides_forward(board: &Board, vehicle: &Vehicle) -> bool {
    board.cell(vehicle.forward_probe()) != 0
}

pub fn collides_backward(board: &Board, vehicle: &Vehicle) -> bool {
    board.cell(vehicle.backward_probe()) != 0
}

pub fn try_slide(board: &Board, index: usize, direction: MoveDirection) -> Option<Board> {
    match step(board, UserAction::Slide(index, direction)) {
        MoveUpdate::NextState(next) => Some(next),
        MoveUpdate::Error(_) => None,
    }
}
