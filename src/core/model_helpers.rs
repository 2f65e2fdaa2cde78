use crate::core::consts::{CAR_LENGTH, GRID_SIZE, MAX_VEHICLES, TARGET_VEHICLE, TRUCK_LENGTH};
use crate::core::models::{Board, MoveDirection, Orientation, UserAction, Vec2, Vehicle};

impl Vec2 {
    pub fn in_bounds(&self) -> bool {
        self.i >= 0 && self.j >= 0 && self.i < GRID_SIZE && self.j < GRID_SIZE
    }
}

impl Vehicle {
    pub fn is_car(&self) -> bool {
        self.length == CAR_LENGTH
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    /// Unit step in this vehicle's forward direction of travel.
    pub fn heading(&self) -> Vec2 {
        if self.is_horizontal() {
            Vec2 { i: 0, j: 1 }
        } else {
            Vec2 { i: 1, j: 0 }
        }
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = Vec2> + '_ {
        let heading = self.heading();
        (0..self.length).map(move |k| Vec2 {
            i: self.position.i + heading.i * k,
            j: self.position.j + heading.j * k,
        })
    }

    /// The single cell immediately beyond the leading edge.
    pub fn forward_probe(&self) -> Vec2 {
        let heading = self.heading();
        Vec2 {
            i: self.position.i + heading.i * self.length,
            j: self.position.j + heading.j * self.length,
        }
    }

    /// The single cell immediately behind the trailing edge.
    pub fn backward_probe(&self) -> Vec2 {
        let heading = self.heading();
        Vec2 {
            i: self.position.i - heading.i,
            j: self.position.j - heading.j,
        }
    }
}

impl Board {
    pub fn from_vehicles(vehicles: Vec<Vehicle>) -> Result<Board, String> {
        if vehicles.is_empty() {
            return Err("scenario has no vehicles".to_string());
        }
        if vehicles.len() > MAX_VEHICLES {
            return Err(format!(
                "scenario has {} vehicles, at most {} are supported",
                vehicles.len(),
                MAX_VEHICLES
            ));
        }

        let mut board = Board {
            grid: [[0; GRID_SIZE as usize]; GRID_SIZE as usize],
            vehicles,
        };
        board.fill();
        for index in 0..board.vehicles.len() {
            let vehicle = board.vehicles[index];
            if !vehicle.is_car() && vehicle.length != TRUCK_LENGTH {
                return Err(format!(
                    "vehicle {} has unsupported length {}",
                    index + 1,
                    vehicle.length
                ));
            }
            board.place(vehicle, (index + 1) as u8)?;
        }
        Ok(board)
    }

    fn fill(&mut self) {
        self.grid = [[0; GRID_SIZE as usize]; GRID_SIZE as usize];
    }

    fn place(&mut self, vehicle: Vehicle, id: u8) -> Result<(), String> {
        for cell in vehicle.occupied_cells() {
            if !cell.in_bounds() {
                return Err(format!(
                    "vehicle {} does not fit on the board at row {} column {}",
                    id, vehicle.position.i, vehicle.position.j
                ));
            }
            let occupant = self.grid[cell.i as usize][cell.j as usize];
            if occupant != 0 {
                return Err(format!(
                    "vehicle {} overlaps vehicle {} at row {} column {}",
                    id, occupant, cell.i, cell.j
                ));
            }
            self.grid[cell.i as usize][cell.j as usize] = id;
        }
        Ok(())
    }

    pub fn cell(&self, position: Vec2) -> u8 {
        self.grid[position.i as usize][position.j as usize]
    }

    pub fn target(&self) -> &Vehicle {
        &self.vehicles[TARGET_VEHICLE]
    }

    /// The target's trailing edge has reached the board boundary in its
    /// direction of travel: the right edge for a horizontal target, the
    /// bottom edge for a vertical one.
    pub fn is_goal(&self) -> bool {
        let target = self.target();
        if target.is_horizontal() {
            target.position.j + target.length == GRID_SIZE
        } else {
            target.position.i + target.length == GRID_SIZE
        }
    }
}

impl UserAction {
    pub fn all_actions(vehicle_count: usize) -> Vec<UserAction> {
        let mut actions = Vec::with_capacity(vehicle_count * 2);
        for index in 0..vehicle_count {
            actions.push(UserAction::Slide(index, MoveDirection::Forward));
            actions.push(UserAction::Slide(index, MoveDirection::Backward));
        }
        actions
    }
}
