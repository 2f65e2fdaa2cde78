pub const GRID_SIZE: i32 = 6;
pub const CAR_LENGTH: i32 = 2;
pub const TRUCK_LENGTH: i32 = 3;
pub const MAX_VEHICLES: usize = 18;
pub const TARGET_VEHICLE: usize = 0;
