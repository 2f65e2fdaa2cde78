use crate::core::{Board, UserAction};

pub struct GameRenderState {
    pub board: Board,
    pub selected: usize,
    pub won: bool,
    pub error: Option<String>,
    pub last_action: Option<UserAction>,
}
