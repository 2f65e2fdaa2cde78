pub use dissimilar::diff as __diff;
use crate::console_interface::{parse_scenario, render_board_to_string};
use crate::core::{Board, MoveDirection, MoveUpdate, UserAction, step};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct ScenarioTestState {
    pub board: Board,
}

impl ScenarioTestState {
    pub fn new(scenario: &str) -> Self {
        let board = parse_scenario(scenario).expect("scenario should be well formed");
        Self { board }
    }

    pub fn board_to_string(&self) -> String {
        render_board_to_string(&self.board).trim_matches('\n').into()
    }

    pub fn assert_slide(&mut self, index: usize, direction: MoveDirection) {
        let update = step(&self.board, UserAction::Slide(index, direction));
        let MoveUpdate::NextState(next) = update else {
            panic!(
                "Expected NextState update, got {:?}, on board\n{}",
                update,
                self.board_to_string()
            );
        };
        self.board = next;
    }

    pub fn assert_slides(&mut self, slides: &[(usize, MoveDirection)]) {
        for &(index, direction) in slides {
            self.assert_slide(index, direction);
        }
    }

    pub fn try_slide(&mut self, index: usize, direction: MoveDirection) -> MoveUpdate {
        let update = step(&self.board, UserAction::Slide(index, direction));
        if let MoveUpdate::NextState(next) = &update {
            self.board = next.clone();
        }
        update
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.board_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
