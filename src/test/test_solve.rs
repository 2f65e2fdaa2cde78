#[cfg(test)]
mod test {
    use crate::console_interface::parse_scenario;
    use crate::core::MoveDirection;
    use crate::core::try_slide;
    use crate::search::{Outcome, SearchStep, SolveConfig, Solver, solve};

    fn outcome_of(scenario: &str) -> Outcome {
        let board = parse_scenario(scenario).expect("scenario should be well formed");
        solve(&board, SolveConfig::default())
    }

    // one truck and one car between the target and the right edge, the
    // shortest unblocking takes 3 moves before the 4-cell run
    const ONE_COLUMN: &str = "3\n2 H 2 0\n3 V 1 2\n2 H 4 2\n";

    #[test]
    fn target_already_at_goal_needs_zero_moves() {
        assert_eq!(outcome_of("1\n2 H 2 4\n"), Outcome::Solved(0));
    }

    #[test]
    fn free_run_needs_one_move_per_cell() {
        assert_eq!(outcome_of("2\n2 H 2 0\n2 V 0 5\n"), Outcome::Solved(4));
    }

    #[test]
    fn vertical_target_exits_through_the_bottom() {
        assert_eq!(outcome_of("1\n2 V 3 1\n"), Outcome::Solved(1));
    }

    #[test]
    fn blockers_must_clear_the_exit_row_first() {
        assert_eq!(outcome_of(ONE_COLUMN), Outcome::Solved(7));
    }

    #[test]
    fn immovable_wall_of_trucks_is_unsolvable() {
        assert_eq!(outcome_of("3\n2 H 2 0\n3 V 0 5\n3 V 3 5\n"), Outcome::Unsolvable);
    }

    #[test]
    fn move_limit_below_the_optimum_reports_unsolvable() {
        let board = parse_scenario(ONE_COLUMN).unwrap();
        let limited = SolveConfig {
            move_limit: Some(6),
        };
        assert_eq!(solve(&board, limited), Outcome::Unsolvable);
    }

    #[test]
    fn move_limit_at_the_optimum_still_finds_it() {
        let board = parse_scenario(ONE_COLUMN).unwrap();
        let limited = SolveConfig {
            move_limit: Some(7),
        };
        assert_eq!(solve(&board, limited), Outcome::Solved(7));
    }

    #[test]
    fn solve_is_driven_by_encoding_not_identity() {
        let parked = parse_scenario("1\n2 H 2 1\n").unwrap();
        let driven = parse_scenario("1\n2 H 2 0\n").unwrap();
        let driven = try_slide(&driven, 0, MoveDirection::Forward).unwrap();

        assert_eq!(parked.encode(), driven.encode());
        assert_eq!(
            solve(&parked, SolveConfig::default()),
            solve(&driven, SolveConfig::default())
        );
    }

    #[test]
    fn discovery_distances_are_recorded_once_and_never_decrease() {
        // unsolvable, so the whole reachable space is visited
        let board = parse_scenario("3\n2 H 2 0\n3 V 0 5\n3 V 3 5\n").unwrap();
        let mut solver = Solver::new(board, SolveConfig::default());
        assert_eq!(solver.run(), Outcome::Unsolvable);

        let graph = solver.graph();
        assert_eq!(graph.distances.len(), graph.nodes.len());
        assert!(graph.distances.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn stepwise_search_reports_solved_at_dequeue() {
        let board = parse_scenario("1\n2 H 2 4\n").unwrap();
        let mut solver = Solver::new(board, SolveConfig::default());
        assert_eq!(solver.step(), SearchStep::Solved(0));
    }
}
