use GridlockEngine::console_interface::parse_scenario;
use GridlockEngine::search::{SolveConfig, Solver, solve};
use criterion::{BenchmarkId, Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;

const SCENARIOS: &[(&str, &str, usize, SamplingMode)] = &[
    ("free_run", "2\n2 H 2 0\n2 V 0 5\n", 100, SamplingMode::Auto),
    (
        "one_column",
        "3\n2 H 2 0\n3 V 1 2\n2 H 4 2\n",
        100,
        SamplingMode::Auto,
    ),
    (
        "walled_exit",
        "3\n2 H 2 0\n3 V 0 5\n3 V 3 5\n",
        100,
        SamplingMode::Auto,
    ),
    (
        "crowded",
        "8\n2 H 2 0\n3 V 0 2\n2 H 0 3\n2 V 1 4\n3 H 3 0\n2 V 4 3\n3 H 5 0\n2 V 0 5\n",
        50,
        SamplingMode::Auto,
    ),
];

pub fn bench_full_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_full_search");

    for &(scenario_name, scenario, sample_size, sample_mode) in SCENARIOS {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(
            BenchmarkId::new("solve", scenario_name),
            &scenario,
            |b, &scenario| {
                b.iter_with_setup(
                    || parse_scenario(scenario).unwrap(),
                    |board| black_box(solve(&board, SolveConfig::default())),
                );
            },
        );
    }
    group.finish();
}

pub fn bench_single_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_single_expansion");

    for &(scenario_name, scenario, sample_size, sample_mode) in SCENARIOS {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(
            BenchmarkId::new("expand_start_state", scenario_name),
            &scenario,
            |b, &scenario| {
                b.iter_with_setup(
                    || {
                        let board = parse_scenario(scenario).unwrap();
                        Solver::new(board, SolveConfig::default())
                    },
                    |mut solver| {
                        black_box(solver.step())
                    },
                );
            },
        );
    }
    group.finish();
}

criterion_group!(solve_benches, bench_full_solve, bench_single_expansion);

criterion_main!(solve_benches);
