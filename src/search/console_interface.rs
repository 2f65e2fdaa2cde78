use crate::search::solve::Solver;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::*;
use std::fs::File;
use std::io;
use std::io::Write;

pub struct SearchRenderState<'a> {
    pub solver: &'a Solver,
    pub processed_since_last_render: usize,
    pub start_time: std::time::Instant,
    pub last_render_time: std::time::Instant,
    pub current_time: std::time::Instant,
}

pub fn render_search(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    file_out: &mut File,
    render: SearchRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    let search_info = SearchInfo::new(render.solver);

    let expanded_per_second = if render.current_time == render.last_render_time {
        0.0
    } else {
        render.processed_since_last_render as f64
            / (render.current_time - render.last_render_time).as_secs_f64()
    };
    let total_per_second = if render.start_time == render.current_time {
        0.0
    } else {
        search_info.expanded as f64 / (render.current_time - render.start_time).as_secs_f64()
    };
    let time_description = format!(
        "Expanded {} states since last render, {:?} since. {:.1} states/sec. Total {:.1} states/sec.",
        render.processed_since_last_render,
        render.current_time - render.last_render_time,
        expanded_per_second,
        total_per_second
    );

    file_out.write(search_info.to_log_string().as_bytes())?;

    let description = format!("{}\n{}", search_info.to_human_string(), time_description);

    terminal.draw(|f| {
        let size = f.area();

        let paragraph = Paragraph::new(description)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search Info"),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);

        f.render_widget(paragraph, size);
    })?;
    Ok(())
}

pub struct SearchInfo {
    pub states: usize,
    pub edges: usize,
    pub expanded: usize,
    pub depth: usize,
}

impl SearchInfo {
    pub fn new(solver: &Solver) -> Self {
        let graph = solver.graph();
        let states = graph.nodes.len();
        let frontier = solver.frontier_len();
        let expanded = states - frontier;
        // discovery order is breadth-first, the newest state is the deepest
        let depth = graph.distances.last().copied().unwrap_or(0);
        Self {
            states,
            edges: graph.edges.len(),
            expanded,
            depth,
        }
    }

    pub fn to_human_string(&self) -> String {
        format!(
            "Search has {} states, {} edges, {} expanded, {} queued, depth {}.",
            self.states,
            self.edges,
            self.expanded,
            self.states - self.expanded,
            self.depth
        )
    }

    pub fn to_log_string(&self) -> String {
        format!(
            "states: {}, edges: {}, expanded: {}, depth: {}\n",
            self.states, self.edges, self.expanded, self.depth
        )
    }
}

pub fn get_search_info(solver: &Solver) -> String {
    SearchInfo::new(solver).to_human_string()
}
