//! Main TUI application state and logic

use crate::interpreter::constants::AUTOPLAY_INTERVAL_MS;
use crate::interpreter::engine::Execution;
use crate::snapshot::Channel;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{self, SourceScrollState};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tree,
    Output,
    Symbols,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> tree -> symbols)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Symbols,
            FocusedPane::Symbols => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// The finished run being replayed
    pub execution: Execution,

    /// The source code that was executed
    pub source_code: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub tree_scroll: usize,
    pub output_scroll: usize,
    pub symbols_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app replaying `execution` from its first snapshot
    pub fn new(mut execution: Execution, source_code: String) -> Self {
        execution.rewind_to_start();
        let now = Instant::now();
        App {
            execution,
            source_code,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::default(),
            tree_scroll: 0,
            output_scroll: 0,
            symbols_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let interval = Duration::from_millis(AUTOPLAY_INTERVAL_MS);

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= interval {
                if self.execution.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.follow_output();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Whether the statement at the cursor reported a diagnostic
    pub fn current_step_has_error(&self) -> bool {
        let position = self.execution.history_position();
        let (Some(current), Some(previous)) = (
            self.execution.snapshot(position),
            position.checked_sub(1).and_then(|p| self.execution.snapshot(p)),
        ) else {
            return false;
        };

        self.execution.channels().output()[previous.output_len..current.output_len]
            .iter()
            .any(|line| line.channel == Channel::Diagnostics)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Tree (top) | Symbols (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        let is_error = self.current_step_has_error();
        let execution = &self.execution;
        let current = execution.current();

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            execution.current_location().line,
            is_error,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let output_len = current.map_or(0, |snapshot| snapshot.output_len);
        let output = execution.channels().output();
        panes::render_output_pane(
            frame,
            left_rows[1],
            &output[..output_len.min(output.len())],
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_tree_pane(
            frame,
            right_rows[0],
            execution.current_trace_block(),
            current.and_then(|snapshot| snapshot.statement_label.as_deref()),
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        let previous = execution
            .history_position()
            .checked_sub(1)
            .and_then(|p| execution.snapshot(p));
        let rows = match current {
            Some(snapshot) => panes::symbol_rows(
                &snapshot.symbols,
                previous.map(|prev| &prev.symbols),
                execution.variables(),
            ),
            None => Vec::new(),
        };
        panes::render_symbols_pane(
            frame,
            right_rows[1],
            &rows,
            self.focused_pane == FocusedPane::Symbols,
            &mut self.symbols_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            execution.history_position(),
            execution.total_snapshots(),
            execution.error_count(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = (c as u8 - b'0') as usize;
                let stepped = (0..n)
                    .take_while(|_| self.execution.step_forward().is_ok())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.follow_output();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_sub(1),
                FocusedPane::Output => self.output_scroll = self.output_scroll.saturating_sub(1),
                FocusedPane::Symbols => {
                    self.symbols_scroll = self.symbols_scroll.saturating_sub(1)
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Tree => self.tree_scroll = self.tree_scroll.saturating_add(1),
                FocusedPane::Output => self.output_scroll = self.output_scroll.saturating_add(1),
                FocusedPane::Symbols => {
                    self.symbols_scroll = self.symbols_scroll.saturating_add(1)
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        let now = Instant::now();
                        self.last_play_time = now
                            .checked_sub(Duration::from_millis(AUTOPLAY_INTERVAL_MS))
                            .unwrap_or(now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.execution.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.follow_output();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.execution.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.follow_output();
            }
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        match self.execution.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.follow_output();
            }
            Err(e) => self.status_message = format!("Cannot step forward: {}", e),
        }
    }

    fn step_backward(&mut self) {
        match self.execution.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.follow_output();
            }
            Err(e) => self.status_message = format!("Cannot step backward: {}", e),
        }
    }

    /// Scroll output to the bottom and the tree to the top after the cursor moves
    fn follow_output(&mut self) {
        self.output_scroll = usize::MAX;
        self.tree_scroll = 0;
    }
}
