//! Terminal client for pong_core.
//!
//! Renders the board with crossterm, feeds mouse and keyboard input into
//! the session, and paces the loop at the simulation tick rate. The mouse
//! drives the left paddle and the control buttons; arrow keys drive the
//! right paddle when no computer opponent is configured.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent,
        MouseEventKind, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, Clear, ClearType,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use pong_core::{Board, GameConfig, GameSession, Shape, Sprite, TickInput, View, TICK_HZ};
use std::io::{stdout, Result, Write};
use std::time::{Duration, Instant};

/// Character cell dimensions of the rendered field.
const FIELD_WIDTH: usize = 60;
const FIELD_HEIGHT: usize = 24;

/// Screen row where the field content starts (title, score, top border).
const FIELD_TOP: u16 = 3;

/// Up/down key tracking for the right paddle. Terminals without keyboard
/// enhancement never report releases, so there each press counts as a
/// one-tick hold.
struct KeyState {
    up_held: bool,
    down_held: bool,
    release_events: bool,
}

impl KeyState {
    fn new(release_events: bool) -> Self {
        KeyState {
            up_held: false,
            down_held: false,
            release_events,
        }
    }

    fn handle_key_event(&mut self, event: KeyEvent) {
        let pressed = event.kind != KeyEventKind::Release;
        match event.code {
            KeyCode::Up => self.up_held = pressed,
            KeyCode::Down => self.down_held = pressed,
            _ => {}
        }
    }

    fn after_tick(&mut self) {
        if !self.release_events {
            self.up_held = false;
            self.down_held = false;
        }
    }
}

/// Terminal application state
struct CliApp {
    session: GameSession,
    board: Board,
    running: bool,
    last_tick: Instant,
    keys: KeyState,
    pointer_y: Option<f32>,
    clicks: Vec<(f32, f32)>,
    show_help: bool,
}

impl CliApp {
    fn new(config: GameConfig) -> Self {
        let session = GameSession::new(&config);
        let board = session.board;
        let release_events = matches!(supports_keyboard_enhancement(), Ok(true));

        Self {
            session,
            board,
            running: true,
            last_tick: Instant::now(),
            keys: KeyState::new(release_events),
            pointer_y: None,
            clicks: Vec::new(),
            show_help: true,
        }
    }

    fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;

        let mut stdout = stdout();
        if self.keys.release_events {
            queue!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                )
            )?;
        }

        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            Hide,
            Clear(ClearType::All)
        )?;

        while self.running {
            self.handle_input()?;
            self.update();
            self.render()?;

            let frame_time = Duration::from_millis(1000 / TICK_HZ as u64);
            std::thread::sleep(frame_time.saturating_sub(self.last_tick.elapsed()));
        }

        if self.keys.release_events {
            queue!(stdout, PopKeyboardEnhancementFlags)?;
        }
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show)?;
        disable_raw_mode()?;
        Ok(())
    }

    fn handle_input(&mut self) -> Result<()> {
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(event) => self.handle_key(event),
                Event::Mouse(event) => self.handle_mouse(event),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, event: KeyEvent) {
        if event.kind == KeyEventKind::Press {
            match event.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => self.running = false,
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.running = false;
                }
                KeyCode::Char('h') | KeyCode::Char('H') => self.show_help = !self.show_help,
                KeyCode::Char('p') | KeyCode::Char('P') => self.session.toggle_pause(),
                KeyCode::Char('r') | KeyCode::Char('R') => self.session.reset(),
                KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                    self.session.change_speed(c as u8 - b'0');
                }
                _ => {}
            }
        }

        self.keys.handle_key_event(event);
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some((_, y)) = self.board_point(event.column, event.row) {
                    self.pointer_y = Some(y);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((x, y)) = self.board_point(event.column, event.row) {
                    self.clicks.push((x, y));
                }
            }
            _ => {}
        }
    }

    /// Map a terminal cell inside the field box back to board pixels.
    fn board_point(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        let col = column.checked_sub(1)? as usize;
        let line = row.checked_sub(FIELD_TOP)? as usize;
        if col >= FIELD_WIDTH || line >= FIELD_HEIGHT {
            return None;
        }

        let x = col as f32 / (FIELD_WIDTH - 1) as f32 * self.board.width;
        let y = line as f32 / (FIELD_HEIGHT - 1) as f32 * self.board.height;
        Some((x, y))
    }

    fn col_of(&self, x: f32) -> usize {
        ((x / self.board.width).clamp(0.0, 1.0) * (FIELD_WIDTH - 1) as f32).round() as usize
    }

    fn row_of(&self, y: f32) -> usize {
        ((y / self.board.height).clamp(0.0, 1.0) * (FIELD_HEIGHT - 1) as f32).round() as usize
    }

    fn update(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) < Duration::from_millis(1000 / TICK_HZ as u64) {
            return;
        }

        for (x, y) in self.clicks.drain(..) {
            self.session.handle_click(x, y);
        }

        let input = TickInput {
            pointer_y: self.pointer_y,
            up_held: self.keys.up_held,
            down_held: self.keys.down_held,
        };

        if let Some(pong_core::Event::Scored { scorer, score }) = self.session.tick(input) {
            log::info!("{:?} scored, {} : {}", scorer, score[0], score[1]);
        }

        self.keys.after_tick();
        self.last_tick = now;
    }

    fn render(&mut self) -> Result<()> {
        let view = self.session.view();
        let mut row: u16 = 0;

        execute!(stdout(), Clear(ClearType::All))?;

        execute!(
            stdout(),
            MoveTo(0, row),
            SetForegroundColor(Color::Cyan),
            Print("PONG"),
            ResetColor
        )?;
        row += 1;

        let status = if view.paused { "paused" } else { "playing" };
        execute!(
            stdout(),
            MoveTo(0, row),
            SetForegroundColor(Color::Yellow),
            Print(format!("Score: {}   [{}]", view.score_text, status)),
            ResetColor
        )?;
        row += 1;

        row = self.render_field(&view, row)?;

        if self.show_help {
            self.render_help(row)?;
        }

        stdout().flush()?;
        Ok(())
    }

    fn render_field(&self, view: &View, mut row: u16) -> Result<u16> {
        let mut grid = vec![[(' ', Color::White); FIELD_WIDTH]; FIELD_HEIGHT];

        for line in grid.iter_mut() {
            line[FIELD_WIDTH / 2] = ('┊', Color::DarkGrey);
        }
        for sprite in &view.sprites {
            self.stamp(&mut grid, sprite);
        }

        execute!(stdout(), MoveTo(0, row), Print("┌"))?;
        for _ in 0..FIELD_WIDTH {
            execute!(stdout(), Print("─"))?;
        }
        execute!(stdout(), Print("┐"))?;
        row += 1;

        for line in &grid {
            execute!(stdout(), MoveTo(0, row), Print("│"))?;
            for &(glyph, color) in line.iter() {
                execute!(
                    stdout(),
                    SetForegroundColor(color),
                    Print(glyph),
                    ResetColor
                )?;
            }
            execute!(stdout(), Print("│"))?;
            row += 1;
        }

        execute!(stdout(), MoveTo(0, row), Print("└"))?;
        for _ in 0..FIELD_WIDTH {
            execute!(stdout(), Print("─"))?;
        }
        execute!(stdout(), Print("┘"))?;
        row += 1;

        Ok(row)
    }

    /// Draw one sprite into the cell grid by its shape tag.
    fn stamp(&self, grid: &mut [[(char, Color); FIELD_WIDTH]], sprite: &Sprite) {
        let rect = sprite.rect;
        match &sprite.shape {
            Shape::Ellipse => {
                let center = rect.center();
                grid[self.row_of(center.y)][self.col_of(center.x)] = ('●', Color::Red);
            }
            Shape::Rect => {
                let on_left = rect.center().x < self.board.width / 2.0;
                let color = if on_left { Color::Blue } else { Color::Green };
                for line in self.row_of(rect.y)..=self.row_of(rect.y + rect.h) {
                    for col in self.col_of(rect.x)..=self.col_of(rect.x + rect.w) {
                        grid[line][col] = ('█', color);
                    }
                }
            }
            Shape::Label(text) => {
                let center = rect.center();
                let label: Vec<char> = format!("[{}]", text).chars().collect();
                let line = self.row_of(center.y);
                let start = self.col_of(center.x).saturating_sub(label.len() / 2);
                for (offset, &glyph) in label.iter().enumerate() {
                    if start + offset < FIELD_WIDTH {
                        grid[line][start + offset] = (glyph, Color::Magenta);
                    }
                }
            }
        }
    }

    fn render_help(&self, mut row: u16) -> Result<()> {
        row += 1;

        let lines = [
            "--- CONTROLS ---",
            "Mouse: move the left paddle, click [pause]/[reset]",
            "Arrow Up/Down: move the right paddle (player mode)",
            "1-9: ball speed  |  P: pause  |  R: reset  |  H: toggle help  |  Q: quit",
        ];
        for text in lines {
            execute!(
                stdout(),
                MoveTo(0, row),
                SetForegroundColor(Color::DarkGrey),
                Print(text),
                ResetColor
            )?;
            row += 1;
        }

        let ball = self.session.ball.bounds().center();
        execute!(
            stdout(),
            MoveTo(0, row),
            SetForegroundColor(Color::DarkGrey),
            Print(format!(
                "Ball: ({:.0}, {:.0}) vel ({:.1}, {:.1}) | Paddles: L={:.0} R={:.0}",
                ball.x,
                ball.y,
                self.session.ball.velocity().x,
                self.session.ball.velocity().y,
                self.session.paddles[0].top(),
                self.session.paddles[1].top()
            )),
            ResetColor
        )?;

        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "configuration.txt".to_string());
    let config = GameConfig::load_or_default(&config_path);
    log::info!(
        "board {}x{}, opponent {:?} (difficulty {})",
        config.size,
        config.size,
        config.opponent,
        config.difficulty.level()
    );

    // Restore the terminal on Ctrl+C
    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
        std::process::exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    CliApp::new(config).run()
}
