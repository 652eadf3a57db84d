//! The interactive loop: poll, update, draw, diff, flush.

use std::error::Error;
use std::io;
use std::time::Duration;

use gridstar_core::CancelToken;
use gridstar_paths::AStar;
use log::{debug, info};

use crate::config::Config;
use crate::input::Action;
use crate::model::{Effect, Model, draw_step};
use crate::screen::Screen;
use crate::terminal::Terminal;

const IDLE_POLL: Duration = Duration::from_millis(100);

/// The application runner.
pub struct App {
    model: Model,
    terminal: Terminal,
    cancel: CancelToken,
    step_delay: Duration,
}

impl App {
    /// Build an app with a `side`×`side` board.
    pub fn new(config: &Config, side: u16) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            model: Model::new(side as usize, config.cell_width)?,
            terminal: Terminal::new(!config.no_mouse),
            cancel: CancelToken::new(),
            step_delay: config.step_delay(),
        })
    }

    /// Run until the user quits. The terminal is restored on every exit path.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        self.terminal.init()?;
        let result = self.main_loop();
        self.terminal.close();
        result
    }

    fn main_loop(&mut self) -> Result<(), Box<dyn Error>> {
        self.draw()?;
        loop {
            let mut needs_draw = false;
            for action in self.terminal.poll(IDLE_POLL)? {
                match self.model.update(action)? {
                    None => {}
                    Some(Effect::Redraw) => needs_draw = true,
                    Some(Effect::Repaint) => {
                        self.terminal.invalidate()?;
                        needs_draw = true;
                    }
                    Some(Effect::Search) => {
                        let quit = self.run_search()?;
                        if quit {
                            return Ok(());
                        }
                        needs_draw = true;
                    }
                    Some(Effect::End) => return Ok(()),
                }
            }
            if needs_draw {
                self.draw()?;
            }
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let (width, height) = self.model.screen_size();
        let mut screen = Screen::new(width, height);
        self.model.draw(&mut screen);
        self.terminal.present(screen)
    }

    /// Search the board, drawing after every step. Returns `true` if the
    /// user asked to quit meanwhile.
    fn run_search(&mut self) -> Result<bool, Box<dyn Error>> {
        let (width, height) = self.model.screen_size();
        let delay = self.step_delay;
        self.cancel.reset();
        let engine = AStar::new().with_cancel(self.cancel.clone());

        let terminal = &mut self.terminal;
        let cancel = &self.cancel;
        let mut quit = false;
        let mut resized = false;
        let mut failure: Option<io::Error> = None;
        let mut steps = 0usize;

        let Some((grid, start, goal)) = self.model.board_mut().prepare_search() else {
            return Ok(false);
        };
        info!("searching {start} -> {goal}");

        let result = engine.search(grid, start, goal, |grid, step| {
            if failure.is_some() {
                return;
            }
            steps += 1;
            let mut screen = Screen::new(width, height);
            draw_step(grid, step, steps, &mut screen);
            match terminal.present(screen).and_then(|()| terminal.poll(delay)) {
                Ok(actions) => {
                    for action in actions {
                        match action {
                            Action::Cancel => cancel.cancel(),
                            Action::Quit => {
                                quit = true;
                                cancel.cancel();
                            }
                            Action::Resize { .. } => resized = true,
                            _ => {}
                        }
                    }
                }
                Err(e) => {
                    failure = Some(e);
                    cancel.cancel();
                }
            }
        });

        if let Some(e) = failure {
            return Err(e.into());
        }
        debug!("search drew {steps} steps");
        self.model.finish_search(result);
        if resized {
            self.terminal.invalidate()?;
        }
        Ok(quit)
    }
}

/// Size the board to the terminal and run the app.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let (width, height) = Terminal::size()?;
    let side = config
        .fit(width, height)
        .ok_or("terminal too small for a 2x2 grid")?;
    if side < config.rows {
        info!("grid shrunk from {} to {side} rows to fit the terminal", config.rows);
    }
    App::new(config, side)?.run()
}
