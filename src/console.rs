use std::io::{BufRead, Write};

use crate::board::layout::Setup;
use crate::board::render::render;
use crate::config::GameConfig;
use crate::game::{Game, GameResult, Turn};

pub const STALEMATE_MESSAGE: &str = "Stalemate!";
pub const BYE_MESSAGE: &str = "Bye!";

/// Line-oriented front end: reads names and commands, prints boards and messages.
pub struct Console<R, W> {
    cfg: GameConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(cfg: GameConfig, input: R, output: W) -> Self { Self { cfg, input, output } }

    pub fn into_output(self) -> W { self.output }

    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        // undecodable bytes become U+FFFD and fail parsing like any other bad command
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 { return Ok(None); }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    fn show_board(&mut self, game: &Game) -> anyhow::Result<()> {
        write!(self.output, "{}", render(game.board(), &self.cfg.ui))?;
        Ok(())
    }

    fn bye(&mut self, game: Option<&mut Game>) -> anyhow::Result<GameResult> {
        if let Some(game) = game { game.quit(); }
        writeln!(self.output, "{}", BYE_MESSAGE)?;
        Ok(GameResult::Quit)
    }

    /// Plays one game from `setup` until someone wins, a stalemate occurs or a player quits.
    /// End of input counts as quitting.
    pub fn run(&mut self, setup: Setup) -> anyhow::Result<GameResult> {
        writeln!(self.output, "{}", self.cfg.ui.caption)?;
        let first_prompt = self.cfg.ui.first_name_prompt.clone();
        let Some(white) = self.prompt(&first_prompt)? else { return self.bye(None) };
        let second_prompt = self.cfg.ui.second_name_prompt.clone();
        let Some(black) = self.prompt(&second_prompt)? else { return self.bye(None) };

        let mut game = Game::from_setup(&self.cfg, setup, white, black);
        self.show_board(&game)?;
        loop {
            if let Some(result) = game.check_stalemate() {
                writeln!(self.output, "{}", STALEMATE_MESSAGE)?;
                return Ok(result);
            }
            let text = self.cfg.ui.move_prompt_for(game.current_name());
            let Some(line) = self.prompt(&text)? else { return self.bye(Some(&mut game)) };
            match game.submit(&line)? {
                Turn::Quit => return self.bye(None),
                Turn::Rejected(reason) => writeln!(self.output, "{}", reason)?,
                Turn::Moved { result, .. } => {
                    self.show_board(&game)?;
                    if let Some(result @ GameResult::Win { winner, .. }) = result {
                        writeln!(self.output, "{} Wins!", self.cfg.ui.label(winner))?;
                        return Ok(result);
                    }
                }
            }
        }
    }
}
