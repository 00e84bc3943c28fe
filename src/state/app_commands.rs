//! Command execution and input handling.

use crossterm::event::KeyEvent;

use super::App;
use crate::commands::{AppCommand, map_key};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        self.execute_command(map_key(key_event));
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        let rows = self.data.transaction_count();
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::MoveUp => self.nav.move_up(rows),
            AppCommand::MoveDown => self.nav.move_down(rows),
            AppCommand::JumpTop => self.nav.select_first(rows),
            AppCommand::JumpBottom => self.nav.select_last(rows),
            AppCommand::Noop => {}
        }
    }
}
