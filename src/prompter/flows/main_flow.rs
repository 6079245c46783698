use std::io::{self, Write};

use crate::command::command_parser::{CommandParser, ParsedCommand};
use crate::command::commands::{AddCommand, Command, FilterCommand, ListCommand};
use crate::core::context::AppContext;
use crate::core::types::{MenuCommand, StudentName};
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl, MainState};
use crate::ui::chrome::UiChrome;

const COMMAND_PROMPT: &str = "Enter command (add/list/filter/exit): ";
const NAME_PROMPT: &str = "Enter the student's full name: ";
const GRADES_PROMPT: &str = "Enter grades separated by spaces (e.g. 5 4 5 3): ";
const THRESHOLD_PROMPT: &str = "Enter the average grade threshold (e.g. 4): ";

/// The interactive command loop. Output goes to `out`; the register lives in `ctx`.
pub struct MainFlow<'a, W: Write> {
    ctx: &'a mut AppContext,
    out: W,
    state: MainState,
    command_parser: CommandParser,
    chrome: UiChrome,
    logger: Logger,
}

impl<'a> MainFlow<'a, io::Stdout> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        Self::with_writer(ctx, io::stdout())
    }
}

impl<'a, W: Write> MainFlow<'a, W> {
    pub fn with_writer(ctx: &'a mut AppContext, out: W) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            out,
            state: MainState::AwaitingCommand,
            command_parser: CommandParser::new(),
            chrome: UiChrome::new(),
            logger,
        }
    }

    pub fn state(&self) -> &MainState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<W: Write> Flow for MainFlow<'_, W> {
    fn render(&mut self) -> Result<()> {
        self.print_startup()?;
        let prompt = match self.state {
            MainState::AwaitingCommand => {
                writeln!(self.out)?;
                COMMAND_PROMPT
            }
            MainState::AwaitingName => NAME_PROMPT,
            MainState::AwaitingGrades { .. } => GRADES_PROMPT,
            MainState::AwaitingThreshold => THRESHOLD_PROMPT,
        };
        self.chrome.write_prompt(&mut self.out, prompt)?;
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        // Every path that does not set a new state lands back at the command prompt.
        match std::mem::replace(&mut self.state, MainState::AwaitingCommand) {
            MainState::AwaitingCommand => self.dispatch(input),
            MainState::AwaitingName => match StudentName::try_from_str(input) {
                Ok(name) => {
                    self.state = MainState::AwaitingGrades { name };
                    Ok(FlowCtrl::Continue)
                }
                Err(err) => self.report(err),
            },
            MainState::AwaitingGrades { name } => self.run(AddCommand::new(name, input)),
            MainState::AwaitingThreshold => self.run(FilterCommand::new(input)),
        }
    }
}

impl<W: Write> MainFlow<'_, W> {
    fn print_startup(&mut self) -> Result<()> {
        if self.ctx.startup_displayed {
            return Ok(());
        }
        self.chrome.write_banner(&mut self.out)?;
        self.chrome.write_help(&mut self.out)?;
        self.ctx.startup_displayed = true;
        self.log_session_start();
        Ok(())
    }

    fn log_session_start(&self) {
        self.logger.info(
            format!(
                "Session started. Config file: {}",
                self.ctx.config.path().display()
            ),
            LogTarget::FileOnly,
        );
        for (key, _, value) in self.ctx.config.rows().iter() {
            self.logger
                .info(format!("Config {key} = {value}"), LogTarget::FileOnly);
        }
    }

    fn dispatch(&mut self, input: &str) -> Result<FlowCtrl> {
        let cmd = match self.command_parser.parse(input).into_result() {
            Ok(cmd) => cmd,
            Err(err) => return self.report(err),
        };
        self.logger
            .info(format!("Command run: {cmd}"), LogTarget::FileOnly);

        match cmd {
            MenuCommand::Add => {
                self.state = MainState::AwaitingName;
                Ok(FlowCtrl::Continue)
            }
            MenuCommand::List => self.run(ListCommand),
            MenuCommand::Filter => {
                self.state = MainState::AwaitingThreshold;
                Ok(FlowCtrl::Continue)
            }
            MenuCommand::Exit => {
                writeln!(self.out, "Goodbye!")?;
                self.out.flush()?;
                self.logger.info("Session finished.", LogTarget::FileOnly);
                Ok(FlowCtrl::Finish)
            }
        }
    }

    fn run<C: Command>(&mut self, cmd: C) -> Result<FlowCtrl> {
        match cmd.perform(self.ctx, &mut self.out) {
            Ok(()) => Ok(FlowCtrl::Continue),
            Err(err) if err.is_recoverable() => self.report(err),
            Err(err) => Err(err),
        }
    }

    /// Shows a user-facing error and keeps the loop alive.
    fn report(&mut self, err: Error) -> Result<FlowCtrl> {
        if err.is_grade_error() {
            writeln!(self.out, "Error: {err}")?;
        } else {
            writeln!(self.out, "{err}")?;
        }
        self.logger
            .warn(format!("Rejected input. {err}"), LogTarget::FileOnly);
        Ok(FlowCtrl::Continue)
    }
}
