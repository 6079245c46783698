use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use std::io::{self, BufRead};

/// Drives a [`Flow`]: render, read one line, hand it over, repeat.
#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let stdin = io::stdin();
        self.run_with_reader(flow, stdin.lock())
    }

    /// Returns `Ok(())` when the flow finishes or the input ends.
    /// Lines that are not valid UTF-8 are decoded lossily; only stream failures end the loop.
    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            flow.render()?;

            buf.clear();
            let n = reader.read_until(b'\n', &mut buf).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            let input = line.trim_end_matches(['\n', '\r']);

            match flow.handle_input(input)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
