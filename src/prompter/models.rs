use crate::core::types::StudentName;
use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainState {
    AwaitingCommand,                      // read a menu command
    AwaitingName,                         // `add`: read the full name
    AwaitingGrades { name: StudentName }, // `add`: read the grades line
    AwaitingThreshold,                    // `filter`: read the threshold
}
