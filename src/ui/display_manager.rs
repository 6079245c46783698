use crate::core::models::Student;
use crate::core::types::Threshold;
use crate::ui::display_data::DisplayDataBuilder;
use crate::ui::table_printer::TablePrinter;
use std::io::{self, Write};

const STUDENT_HEADERS: [&str; 3] = ["FULL NAME", "GRADES", "AVERAGE"];

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_student_list<W: Write + ?Sized>(
        &self,
        students: &[&Student],
        out: &mut W,
    ) -> io::Result<()> {
        let rows = self.data.student_rows(students);
        self.printer.render_table(
            "Student list",
            &STUDENT_HEADERS,
            &rows,
            "The student list is empty.",
            out,
        )
    }

    pub fn render_filtered<W: Write + ?Sized>(
        &self,
        threshold: Threshold,
        students: &[&Student],
        out: &mut W,
    ) -> io::Result<()> {
        let rows = self.data.student_rows(students);
        self.printer.render_table(
            &format!("Students with an average grade below {threshold}"),
            &STUDENT_HEADERS,
            &rows,
            &format!("No students with an average grade below {threshold}"),
            out,
        )
    }
}
