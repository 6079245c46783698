use std::io::Write;

use crate::core::context::AppContext;
use crate::core::models::Student;
use crate::core::types::{Grades, StudentName, Threshold};
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::ui::display_manager::DisplayManager;

/// A fully-collected menu action. Validation errors come back as recoverable `Error`s
/// and leave the register untouched.
pub trait Command {
    fn perform<W: Write>(&self, ctx: &mut AppContext, out: &mut W) -> Result<()>;
}

pub struct AddCommand<'a> {
    name: StudentName,
    grades_line: &'a str,
}

impl<'a> AddCommand<'a> {
    pub fn new(name: StudentName, grades_line: &'a str) -> Self {
        Self { name, grades_line }
    }
}

impl Command for AddCommand<'_> {
    fn perform<W: Write>(&self, ctx: &mut AppContext, out: &mut W) -> Result<()> {
        let grades = Grades::try_from_str(self.grades_line)?;
        let stored = ctx
            .students
            .insert(Student::from_parts(self.name.clone(), grades));
        writeln!(
            out,
            "Student '{}' added. Average grade: {:.2}",
            stored.name,
            stored.average()
        )?;
        ctx.logger
            .info(format!("Stored student: {stored}"), LogTarget::FileOnly);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ListCommand;

impl Command for ListCommand {
    fn perform<W: Write>(&self, ctx: &mut AppContext, out: &mut W) -> Result<()> {
        let students = ctx.students.values(ctx.config.list_order());
        DisplayManager::new().render_student_list(&students, out)?;
        Ok(())
    }
}

pub struct FilterCommand<'a> {
    threshold_line: &'a str,
}

impl<'a> FilterCommand<'a> {
    pub fn new(threshold_line: &'a str) -> Self {
        Self { threshold_line }
    }
}

impl Command for FilterCommand<'_> {
    fn perform<W: Write>(&self, ctx: &mut AppContext, out: &mut W) -> Result<()> {
        let threshold = Threshold::try_from_str(self.threshold_line)?;
        let matches = ctx
            .students
            .filter_by_average(threshold.0, ctx.config.list_order());
        DisplayManager::new().render_filtered(threshold, &matches, out)?;
        ctx.logger.info(
            format!(
                "Filter below {threshold} matched {} of {} student(s).",
                matches.len(),
                ctx.students.len()
            ),
            LogTarget::FileOnly,
        );
        Ok(())
    }
}
