use crate::core::models::Student;
use crate::core::types::format_grades;

#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self
    }

    /// One `[name, grades, average]` row per student, in the given order.
    pub fn student_rows(&self, students: &[&Student]) -> Vec<Vec<String>> {
        students
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    format_grades(&s.grades),
                    format!("{:.2}", s.average()),
                ]
            })
            .collect()
    }
}
