use crate::core::types::{Grades, StudentName, format_grades};
use std::fmt;

pub trait BaseEntity {
    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub grades: Vec<f64>,
}

impl Student {
    pub fn new(name: impl Into<String>, grades: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            grades,
        }
    }

    /// Builds a record from already validated input.
    pub fn from_parts(name: StudentName, grades: Grades) -> Self {
        Self::new(name.0, grades.into_inner())
    }

    /// Arithmetic mean of the grades, `0.0` for an empty list.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.grades.iter().sum();
        sum / self.grades.len() as f64
    }
}

impl BaseEntity for Student {
    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {:.2}",
            self.name,
            format_grades(&self.grades),
            self.average()
        )
    }
}
