use gradebook::command::commands::{AddCommand, Command};
use gradebook::config::Config;
use gradebook::core::context::AppContext;
use gradebook::core::models::Student;
use gradebook::core::types::{Sort, StudentName};
use gradebook::errors::Error;

use crate::common::make_temp_dir;

fn build_context() -> AppContext {
    let dir = make_temp_dir("store");
    let config_path = dir.join("gradebook.json");
    AppContext::with_config(Config::defaults_at(&config_path), &dir.join("logs"))
}

fn add(ctx: &mut AppContext, name: &str, grades: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    let name = StudentName::try_from_str(name)?;
    AddCommand::new(name, grades).perform(ctx, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn insert_then_list_round_trip() {
    let mut ctx = build_context();
    let msg = add(&mut ctx, "Ivan Petrov", "5 4 5 3").unwrap();
    assert_eq!(msg.trim_end(), "Student 'Ivan Petrov' added. Average grade: 4.25");

    let all = ctx.students.values(Sort::NameAsc);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].grades, vec![5.0, 4.0, 5.0, 3.0]);
    assert_eq!(all[0].average(), 4.25);
}

#[test]
fn re_adding_a_name_replaces_grades() {
    let mut ctx = build_context();
    add(&mut ctx, "Anna", "2 3").unwrap();
    add(&mut ctx, "Anna", "5 5").unwrap();

    assert_eq!(ctx.students.len(), 1);
    assert_eq!(
        ctx.students.get("Anna"),
        Some(&Student::new("Anna", vec![5.0, 5.0]))
    );
}

#[test]
fn blank_name_never_reaches_the_store() {
    let mut ctx = build_context();
    assert!(matches!(add(&mut ctx, "   ", "5"), Err(Error::EmptyName)));
    assert!(ctx.students.is_empty());
}

#[test]
fn filter_scenario_three_and_four_and_a_half() {
    let mut ctx = build_context();
    add(&mut ctx, "Three", "3").unwrap();
    add(&mut ctx, "FourHalf", "4 5").unwrap();

    let below: Vec<&str> = ctx
        .students
        .filter_by_average(4.0, Sort::NameAsc)
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(below, vec!["Three"]);
}
