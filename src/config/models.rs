use crate::core::types::{Bool, Sort};
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrderConfigItem {
    pub value: Sort,
    pub description: String,
}

impl Default for ListOrderConfigItem {
    fn default() -> Self {
        Self {
            value: Sort::default(),
            description: "Order of students in list and filter output.".into(),
        }
    }
}

impl ConfigItem<Sort> for ListOrderConfigItem {
    fn get_value(&self) -> &Sort {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Bool,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Bool(false),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
