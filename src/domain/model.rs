use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Renders a field of an upstream object the way it reads inside a URL or
/// a group name. `None` is an absent key.
pub fn field_text(field: Option<&Value>) -> String {
    match field {
        None => "undefined".to_string(),
        Some(value) => value_text(value),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// Integral floats print without a fractional part, so `1.0` and `1` agree.
fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// A submenu entry. Fields are kept as raw JSON; nothing about their shape
/// is checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubMenu {
    pub id: Option<Value>,
    pub name: Option<Value>,
}

impl SubMenu {
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: value.get("id").cloned(),
            name: value.get("name").cloned(),
        }
    }

    pub fn id_text(&self) -> String {
        field_text(self.id.as_ref())
    }

    pub fn name_text(&self) -> String {
        field_text(self.name.as_ref())
    }
}

/// A menu entry read leniently from the menus list. Only a JSON array under
/// `subMenus` counts as submenus; anything else means the menu has none.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Menu {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub sub_menus: Vec<SubMenu>,
}

impl Menu {
    pub fn from_value(value: &Value) -> Self {
        let sub_menus = match value.get("subMenus") {
            Some(Value::Array(items)) => items.iter().map(SubMenu::from_value).collect(),
            _ => Vec::new(),
        };
        Self {
            id: value.get("id").cloned(),
            name: value.get("name").cloned(),
            sub_menus,
        }
    }

    /// Reads every entry of a menus list. Fails only when the body is not a
    /// JSON array.
    pub fn list_from_value(value: Value) -> serde_json::Result<Vec<Menu>> {
        let entries: Vec<Value> = serde_json::from_value(value)?;
        Ok(entries.iter().map(Menu::from_value).collect())
    }

    pub fn id_text(&self) -> String {
        field_text(self.id.as_ref())
    }

    pub fn name_text(&self) -> String {
        field_text(self.name.as_ref())
    }

    pub fn sub_menus(&self) -> &[SubMenu] {
        &self.sub_menus
    }

    pub fn has_sub_menus(&self) -> bool {
        !self.sub_menus.is_empty()
    }
}

/// One entry of `nav_data.json`. `items` is whatever the card endpoint returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardGroup {
    pub name: String,
    pub items: serde_json::Value,
}

pub type NavData = Vec<CardGroup>;

/// A single planned card fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTask {
    pub menu_name: String,
    pub sub_menu_name: Option<String>,
    pub url: String,
}

impl CardTask {
    pub fn group_name(&self) -> String {
        match &self.sub_menu_name {
            Some(sub) => format!("{} - {}", self.menu_name, sub),
            None => self.menu_name.clone(),
        }
    }

    pub fn into_group(self, items: serde_json::Value) -> CardGroup {
        CardGroup {
            name: self.group_name(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedGroup {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default)]
pub struct CardsOutcome {
    pub groups: NavData,
    pub failures: Vec<FailedGroup>,
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub menus_path: String,
    pub nav_data_path: String,
    pub menu_count: usize,
    pub groups_written: usize,
    pub failures: Vec<FailedGroup>,
}

impl SyncReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
