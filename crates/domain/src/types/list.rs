//! Task list models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named list of tasks owned by (or shared with) the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ListColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ListIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub show_index_numbers: bool,
    pub sort_type: SortType,
    pub sort_direction: SortDirection,
    pub date_created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListIcon {
    Backpack,
    Book,
    Bookmark,
    Brush,
    Cake,
    Call,
    Car,
    Celebration,
    Clipboard,
    Flight,
    FoodBeverage,
    Football,
    Forest,
    Group,
    Handyman,
    HomeRepairService,
    LightBulb,
    MedicalServices,
    MusicNote,
    Person,
    Pets,
    Piano,
    Restaurant,
    Scissors,
    ShoppingCart,
    Smile,
    Work,
}

/// Server-side ordering applied to a list's tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortType {
    #[default]
    Ordinal,
    Label,
    DateCreated,
    Upcoming,
    Starred,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A user with access to a shared list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMember {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub is_owner: bool,
}
