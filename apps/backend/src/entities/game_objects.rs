use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Pool a game object is drawn from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "game_object_type")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameObjectType {
    #[sea_orm(string_value = "WEAPON")]
    Weapon,
    #[sea_orm(string_value = "ARMOR")]
    Armor,
    #[sea_orm(string_value = "CONSUMABLE")]
    Consumable,
    #[sea_orm(string_value = "TREASURE")]
    Treasure,
    #[sea_orm(string_value = "CREATURE")]
    Creature,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_objects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_name = "game_object_type")]
    pub game_object_type: GameObjectType,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_name = "image_url")]
    pub image_url: Option<String>,
    pub value: i32,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl std::str::FromStr for GameObjectType {
    type Err = String;

    /// Case-insensitive parse of the stored tag, e.g. `WEAPON` or `weapon`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WEAPON" => Ok(Self::Weapon),
            "ARMOR" => Ok(Self::Armor),
            "CONSUMABLE" => Ok(Self::Consumable),
            "TREASURE" => Ok(Self::Treasure),
            "CREATURE" => Ok(Self::Creature),
            other => Err(format!("unknown game object type: {other}")),
        }
    }
}
