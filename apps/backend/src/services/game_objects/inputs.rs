//! Request payloads accepted by the game object service.

use serde::{Deserialize, Serialize};

use crate::adapters::game_objects_sea::{GameObjectCreate, GameObjectUpdate};
use crate::entities::game_objects::GameObjectType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameObjectInput {
    pub game_object_type: GameObjectType,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub value: Option<i32>,
}

impl CreateGameObjectInput {
    pub fn new(game_object_type: GameObjectType, name: impl Into<String>) -> Self {
        Self {
            game_object_type,
            name: name.into(),
            description: None,
            image_url: None,
            value: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }
}

/// Partial update; absent fields keep their stored value.
///
/// `description` and `imageUrl` distinguish "absent" from an explicit `null`,
/// which clears the column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameObjectInput {
    #[serde(default)]
    pub game_object_type: Option<GameObjectType>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(default)]
    pub value: Option<i32>,
}

impl From<CreateGameObjectInput> for GameObjectCreate {
    fn from(input: CreateGameObjectInput) -> Self {
        Self {
            game_object_type: input.game_object_type,
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            value: input.value.unwrap_or(0),
        }
    }
}

impl From<UpdateGameObjectInput> for GameObjectUpdate {
    fn from(input: UpdateGameObjectInput) -> Self {
        Self {
            game_object_type: input.game_object_type,
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            value: input.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_input_reads_camel_case_and_ignores_unknown_fields() {
        let input: CreateGameObjectInput = serde_json::from_str(
            r#"{"gameObjectType":"WEAPON","name":"Sword","imageUrl":"https://x/y.png","rarity":"epic"}"#,
        )
        .unwrap();

        assert_eq!(input.game_object_type, GameObjectType::Weapon);
        assert_eq!(input.name, "Sword");
        assert_eq!(input.image_url.as_deref(), Some("https://x/y.png"));
        assert_eq!(input.value, None);
    }

    #[test]
    fn update_input_separates_absent_from_null() {
        let absent: UpdateGameObjectInput = serde_json::from_str(r#"{"name":"Axe"}"#).unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateGameObjectInput =
            serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateGameObjectInput =
            serde_json::from_str(r#"{"description":"sharp"}"#).unwrap();
        assert_eq!(set.description, Some(Some("sharp".to_string())));
    }

    #[test]
    fn create_input_defaults_value_to_zero() {
        let dto = GameObjectCreate::from(CreateGameObjectInput::new(GameObjectType::Armor, "Helm"));
        assert_eq!(dto.value, 0);
        assert_eq!(dto.description, None);
    }
}
