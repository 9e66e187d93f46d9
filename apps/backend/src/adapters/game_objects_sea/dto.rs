//! DTOs for game_objects_sea adapter.

use crate::entities::game_objects::GameObjectType;

/// DTO for inserting a new game object.
#[derive(Debug, Clone)]
pub struct GameObjectCreate {
    pub game_object_type: GameObjectType,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub value: i32,
}

impl GameObjectCreate {
    pub fn new(game_object_type: GameObjectType, name: impl Into<String>) -> Self {
        Self {
            game_object_type,
            name: name.into(),
            description: None,
            image_url: None,
            value: 0,
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
        self.value = value;
        self
    }
}

/// Partial update of a game object row.
///
/// `None` leaves a column untouched. The nullable columns are three-state:
/// None = no change, Some(Some(v)) = set, Some(None) = clear.
#[derive(Debug, Clone, Default)]
pub struct GameObjectUpdate {
    pub game_object_type: Option<GameObjectType>,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub value: Option<i32>,
}

impl GameObjectUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, game_object_type: GameObjectType) -> Self {
        self.game_object_type = Some(game_object_type);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }
}
