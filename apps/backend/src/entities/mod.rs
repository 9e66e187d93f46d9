pub mod game_objects;

pub use game_objects::Entity as GameObjects;
pub use game_objects::GameObjectType;
pub use game_objects::Model as GameObjectRow;
