pub mod game_objects;
