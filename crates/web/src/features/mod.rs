pub mod beatmaps;
pub mod health;
pub mod players;
