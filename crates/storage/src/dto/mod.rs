pub mod player_snapshot;
