mod player_snapshot;

pub use player_snapshot::PlayerSnapshot;
