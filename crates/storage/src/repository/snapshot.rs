use sqlx::PgPool;

use crate::dto::player_snapshot::NewPlayerSnapshot;
use crate::error::{Result, StorageError};
use crate::models::PlayerSnapshot;

pub struct SnapshotRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SnapshotRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the baseline recorded under a display name.
    ///
    /// Usernames are not stable across renames, so two rows can briefly share
    /// a name; the most recently written one wins.
    pub async fn find_by_username(&self, username: &str) -> Result<PlayerSnapshot> {
        let snapshot = sqlx::query_as::<_, PlayerSnapshot>(
            r#"
            SELECT snapshot_id, player_id, username, play_count, pp_rank,
                   pp_raw, accuracy, total_seconds_played, captured_at
            FROM player_snapshots
            WHERE username = $1
            ORDER BY captured_at DESC
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(snapshot)
    }

    /// Find the baseline for a stable upstream player id
    pub async fn find_by_player_id(&self, player_id: &str) -> Result<PlayerSnapshot> {
        let snapshot = sqlx::query_as::<_, PlayerSnapshot>(
            r#"
            SELECT snapshot_id, player_id, username, play_count, pp_rank,
                   pp_raw, accuracy, total_seconds_played, captured_at
            FROM player_snapshots
            WHERE player_id = $1
            "#,
        )
        .bind(player_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(snapshot)
    }

    /// Insert a new baseline. Not an upsert: an existing row for the same
    /// `player_id` yields `StorageError::DuplicateKey`.
    pub async fn insert(&self, snapshot: &NewPlayerSnapshot) -> Result<PlayerSnapshot> {
        let inserted = sqlx::query_as::<_, PlayerSnapshot>(
            r#"
            INSERT INTO player_snapshots (player_id, username, play_count, pp_rank,
                                          pp_raw, accuracy, total_seconds_played)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING snapshot_id, player_id, username, play_count, pp_rank,
                      pp_raw, accuracy, total_seconds_played, captured_at
            "#,
        )
        .bind(&snapshot.player_id)
        .bind(&snapshot.username)
        .bind(snapshot.play_count)
        .bind(snapshot.pp_rank)
        .bind(snapshot.pp_raw)
        .bind(snapshot.accuracy)
        .bind(snapshot.total_seconds_played)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(
            "Recorded baseline for player {} ({})",
            inserted.player_id,
            inserted.username
        );

        Ok(inserted)
    }
}
