// src/score.rs

use crate::error::PersistenceError;
use crate::model::ScoreRecord;
use crate::timer::format_hms;
use std::path::{Path, PathBuf};

/// Mejor puntuación y su tiempo de horneado, guardados en JSON.
pub struct ScoreStore {
    path: PathBuf,
    record: ScoreRecord,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            record: ScoreRecord::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> ScoreRecord {
        self.record
    }

    /// Nunca falla: si no hay fichero lo crea a cero, si está roto empieza a cero.
    pub fn load(&mut self) -> ScoreRecord {
        self.record = if self.path.exists() {
            match self.read() {
                Ok(record) => {
                    log::info!(
                        "Loaded highest score: {} with baking time: {}",
                        record.best_score,
                        format_hms(record.best_elapsed_secs)
                    );
                    record
                }
                Err(e) => {
                    log::warn!("Error loading highest score: {e}");
                    ScoreRecord::default()
                }
            }
        } else {
            log::info!("Score file not found. Creating a new one.");
            let fresh = ScoreRecord::default();
            if let Err(e) = self.write(&fresh) {
                log::warn!("{e}");
            }
            fresh
        };
        self.record
    }

    /// Solo guarda si `candidate` supera estrictamente el récord. Devuelve si hubo cambio.
    pub fn save(&mut self, candidate: u32, elapsed_secs: u64) -> bool {
        if candidate <= self.record.best_score {
            log::debug!(
                "Score {candidate} does not beat {}, keeping {}",
                self.record.best_score,
                format_hms(self.record.best_elapsed_secs)
            );
            return false;
        }

        self.record = ScoreRecord {
            best_score: candidate,
            best_elapsed_secs: elapsed_secs,
        };
        match self.write(&self.record) {
            Ok(()) => log::info!(
                "New highest score {candidate} saved with baking time: {}",
                format_hms(elapsed_secs)
            ),
            Err(e) => log::error!("Error saving highest score: {e}"),
        }
        true
    }

    /// Texto del récord tal como se muestra en pantalla.
    pub fn label(&self) -> String {
        highest_score_label(&self.record)
    }

    fn read(&self) -> Result<ScoreRecord, PersistenceError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| PersistenceError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PersistenceError::Parse {
            path: self.path.display().to_string(),
            source,
        })
    }

    // Escribe en un temporal y renombra: puntuación y tiempo cambian juntos.
    fn write(&self, record: &ScoreRecord) -> Result<(), PersistenceError> {
        let write_err = |source: std::io::Error| PersistenceError::Write {
            path: self.path.display().to_string(),
            source,
        };
        let json = serde_json::to_string_pretty(record).map_err(|e| write_err(e.into()))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(write_err)?;
        std::fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

pub fn highest_score_label(record: &ScoreRecord) -> String {
    if record.best_score > 0 {
        format!(
            "{}, after roasting the brain for {}",
            record.best_score,
            format_hms(record.best_elapsed_secs)
        )
    } else {
        "No brain had been baked".to_string()
    }
}
