use crate::constants::SAVE_VERSION_MAGIC;
use crate::game_state::GameState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    /// No save slot exists. A user-facing warning, not a failure: the caller
    /// decides the fallback (typically a new game).
    #[error("no save file found")]
    NotFound,
    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    BadMagic { expected: u64, found: u64 },
    #[error("save file failed checksum verification")]
    ChecksumMismatch,
    #[error("malformed save payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Manages the single named durable save slot.
///
/// File format:
/// - Version magic (8 bytes)
/// - Payload length (4 bytes)
/// - Game state as a JSON document (variable length)
/// - SHA256 checksum over the first three sections (32 bytes)
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Sets up the save slot at the platform's config directory.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "starfall").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// Uses an explicit slot location instead of the platform default.
    pub fn at_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    /// Serializes the full game state into the slot, overwriting any prior
    /// content. Synchronous: when this returns `Ok` the checkpoint is on
    /// disk.
    pub fn save(&self, state: &GameState) -> Result<(), SaveError> {
        let data = serde_json::to_vec(state)?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        tracing::info!(path = %self.save_path.display(), bytes = data_len, "game saved");
        Ok(())
    }

    /// Loads the game state from the slot with checksum verification.
    ///
    /// An absent slot is [`SaveError::NotFound`]; every other variant means a
    /// slot exists but cannot be trusted, and must not be silently replaced
    /// by a default state.
    pub fn load(&self) -> Result<GameState, SaveError> {
        let mut file = match fs::File::open(&self.save_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(SaveError::NotFound),
            Err(e) => return Err(e.into()),
        };

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != SAVE_VERSION_MAGIC {
            return Err(SaveError::BadMagic {
                expected: SAVE_VERSION_MAGIC,
                found: version,
            });
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::ChecksumMismatch);
        }

        let state = serde_json::from_slice(&data)?;
        tracing::info!(path = %self.save_path.display(), "game loaded");
        Ok(state)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::items::EquipSlot;

    fn populated_state() -> GameState {
        let mut state = GameState::new();
        state.wave = 7;
        state.gold = 42;
        state.score = 310;
        state.player_health = 85;
        for name in ["Laser Cannon", "Energy Shield", "Warp Drive"] {
            let item = catalog::find(name).unwrap().to_item();
            let slot = EquipSlot::for_category(item.category).unwrap();
            state.equipment.replace(slot, item);
        }
        state.inventory.push(catalog::find("Health Pack").unwrap().to_item());
        state.inventory.push(catalog::find("Ion Blaster").unwrap().to_item());
        state
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::at_path(dir.path().join("save.dat"));

        let original = populated_state();
        manager.save(&original).unwrap();
        assert!(manager.save_exists());

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_save_overwrites_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::at_path(dir.path().join("save.dat"));

        manager.save(&populated_state()).unwrap();
        let fresh = GameState::new();
        manager.save(&fresh).unwrap();

        assert_eq!(manager.load().unwrap(), fresh);
    }

    #[test]
    fn test_load_without_save_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let manager = SaveManager::at_path(dir.path().join("save.dat"));

        assert!(!manager.save_exists());
        assert!(matches!(manager.load(), Err(SaveError::NotFound)));
    }

    #[test]
    fn test_corrupted_payload_fails_checksum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.dat");
        let manager = SaveManager::at_path(path.clone());
        manager.save(&populated_state()).unwrap();

        // Flip one payload byte.
        let mut bytes = fs::read(&path).unwrap();
        bytes[20] ^= 0xFF;
        fs::write(&path, bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::ChecksumMismatch)));
    }

    #[test]
    fn test_wrong_magic_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.dat");
        let manager = SaveManager::at_path(path.clone());
        manager.save(&GameState::new()).unwrap();

        let mut bytes = fs::read(&path).unwrap();
        bytes[0] ^= 0xFF;
        fs::write(&path, bytes).unwrap();

        assert!(matches!(manager.load(), Err(SaveError::BadMagic { .. })));
    }

    #[test]
    fn test_payload_is_a_json_document_with_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.dat");
        SaveManager::at_path(path.clone()).save(&populated_state()).unwrap();

        let bytes = fs::read(&path).unwrap();
        let payload = &bytes[12..bytes.len() - 32];
        let doc: serde_json::Value = serde_json::from_slice(payload).unwrap();
        assert_eq!(doc["wave"], 7);
        assert_eq!(doc["gold"], 42);
        assert_eq!(doc["equipment"]["weapon"]["name"], "Laser Cannon");
    }
}
