//! RngSeed — доменный seed игрока для ключей и перемешивания.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || table_id || hand_no || index)
//!   - выводить seed для каждого ключа колоды
//!   - создавать DeterministicRng из seed

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::TableId;

/// 32-байтовый seed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Доменное хэш-расширение с включением контекста раздачи.
    pub fn derive(&self, table_id: TableId, hand_no: u64, index: u64) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(b"MENTAL_POKER_SEED_V1");
        hasher.update(self.bytes);
        hasher.update(table_id.to_le_bytes());
        hasher.update(hand_no.to_le_bytes());
        hasher.update(index.to_le_bytes());

        let hash = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Seed для ключа слота колоды (0 — общий ключ перемешивания).
    pub fn key_seed(&self, slot: usize) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(b"MENTAL_POKER_KEY_V1");
        hasher.update(self.bytes);
        hasher.update((slot as u64).to_le_bytes());

        let hash = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);
        out
    }

    /// Создать DeterministicRng из seed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn to_rng(&self) -> crate::infra::rng::DeterministicRng {
        crate::infra::rng::DeterministicRng::from_seed(self.bytes)
    }
}
