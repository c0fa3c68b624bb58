//! Порт коммутативного шифрования.
//!
//! Протокол перемешивания не знает, каким шифром пользуются игроки.
//! От шифра требуется только:
//!   - `decrypt(encrypt(m, k), k) == m`;
//!   - порядок снятия слоёв не важен:
//!     `decrypt(decrypt(encrypt(encrypt(m, ka), kb), kb), ka) == m`.
//!
//! Карты и ключи на столе хранятся как непрозрачные 32-байтовые блоки.

pub mod sra;
pub mod xor;

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;

pub use sra::SraCipher;
pub use xor::XorCipher;

/// Ошибки шифра.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherError {
    #[error("Ключ не подходит для этого шифра")]
    InvalidKey,

    #[error("Блок вне допустимого диапазона шифра")]
    BlockOutOfRange,
}

/// Зашифрованная (или открытая) карта — 32 байта.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardCipherText(pub [u8; 32]);

/// Фрагмент ключа одного игрока для одной карты — 32 байта.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct KeyFragment(pub [u8; 32]);

/// Карта кодируется числом `code + 2` в первых 8 байтах (LE),
/// чтобы открытый текст никогда не был 0 или 1.
const CARD_OFFSET: u64 = 2;

impl CardCipherText {
    pub const ZERO: CardCipherText = CardCipherText([0u8; 32]);

    /// Открытый текст для карты.
    pub fn from_card(card: Card) -> Self {
        Self::from_u64(card.code() as u64 + CARD_OFFSET)
    }

    /// Обратное к `from_card`. `None`, если блок не является открытой картой.
    pub fn to_card(&self) -> Option<Card> {
        let value = self.as_u64()?;
        let code = value.checked_sub(CARD_OFFSET)?;
        u8::try_from(code).ok().and_then(Card::from_code)
    }

    pub(crate) fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        CardCipherText(bytes)
    }

    /// Число в первых 8 байтах, если остальные байты нулевые.
    pub(crate) fn as_u64(&self) -> Option<u64> {
        le_u64(&self.0)
    }
}

impl KeyFragment {
    pub(crate) fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        KeyFragment(bytes)
    }

    pub(crate) fn as_u64(&self) -> Option<u64> {
        le_u64(&self.0)
    }
}

fn le_u64(bytes: &[u8; 32]) -> Option<u64> {
    if bytes[8..].iter().any(|b| *b != 0) {
        return None;
    }
    let mut head = [0u8; 8];
    head.copy_from_slice(&bytes[..8]);
    Some(u64::from_le_bytes(head))
}

impl fmt::Display for KeyFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "…")
    }
}

/// Коммутативный шифр, которым игроки шифруют колоду.
pub trait CommutativeCipher {
    fn encrypt(&self, block: &CardCipherText, key: &KeyFragment) -> Result<CardCipherText, CipherError>;

    fn decrypt(&self, block: &CardCipherText, key: &KeyFragment) -> Result<CardCipherText, CipherError>;

    /// Детерминированно построить валидный ключ из 32 байт энтропии.
    fn key_from_seed(&self, seed: [u8; 32]) -> KeyFragment;
}

/// Снять все слои (в любом порядке) и раскодировать карту.
///
/// `Ok(None)` — ключи подошли шифру, но в результате не карта
/// (неверный фрагмент или подмена колоды).
pub fn reveal_card<C: CommutativeCipher + ?Sized>(
    cipher: &C,
    block: &CardCipherText,
    keys: &[&KeyFragment],
) -> Result<Option<Card>, CipherError> {
    let mut current = *block;
    for key in keys {
        current = cipher.decrypt(&current, key)?;
    }
    Ok(current.to_card())
}
