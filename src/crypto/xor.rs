use super::{CardCipherText, CipherError, CommutativeCipher, KeyFragment};

/// Побайтовый XOR с ключом.
///
/// Коммутативен и сам себе обратен, но НЕ стоек: два XOR-слоя с одной
/// картой раскрывают ключи. Только для демонстрации протокола и тестов.
#[derive(Clone, Copy, Debug, Default)]
pub struct XorCipher;

impl XorCipher {
    fn apply(block: &CardCipherText, key: &KeyFragment) -> CardCipherText {
        let mut out = [0u8; 32];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = block.0[i] ^ key.0[i];
        }
        CardCipherText(out)
    }
}

impl CommutativeCipher for XorCipher {
    fn encrypt(&self, block: &CardCipherText, key: &KeyFragment) -> Result<CardCipherText, CipherError> {
        Ok(Self::apply(block, key))
    }

    fn decrypt(&self, block: &CardCipherText, key: &KeyFragment) -> Result<CardCipherText, CipherError> {
        Ok(Self::apply(block, key))
    }

    fn key_from_seed(&self, seed: [u8; 32]) -> KeyFragment {
        KeyFragment(seed)
    }
}
