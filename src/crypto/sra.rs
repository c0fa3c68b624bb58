//! SRA (Pohlig–Hellman): `E_e(m) = m^e mod p`, `D_e(c) = c^d mod p`,
//! где `d = e^-1 mod (p - 1)`.
//!
//! Возведение в степень коммутативно по ключам, поэтому слои можно снимать
//! в любом порядке. Модуль — простое Мерсенна 2^61 − 1, вся арифметика в u128.

use super::{CardCipherText, CipherError, CommutativeCipher, KeyFragment};

/// 2^61 − 1.
pub const SRA_PRIME: u64 = (1u64 << 61) - 1;

const ORDER: u64 = SRA_PRIME - 1;

#[derive(Clone, Copy, Debug, Default)]
pub struct SraCipher;

impl SraCipher {
    /// Экспонента ключа, если она обратима по модулю `p − 1`.
    fn exponent(key: &KeyFragment) -> Result<u64, CipherError> {
        let e = key.as_u64().ok_or(CipherError::InvalidKey)?;
        if e <= 1 || e >= ORDER || gcd(e, ORDER) != 1 {
            return Err(CipherError::InvalidKey);
        }
        Ok(e)
    }

    fn residue(block: &CardCipherText) -> Result<u64, CipherError> {
        match block.as_u64() {
            Some(v) if v > 0 && v < SRA_PRIME => Ok(v),
            _ => Err(CipherError::BlockOutOfRange),
        }
    }
}

impl CommutativeCipher for SraCipher {
    fn encrypt(&self, block: &CardCipherText, key: &KeyFragment) -> Result<CardCipherText, CipherError> {
        let e = Self::exponent(key)?;
        let m = Self::residue(block)?;
        Ok(CardCipherText::from_u64(mod_pow(m, e, SRA_PRIME)))
    }

    fn decrypt(&self, block: &CardCipherText, key: &KeyFragment) -> Result<CardCipherText, CipherError> {
        let e = Self::exponent(key)?;
        let c = Self::residue(block)?;
        let d = mod_inverse(e, ORDER).ok_or(CipherError::InvalidKey)?;
        Ok(CardCipherText::from_u64(mod_pow(c, d, SRA_PRIME)))
    }

    fn key_from_seed(&self, seed: [u8; 32]) -> KeyFragment {
        let mut head = [0u8; 8];
        head.copy_from_slice(&seed[..8]);
        // Нечётный кандидат в [3, ORDER), дальше шагаем до взаимно простого с p − 1.
        let mut e = (u64::from_le_bytes(head) % (ORDER - 3)) | 1;
        if e < 3 {
            e = 3;
        }
        while gcd(e, ORDER) != 1 {
            e += 2;
            if e >= ORDER {
                e = 3;
            }
        }
        KeyFragment::from_u64(e)
    }
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn mod_pow(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Обратный элемент по модулю (расширенный Евклид).
fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m as i128) as u64)
}
