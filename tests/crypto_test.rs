// tests/crypto_test.rs
//
// Порт коммутативного шифра: XOR и SRA.
// Главное свойство — слои снимаются в любом порядке.

use proptest::prelude::*;

use mental_poker::crypto::{
    reveal_card, CardCipherText, CipherError, CommutativeCipher, KeyFragment, SraCipher, XorCipher,
};
use mental_poker::domain::card::Card;

fn two_layers<C: CommutativeCipher>(cipher: &C, card: Card, ka: &KeyFragment, kb: &KeyFragment) {
    let plain = CardCipherText::from_card(card);
    let once = cipher.encrypt(&plain, ka).unwrap();
    let twice = cipher.encrypt(&once, kb).unwrap();

    assert_eq!(cipher.decrypt(&once, ka).unwrap(), plain);
    assert_eq!(reveal_card(cipher, &twice, &[ka, kb]).unwrap(), Some(card));
    assert_eq!(reveal_card(cipher, &twice, &[kb, ka]).unwrap(), Some(card));
}

// ===== ТЕСТ 1: открытый текст карты =====
#[test]
fn card_plaintext_roundtrip() {
    for code in 0..52u8 {
        let card = Card::from_code(code).unwrap();
        assert_eq!(CardCipherText::from_card(card).to_card(), Some(card));
    }
    assert_eq!(CardCipherText::ZERO.to_card(), None);
    assert_eq!(CardCipherText([0xAB; 32]).to_card(), None);
}

// ===== ТЕСТ 2: XOR коммутативен =====
#[test]
fn xor_layers_commute() {
    let cipher = XorCipher;
    let ka = cipher.key_from_seed([0x11; 32]);
    let kb = cipher.key_from_seed([0x5A; 32]);
    two_layers(&cipher, "Qh".parse().unwrap(), &ka, &kb);
}

// ===== ТЕСТ 3: SRA коммутативен =====
#[test]
fn sra_layers_commute() {
    let cipher = SraCipher;
    let ka = cipher.key_from_seed([3; 32]);
    let kb = cipher.key_from_seed([200; 32]);
    assert_ne!(ka, kb);
    two_layers(&cipher, "2s".parse().unwrap(), &ka, &kb);
    two_layers(&cipher, "Ac".parse().unwrap(), &ka, &kb);
}

// ===== ТЕСТ 4: SRA отвергает негодные ключи и блоки =====
#[test]
fn sra_rejects_invalid_input() {
    let cipher = SraCipher;
    let key = cipher.key_from_seed([9; 32]);

    assert_eq!(
        cipher.encrypt(&CardCipherText::ZERO, &key),
        Err(CipherError::BlockOutOfRange)
    );
    assert_eq!(
        cipher.encrypt(&CardCipherText::from_card(Card::from_code(0).unwrap()), &KeyFragment([0; 32])),
        Err(CipherError::InvalidKey)
    );
    assert_eq!(
        cipher.decrypt(&CardCipherText([1; 32]), &key),
        Err(CipherError::BlockOutOfRange)
    );
}

// ===== ТЕСТ 5: одним ключом двойной слой не снять =====
#[test]
fn one_layer_is_not_enough() {
    let cipher = SraCipher;
    let ka = cipher.key_from_seed([1; 32]);
    let kb = cipher.key_from_seed([2; 32]);
    let card = Card::from_code(17).unwrap();
    let twice = cipher
        .encrypt(&cipher.encrypt(&CardCipherText::from_card(card), &ka).unwrap(), &kb)
        .unwrap();

    assert_eq!(reveal_card(&cipher, &twice, &[&ka]).unwrap(), None);
}

proptest! {
    // ===== ТЕСТ 6: SRA — любые ключи из seed, любая карта =====
    #[test]
    fn sra_commutes_for_any_seed(sa in any::<[u8; 32]>(), sb in any::<[u8; 32]>(), code in 0u8..52) {
        let cipher = SraCipher;
        let ka = cipher.key_from_seed(sa);
        let kb = cipher.key_from_seed(sb);
        let card = Card::from_code(code).unwrap();

        let twice = cipher
            .encrypt(&cipher.encrypt(&CardCipherText::from_card(card), &ka).unwrap(), &kb)
            .unwrap();
        prop_assert_eq!(reveal_card(&cipher, &twice, &[&ka, &kb]).unwrap(), Some(card));
        prop_assert_eq!(reveal_card(&cipher, &twice, &[&kb, &ka]).unwrap(), Some(card));
    }

    // ===== ТЕСТ 7: XOR — то же для произвольных ключей =====
    #[test]
    fn xor_commutes_for_any_key(ka in any::<[u8; 32]>(), kb in any::<[u8; 32]>(), code in 0u8..52) {
        let cipher = XorCipher;
        let (ka, kb) = (KeyFragment(ka), KeyFragment(kb));
        let card = Card::from_code(code).unwrap();
        let twice = cipher
            .encrypt(&cipher.encrypt(&CardCipherText::from_card(card), &ka).unwrap(), &kb)
            .unwrap();
        prop_assert_eq!(reveal_card(&cipher, &twice, &[&kb, &ka]).unwrap(), Some(card));
    }
}
