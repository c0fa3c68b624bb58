use crate::crypto::{reveal_card, CardCipherText, CommutativeCipher, KeyFragment};
use crate::domain::card::Card;
use crate::domain::deck::{Deck, DECK_SLOTS};
use crate::domain::hand::DealSlot;
use crate::domain::player::Seat;
use crate::domain::table::{RoundState, Table};
use crate::engine::RandomSource;
use crate::infra::rng_seed::RngSeed;
use crate::protocol::ProtocolError;

/// Игрок со своими секретами на одну раздачу.
///
/// `deck_key` — общий ключ фазы SHUFFLE, `card_keys[i]` — ключ слота `i`
/// после RECRYPT (слот 0 не используется). Все ключи выводятся из `RngSeed`,
/// так что раздачу можно воспроизвести по seed.
#[derive(Clone, Debug)]
pub struct Participant {
    pub seat: Seat,
    deck_key: KeyFragment,
    card_keys: Vec<KeyFragment>,
}

impl Participant {
    pub fn from_seed<C: CommutativeCipher + ?Sized>(cipher: &C, seat: Seat, seed: &RngSeed) -> Self {
        let deck_key = cipher.key_from_seed(seed.key_seed(0));
        let card_keys = (0..DECK_SLOTS)
            .map(|slot| cipher.key_from_seed(seed.key_seed(slot + 1)))
            .collect();
        Self {
            seat,
            deck_key,
            card_keys,
        }
    }

    /// Открытая колода, с которой alice начинает SHUFFLE.
    pub fn initial_deck() -> Vec<CardCipherText> {
        (0..DECK_SLOTS)
            .map(|slot| {
                Deck::card_for_slot(slot)
                    .map(CardCipherText::from_card)
                    .unwrap_or(CardCipherText::ZERO)
            })
            .collect()
    }

    /// SHUFFLE: зашифровать каждую карту общим ключом и перемешать слоты 1..=52.
    pub fn shuffle<C, R>(
        &self,
        cipher: &C,
        deck: &[CardCipherText],
        rng: &mut R,
    ) -> Result<Vec<CardCipherText>, ProtocolError>
    where
        C: CommutativeCipher + ?Sized,
        R: RandomSource,
    {
        let mut out = check_deck(deck)?;
        for block in out.iter_mut().skip(1) {
            *block = cipher.encrypt(block, &self.deck_key)?;
        }
        rng.shuffle(&mut out[1..]);
        Ok(out)
    }

    /// RECRYPT: снять общий ключ и надеть ключ отдельной карты.
    /// Порядок слотов не меняется.
    pub fn recrypt<C: CommutativeCipher + ?Sized>(
        &self,
        cipher: &C,
        deck: &[CardCipherText],
    ) -> Result<Vec<CardCipherText>, ProtocolError> {
        let mut out = check_deck(deck)?;
        for (slot, block) in out.iter_mut().enumerate().skip(1) {
            let bare = cipher.decrypt(block, &self.deck_key)?;
            *block = cipher.encrypt(&bare, &self.card_keys[slot])?;
        }
        Ok(out)
    }

    /// Ключ слота колоды. Для слота вне колоды — ключ слота 0 (в раздаче не участвует).
    pub fn card_key(&self, index: usize) -> KeyFragment {
        self.card_keys.get(index).copied().unwrap_or(self.card_keys[0])
    }

    /// Ключи своих карманных карт (для шоудауна).
    pub fn pocket_keys(&self) -> [KeyFragment; 2] {
        let [a, b] = self.seat.pocket_slots();
        [self.card_key(a), self.card_key(b)]
    }

    /// Какой фрагмент этот игрок должен отправить сейчас, если должен.
    pub fn next_key_for(&self, table: &Table) -> Option<KeyFragment> {
        let index = table.cards_dealt as usize + 1;
        match (table.state, DealSlot::of(index)) {
            (RoundState::DealPocket, DealSlot::Pocket(owner)) if owner != self.seat => {
                Some(self.card_key(index))
            }
            (RoundState::DealTable, DealSlot::Community)
                if table.key_at(self.seat, index).is_none() =>
            {
                Some(self.card_key(index))
            }
            _ => None,
        }
    }

    /// Расшифровать слот своим ключом и раскрытым ключом соперника.
    pub fn reveal<C: CommutativeCipher + ?Sized>(
        &self,
        cipher: &C,
        table: &Table,
        index: usize,
    ) -> Result<Card, ProtocolError> {
        let theirs = table
            .key_at(self.seat.opponent(), index)
            .ok_or(ProtocolError::MissingKey { index })?;
        let block = table
            .encrypted_cards
            .get(index)
            .ok_or(ProtocolError::MissingKey { index })?;
        let mine = self.card_key(index);

        reveal_card(cipher, block, &[&mine, &theirs])?.ok_or(ProtocolError::Undecodable { index })
    }

    /// Свои карманные карты (после DEAL_POCKET).
    pub fn pocket_cards<C: CommutativeCipher + ?Sized>(
        &self,
        cipher: &C,
        table: &Table,
    ) -> Result<[Card; 2], ProtocolError> {
        let [a, b] = self.seat.pocket_slots();
        Ok([self.reveal(cipher, table, a)?, self.reveal(cipher, table, b)?])
    }
}

fn check_deck(deck: &[CardCipherText]) -> Result<Vec<CardCipherText>, ProtocolError> {
    if deck.len() != DECK_SLOTS {
        return Err(ProtocolError::DeckSize {
            expected: DECK_SLOTS,
            got: deck.len(),
        });
    }
    Ok(deck.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SraCipher;
    use crate::infra::rng::DeterministicRng;

    #[test]
    fn double_shuffle_and_recrypt_keeps_all_cards() {
        let cipher = SraCipher;
        let alice = Participant::from_seed(&cipher, Seat::Alice, &RngSeed::from_u64(1));
        let bob = Participant::from_seed(&cipher, Seat::Bob, &RngSeed::from_u64(2));
        let mut rng = DeterministicRng::from_u64(7);

        let deck = Participant::initial_deck();
        let deck = alice.shuffle(&cipher, &deck, &mut rng).unwrap();
        let deck = bob.shuffle(&cipher, &deck, &mut rng).unwrap();
        let deck = alice.recrypt(&cipher, &deck).unwrap();
        let deck = bob.recrypt(&cipher, &deck).unwrap();

        let mut seen: Vec<u8> = (1..DECK_SLOTS)
            .map(|slot| {
                reveal_card(&cipher, &deck[slot], &[&alice.card_key(slot), &bob.card_key(slot)])
                    .unwrap()
                    .expect("каждый слот должен раскрываться в карту")
                    .code()
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn one_key_is_not_enough() {
        let cipher = SraCipher;
        let alice = Participant::from_seed(&cipher, Seat::Alice, &RngSeed::from_u64(1));
        let bob = Participant::from_seed(&cipher, Seat::Bob, &RngSeed::from_u64(2));

        let deck = Participant::initial_deck();
        let deck = alice.recrypt(&cipher, &alice.shuffle(&cipher, &deck, &mut DeterministicRng::from_u64(1)).unwrap()).unwrap();
        let deck = bob.recrypt(&cipher, &bob.shuffle(&cipher, &deck, &mut DeterministicRng::from_u64(2)).unwrap()).unwrap();

        let partial = cipher.decrypt(&deck[1], &alice.card_key(1)).unwrap();
        assert!(partial.to_card().is_none());
    }

    #[test]
    fn wrong_deck_size_is_rejected() {
        let cipher = SraCipher;
        let alice = Participant::from_seed(&cipher, Seat::Alice, &RngSeed::from_u64(1));
        let err = alice.recrypt(&cipher, &[CardCipherText::ZERO; 10]).unwrap_err();
        assert_eq!(err, ProtocolError::DeckSize { expected: 53, got: 10 });
    }
}
