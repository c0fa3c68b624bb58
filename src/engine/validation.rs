use crate::domain::player::Seat;
use crate::domain::table::{RoundState, Table};
use crate::domain::PlayerId;
use crate::engine::actions::ActionKind;
use crate::engine::errors::GameError;

/// Какие действия принимает стол в каждом состоянии.
///
/// Единственный полный `match` по `RoundState`: новое состояние
/// не скомпилируется, пока здесь не решат, что в нём можно делать.
pub fn admits(state: RoundState, action: ActionKind) -> bool {
    use ActionKind as A;

    match state {
        RoundState::NotStarted => false,
        RoundState::WaitingForPlayers => action == A::CancelGame,
        RoundState::TableReady => matches!(action, A::CancelGame | A::StartGame),
        RoundState::Shuffle => action == A::DeckShuffled || action.is_dispute(),
        RoundState::Recrypt => action == A::DeckRecrypted || action.is_dispute(),
        RoundState::DealPocket => action == A::CardKey || action.is_dispute(),
        RoundState::BetRound => {
            matches!(action, A::Check | A::Call | A::Raise | A::Fold) || action.is_dispute()
        }
        RoundState::DealTable => action == A::CardKey || action.is_dispute(),
        RoundState::Showdown => action == A::ShowCards || action.is_dispute(),
        RoundState::End => action == A::NewHand || action.is_dispute(),
    }
}

/// Проверка: состояние стола допускает действие.
pub fn require_admitted(table: &Table, action: ActionKind) -> Result<(), GameError> {
    if admits(table.state, action) {
        Ok(())
    } else {
        Err(GameError::InvalidState {
            action,
            state: table.state,
        })
    }
}

/// Проверка: игрок сидит за столом. Возвращает его место.
pub fn require_seat(table: &Table, actor: PlayerId) -> Result<Seat, GameError> {
    table.seat_of(actor).ok_or(GameError::Unauthorized(actor))
}

/// Проверка: сейчас ход именно этого места.
pub fn require_target(table: &Table, seat: Seat, actor: PlayerId) -> Result<(), GameError> {
    if table.target == Some(seat) {
        Ok(())
    } else {
        Err(GameError::NotYourTurn(actor))
    }
}
