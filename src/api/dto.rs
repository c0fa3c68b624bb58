use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::player::Seat;
use crate::domain::table::RoundState;
use crate::domain::{PlayerId, TableId};

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatViewDto {
    pub seat: Seat,
    pub player_id: PlayerId,
    pub bankroll: Chips,
    pub bet: Chips,
    pub ready: bool,
    /// Сколько фрагментов ключей игрок уже раскрыл в этой раздаче.
    pub keys_revealed: usize,
}

/// DTO стола.
///
/// Зашифрованная колода и ключи сюда не попадают: клиент читает их
/// из полного `Table`, когда ему нужно расшифровать свою карту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub table_id: TableId,
    pub state: RoundState,
    pub street: Option<Street>,
    pub buy_in: Chips,
    pub pot: Chips,
    pub board: Vec<Card>,
    pub cards_dealt: u8,
    pub seats: Vec<SeatViewDto>,
    /// Чей сейчас ход (если очередь вообще есть).
    pub target: Option<Seat>,
    pub target_player: Option<PlayerId>,
}
