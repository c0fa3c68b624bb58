use serde::{Deserialize, Serialize};

use crate::domain::hand::Street;
use crate::domain::player::Seat;
use crate::domain::table::{RoundState, Table};
use crate::domain::TableId;

use super::dto::{SeatViewDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Получить состояние стола.
    GetTable { table_id: TableId },

    /// Все столы (для лобби).
    ListTables,

    /// Столы, которые ждут соперника.
    OpenTables,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(Option<TableViewDto>),
    Tables(Vec<TableViewDto>),
}

/// Ответить на запрос по снимку всех столов.
pub fn run_query(tables: &[Table], query: &Query) -> QueryResponse {
    match query {
        Query::GetTable { table_id } => QueryResponse::Table(
            tables
                .iter()
                .find(|t| t.id == *table_id)
                .map(build_table_view),
        ),
        Query::ListTables => QueryResponse::Tables(tables.iter().map(build_table_view).collect()),
        Query::OpenTables => QueryResponse::Tables(
            tables
                .iter()
                .filter(|t| t.is_open())
                .map(build_table_view)
                .collect(),
        ),
    }
}

/// Сформировать DTO стола.
pub fn build_table_view(table: &Table) -> TableViewDto {
    let seats = Seat::BOTH
        .into_iter()
        .filter_map(|seat| {
            table.player(seat).map(|player_id| SeatViewDto {
                seat,
                player_id,
                bankroll: table.bankroll(seat),
                bet: table.bet(seat),
                ready: table.is_ready(seat),
                keys_revealed: table.keys(seat).iter().filter(|k| k.is_some()).count(),
            })
        })
        .collect();

    let street = match table.state {
        RoundState::BetRound | RoundState::DealTable | RoundState::Showdown => {
            Some(Street::from_cards_dealt(table.cards_dealt))
        }
        _ => None,
    };

    TableViewDto {
        table_id: table.id,
        state: table.state,
        street,
        buy_in: table.buy_in,
        pot: table.pot(),
        board: table.table_cards.clone(),
        cards_dealt: table.cards_dealt,
        seats,
        target: table.target,
        target_player: table.target_player(),
    }
}
