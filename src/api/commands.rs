use serde::{Deserialize, Serialize};

use crate::crypto::CommutativeCipher;
use crate::domain::config::StakeRange;
use crate::domain::{PlayerId, TableId};
use crate::engine::actions::Action;
use crate::engine::hand_history::EventLog;
use crate::engine::TableManager;
use crate::infra::escrow::EscrowLedger;
use crate::infra::persistence::PokerStorage;

use super::errors::ApiError;

/// Команда верхнего уровня.
///
/// Эти команды превращаются в операции (`MentalPokerOperation`),
/// которые Linera экспонирует наружу. Автор команды — подписант операции,
/// поэтому в самой команде его нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Найти соперника или создать свой стол.
    SearchGame(SearchGameCommand),

    /// Действие над конкретным столом.
    TableCommand(TableCommand),
}

/// Поиск стола.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchGameCommand {
    /// Желаемый диапазон ставок (пока не влияет на выбор).
    pub stakes: Option<StakeRange>,
}

/// Действие игрока над столом `table_id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableCommand {
    pub table_id: TableId,
    pub action: Action,
}

/// Что вернуть клиенту после успешной команды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandOutcome {
    pub table_id: TableId,
    pub events: EventLog,
}

/// Выполнить команду от имени `actor`.
pub fn execute_command<S, C, L>(
    manager: &mut TableManager<S, C, L>,
    actor: PlayerId,
    command: &Command,
) -> Result<CommandOutcome, ApiError>
where
    S: PokerStorage,
    C: CommutativeCipher,
    L: EscrowLedger,
{
    match command {
        Command::SearchGame(cmd) => {
            let (table_id, events) = manager.search_game(actor, cmd.stakes)?;
            Ok(CommandOutcome { table_id, events })
        }
        Command::TableCommand(cmd) => {
            let events = manager.apply(actor, cmd.table_id, &cmd.action)?;
            Ok(CommandOutcome {
                table_id: cmd.table_id,
                events,
            })
        }
    }
}

/// Разобрать команду из JSON (так её присылает фронт).
pub fn parse_command(raw: &str) -> Result<Command, ApiError> {
    Ok(serde_json::from_str(raw)?)
}
