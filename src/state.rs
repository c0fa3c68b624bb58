use linera_sdk::views::{linera_views, MapView, RegisterView, RootView, ViewStorageContext};

use crate::domain::table::Table;
use crate::domain::TableId;

/// Глобальное состояние приложения ментального покера на Linera.
///
/// Важное:
/// - НЕ вкладываем RegisterView внутрь MapView.
/// - Храним доменную структуру `Table` целиком: переход стола чистый,
///   контракт загружает запись, вызывает `engine::apply_action` и пишет результат.
#[derive(RootView)]
#[view(context = ViewStorageContext)]
pub struct MentalPokerState {
    /// Все столы.
    ///
    /// Ключ: TableId,
    /// Значение: доменная структура Table (Serialize + Deserialize).
    #[view(map)]
    pub tables: MapView<TableId, Table>,

    /// Следующий свободный id стола.
    #[view(register)]
    pub next_table_id: RegisterView<TableId>,
}
