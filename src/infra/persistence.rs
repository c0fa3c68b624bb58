use std::collections::BTreeMap;

use crate::domain::table::Table;
use crate::domain::TableId;

/// Абстракция хранилища столов.
///
/// В Linera-режиме вместо этого используется `MentalPokerState` и Views,
/// но эта абстракция удобна:
/// - для юнит- и интеграционных тестов движка,
/// - для оффчейн-сервисов (например, lobby-сервер).
pub trait PokerStorage {
    /// Загрузить стол.
    fn load_table(&self, id: TableId) -> Option<Table>;

    /// Сохранить стол (вставка или замена целиком).
    fn save_table(&mut self, table: &Table);

    /// Все столы в порядке возрастания id (поиск стола идёт first-fit по этому порядку).
    fn tables(&self) -> Vec<Table>;

    /// Следующий свободный id.
    fn next_table_id(&self) -> TableId;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryPokerStorage {
    tables: BTreeMap<TableId, Table>,
}

impl InMemoryPokerStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl PokerStorage for InMemoryPokerStorage {
    fn load_table(&self, id: TableId) -> Option<Table> {
        self.tables.get(&id).cloned()
    }

    fn save_table(&mut self, table: &Table) {
        self.tables.insert(table.id, table.clone());
    }

    fn tables(&self) -> Vec<Table> {
        self.tables.values().cloned().collect()
    }

    fn next_table_id(&self) -> TableId {
        self.tables.keys().next_back().map_or(0, |id| id + 1)
    }
}
