// src/bin/mental_poker_dev_cli.rs
//
// Dev-CLI: два локальных клиента играют одну раздачу через TableManager.
// Конфиг (JSON) можно передать первым аргументом, иначе — значения по умолчанию.
// Уровень логов: RUST_LOG (по умолчанию info).

use std::error::Error;

use tracing_subscriber::EnvFilter;

use mental_poker::api::build_table_view;
use mental_poker::crypto::SraCipher;
use mental_poker::domain::chips::Chips;
use mental_poker::domain::config::GameConfig;
use mental_poker::domain::player::Seat;
use mental_poker::domain::table::{RoundState, Table};
use mental_poker::domain::{PlayerId, TableId};
use mental_poker::engine::{Action, TableManager};
use mental_poker::eval::describe_hand;
use mental_poker::infra::{InMemoryEscrow, InMemoryPokerStorage, RngSeed, SystemRng};
use mental_poker::protocol::Participant;

type Manager = TableManager<InMemoryPokerStorage, SraCipher, InMemoryEscrow>;

const ALICE: PlayerId = 1;
const BOB: PlayerId = 2;

/// Игрок dev-CLI: аккаунт + локальные секреты.
struct Client {
    id: PlayerId,
    participant: Participant,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    println!("mental_poker_dev_cli: buy_in={} {}", config.buy_in, config.currency);

    let mut escrow = InMemoryEscrow::new();
    let bankroll = config.buy_in.checked_mul(4).unwrap_or(Chips(u64::MAX));
    escrow.deposit(ALICE, bankroll);
    escrow.deposit(BOB, bankroll);

    let mut manager: Manager =
        TableManager::new(InMemoryPokerStorage::new(), SraCipher, escrow, config);

    // 1. Лобби: alice создаёт стол, bob садится за него.
    let (table_id, _) = manager.search_game(ALICE, None)?;
    let (joined, _) = manager.search_game(BOB, None)?;
    if joined != table_id {
        return Err(format!("bob сел за стол {joined}, а не за стол alice {table_id}").into());
    }

    manager.apply(ALICE, table_id, &Action::StartGame)?;
    manager.apply(BOB, table_id, &Action::StartGame)?;

    // 2. Ключи игроков — из свежей энтропии.
    let mut rng = SystemRng;
    let clients = [
        Client {
            id: ALICE,
            participant: Participant::from_seed(manager.cipher(), Seat::Alice, &RngSeed::from_bytes(rng.seed_bytes())),
        },
        Client {
            id: BOB,
            participant: Participant::from_seed(manager.cipher(), Seat::Bob, &RngSeed::from_bytes(rng.seed_bytes())),
        },
    ];

    // 3. Ведём раздачу, пока стол не дойдёт до END.
    let mut pockets_printed = false;
    loop {
        let table = load(&manager, table_id)?;
        if table.state == RoundState::End {
            break;
        }
        if table.state == RoundState::BetRound && !pockets_printed {
            for c in &clients {
                let cards = c.participant.pocket_cards(manager.cipher(), &table)?;
                println!("{} видит свои карты: {} {}", c.participant.seat, cards[0], cards[1]);
            }
            pockets_printed = true;
        }
        step(&mut manager, &mut rng, &clients, &table)?;
    }

    let table = load(&manager, table_id)?;
    let view = build_table_view(&table);
    println!();
    println!("================ HAND FINISHED =================");
    println!(
        "board: {}",
        view.board.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
    );
    for seat in &view.seats {
        println!("{} (id={}): bankroll={}", seat.seat, seat.player_id, seat.bankroll);
    }
    if let Some(last) = manager.ledger().transfers().last() {
        println!("escrow: {} → {} {} (memo={})", last.from, last.to, last.amount, last.memo);
    }
    Ok(())
}

fn load(manager: &Manager, table_id: TableId) -> Result<Table, Box<dyn Error>> {
    manager
        .table(table_id)
        .ok_or_else(|| format!("стол {table_id} пропал").into())
}

fn client(clients: &[Client; 2], seat: Seat) -> &Client {
    match seat {
        Seat::Alice => &clients[0],
        Seat::Bob => &clients[1],
    }
}

/// Один шаг протокола от имени того, кто сейчас должен действовать.
fn step(
    manager: &mut Manager,
    rng: &mut SystemRng,
    clients: &[Client; 2],
    table: &Table,
) -> Result<(), Box<dyn Error>> {
    let cipher = SraCipher;
    let table_id = table.id;

    match table.state {
        RoundState::Shuffle | RoundState::Recrypt => {
            let seat = table.target.ok_or("нет очереди на перемешивание")?;
            let c = client(clients, seat);
            let action = if table.state == RoundState::Shuffle {
                let input = match seat {
                    Seat::Alice => Participant::initial_deck(),
                    Seat::Bob => table.encrypted_cards.clone(),
                };
                Action::DeckShuffled {
                    cards: c.participant.shuffle(&cipher, &input, rng)?,
                }
            } else {
                Action::DeckRecrypted {
                    cards: c.participant.recrypt(&cipher, &table.encrypted_cards)?,
                }
            };
            manager.apply(c.id, table_id, &action)?;
        }
        RoundState::DealPocket | RoundState::DealTable => {
            for c in clients {
                if let Some(key) = c.participant.next_key_for(table) {
                    manager.apply(c.id, table_id, &Action::CardKey { key })?;
                    break;
                }
            }
        }
        RoundState::BetRound => {
            let seat = table.target.ok_or("нет очереди на ставку")?;
            let c = client(clients, seat);
            let action = if table.bet(seat) < table.bet(seat.opponent()) {
                Action::Call
            } else if seat == Seat::Alice && table.pot().is_zero() && table.cards_dealt > 4 {
                // Немного действия на флопе.
                Action::Raise {
                    amount: Chips::new(50).min(table.bankroll(seat)),
                }
            } else {
                Action::Check
            };
            println!("{}: {:?}", seat, action);
            manager.apply(c.id, table_id, &action)?;
        }
        RoundState::Showdown => {
            for c in clients {
                if table.key_at(c.participant.seat, c.participant.seat.pocket_slots()[0]).is_none() {
                    let keys = c.participant.pocket_keys();
                    let events = manager.apply(c.id, table_id, &Action::ShowCards { keys })?;
                    for e in events.kinds() {
                        if let mental_poker::engine::TableEventKind::ShowdownScores { alice, bob } = e {
                            println!("alice: {} ({})", alice.0, describe_hand(*alice));
                            println!("bob:   {} ({})", bob.0, describe_hand(*bob));
                        }
                    }
                    break;
                }
            }
        }
        state => return Err(format!("неожиданное состояние {state}").into()),
    }
    Ok(())
}
