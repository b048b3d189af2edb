use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::client::DataClient;
use crate::error::DataError;
use crate::models::Dashboard;

/// Én hentesyklus for en bruker. Bærer generasjonen den ble startet i.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchCycle {
    pub generation: u64,
    pub user_id: u32,
    pub started_at: DateTime<Utc>,
}

/// Resultat fra en syklus som ikke lenger er gjeldende forkastes.
#[derive(Debug, Clone, PartialEq)]
pub enum Committed {
    Applied,
    Stale { cycle: u64, current: u64 },
}

/// Lagret resultat, merket med brukeren syklusen gjaldt.
#[derive(Debug, Clone)]
struct Slot {
    user_id: u32,
    result: Result<Dashboard, DataError>,
}

/// Arbeidstilstand for én visning (tilsvarer side-komponenten).
/// Ny bruker-id eller `cancel` gjør alle pågående sykluser utdaterte.
#[derive(Debug, Default)]
pub struct DashboardSession {
    generation: AtomicU64,
    slot: Mutex<Option<Slot>>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ny syklus. Bytter brukeren, tømmes forrige brukers resultat med en gang.
    pub fn begin(&self, user_id: u32) -> FetchCycle {
        let mut slot = self.lock_slot();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if slot.as_ref().is_some_and(|s| s.user_id != user_id) {
            log::debug!("user changed to {user_id}, clearing previous dashboard");
            *slot = None;
        }
        log::debug!("fetch cycle {generation} started for user {user_id}");
        FetchCycle {
            generation,
            user_id,
            started_at: Utc::now(),
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, cycle: &FetchCycle) -> bool {
        cycle.generation == self.current_generation()
    }

    /// Avmontering: ingen pågående syklus får lov å skrive.
    pub fn cancel(&self) {
        let g = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("session cancelled, generation now {g}");
        *self.lock_slot() = None;
    }

    /// Lagrer resultatet bare hvis syklusen fortsatt er gjeldende.
    pub fn commit(&self, cycle: &FetchCycle, result: Result<Dashboard, DataError>) -> Committed {
        // sjekk og skriv under samme lås
        let mut slot = self.lock_slot();
        let current = self.current_generation();
        if cycle.generation != current {
            log::info!(
                "discarding stale result for user {} (cycle {}, current {current})",
                cycle.user_id,
                cycle.generation
            );
            return Committed::Stale {
                cycle: cycle.generation,
                current,
            };
        }
        *slot = Some(Slot {
            user_id: cycle.user_id,
            result,
        });
        Committed::Applied
    }

    /// Start, hent og lagre i ett. Returnerer hva som faktisk ble gjort.
    pub fn refresh(&self, client: &DataClient, user_id: u32) -> Committed {
        let cycle = self.begin(user_id);
        let result = client.load_dashboard(cycle.user_id);
        self.commit(&cycle, result)
    }

    pub fn snapshot(&self) -> Option<Result<Dashboard, DataError>> {
        self.lock_slot().as_ref().map(|s| s.result.clone())
    }

    /// Brukeren det lagrede resultatet gjelder, om noe er lagret.
    pub fn snapshot_user(&self) -> Option<u32> {
        self.lock_slot().as_ref().map(|s| s.user_id)
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Slot>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_increase_monotonically() {
        let s = DashboardSession::new();
        let a = s.begin(12);
        let b = s.begin(18);
        assert!(b.generation > a.generation);
        assert!(!s.is_current(&a));
        assert!(s.is_current(&b));
        s.cancel();
        assert!(!s.is_current(&b));
    }
}
