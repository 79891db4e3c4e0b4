use crate::ports::{Journal, Ports};

/// Save point across the ledger and the treasury.
///
/// Rolls both back when dropped without `commit`, so every early return
/// through `?` leaves balances as they were at `begin`.
pub(crate) struct Transaction<'a> {
    ports: Ports<'a>,
    committed: bool,
}

impl<'a> Transaction<'a> {
    pub fn begin(ports: Ports<'a>) -> Self {
        ports.ledger.checkpoint();
        ports.treasury.checkpoint();
        Self {
            ports,
            committed: false,
        }
    }

    pub fn commit(mut self) {
        self.ports.ledger.commit();
        self.ports.treasury.commit();
        self.committed = true;
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.ports.ledger.rollback();
            self.ports.treasury.rollback();
        }
    }
}
