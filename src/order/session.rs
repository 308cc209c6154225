//! Order sessions
//!
//! [`OrderSession`] is the interactive form (one line at a time, as the
//! console reads them); [`OrderEngine::place_order`] drives a whole session
//! from a request sequence.

use crate::error::{CafeError, Result};
use crate::model::{ItemId, Price, ORDER_SENTINEL};
use crate::store::{RecordStore, StorageBackend};

use super::{LineOutcome, OrderLine, Receipt};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting lines
    Collecting,
    /// Writing the menu back
    Persisting,
    /// Building the receipt
    Reporting,
    /// Finished; no further lines accepted
    Done,
}

/// One order in progress
///
/// Stock is mutated as each line is fulfilled; the menu is saved once, by
/// [`finish`](OrderSession::finish).
pub struct OrderSession<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
    lines: Vec<OrderLine>,
    total: Price,
    rejected: usize,
    state: SessionState,
}

impl<'a, B: StorageBackend> OrderSession<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self {
            store,
            lines: Vec::new(),
            total: Price::ZERO,
            rejected: 0,
            state: SessionState::Collecting,
        }
    }

    /// Validate one requested line and fulfill it if stock allows
    ///
    /// Steps:
    /// 1. Look the item up by id
    /// 2. Compare `quantity` with the item's current stock
    /// 3. Check the subtotal and the new running total fit a [`Price`]
    /// 4. On success: snapshot the line, decrement stock, add to the total
    pub fn add_line(&mut self, item_id: ItemId, quantity: u32) -> Result<LineOutcome> {
        if self.state != SessionState::Collecting {
            return Err(CafeError::InvalidInput(format!(
                "order session is {:?}, not accepting lines",
                self.state
            )));
        }

        let running = self.total;
        let outcome = match self.store.menu_mut().get_mut(item_id) {
            None => LineOutcome::NotFound { item_id },
            Some(_) if quantity == 0 => LineOutcome::ZeroQuantity { item_id },
            Some(item) if quantity > item.stock => LineOutcome::InsufficientStock {
                item_id,
                name: item.name.clone(),
                requested: quantity,
                available: item.stock,
            },
            Some(item) => match item
                .price
                .checked_times(quantity)
                .and_then(|subtotal| running.checked_add(subtotal))
            {
                None => LineOutcome::AmountTooLarge {
                    item_id,
                    name: item.name.clone(),
                },
                Some(total) => {
                    item.stock -= quantity;
                    let line = OrderLine {
                        item_id,
                        name: item.name.clone(),
                        unit_price: item.price,
                        quantity,
                    };
                    self.total = total;
                    self.lines.push(line.clone());
                    LineOutcome::Fulfilled(line)
                }
            },
        };

        match &outcome {
            LineOutcome::Fulfilled(line) => {
                tracing::debug!(item_id, quantity, subtotal = %line.subtotal(), "Line fulfilled");
            }
            rejected => {
                self.rejected += 1;
                tracing::debug!(item_id, quantity, ?rejected, "Line rejected");
            }
        }

        Ok(outcome)
    }

    /// Persist the stock changes and produce the receipt
    ///
    /// Saves the menu even if no line was fulfilled. If the save fails the
    /// session returns to `Collecting` so it can be finished again; the
    /// in-memory stock already reflects the fulfilled lines.
    pub fn finish(&mut self) -> Result<Receipt> {
        if self.state != SessionState::Collecting {
            return Err(CafeError::InvalidInput(format!(
                "order session is {:?}, cannot finish",
                self.state
            )));
        }

        self.state = SessionState::Persisting;
        if let Err(e) = self.store.save_menu() {
            self.state = SessionState::Collecting;
            return Err(e);
        }

        self.state = SessionState::Reporting;
        let receipt = Receipt::new(std::mem::take(&mut self.lines), self.total);
        tracing::info!(
            lines = receipt.lines().len(),
            rejected = self.rejected,
            total = %receipt.total(),
            "Order placed"
        );

        self.state = SessionState::Done;
        Ok(receipt)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Running total of the fulfilled lines so far
    pub fn total(&self) -> Price {
        self.total
    }

    /// Lines fulfilled so far
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Number of lines rejected so far
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

/// A completed order: every line's outcome plus the receipt
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub outcomes: Vec<LineOutcome>,
    pub receipt: Receipt,
}

/// Places orders against a [`RecordStore`]
pub struct OrderEngine<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> OrderEngine<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    /// Open an interactive session
    pub fn session(&mut self) -> OrderSession<'_, B> {
        OrderSession::new(self.store)
    }

    /// Run a full session over `requests`
    ///
    /// Processing stops at the first request whose id is the sentinel
    /// (`-1`) or when the sequence runs out.
    pub fn place_order<I>(&mut self, requests: I) -> Result<PlacedOrder>
    where
        I: IntoIterator<Item = (ItemId, u32)>,
    {
        let mut session = self.session();
        let mut outcomes = Vec::new();

        for (item_id, quantity) in requests {
            if item_id == ORDER_SENTINEL {
                break;
            }
            outcomes.push(session.add_line(item_id, quantity)?);
        }

        let receipt = session.finish()?;
        Ok(PlacedOrder { outcomes, receipt })
    }
}
