//! Console Driver
//!
//! The read–eval loop: show the numbered menu, read a choice, run it.

use std::io::{BufRead, Write};

use crate::catalog::{render_menu, Catalog, MenuItemUpdate};
use crate::error::{CafeError, Result};
use crate::model::{Customer, MenuItem, ORDER_SENTINEL};
use crate::order::OrderEngine;
use crate::store::{RecordStore, StorageBackend};

use super::input::Prompter;
use super::menu::{MenuChoice, CHOICE_PROMPT, MAIN_MENU};

/// Whether the loop keeps going after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Unwrap a prompt result, leaving the loop when input has ended
macro_rules! field {
    ($read:expr) => {
        match $read? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Drives one operator session over a reader/writer pair
pub struct Driver<B: StorageBackend, R: BufRead, W: Write> {
    store: RecordStore<B>,
    io: Prompter<R, W>,
}

impl<B: StorageBackend, R: BufRead, W: Write> Driver<B, R, W> {
    pub fn new(store: RecordStore<B>, input: R, output: W) -> Self {
        Self {
            store,
            io: Prompter::new(input, output),
        }
    }

    /// Run until the operator picks `0` or input ends
    ///
    /// Failures inside one operation are reported and the loop continues;
    /// only errors writing to the console itself end the loop early.
    pub fn run(&mut self) -> Result<()> {
        self.print_startup_notices()?;

        loop {
            self.io.print(MAIN_MENU)?;
            let line = match self.io.prompt_line(CHOICE_PROMPT)? {
                Some(line) => line,
                None => {
                    tracing::info!("Input closed, leaving");
                    return Ok(());
                }
            };

            let choice = match MenuChoice::parse(&line) {
                Some(choice) => choice,
                None => {
                    self.io.println("Invalid choice. Try again.")?;
                    continue;
                }
            };

            tracing::debug!(?choice, "Dispatching");
            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// The store, e.g. to inspect state after a scripted session
    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    /// Hand back the store and the console endpoints
    pub fn into_parts(self) -> (RecordStore<B>, R, W) {
        let (input, output) = self.io.into_inner();
        (self.store, input, output)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::DisplayMenu => self.display_menu(),
            MenuChoice::AddMenuItem => self.add_menu_item(),
            MenuChoice::UpdateMenuItem => self.update_menu_item(),
            MenuChoice::RemoveMenuItem => self.remove_menu_item(),
            MenuChoice::AddCustomer => self.add_customer(),
            MenuChoice::RemoveCustomer => self.remove_customer(),
            MenuChoice::PlaceOrder => self.place_order(),
            MenuChoice::Exit => {
                self.io.println("Exiting system...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_startup_notices(&mut self) -> Result<()> {
        let startup = self.store.startup();
        if startup.menu_created {
            self.io.println("Menu file not found. Creating a new one...")?;
            if startup.sample_menu_seeded {
                self.io.println("Sample menu created and saved to file.")?;
            }
        }
        if startup.customers_missing {
            self.io.println("Customer file not found. Creating a new one...")?;
        }
        Ok(())
    }

    /// Lookup and duplicate errors read as plain notices; anything else
    /// is prefixed with `Error:`
    fn report(&mut self, err: &CafeError) -> Result<()> {
        tracing::warn!(error = %err, "Operation failed");
        match err {
            CafeError::MenuItemNotFound(_)
            | CafeError::CustomerNotFound(_)
            | CafeError::DuplicateMenuItem(_)
            | CafeError::DuplicateCustomer(_) => self.io.println(&err.to_string()),
            other => self.io.println(&format!("Error: {}", other)),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn display_menu(&mut self) -> Result<Flow> {
        let listing = render_menu(self.store.menu());
        self.io.print(&listing)?;
        Ok(Flow::Continue)
    }

    fn add_menu_item(&mut self) -> Result<Flow> {
        let id = field!(self.io.prompt_int("Enter Menu Item ID: "));
        let name = field!(self.io.prompt_text("Enter Menu Item Name: "));
        let category = field!(self.io.prompt_text("Enter Menu Item Category: "));
        let price = field!(self.io.prompt_price("Enter Menu Item Price: "));
        let stock = field!(self.io.prompt_count("Enter Menu Item Stock: "));

        let item = MenuItem::new(id, name, category, price, stock);
        Catalog::new(&mut self.store).add_menu_item(item)?;
        self.io.println("Menu item added successfully and saved to file!")?;
        Ok(Flow::Continue)
    }

    fn update_menu_item(&mut self) -> Result<Flow> {
        let id = field!(self.io.prompt_int("Enter the ID of the Menu Item to Update: "));
        if !self.store.menu().contains(id) {
            return Err(CafeError::MenuItemNotFound(id));
        }

        let update = MenuItemUpdate {
            name: field!(self.io.prompt_text("Enter New Name: ")),
            category: field!(self.io.prompt_text("Enter New Category: ")),
            price: field!(self.io.prompt_price("Enter New Price: ")),
            stock: field!(self.io.prompt_count("Enter New Stock: ")),
        };

        Catalog::new(&mut self.store).update_menu_item(id, update)?;
        self.io.println("Menu item updated successfully and saved to file!")?;
        Ok(Flow::Continue)
    }

    fn remove_menu_item(&mut self) -> Result<Flow> {
        let id = field!(self.io.prompt_int("Enter the ID of the Menu Item to Remove: "));
        Catalog::new(&mut self.store).remove_menu_item(id)?;
        self.io.println("Menu item removed successfully and saved to file!")?;
        Ok(Flow::Continue)
    }

    fn add_customer(&mut self) -> Result<Flow> {
        let id = field!(self.io.prompt_int("Enter Customer ID: "));
        let name = field!(self.io.prompt_text("Enter Customer Name: "));
        let contact = field!(self.io.prompt_text("Enter Customer Contact: "));

        Catalog::new(&mut self.store).add_customer(Customer::new(id, name, contact))?;
        self.io.println("Customer added successfully and saved to file!")?;
        Ok(Flow::Continue)
    }

    fn remove_customer(&mut self) -> Result<Flow> {
        let id = field!(self.io.prompt_int("Enter the ID of the Customer to Remove: "));
        Catalog::new(&mut self.store).remove_customer(id)?;
        self.io.println("Customer removed successfully and saved to file!")?;
        Ok(Flow::Continue)
    }

    /// Collect lines until `-1` (or end of input), then save and print the
    /// receipt
    fn place_order(&mut self) -> Result<Flow> {
        self.io
            .println("\nEnter your order (Item ID and Quantity, -1 to stop):")?;

        let mut engine = OrderEngine::new(&mut self.store);
        let mut session = engine.session();

        loop {
            let item_id = match self.io.prompt_int("Item ID: ")? {
                Some(id) if id != ORDER_SENTINEL => id,
                _ => break,
            };
            let quantity = match self.io.prompt_quantity("Quantity: ")? {
                Some(quantity) => quantity,
                None => break,
            };

            let outcome = session.add_line(item_id, quantity)?;
            if let Some(notice) = outcome.rejection_notice() {
                self.io.println(&notice)?;
            }
        }

        let receipt = session.finish()?;
        self.io.print(&receipt.to_string())?;
        Ok(Flow::Continue)
    }
}
