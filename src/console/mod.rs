//! Console Module
//!
//! The operator-facing side: a numbered menu, line prompts and the loop
//! that ties them to the catalog and the order engine.
//!
//! ## Input Policy
//! - Every field is one line of input
//! - Numeric fields re-prompt until they parse
//! - End of input ends the session: inside an order it closes the order
//!   (like `-1`), anywhere else it leaves the loop

mod driver;
mod input;
mod menu;

pub use driver::Driver;
pub use input::{parse_field, parse_quantity, ParseOutcome, Prompter};
pub use menu::{MenuChoice, CHOICE_PROMPT, MAIN_MENU};
