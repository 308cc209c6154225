//! Main menu choices

/// Main menu text, printed before every choice
pub const MAIN_MENU: &str = "\n=== Restaurant Management System ===\n\
1. Display Menu\n\
2. Add Menu Item\n\
3. Update Menu Item\n\
4. Remove Menu Item\n\
5. Add Customer\n\
6. Remove Customer\n\
7. Place Order\n\
0. Exit\n";

/// Prompt shown after the main menu
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// An operator's numbered choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    Exit = 0,
    DisplayMenu = 1,
    AddMenuItem = 2,
    UpdateMenuItem = 3,
    RemoveMenuItem = 4,
    AddCustomer = 5,
    RemoveCustomer = 6,
    PlaceOrder = 7,
}

impl MenuChoice {
    /// Parse a line of input; `None` for anything but `0`–`7`
    pub fn parse(raw: &str) -> Option<Self> {
        let number: i64 = raw.trim().parse().ok()?;
        Self::from_number(number)
    }

    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::DisplayMenu),
            2 => Some(MenuChoice::AddMenuItem),
            3 => Some(MenuChoice::UpdateMenuItem),
            4 => Some(MenuChoice::RemoveMenuItem),
            5 => Some(MenuChoice::AddCustomer),
            6 => Some(MenuChoice::RemoveCustomer),
            7 => Some(MenuChoice::PlaceOrder),
            _ => None,
        }
    }
}
