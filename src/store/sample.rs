//! First-run sample menu

use crate::model::{MenuItem, Price};

/// The ten items seeded when no menu file exists yet
pub fn sample_menu() -> Vec<MenuItem> {
    const ROWS: [(i64, &str, &str, u64, u32); 10] = [
        (1, "Veggie Burger", "Vegetarian", 899, 25),
        (2, "Veggie Wrap", "Vegetarian", 749, 20),
        (3, "Grilled Cheese Sandwich", "Vegetarian", 599, 30),
        (4, "Vegetable Stir Fry", "Vegetarian", 949, 18),
        (5, "Vegan Buddha Bowl", "Vegan", 1099, 15),
        (6, "Vegan Tacos", "Vegan", 849, 20),
        (7, "Vegan Quinoa Salad", "Vegan", 929, 12),
        (8, "Vegan Chili", "Vegan", 799, 25),
        (9, "Gluten-Free Margherita Pizza", "Gluten-Free", 1149, 10),
        (10, "Grilled Chicken Salad (Gluten-Free)", "Gluten-Free", 1099, 18),
    ];

    ROWS.iter()
        .map(|&(id, name, category, cents, stock)| {
            MenuItem::new(id, name, category, Price::from_cents(cents), stock)
        })
        .collect()
}
