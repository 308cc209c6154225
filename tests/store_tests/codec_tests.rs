//! Tests for the record codec
//!
//! These tests verify:
//! - Reading files in the plain comma-joined format
//! - Quoting of fields that contain commas or quotes
//! - Blank line tolerance
//! - Error reporting for malformed lines

use std::path::Path;

use campusbites::model::{Customer, MenuItem, Price};
use campusbites::store::{read_records, write_records};
use campusbites::CafeError;

// =============================================================================
// Helper Functions
// =============================================================================

fn encode<T: serde::Serialize>(records: &[T]) -> String {
    let mut buf = Vec::new();
    write_records(&mut buf, records).unwrap();
    String::from_utf8(buf).unwrap()
}

fn decode_menu(text: &str) -> campusbites::Result<Vec<MenuItem>> {
    read_records(Path::new("menu.txt"), text.as_bytes())
}

// =============================================================================
// Plain Format
// =============================================================================

#[test]
fn test_read_plain_menu_lines() {
    let items = decode_menu(
        "1,Veggie Burger,Vegetarian,8.99,25\n5,Vegan Buddha Bowl,Vegan,10.99,15\n",
    )
    .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0],
        MenuItem::new(1, "Veggie Burger", "Vegetarian", Price::from_cents(899), 25)
    );
    assert_eq!(items[1].name, "Vegan Buddha Bowl");
    assert_eq!(items[1].stock, 15);
}

#[test]
fn test_write_plain_menu_lines() {
    let items = vec![
        MenuItem::new(5, "Vegan Buddha Bowl", "Vegan", Price::from_cents(1099), 15),
        MenuItem::new(8, "Vegan Chili", "Vegan", Price::from_cents(800), 0),
    ];

    assert_eq!(
        encode(&items),
        "5,Vegan Buddha Bowl,Vegan,10.99,15\n8,Vegan Chili,Vegan,8.00,0\n"
    );
}

#[test]
fn test_write_customer_lines() {
    let customers = vec![Customer::new(1, "Ada", "ada@example.com")];
    assert_eq!(encode(&customers), "1,Ada,ada@example.com\n");
}

#[test]
fn test_write_empty_collection() {
    let items: Vec<MenuItem> = Vec::new();
    assert_eq!(encode(&items), "");
    assert!(decode_menu("").unwrap().is_empty());
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn test_field_with_comma_is_quoted() {
    let items = vec![MenuItem::new(
        11,
        "Wrap, large",
        "Vegan",
        Price::from_cents(650),
        4,
    )];

    let text = encode(&items);
    assert_eq!(text, "11,\"Wrap, large\",Vegan,6.50,4\n");
    assert_eq!(decode_menu(&text).unwrap(), items);
}

#[test]
fn test_field_with_quote_round_trips() {
    let customers = vec![Customer::new(2, "Bob \"The Chef\"", "555-0101, ext 4")];
    let text = encode(&customers);

    let back: Vec<Customer> = read_records(Path::new("customers.txt"), text.as_bytes()).unwrap();
    assert_eq!(back, customers);
}

// =============================================================================
// Tolerance and Errors
// =============================================================================

#[test]
fn test_blank_lines_are_skipped() {
    let items = decode_menu("\n1,Veggie Burger,Vegetarian,8.99,25\n\n\n2,Veggie Wrap,Vegetarian,7.49,20\n")
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, 2);
}

#[test]
fn test_malformed_line_reports_file_and_line() {
    let err = decode_menu("1,Veggie Burger,Vegetarian,8.99,25\nabc,Broken,Vegan,1.00,1\n")
        .unwrap_err();

    match err {
        CafeError::Codec { path, line, .. } => {
            assert_eq!(path, Path::new("menu.txt"));
            assert_eq!(line, 2);
        }
        other => panic!("expected codec error, got {:?}", other),
    }
}

#[test]
fn test_missing_fields_is_an_error() {
    let err = decode_menu("1,Veggie Burger,Vegetarian\n").unwrap_err();
    assert!(matches!(err, CafeError::Codec { .. }));
}

#[test]
fn test_extra_fields_is_an_error() {
    let err = decode_menu("1,Veggie Burger,Vegetarian,8.99,25\n2,A,B,1.00,5,EXTRA\n").unwrap_err();

    match err {
        CafeError::Codec { line, message, .. } => {
            assert_eq!(line, 2);
            assert_eq!(message, "expected 5 fields, found 6");
        }
        other => panic!("expected codec error, got {:?}", other),
    }
}

#[test]
fn test_extra_customer_field_is_an_error() {
    let result: campusbites::Result<Vec<Customer>> =
        read_records(Path::new("customers.txt"), "1,Ada,ada@example.com,VIP\n".as_bytes());
    assert!(matches!(result, Err(CafeError::Codec { line: 1, .. })));
}

#[test]
fn test_numeric_fields_tolerate_spaces() {
    let items = decode_menu("1,Veggie Burger,Vegetarian, 8.99, 25\n 2, Wrap ,Vegetarian,7.49 ,20 \n").unwrap();

    assert_eq!(items[0].price, Price::from_cents(899));
    assert_eq!(items[0].stock, 25);
    assert_eq!(items[1].id, 2);
    assert_eq!(items[1].stock, 20);
    // Text fields keep their spaces
    assert_eq!(items[1].name, " Wrap ");
}

#[test]
fn test_customer_id_tolerates_spaces() {
    let back: Vec<Customer> =
        read_records(Path::new("customers.txt"), " 7 ,Ada, ada@example.com\n".as_bytes()).unwrap();
    assert_eq!(back, vec![Customer::new(7, "Ada", " ada@example.com")]);
}

#[test]
fn test_negative_stock_is_an_error() {
    let err = decode_menu("1,Veggie Burger,Vegetarian,8.99,-3\n").unwrap_err();
    assert!(matches!(err, CafeError::Codec { .. }));
}

#[test]
fn test_negative_price_is_an_error() {
    let err = decode_menu("1,Veggie Burger,Vegetarian,-8.99,3\n").unwrap_err();
    assert!(matches!(err, CafeError::Codec { .. }));
}
