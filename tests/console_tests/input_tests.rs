//! Tests for console input parsing
//!
//! These tests verify:
//! - Explicit parse outcomes for numeric fields
//! - Re-prompting on bad input
//! - End of input
//! - Main menu choice parsing

use std::io::Cursor;

use campusbites::console::{parse_field, parse_quantity, MenuChoice, ParseOutcome, Prompter};
use campusbites::model::Price;

// =============================================================================
// Helper Functions
// =============================================================================

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, output) = prompter.into_inner();
    String::from_utf8(output).unwrap()
}

// =============================================================================
// Parse Outcome Tests
// =============================================================================

#[test]
fn test_parse_field_values() {
    assert_eq!(parse_field::<i64>(" 42 \n"), ParseOutcome::Value(42));
    assert_eq!(parse_field::<i64>("-1"), ParseOutcome::Value(-1));
    assert_eq!(parse_field::<i64>("   "), ParseOutcome::Empty);
    assert_eq!(
        parse_field::<i64>("4x"),
        ParseOutcome::Invalid("4x".to_string())
    );
}

#[test]
fn test_parse_field_price() {
    assert_eq!(
        parse_field::<Price>("6.5").value(),
        Some(Price::from_cents(650))
    );
    assert!(matches!(
        parse_field::<Price>("-6.5"),
        ParseOutcome::Invalid(_)
    ));
}

#[test]
fn test_parse_quantity() {
    assert_eq!(parse_quantity("3"), ParseOutcome::Value(3));
    assert_eq!(parse_quantity("0"), ParseOutcome::Invalid("0".to_string()));
    assert!(matches!(parse_quantity("-2"), ParseOutcome::Invalid(_)));
    assert_eq!(parse_quantity(""), ParseOutcome::Empty);
}

#[test]
fn test_menu_choice_parse() {
    assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::PlaceOrder));
    assert_eq!(MenuChoice::parse("8"), None);
    assert_eq!(MenuChoice::parse("-1"), None);
    assert_eq!(MenuChoice::parse("menu"), None);
    assert_eq!(MenuChoice::DisplayMenu as u8, 1);
}

// =============================================================================
// Prompt Tests
// =============================================================================

#[test]
fn test_prompt_int_reprompts_until_valid() {
    let mut p = prompter("abc\n\n7\n");

    assert_eq!(p.prompt_int("ID: ").unwrap(), Some(7));

    let output = output_of(p);
    assert_eq!(output.matches("ID: ").count(), 3);
    assert_eq!(output.matches("Invalid number, try again.").count(), 2);
}

#[test]
fn test_prompt_quantity_rejects_zero_and_negative() {
    let mut p = prompter("0\n-2\n3\n");

    assert_eq!(p.prompt_quantity("Quantity: ").unwrap(), Some(3));

    let output = output_of(p);
    assert_eq!(
        output.matches("Please enter a whole number of at least 1.").count(),
        2
    );
}

#[test]
fn test_prompt_count_accepts_zero() {
    let mut p = prompter("-4\n0\n");
    assert_eq!(p.prompt_count("Stock: ").unwrap(), Some(0));
}

#[test]
fn test_prompt_price_reprompts() {
    let mut p = prompter("-1\nfree\n4.5\n");

    let price = p.prompt_price("Price: ").unwrap().unwrap();
    assert_eq!(price.to_string(), "4.50");
    assert_eq!(output_of(p).matches("Invalid price, try again.").count(), 2);
}

#[test]
fn test_prompt_text_trims_line() {
    let mut p = prompter("  Falafel Wrap, large \r\n");
    assert_eq!(
        p.prompt_text("Name: ").unwrap(),
        Some("Falafel Wrap, large".to_string())
    );
}

#[test]
fn test_end_of_input_returns_none() {
    let mut p = prompter("");
    assert_eq!(p.prompt_int("ID: ").unwrap(), None);
    assert_eq!(p.prompt_text("Name: ").unwrap(), None);

    // Bad input followed by end of input also ends cleanly
    let mut p = prompter("oops\n");
    assert_eq!(p.prompt_int("ID: ").unwrap(), None);
}
