//! The menu loop driven through a real terminal over byte buffers.

mod support;

use std::io::Cursor;

use northwind::adapter::inbound::cli::menu::Menu;
use northwind::adapter::inbound::cli::terminal::Terminal;
use northwind::domain::ProductId;
use northwind::port::outbound::store::{CategoryStore, ProductStore};
use support::ctx;
use support::temp_db::TempDb;

fn session(db: &TempDb, input: &str, clear_screen: bool) -> String {
    let ctx = ctx();
    let terminal = Terminal::new(Cursor::new(input.to_string()), Vec::new(), clear_screen);
    let mut menu = Menu::new(db.store(), terminal, &ctx);
    menu.run().unwrap();
    String::from_utf8(menu.into_console().into_output()).unwrap()
}

#[test]
fn quitting_straight_away_prints_the_main_menu_once() {
    let db = TempDb::seeded();
    let screen = session(&db, "0\n", false);

    assert_eq!(screen.matches("1) Categories Menu").count(), 1);
    assert!(screen.contains("0) Quit"));
}

#[test]
fn category_listing_over_sqlite() {
    let db = TempDb::seeded();
    let screen = session(&db, "1\n1\n0\n", false);

    assert!(screen.contains("Beverages"));
    assert!(screen.contains("Condiments"));
    assert!(screen.contains("Confections"));
}

#[test]
fn category_added_through_the_menu_is_stored() {
    let db = TempDb::seeded();
    let screen = session(&db, "1\n4\nProduce\nDried fruit and bean curd\n0\n", false);

    assert!(screen.contains("Produce - Dried fruit and bean curd added to database"));
    assert!(db.reopen().category_name_exists("Produce").unwrap());
}

#[test]
fn windows_line_endings_are_accepted() {
    let db = TempDb::seeded();
    let screen = session(&db, "2\r\n5\r\n6\r\n0\r\n", false);

    assert!(screen.contains("Grandma's Boysenberry Spread removed from database"));
    assert!(db.store().get_product(ProductId::new(6)).unwrap().is_none());
}

#[test]
fn end_of_input_mid_workflow_exits_cleanly() {
    let db = TempDb::seeded();
    session(&db, "2\n3\nSasquatch Ale\n", false);

    assert!(!db.store().product_name_exists("Sasquatch Ale").unwrap());
}

#[test]
fn screen_is_cleared_after_each_choice_when_enabled() {
    let db = TempDb::seeded();
    let cleared = session(&db, "1\n1\n0\n", true);
    let plain = session(&db, "1\n1\n0\n", false);

    assert_eq!(cleared.matches("\x1B[2J").count(), 3);
    assert!(!plain.contains("\x1B[2J"));
}
