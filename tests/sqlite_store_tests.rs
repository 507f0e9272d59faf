//! Workflows and listings against a real SQLite file.

mod support;

use rust_decimal_macros::dec;

use northwind::application::seed::seed;
use northwind::application::{Abort, Catalog, Workflows};
use northwind::domain::{CategoryId, NewCategory, ProductId};
use northwind::error::{Error, StoreError};
use northwind::port::outbound::store::{
    CategoryStore, ProductFilter, ProductStore, SortKey, SupplierStore,
};
use support::temp_db::TempDb;
use support::{ctx, script, strict_ctx};

#[test]
fn seeding_twice_inserts_once() {
    let db = TempDb::empty();

    let first = seed(db.store()).unwrap();
    let second = seed(db.store()).unwrap();

    assert_eq!(first.categories, 3);
    assert_eq!(first.products, 6);
    assert!(second.is_empty());
    assert_eq!(db.store().list_suppliers(SortKey::Id).unwrap().len(), 4);
}

#[test]
fn added_category_survives_a_reopen() {
    let db = TempDb::seeded();
    let mut console = script(&["Produce", "Dried fruit and bean curd"]);
    let ctx = ctx();

    let report = Workflows::new(db.store(), &mut console, &ctx)
        .add_category()
        .unwrap();
    let id = CategoryId::new(report.record_id().unwrap());

    let reopened = db.reopen();
    let category = reopened.get_category(id).unwrap().unwrap();
    assert_eq!(category.name, "Produce");
    assert_eq!(category.description, "Dried fruit and bean curd");
    assert!(db.path().exists());
}

#[test]
fn duplicate_category_is_caught_before_the_table() {
    let db = TempDb::seeded();
    let mut console = script(&["Beverages", "Another beverages"]);
    let ctx = ctx();

    let report = Workflows::new(db.store(), &mut console, &ctx)
        .add_category()
        .unwrap();

    assert!(matches!(report.abort(), Some(Abort::Validation(_))));
    assert_eq!(db.store().list_categories(SortKey::Id).unwrap().len(), 3);
}

#[test]
fn table_constraint_backs_up_the_name_check() {
    let db = TempDb::seeded();

    let err = db
        .store()
        .insert_category(&NewCategory {
            name: "Condiments".to_string(),
            description: "Duplicate".to_string(),
        })
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Store(StoreError::DuplicateName { .. })
    ));
}

#[test]
fn lax_edit_onto_a_taken_name_is_refused_by_the_table() {
    let db = TempDb::seeded();
    // Confections (3) renamed to Beverages with the recheck off.
    let mut console = script(&["3", "Beverages", ""]);
    let ctx = ctx();

    let report = Workflows::new(db.store(), &mut console, &ctx)
        .edit_category()
        .unwrap();

    assert!(matches!(report.abort(), Some(Abort::Persistence(_))));
    assert!(console.printed_containing("Operation failed"));
    assert_eq!(
        db.store().get_category(CategoryId::new(3)).unwrap().unwrap().name,
        "Confections"
    );
}

#[test]
fn strict_edit_onto_a_taken_name_never_reaches_the_table() {
    let db = TempDb::seeded();
    let mut console = script(&["3", "Beverages", ""]);
    let ctx = strict_ctx();

    let report = Workflows::new(db.store(), &mut console, &ctx)
        .edit_category()
        .unwrap();

    assert!(matches!(report.abort(), Some(Abort::Validation(_))));
    assert!(console.printed("CategoryName : Name exists"));
}

#[test]
fn category_in_use_is_kept() {
    let db = TempDb::seeded();
    let mut console = script(&["1"]);
    let ctx = ctx();

    let report = Workflows::new(db.store(), &mut console, &ctx)
        .remove_category()
        .unwrap();

    match report.abort() {
        Some(Abort::Persistence(reason)) => assert!(reason.contains("2 product(s)"), "{reason}"),
        other => panic!("unexpected abort: {other:?}"),
    }
    assert!(db.reopen().get_category(CategoryId::new(1)).unwrap().is_some());
}

#[test]
fn add_edit_remove_product_round() {
    let db = TempDb::seeded();
    let ctx = ctx();

    let mut console = script(&[
        "Sasquatch Ale",
        "24 - 12 oz bottles",
        "-14",
        "111",
        "0",
        "15",
        "1",
        "4",
        "n",
    ]);
    let report = Workflows::new(db.store(), &mut console, &ctx)
        .add_product()
        .unwrap();
    let id = report.record_id().unwrap();
    let added = db.store().get_product(ProductId::new(id)).unwrap().unwrap();
    assert_eq!(added.unit_price, dec!(14));
    assert_eq!(added.supplier_id.get(), 4);

    let id_text = id.to_string();
    let mut console = script(&[id_text.as_str(), "", "", "", "", "14.50", "", "", "", "y"]);
    let report = Workflows::new(db.store(), &mut console, &ctx)
        .edit_product()
        .unwrap();
    assert!(report.is_completed());
    let edited = db.reopen().get_product(ProductId::new(id)).unwrap().unwrap();
    assert_eq!(edited.unit_price, dec!(14.50));
    assert!(edited.discontinued);
    assert_eq!(edited.name, "Sasquatch Ale");

    let mut console = script(&[id_text.as_str()]);
    let report = Workflows::new(db.store(), &mut console, &ctx)
        .remove_product()
        .unwrap();
    assert!(report.is_completed());
    assert!(db.store().get_product(ProductId::new(id)).unwrap().is_none());
}

#[test]
fn removed_identifiers_are_not_reused() {
    let db = TempDb::seeded();
    db.store().delete_product(ProductId::new(6)).unwrap();

    let mut console = script(&[
        "Uncle Bob's Organic Dried Pears",
        "12 - 1 lb pkgs.",
        "30",
        "15",
        "0",
        "10",
        "2",
        "3",
        "n",
    ]);
    let ctx = ctx();
    let report = Workflows::new(db.store(), &mut console, &ctx)
        .add_product()
        .unwrap();

    assert_eq!(report.record_id(), Some(7));
}

#[test]
fn listings_read_the_file() {
    let db = TempDb::seeded();
    let ctx = ctx();
    let mut console = script(&[]);

    Catalog::new(db.store(), &mut console, &ctx)
        .products(ProductFilter::Discontinued)
        .unwrap();

    assert!(console.printed_containing("Chef Anton's Gumbo Mix"));
    assert!(!console.printed_containing("Chai"));
    assert_eq!(
        db.store()
            .list_products(ProductFilter::Active, SortKey::Name)
            .unwrap()
            .len(),
        5
    );
}
