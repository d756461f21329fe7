//! The process-wide store.
//!
//! Kept to a single test so nothing else in this binary races on the shared
//! instance.

use stockkeep_core::{LoadError, StockConfig, StockError, ValidationError};
use stockkeep_inventory::{StockMap, global};

#[test]
fn shared_store_lifecycle() -> anyhow::Result<()> {
    stockkeep_observability::init();

    assert!(global::snapshot()?.is_empty());

    global::load_data(r#"{"apple": 3, "pear": 1}"#)?;
    global::load_data(r#"{"apple": 3}"#)?;
    assert_eq!(global::get_qty("pear")?, 0);

    let log = global::add_item("apple", 2, None)?;
    assert_eq!(log.len(), 1);
    let log = global::add_item("pear", 1, None)?;
    assert_eq!(log.len(), 1);
    assert_eq!(global::get_qty("apple")?, 5);
    assert_eq!(global::get_qty("pear")?, 1);

    let before = global::snapshot()?;
    let err = global::load_data(r#"["apple", 5]"#).unwrap_err();
    assert!(matches!(err, StockError::Load(LoadError::MalformedSource { .. })));
    assert_eq!(global::snapshot()?, before);

    let rejected = global::add_item("apple", -1, None).unwrap_err();
    assert!(matches!(
        rejected.validation(),
        Some(ValidationError::InvalidQuantity { .. })
    ));
    assert_eq!(global::get_qty("apple")?, 5);

    assert_eq!(global::remove_item("pear", 1)?, 0);
    assert_eq!(global::check_low_items(10)?, vec!["apple".to_string()]);

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("inventory.json");
    global::save_file(&path)?;

    let previous = global::replace(StockMap::new())?;
    assert_eq!(previous.get("apple"), Some(&5));
    assert!(global::report()?.rows().is_empty());

    let config = StockConfig {
        data_file: path.clone(),
        ..StockConfig::default()
    };
    global::load_configured(&config)?;
    assert_eq!(global::snapshot()?, previous);
    assert!(global::configured_low_items(&config)?.is_empty());

    let threads: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| global::add_item("apple", 1, None).map(|log| log.len())))
        .collect();
    for handle in threads {
        assert_eq!(handle.join().expect("adder thread panicked")?, 1);
    }
    assert_eq!(global::get_qty("apple")?, 9);
    Ok(())
}
