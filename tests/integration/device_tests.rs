//! Integration tests: handsets built from the catalog.

use polyfleet::app::showcase::showcase;
use polyfleet::catalog::Catalog;
use polyfleet::config::CatalogConfig;
use polyfleet::device::{Handset, MAX_CREDENTIAL_LEN};
use polyfleet::entity::Entity;
use polyfleet::error::AccessError;

fn handsets() -> Vec<Handset> {
    Catalog::builtin()
        .build(&CatalogConfig::default())
        .unwrap()
        .handsets
        .into_iter()
        .collect()
}

#[test]
fn discount_then_rejected_discount() {
    let mut phones = handsets();
    let phone = phones[0].phone_mut();
    assert_eq!(phone.get_price(), "$999.00");
    assert_eq!(phone.apply_discount(10.0).unwrap(), "$899.10");
    assert_eq!(
        phone.apply_discount(60.0),
        Err(AccessError::DiscountOutOfRange(60.0))
    );
    assert_eq!(phone.get_price(), "$899.10");
}

#[test]
fn credential_lifecycle() {
    let mut phones = handsets();
    let phone = phones[0].phone_mut();
    assert!(phone.is_locked());

    assert_eq!(phone.unlock("9999"), Err(AccessError::CredentialMismatch));
    assert!(phone.is_locked());

    assert_eq!(
        phone.change_credential("9999", "5678"),
        Err(AccessError::CredentialMismatch)
    );
    let too_long = "1".repeat(MAX_CREDENTIAL_LEN + 1);
    assert_eq!(
        phone.change_credential("1234", &too_long),
        Err(AccessError::CredentialMalformed)
    );
    phone.change_credential("1234", "5678").unwrap();

    assert!(phone.unlock("1234").is_err());
    phone.unlock("5678").unwrap();
    assert!(!phone.is_locked());
}

#[test]
fn gaming_specs_extend_base_specs() {
    let phones = handsets();
    let gaming = phones[1].as_gaming().unwrap();
    assert!(gaming.get_specs().starts_with(&gaming.base().get_specs()));
    assert_eq!(phones[1].describe(), gaming.get_specs());
    assert!(phones[0].as_gaming().is_none());
}

#[test]
fn performance_mode_switches_play_branch() {
    let mut phones = handsets();
    let gaming = phones[1].as_gaming_mut().unwrap();
    let slow = gaming.play_game("Tetris");
    gaming.enable_performance_mode();
    let fast = gaming.play_game("Tetris");
    assert_ne!(slow, fast);
    assert!(fast.contains("165Hz"));
    gaming.disable_performance_mode();
    assert_eq!(gaming.play_game("Tetris"), slow);
}

#[test]
fn showcase_every_catalog_device() {
    for mut handset in handsets() {
        let lines = showcase(&mut handset, "1234");
        assert_eq!(lines[1], handset.get_specs());
        assert!(lines.iter().any(|l| l == "PIN changed successfully!"));
        // The walk-through leaves the new credential in place.
        handset.phone_mut().lock();
        handset.phone_mut().unlock("5678").unwrap();
    }
}
