//! Scripted walk through one handset's operations.

use log::warn;

use crate::device::Handset;
use crate::entity::Entity;

/// Credential the walk-through switches to after unlocking.
pub const SHOWCASE_NEW_CREDENTIAL: &str = "5678";
pub const SHOWCASE_DISCOUNT: f64 = 10.0;
const SHOWCASE_NUMBER: &str = "555-1234";
const SHOWCASE_MESSAGE: &str = "Hello from Rust!";
const SHOWCASE_GAME: &str = "Call of Duty Mobile";

/// Run the demonstration script for one handset and return what it printed.
///
/// Rejections (wrong credential, bad discount) become lines in the output;
/// the script keeps going.
pub fn showcase(handset: &mut Handset, credential: &str) -> Vec<String> {
    let mut out = vec![format!("=== {} ({}) ===", handset.name(), handset.kind())];
    out.push(handset.get_specs());

    let phone = handset.phone_mut();
    out.push(phone.make_call(SHOWCASE_NUMBER));
    out.push(phone.send_message(SHOWCASE_NUMBER, SHOWCASE_MESSAGE));
    out.push(phone.take_photo());

    match phone.unlock(credential) {
        Ok(()) => out.push("Phone unlocked!".to_string()),
        Err(e) => {
            warn!("showcase: unlock failed: {e}");
            out.push(format!("Unlock failed: {e}"));
        }
    }
    match phone.change_credential(credential, SHOWCASE_NEW_CREDENTIAL) {
        Ok(()) => out.push("PIN changed successfully!".to_string()),
        Err(e) => {
            warn!("showcase: credential change failed: {e}");
            out.push(format!("PIN change failed: {e}"));
        }
    }

    out.push(format!("Phone price: {}", phone.get_price()));
    match phone.apply_discount(SHOWCASE_DISCOUNT) {
        Ok(price) => out.push(format!(
            "{SHOWCASE_DISCOUNT}% discount applied! New price: {price}"
        )),
        Err(e) => out.push(format!("Discount rejected: {e}")),
    }

    if let Some(gaming) = handset.as_gaming_mut() {
        out.push(gaming.enable_performance_mode());
        out.push(gaming.play_game(SHOWCASE_GAME));
        out.push(gaming.disable_performance_mode());
        out.push(gaming.play_game(SHOWCASE_GAME));
    }
    out
}
