//! Fuzz target: `Session::handle_line`
//!
//! Splits arbitrary bytes into lines and feeds them to a session over the
//! default fleet.
//!
//! Invariants checked:
//! - No panics under any input
//! - A selection is only held while in `EntitySelected`, and always indexes
//!   into the fleet
//! - Once `Exited`, the session stays there
//!
//! cargo fuzz run fuzz_session_input

#![no_main]

use libfuzzer_sys::fuzz_target;
use polyfleet::app::events::SessionEvent;
use polyfleet::app::ports::{Console, EventSink};
use polyfleet::app::service::Session;
use polyfleet::catalog::Catalog;
use polyfleet::config::CatalogConfig;
use polyfleet::fsm::StateId;

struct Discard;
impl Console for Discard {
    fn write_line(&mut self, _line: &str) {}
}
impl EventSink for Discard {
    fn emit(&mut self, _event: &SessionEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(fleet) = Catalog::builtin().build(&CatalogConfig::default()) else {
        return;
    };
    let mut session = Session::new(fleet.vehicles);

    let mut exited = false;
    for line in text.split('\n') {
        let state = session.handle_line(line, &mut Discard, &mut Discard);
        if exited {
            assert_eq!(state, StateId::Exited);
        }
        exited = state == StateId::Exited;

        match session.selected() {
            Some(i) => {
                assert_eq!(state, StateId::EntitySelected);
                assert!(i < session.fleet().len());
            }
            None => assert_ne!(state, StateId::EntitySelected),
        }
    }
});
