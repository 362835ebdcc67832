//! Integration tests: Session → FSM → registry, driven line by line.

use polyfleet::adapters::console::ScriptedInput;
use polyfleet::app::commands::VehicleAction;
use polyfleet::app::events::SessionEvent;
use polyfleet::error::InputError;
use polyfleet::fsm::StateId;

use super::mock_io::{MockConsole, MockSink, default_session};

fn run(lines: &[&str]) -> (MockConsole, MockSink, polyfleet::app::service::SessionSummary) {
    let mut session = default_session();
    let mut console = MockConsole::new();
    let mut sink = MockSink::new();
    let summary = session.run(&mut ScriptedInput::new(lines.iter().copied()), &mut console, &mut sink);
    (console, sink, summary)
}

#[test]
fn invalid_action_then_exit() {
    let (console, sink, summary) = run(&["2", "1", "5", "4"]);

    assert_eq!(
        sink.events,
        vec![
            SessionEvent::Started(StateId::AwaitingChoice),
            SessionEvent::StateChanged {
                from: StateId::AwaitingChoice,
                to: StateId::SelectingEntity
            },
            SessionEvent::StateChanged {
                from: StateId::SelectingEntity,
                to: StateId::EntitySelected
            },
            SessionEvent::InputRejected {
                state: StateId::EntitySelected,
                error: InputError::OutOfRange { value: 5, max: 4 }
            },
            SessionEvent::StateChanged {
                from: StateId::EntitySelected,
                to: StateId::AwaitingChoice
            },
            SessionEvent::StateChanged {
                from: StateId::AwaitingChoice,
                to: StateId::Exited
            },
            SessionEvent::Finished { inputs: 4 },
        ]
    );
    assert!(console.contains("Selected: Tesla Model S"));
    assert!(console.contains("Invalid choice: 5 is not between 1 and 4"));
    assert_eq!(
        summary,
        polyfleet::app::service::SessionSummary {
            inputs: 4,
            rejected: 1,
            actions: 0,
            exited: true
        }
    );
}

#[test]
fn every_action_on_the_rocket() {
    let (console, sink, _) = run(&["2", "5", "1", "2", "5", "2", "2", "5", "3", "2", "5", "4", "4"]);

    assert!(console.contains("Falcon Heavy is launching into space"));
    assert!(console.contains("LIFTOFF!"));
    assert!(console.contains("This rocket carries 1,500 tons of fuel."));
    let actions: Vec<VehicleAction> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::ActionPerformed { action, vehicle } => {
                assert_eq!(vehicle, "Falcon Heavy");
                Some(*action)
            }
            _ => None,
        })
        .collect();
    assert_eq!(actions, VehicleAction::ALL.to_vec());
}

#[test]
fn car_maneuver_is_reported_not_performed() {
    let (console, sink, summary) = run(&["2", "1", "3", "4"]);
    assert!(console.contains("Tesla Model S has no special maneuver."));
    assert_eq!(summary.actions, 0);
    assert_eq!(sink.rejections(), 0);
    assert!(summary.exited);
}

#[test]
fn parade_and_race_from_menu() {
    let (console, _, _) = run(&["1", "3", "4"]);
    // Describe lines from the parade, one per vehicle.
    assert_eq!(console.count("(Max speed:"), 5);
    assert!(console.contains("Honk honk! Car horn sounding!"));
    assert!(console.contains("Foghorn blast! Boat horn sounding!"));
    assert_eq!(console.count("Beep beep!"), 3);
    assert!(console.contains("All vehicles completed the race in their own unique ways!"));
}

#[test]
fn bad_vehicle_number_returns_to_menu() {
    let mut session = default_session();
    let mut console = MockConsole::new();
    let mut sink = MockSink::new();

    session.handle_line("2", &mut console, &mut sink);
    assert_eq!(session.handle_line("0", &mut console, &mut sink), StateId::AwaitingChoice);
    assert_eq!(session.selected(), None);
    assert_eq!(
        sink.events.last(),
        Some(&SessionEvent::StateChanged {
            from: StateId::SelectingEntity,
            to: StateId::AwaitingChoice
        })
    );
}

#[test]
fn end_of_input_is_not_an_exit() {
    let (console, sink, summary) = run(&["2", "3"]);
    assert!(!summary.exited);
    assert_eq!(sink.events.last(), Some(&SessionEvent::InputClosed));
    assert!(!console.contains("Goodbye"));
}

#[test]
fn whitespace_around_numbers_is_accepted() {
    let (_, sink, summary) = run(&[" 2 ", "\t4", " 1", "4"]);
    assert_eq!(sink.rejections(), 0);
    assert_eq!(summary.actions, 1);
    assert!(summary.exited);
}
