//! Session tests: input events in, peer lines out.

use std::io::Cursor;

use peek_guess::catalog::{CategoryRegistry, Settings, ZODIAC};
use peek_guess::core::WordList;
use peek_guess::engine::{GuessGame, Phase, Verdict};
use peek_guess::input::{InputEvent, InputMethod, SwipeTracker};
use peek_guess::peer::{MemoryLink, PeerCodec, PeerLink, StreamLink};
use peek_guess::session::{PeerStatus, Session, SessionUpdate};

fn zodiac_session() -> Session<MemoryLink> {
    let words = CategoryRegistry::with_builtins().get(ZODIAC).unwrap().clone();
    Session::new(GuessGame::new(words), PeerCodec::default())
}

fn connected_session() -> Session<MemoryLink> {
    let mut session = zodiac_session();
    session.attach(MemoryLink::new()).unwrap();
    session
}

fn sent(session: &Session<MemoryLink>) -> Vec<String> {
    session.link().unwrap().sent().to_vec()
}

// =============================================================================
// Output Sink
// =============================================================================

#[test]
fn test_peer_sees_questions_then_word() {
    let mut session = connected_session();

    session.handle(InputEvent::YES).unwrap();
    session.handle(InputEvent::NO).unwrap();
    session.handle(InputEvent::YES).unwrap();

    assert_eq!(sent(&session), vec!["$n\n", "$a\n", "$l\n", "$LION\n"]);
}

#[test]
fn test_restart_sends_first_question() {
    let mut session = connected_session();
    session.handle(InputEvent::YES).unwrap();

    let update = session.handle(InputEvent::Restart).unwrap();

    assert_eq!(update, SessionUpdate::Restarted(peek_guess::Letter::new('n')));
    assert_eq!(sent(&session).last().map(String::as_str), Some("$n\n"));
    assert_eq!(session.game().candidates().len(), 12);
}

#[test]
fn test_answer_after_solve_is_ignored_and_silent() {
    let mut session = connected_session();
    for event in [InputEvent::YES, InputEvent::NO, InputEvent::YES] {
        session.handle(event).unwrap();
    }
    let before = sent(&session).len();

    assert_eq!(session.handle(InputEvent::YES).unwrap(), SessionUpdate::Ignored);
    assert_eq!(sent(&session).len(), before);
}

#[test]
fn test_no_match_sends_nothing() {
    let words = WordList::new(["rome", "more", "lion"]).unwrap();
    let mut session = Session::new(GuessGame::new(words), PeerCodec::default());
    session.attach(MemoryLink::new()).unwrap();

    session.handle(InputEvent::YES).unwrap();
    let update = session.handle(InputEvent::NO).unwrap();

    assert!(matches!(
        update,
        SessionUpdate::Answered(ref outcome) if outcome.phase == Phase::Converged(Verdict::NoMatch)
    ));
    assert_eq!(sent(&session), vec!["$r\n", "$r\n"]);
}

#[test]
fn test_custom_marker() {
    let words = CategoryRegistry::with_builtins().get(ZODIAC).unwrap().clone();
    let mut session = Session::new(GuessGame::new(words), PeerCodec::new('#'));
    session.attach(MemoryLink::new()).unwrap();
    session.send_test().unwrap();

    assert_eq!(sent(&session), vec!["#n\n", "#Test\n"]);
}

#[test]
fn test_detached_session_still_plays() {
    let mut session = zodiac_session();
    assert_eq!(session.status(), PeerStatus::Disconnected);

    let update = session.handle(InputEvent::NO).unwrap();
    match update {
        SessionUpdate::Answered(outcome) => assert_eq!(outcome.remaining, 6),
        other => panic!("unexpected update {other:?}"),
    }
}

// =============================================================================
// Input Source
// =============================================================================

#[test]
fn test_peer_buttons_drive_the_game() {
    let mut session = connected_session();
    {
        let mut link = session.detach().unwrap();
        for message in ["button_right", "button_left", "battery:90", "button_right"] {
            link.push_incoming(message);
        }
        session.attach(link).unwrap();
    }

    let mut updates = Vec::new();
    while let Some(update) = session.poll_peer().unwrap() {
        updates.push(update);
    }

    assert_eq!(updates.len(), 4);
    assert_eq!(updates[2], SessionUpdate::Ignored);
    assert_eq!(
        session.game().phase(),
        &Phase::Converged(Verdict::Solved("lion".to_string()))
    );
}

#[test]
fn test_side_button_restarts() {
    let mut session = connected_session();
    session.handle(InputEvent::YES).unwrap();

    let mut link = session.detach().unwrap();
    link.push_incoming("button_side");
    session.attach(link).unwrap();

    let update = session.poll_peer().unwrap();
    assert!(matches!(update, Some(SessionUpdate::Restarted(Some(_)))));
    assert!(session.game().history().is_empty());
}

#[test]
fn test_swipes_drive_the_game() {
    let mut session = zodiac_session();
    let mut swipe = SwipeTracker::new(50.0);

    // up, down, up
    for (start, end) in [(500.0, 300.0), (300.0, 500.0), (600.0, 100.0)] {
        swipe.touch_start(start);
        let event = swipe.touch_end(end).unwrap();
        session.handle(event).unwrap();
    }

    assert_eq!(session.game().verdict().and_then(Verdict::word), Some("lion"));
}

#[test]
fn test_session_swipes_follow_input_method() {
    let swipe_settings = Settings::default();
    let mut session = zodiac_session().with_swipe(swipe_settings.swipe_tracker());
    session.touch_start(500.0);
    assert!(matches!(session.touch_end(300.0).unwrap(), SessionUpdate::Answered(_)));

    // Too short
    session.touch_start(300.0);
    assert_eq!(session.touch_end(320.0).unwrap(), SessionUpdate::Ignored);
    assert_eq!(session.game().history().len(), 1);

    let peer_settings = Settings::default().with_input(InputMethod::Peer);
    let mut session = zodiac_session().with_swipe(peer_settings.swipe_tracker());
    session.touch_start(500.0);
    assert_eq!(session.touch_end(100.0).unwrap(), SessionUpdate::Ignored);
    assert!(session.game().history().is_empty());

    // Buttons still work
    session.attach(MemoryLink::new()).unwrap();
    let mut link = session.detach().unwrap();
    link.push_incoming("button_right");
    session.attach(link).unwrap();
    assert!(matches!(session.poll_peer().unwrap(), Some(SessionUpdate::Answered(_))));
}

#[test]
fn test_stream_link_bridge() {
    let input = Cursor::new(b"button_left\nbutton_left\nbutton_left\nbutton_left\n".to_vec());
    let words = CategoryRegistry::with_builtins().get(ZODIAC).unwrap().clone();
    let mut session = Session::new(GuessGame::new(words), PeerCodec::default());
    session.attach(StreamLink::new(input, Vec::new())).unwrap();

    while session.poll_peer().unwrap().is_some() {}

    // n no, i no, t no, g no -> verseau
    assert_eq!(session.game().verdict().and_then(Verdict::word), Some("verseau"));

    let mut link = session.detach().unwrap();
    assert_eq!(link.receive_line().unwrap(), None);
    let (_, written) = link.into_inner();
    assert_eq!(String::from_utf8(written).unwrap(), "$n\n$i\n$t\n$g\n$VERSEAU\n");
}
