//! End-to-end tests of the client core against recording doubles
//!
//! Each test feeds server-pushed events and user intents through a full
//! [`chat_client::ChatClient`] and asserts on derived state and emitted
//! commands.

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use chat_client::{ConnectionStatus, SessionState, TYPING_IDLE};
use chat_core::{ChatMessage, ClientCommand, OnlineUser, UserId};
use integration_tests::{broadcast, private, recording_client, typing_users, user_list};

#[test]
fn roster_equals_most_recent_snapshot() {
    let (_, _, _, mut client) = recording_client();

    client.handle_event(user_list(&[("1", "alice"), ("2", "bob")]));
    client.handle_event(user_list(&[("2", "bob"), ("3", "carol")]));
    client.handle_event(user_list(&[("3", "carol")]));

    assert_eq!(client.users(), &[OnlineUser::new("3", "carol")]);
}

#[test]
fn log_grows_by_one_per_event_in_arrival_order() {
    let (_, _, _, mut client) = recording_client();

    // Timestamps deliberately reordered; arrival order must win
    client.handle_event(broadcast("alice", "first", 300));
    client.handle_event(private("bob", "second", 100));
    client.handle_event(broadcast("carol", "third", 200));

    let texts: Vec<&str> = client
        .messages()
        .iter()
        .map(|m| m.message.as_str())
        .collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn empty_message_produces_no_emission_and_no_mutation() {
    let (channel, _, _, mut client) = recording_client();
    client.register("alice");
    client.handle_event(user_list(&[("1", "alice"), ("2", "bob")]));
    client.toggle_recipient(&UserId::new("2"));
    let before = channel.commands().len();

    assert!(!client.submit_message(""));
    assert!(!client.submit_message("   "));

    assert_eq!(channel.commands().len(), before);
    assert!(client.messages().is_empty());
}

#[test]
fn registration_trims_and_transitions_once() {
    let (channel, _, _, mut client) = recording_client();

    assert!(!client.register("  "));
    assert_eq!(client.session_state(), SessionState::Unregistered);

    assert!(client.register(" Alice "));
    assert_eq!(client.session_state(), SessionState::Registered);
    assert_eq!(
        channel.commands(),
        vec![ClientCommand::UserJoin {
            username: "Alice".to_string()
        }]
    );
}

#[test]
fn unread_counts_unfocused_broadcasts_and_resets_on_focus() {
    let (_, _, _, mut client) = recording_client();
    client.set_focused(false);

    for i in 0..3 {
        client.handle_event(broadcast("bob", &format!("m{i}"), i));
    }
    assert_eq!(client.unread_count(), 3);

    client.set_focused(true);
    assert_eq!(client.unread_count(), 0);
    // The log itself is untouched by focus changes
    assert_eq!(client.messages().len(), 3);
}

#[test]
fn filter_is_pure_case_insensitive_projection() {
    let (_, _, _, mut client) = recording_client();
    client.handle_event(broadcast("alice", "say hello world", 1));
    client.handle_event(broadcast("bob", "unrelated", 2));

    assert_eq!(client.filtered_messages("").count(), 2);

    let hits: Vec<&ChatMessage> = client.filtered_messages("HELLO").collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].sender, "alice");

    // Projection never mutates the log
    assert_eq!(client.messages().len(), 2);
}

#[test]
fn recipient_toggle_twice_returns_to_none() {
    let (_, _, _, mut client) = recording_client();
    client.handle_event(user_list(&[("1", "alice"), ("2", "bob")]));

    let bob = UserId::new("2");
    client.toggle_recipient(&bob);
    assert_eq!(client.recipient(), Some(&bob));

    client.toggle_recipient(&bob);
    assert_eq!(client.recipient(), None);
}

#[test]
fn selected_recipient_routes_private() {
    let (channel, _, _, mut client) = recording_client();
    client.register("alice");
    client.handle_event(user_list(&[("1", "alice"), ("2", "bob")]));
    client.toggle_recipient(&UserId::new("2"));

    assert!(client.submit_message("psst"));

    let private_cmd = channel
        .commands()
        .into_iter()
        .find(|cmd| matches!(cmd, ClientCommand::PrivateMessage { .. }));
    match private_cmd {
        Some(ClientCommand::PrivateMessage { message, to, .. }) => {
            assert_eq!(message, "psst");
            assert_eq!(to, UserId::new("2"));
        }
        other => panic!("expected private message, got {other:?}"),
    }
}

#[test]
fn departed_recipient_falls_back_to_broadcast() {
    let (channel, _, _, mut client) = recording_client();
    client.register("alice");
    client.handle_event(user_list(&[("1", "alice"), ("2", "bob")]));
    client.toggle_recipient(&UserId::new("2"));

    client.handle_event(user_list(&[("1", "alice")]));
    assert_eq!(client.recipient(), None);

    assert!(client.submit_message("anyone?"));
    assert!(channel
        .commands()
        .iter()
        .any(|cmd| matches!(cmd, ClientCommand::SendMessage { .. })));
    assert!(!channel
        .commands()
        .iter()
        .any(|cmd| matches!(cmd, ClientCommand::PrivateMessage { .. })));
}

#[test]
fn broadcast_side_effects_fire_exactly_once() {
    let (_, sounds, notifications, mut client) = recording_client();

    client.handle_event(broadcast("alice", "hello", 42));
    // Transport redelivery of the same logical message
    client.handle_event(broadcast("alice", "hello", 42));

    assert_eq!(client.messages().len(), 1);
    assert_eq!(sounds.load(Ordering::SeqCst), 1);

    let raised = notifications.lock().unwrap();
    assert_eq!(raised.as_slice(), &[("alice".to_string(), "hello".to_string())]);
}

#[test]
fn private_messages_raise_no_side_effects() {
    let (_, sounds, notifications, mut client) = recording_client();
    client.set_focused(false);

    client.handle_event(private("bob", "secret", 1));

    assert_eq!(client.messages().len(), 1);
    assert_eq!(sounds.load(Ordering::SeqCst), 0);
    assert!(notifications.lock().unwrap().is_empty());
    assert_eq!(client.unread_count(), 0);
}

#[test]
fn typing_emission_is_edge_triggered_with_idle_clear() {
    let (channel, _, _, mut client) = recording_client();
    client.register("alice");
    let joined = channel.commands().len();

    client.input_changed("h");
    client.input_changed("he");
    client.input_changed("hey");
    client.tick(Instant::now());

    assert_eq!(
        channel.commands()[joined..],
        [ClientCommand::Typing(true)]
    );

    client.tick(Instant::now() + TYPING_IDLE + Duration::from_millis(1));
    assert_eq!(
        channel.commands()[joined..],
        [ClientCommand::Typing(true), ClientCommand::Typing(false)]
    );
}

#[test]
fn typing_snapshot_display_excludes_self() {
    let (_, _, _, mut client) = recording_client();
    client.register("alice");

    client.handle_event(typing_users(&["alice", "bob"]));
    assert_eq!(client.typing_display(), vec!["bob"]);

    client.handle_event(typing_users(&["carol"]));
    assert_eq!(client.typing_display(), vec!["carol"]);
}

#[test]
fn unregistered_intents_are_gated() {
    let (channel, _, _, mut client) = recording_client();

    assert!(!client.submit_message("hello"));
    client.input_changed("hello");

    assert!(channel.commands().is_empty());
}

#[test]
fn terminal_connect_failure_preserves_session_state() {
    let (_, _, _, mut client) = recording_client();
    client.register("alice");
    client.handle_event(broadcast("bob", "hi", 1));

    client.handle_signal(chat_client::ChannelSignal::ConnectFailed);

    assert_eq!(client.connection_status(), ConnectionStatus::Failed);
    assert_eq!(client.session_state(), SessionState::Registered);
    assert_eq!(client.messages().len(), 1);
}
