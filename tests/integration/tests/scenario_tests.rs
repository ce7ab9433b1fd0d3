//! End-to-end scenarios across the service layer
//!
//! Run with: cargo test -p integration-tests --test scenario_tests

use flockr_core::{DomainError, ErrorKind, UserId};
use flockr_service::dto::LoginRequest;
use flockr_service::ServiceError;
use integration_tests::{body_of_length, register_request, TestApp, PASSWORD};

// ============================================================================
// Auth
// ============================================================================

#[test]
fn test_register_login_logout() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    assert_eq!(owner.u_id, UserId::new(1));

    let again = app
        .auth()
        .login(LoginRequest {
            email: "owner@gmail.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .unwrap();
    assert_eq!(again.u_id, owner.u_id);
    assert_ne!(again.token, owner.token);

    assert!(app.auth().logout(&owner.token).is_success);
    assert!(!app.auth().logout(&owner.token).is_success);

    // The session opened by login is unaffected
    assert!(app.channels().list(&again.token).is_ok());
    assert_eq!(
        app.channels().list(&owner.token).unwrap_err().kind(),
        Some(ErrorKind::Access)
    );
}

#[test]
fn test_register_rejects_duplicate_email() {
    let app = TestApp::start().unwrap();
    app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let err = app
        .auth()
        .register(register_request("owner@gmail.com", "Other", "Person"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::EmailAlreadyExists)));
}

// ============================================================================
// Channel membership
// ============================================================================

#[test]
fn test_owners_stay_members() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let creator = app.register("creator@gmail.com", "Cat", "Creator").unwrap();
    let member = app.register("member@gmail.com", "Mo", "Member").unwrap();
    let channel_id = app.create_channel(&creator.token, "general", true).unwrap();

    app.channel().join(&member.token, channel_id).unwrap();
    assert!(app.owners_are_members(&creator.token, channel_id).unwrap());

    app.channel().add_owner(&creator.token, channel_id, member.u_id).unwrap();
    assert!(app.owners_are_members(&creator.token, channel_id).unwrap());

    // Leaving drops ownership along with membership
    app.channel().leave(&member.token, channel_id).unwrap();
    assert!(app.owners_are_members(&creator.token, channel_id).unwrap());

    app.channel().invite(&creator.token, channel_id, member.u_id).unwrap();
    let details = app.channel().details(&creator.token, channel_id).unwrap();
    assert_eq!(details.owner_members.len(), 1);
    assert_eq!(details.all_members.len(), 2);

    // A global owner outside the channel can still manage its owners
    app.channel().add_owner(&owner.token, channel_id, member.u_id).unwrap();
    app.channel().kick(&creator.token, channel_id, member.u_id).unwrap_err();
    app.channel().remove_owner(&owner.token, channel_id, member.u_id).unwrap();
    app.channel().kick(&creator.token, channel_id, member.u_id).unwrap();
    assert!(app.owners_are_members(&creator.token, channel_id).unwrap());

    let details = app.channel().details(&creator.token, channel_id).unwrap();
    let ids: Vec<_> = details.all_members.iter().map(|m| m.u_id).collect();
    assert_eq!(ids, vec![creator.u_id]);
}

#[test]
fn test_private_channel_access() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let member = app.register("member@gmail.com", "Mo", "Member").unwrap();
    let private = app.create_channel(&member.token, "secret", false).unwrap();
    let other = app.register("other@gmail.com", "Oz", "Other").unwrap();

    let err = app.channel().join(&other.token, private).unwrap_err();
    assert!(err.is_access());
    assert!(app.channel().details(&other.token, private).unwrap_err().is_access());

    app.channel().join(&owner.token, private).unwrap();
    let listed = app.channels().list_all(&other.token).unwrap();
    assert_eq!(listed.channels.len(), 1);
    assert!(app.channels().list(&other.token).unwrap().channels.is_empty());
}

// ============================================================================
// Messages
// ============================================================================

#[test]
fn test_paging_fifty_one_messages() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();
    for i in 1..=51 {
        app.send(&owner.token, channel_id, &format!("message {i}")).unwrap();
    }

    let first = app.channel().messages(&owner.token, channel_id, 0).unwrap();
    assert_eq!(first.messages.len(), 50);
    assert_eq!(first.end, 50);
    assert_eq!(first.messages[0].message, "message 51");

    let second = app.channel().messages(&owner.token, channel_id, 1).unwrap();
    assert_eq!(second.messages.len(), 50);
    assert_eq!(second.end, -1);
    assert_eq!(second.messages[49].message, "message 1");

    assert!(app.channel().messages(&owner.token, channel_id, 52).unwrap_err().is_input());
}

#[test]
fn test_message_length_limits() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();

    app.send(&owner.token, channel_id, &body_of_length(1000)).unwrap();
    let err = app.message().send(&owner.token, channel_id, &body_of_length(1001)).unwrap_err();
    assert!(err.is_input());
    assert!(app.message().send(&owner.token, channel_id, "").unwrap_err().is_input());
}

#[test]
fn test_empty_edit_is_remove() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();
    let kept = app.send(&owner.token, channel_id, "keep").unwrap();
    let edited = app.send(&owner.token, channel_id, "edit me").unwrap();
    let removed = app.send(&owner.token, channel_id, "remove me").unwrap();

    app.message().edit(&owner.token, edited, "").unwrap();
    app.message().remove(&owner.token, removed).unwrap();

    let history = app.history(&owner.token, channel_id).unwrap();
    let ids: Vec<_> = history.iter().map(|m| m.message_id).collect();
    assert_eq!(ids, vec![kept]);

    // Both are gone for good
    assert!(app.message().edit(&owner.token, edited, "again").unwrap_err().is_input());
    assert!(app.message().remove(&owner.token, removed).unwrap_err().is_input());
}

#[test]
fn test_edit_keeps_reacts_and_pin() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();
    let message_id = app.send(&owner.token, channel_id, "first draft").unwrap();

    app.reaction().react(&owner.token, message_id, 1).unwrap();
    app.message().pin(&owner.token, message_id).unwrap();
    app.message().edit(&owner.token, message_id, "final").unwrap();

    let history = app.history(&owner.token, channel_id).unwrap();
    assert_eq!(history[0].message_id, message_id);
    assert_eq!(history[0].message, "final");
    assert!(history[0].is_pinned);
    assert!(history[0].reacts[0].is_this_user_reacted);
}

#[test]
fn test_only_sender_or_moderator_may_edit() {
    let app = TestApp::start().unwrap();
    let _owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let creator = app.register("creator@gmail.com", "Cat", "Creator").unwrap();
    let member = app.register("member@gmail.com", "Mo", "Member").unwrap();
    let channel_id = app.create_channel(&creator.token, "general", true).unwrap();
    app.channel().join(&member.token, channel_id).unwrap();

    let by_creator = app.send(&creator.token, channel_id, "from the owner").unwrap();
    let by_member = app.send(&member.token, channel_id, "from a member").unwrap();

    assert!(app.message().edit(&member.token, by_creator, "hijack").unwrap_err().is_access());
    app.message().edit(&member.token, by_member, "fixed typo").unwrap();
    app.message().remove(&creator.token, by_member).unwrap();
}

#[test]
fn test_react_and_unreact() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let member = app.register("member@gmail.com", "Mo", "Member").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();
    app.channel().join(&member.token, channel_id).unwrap();
    let message_id = app.send(&owner.token, channel_id, "react to me").unwrap();

    app.reaction().react(&owner.token, message_id, 1).unwrap();
    assert!(app.reaction().react(&owner.token, message_id, 1).unwrap_err().is_input());
    assert!(app.reaction().react(&member.token, message_id, 2).unwrap_err().is_input());
    assert!(app.reaction().unreact(&member.token, message_id, 1).unwrap_err().is_input());

    app.reaction().react(&member.token, message_id, 1).unwrap();
    let seen_by_member = app.history(&member.token, channel_id).unwrap();
    let react = &seen_by_member[0].reacts[0];
    assert_eq!(react.u_ids, vec![owner.u_id, member.u_id]);
    assert!(react.is_this_user_reacted);

    app.reaction().unreact(&owner.token, message_id, 1).unwrap();
    let seen_by_owner = app.history(&owner.token, channel_id).unwrap();
    assert!(!seen_by_owner[0].reacts[0].is_this_user_reacted);
    assert_eq!(seen_by_owner[0].reacts[0].u_ids, vec![member.u_id]);

    app.reaction().unreact(&member.token, message_id, 1).unwrap();
    let seen_by_member = app.history(&member.token, channel_id).unwrap();
    assert_eq!(seen_by_member[0].reacts.len(), 1);
    assert!(seen_by_member[0].reacts[0].u_ids.is_empty());
    assert!(app.reaction().unreact(&member.token, message_id, 1).unwrap_err().is_input());
}

#[test]
fn test_pin_and_unpin() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let member = app.register("member@gmail.com", "Mo", "Member").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();
    app.channel().join(&member.token, channel_id).unwrap();
    let message_id = app.send(&member.token, channel_id, "pin me").unwrap();

    assert!(app.message().pin(&member.token, message_id).unwrap_err().is_access());

    app.message().pin(&owner.token, message_id).unwrap();
    assert!(app.message().pin(&owner.token, message_id).unwrap_err().is_input());

    app.message().unpin(&owner.token, message_id).unwrap();
    assert!(app.message().unpin(&owner.token, message_id).unwrap_err().is_input());
}

// ============================================================================
// Deferred work
// ============================================================================

#[test]
fn test_send_later_lands_at_the_end() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();

    let due = app.now() + 10;
    let scheduled = app.message().send_later(&owner.token, channel_id, "later", due).unwrap();
    let sent_now = app.send(&owner.token, channel_id, "now").unwrap();
    assert!(scheduled.message_id < sent_now);
    assert_eq!(app.history(&owner.token, channel_id).unwrap().len(), 1);

    app.clock.advance_secs(10);
    app.send(&owner.token, channel_id, "after").unwrap();

    let history = app.history(&owner.token, channel_id).unwrap();
    let bodies: Vec<_> = history.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(bodies, vec!["after", "later", "now"]);
    assert_eq!(history[1].time_created, due);
    assert_eq!(history[1].message_id, scheduled.message_id);

    let past = app.message().send_later(&owner.token, channel_id, "too late", app.now() - 1);
    assert!(past.unwrap_err().is_input());
}

#[test]
fn test_standup_compiles_six_lines() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let member = app.register("member@gmail.com", "Mo", "Member").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();
    app.channel().join(&member.token, channel_id).unwrap();

    let started = app.standup().start(&owner.token, channel_id, 5).unwrap();
    for i in 1..=3 {
        app.standup().send(&owner.token, channel_id, &format!("owner {i}")).unwrap();
        app.standup().send(&member.token, channel_id, &format!("member {i}")).unwrap();
    }
    assert!(app.history(&owner.token, channel_id).unwrap().is_empty());

    app.clock.advance_secs(5);
    let history = app.history(&owner.token, channel_id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].u_id, owner.u_id);
    assert_eq!(history[0].time_created, started.time_finish);
    assert_eq!(history[0].message.lines().count(), 6);
    assert_eq!(
        history[0].message,
        "haydensmith: owner 1\nmomember: member 1\nhaydensmith: owner 2\n\
         momember: member 2\nhaydensmith: owner 3\nmomember: member 3"
    );

    let active = app.standup().active(&member.token, channel_id).unwrap();
    assert!(!active.is_active);
    // A new standup can start once the last one is over
    app.standup().start(&member.token, channel_id, 1).unwrap();
}

#[test]
fn test_empty_standup_posts_nothing() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();

    app.standup().start(&owner.token, channel_id, 2).unwrap();
    app.clock.advance_secs(2);
    assert!(app.history(&owner.token, channel_id).unwrap().is_empty());
    assert!(!app.standup().active(&owner.token, channel_id).unwrap().is_active);
}

// ============================================================================
// Search, users and admin
// ============================================================================

#[test]
fn test_search_matches_case() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let first = app.create_channel(&owner.token, "first", true).unwrap();
    let second = app.create_channel(&owner.token, "second", true).unwrap();
    app.send(&owner.token, second, "Hello").unwrap();
    app.send(&owner.token, first, "hello").unwrap();
    app.send(&owner.token, first, "Helloooo").unwrap();

    let found = app.search().search(&owner.token, "Hello").unwrap();
    let bodies: Vec<_> = found.messages.iter().map(|m| m.message.as_str()).collect();
    // Channel creation order, then message order
    assert_eq!(bodies, vec!["Helloooo", "Hello"]);

    assert!(app.search().search(&owner.token, "absent").unwrap().messages.is_empty());
}

#[test]
fn test_handles_and_profiles() {
    let app = TestApp::start().unwrap();
    let first = app.register("first@gmail.com", "Hayden", "Smith").unwrap();
    let second = app.register("second@gmail.com", "Hayden", "Smith").unwrap();
    let long = app.register("long@gmail.com", "Abcdefghijklmn", "Opqrstuvwxyz").unwrap();

    let profile = |u_id| app.user().profile(&first.token, u_id).unwrap().user.handle_str;
    assert_eq!(profile(first.u_id), "haydensmith");
    assert_eq!(profile(second.u_id), "haydensmith1");
    assert_eq!(profile(long.u_id), "abcdefghijklmnopqrst");

    let users = app.user().all(&second.token).unwrap().users;
    assert_eq!(users.len(), 3);
}

#[test]
fn test_clear_resets_state() {
    let app = TestApp::start().unwrap();
    let owner = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    let channel_id = app.create_channel(&owner.token, "general", true).unwrap();
    app.message()
        .send_later(&owner.token, channel_id, "never", app.now() + 5)
        .unwrap();

    app.admin().clear();
    assert_eq!(app.ctx.pending_tasks(), 0);

    let fresh = app.register("owner@gmail.com", "Hayden", "Smith").unwrap();
    assert_eq!(fresh.u_id, UserId::new(1));
    assert!(app.channels().list_all(&fresh.token).unwrap().channels.is_empty());
}
