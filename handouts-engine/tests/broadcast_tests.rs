use handouts_engine::{mock::RecordingViewer, Session, SocketHub};
use handouts_journal::{Journal, JournalDirectory};
use handouts_types::{JournalId, PageId, SocketMessage, UserId};
use std::collections::HashSet;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A directory that can resolve `players_id`.
fn directory_with(players: &Journal) -> JournalDirectory {
    let mut directory = JournalDirectory::new();
    directory.insert(players.clone());
    directory
}

fn session(hub: &SocketHub, directory: JournalDirectory) -> (Session, RecordingViewer) {
    let viewer = RecordingViewer::new();
    let session = Session::connect(
        hub,
        UserId::new(),
        directory,
        HashSet::new(),
        Box::new(viewer.clone()),
    );
    (session, viewer)
}

#[tokio::test]
async fn announce_reaches_every_connected_session() {
    init_tracing();
    let hub = SocketHub::new();
    let players = Journal::new("Players");
    let players_id = players.id;
    let page_id = PageId::new();

    let (mut s1, v1) = session(&hub, directory_with(&players));
    let (mut s2, v2) = session(&hub, directory_with(&players));
    let (mut s3, v3) = session(&hub, directory_with(&players));

    hub.announce(players_id, page_id);

    assert!(s1.recv().await);
    assert!(s2.recv().await);
    assert!(s3.recv().await);

    for viewer in [v1, v2, v3] {
        assert_eq!(viewer.opened(), vec![(players_id, page_id)]);
    }
}

#[tokio::test]
async fn unresolvable_journal_drops_silently() {
    let hub = SocketHub::new();
    let players = Journal::new("Players");
    let players_id = players.id;

    // One session can see the journal, one cannot.
    let (mut visible, visible_viewer) = session(&hub, directory_with(&players));
    let (mut hidden, hidden_viewer) = session(&hub, JournalDirectory::new());

    hub.announce(players_id, PageId::new());

    assert!(visible.recv().await);
    assert!(hidden.recv().await);

    assert_eq!(visible_viewer.open_count(), 1);
    assert_eq!(hidden_viewer.open_count(), 0);
}

#[tokio::test]
async fn unknown_event_kind_is_a_no_op() {
    let hub = SocketHub::new();
    let players = Journal::new("Players");
    let (mut s, viewer) = session(&hub, directory_with(&players));

    // Inject a raw frame with a tag this version does not know.
    let raw = format!(
        r#"{{"event":"close-page","journalId":"{}","pageId":"{}"}}"#,
        players.id,
        PageId::new()
    );
    hub.send_raw(raw);

    assert!(s.recv().await);
    assert_eq!(viewer.open_count(), 0);
}

#[tokio::test]
async fn blacklisted_user_does_not_open() {
    let hub = SocketHub::new();
    let players = Journal::new("Players");
    let players_id = players.id;

    let blocked_user = UserId::new();
    let blacklist: HashSet<UserId> = [blocked_user].into_iter().collect();

    let blocked_viewer = RecordingViewer::new();
    let mut blocked = Session::connect(
        &hub,
        blocked_user,
        directory_with(&players),
        blacklist.clone(),
        Box::new(blocked_viewer.clone()),
    );

    // Same blacklist, different user: unaffected.
    let open_viewer = RecordingViewer::new();
    let mut open = Session::connect(
        &hub,
        UserId::new(),
        directory_with(&players),
        blacklist,
        Box::new(open_viewer.clone()),
    );

    hub.announce(players_id, PageId::new());

    assert!(blocked.recv().await);
    assert!(open.recv().await);

    assert_eq!(blocked_viewer.open_count(), 0);
    assert_eq!(open_viewer.open_count(), 1);
}

#[tokio::test]
async fn announce_without_subscribers_is_not_an_error() {
    let hub = SocketHub::new();
    hub.announce(JournalId::new(), PageId::new());
}

#[test]
fn drain_handles_all_queued_messages() {
    let hub = SocketHub::new();
    let players = Journal::new("Players");
    let players_id = players.id;
    let (mut s, viewer) = session(&hub, directory_with(&players));

    let pages: Vec<PageId> = (0..3).map(|_| PageId::new()).collect();
    for page in &pages {
        hub.announce(players_id, *page);
    }

    assert_eq!(s.drain(), 3);
    assert_eq!(
        viewer.opened(),
        pages.iter().map(|p| (players_id, *p)).collect::<Vec<_>>()
    );
    assert_eq!(s.drain(), 0);
}

#[test]
fn late_subscriber_misses_earlier_announcements() {
    let hub = SocketHub::new();
    let players = Journal::new("Players");
    let players_id = players.id;

    hub.announce(players_id, PageId::new());

    // Connected after the fact: best-effort means no replay.
    let (mut s, viewer) = session(&hub, directory_with(&players));
    assert_eq!(s.drain(), 0);
    assert_eq!(viewer.open_count(), 0);
}

#[test]
fn malformed_frame_is_a_no_op() {
    let hub = SocketHub::new();
    let players = Journal::new("Players");
    let (mut s, viewer) = session(&hub, directory_with(&players));

    hub.send_raw("{not json");

    assert_eq!(s.drain(), 1);
    assert_eq!(viewer.open_count(), 0);
}

#[test]
fn raw_frame_matches_the_documented_envelope() {
    let hub = SocketHub::new();
    let players_id = JournalId::new();
    let page_id = PageId::new();
    let mut rx = hub.subscribe();

    hub.announce(players_id, page_id);

    let raw = rx.try_recv().unwrap();
    let decoded = SocketMessage::decode(&raw).unwrap();
    assert_eq!(decoded, SocketMessage::open_page(players_id, page_id));
}
