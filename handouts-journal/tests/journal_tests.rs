use handouts_journal::{Journal, JournalDirectory, Page, SORT_STEP};
use pretty_assertions::assert_eq;

// ── Page ──────────────────────────────────────────────────────────

#[test]
fn new_page_has_no_provenance() {
    let page = Page::new("Chapter 1", "Once upon a time", SORT_STEP);
    assert!(page.shared_from.is_none());
    assert_eq!(page.sort, SORT_STEP);
}

#[test]
fn clone_as_shared_copies_content_verbatim() {
    let original = Page::new("Chapter 1", "Once upon a time", 30_000);
    let clone = original.clone_as_shared(10_000);

    assert_ne!(clone.id, original.id);
    assert_eq!(clone.shared_from, Some(original.id));
    assert_eq!(clone.sort, 10_000);
    assert!(clone.content_eq(&original));
}

#[test]
fn content_eq_ignores_identity_and_sort() {
    let a = Page::new("Map", "here be dragons", 10_000);
    let b = a.clone_as_shared(90_000);
    assert!(a.content_eq(&b));

    let c = Page::new("Map", "different text", 10_000);
    assert!(!a.content_eq(&c));
}

#[test]
fn page_serde_omits_absent_provenance() {
    let page = Page::new("Notes", "text", 10_000);
    let json = serde_json::to_string(&page).unwrap();
    assert!(!json.contains("shared_from"));

    let shared = page.clone_as_shared(20_000);
    let json = serde_json::to_string(&shared).unwrap();
    assert!(json.contains("shared_from"));
}

// ── Journal ───────────────────────────────────────────────────────

#[test]
fn empty_journal_max_sort_is_zero() {
    let journal = Journal::new("Players");
    assert!(journal.is_empty());
    assert_eq!(journal.max_sort(), 0);
    assert_eq!(journal.next_sort(), SORT_STEP);
}

#[test]
fn insert_and_lookup() {
    let mut journal = Journal::new("GM");
    let page = Page::new("Chapter 1", "text", SORT_STEP);
    let id = page.id;
    journal.insert(page);

    assert_eq!(journal.len(), 1);
    assert!(journal.contains(id));
    assert_eq!(journal.page(id).unwrap().name, "Chapter 1");
}

#[test]
fn remove_returns_the_page() {
    let mut journal = Journal::new("GM");
    let page = Page::new("Chapter 1", "text", SORT_STEP);
    let id = page.id;
    journal.insert(page);

    let removed = journal.remove(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(journal.is_empty());
    assert!(journal.remove(id).is_none());
}

#[test]
fn next_sort_steps_past_gaps() {
    let mut journal = Journal::new("Players");
    journal.insert(Page::new("a", "", 10_000));
    journal.insert(Page::new("b", "", 70_000));
    journal.insert(Page::new("c", "", 30_000));

    // Max wins even when keys are out of insertion order.
    assert_eq!(journal.next_sort(), 80_000);
}

// ── JournalDirectory ──────────────────────────────────────────────

#[test]
fn directory_resolves_by_id() {
    let mut directory = JournalDirectory::new();
    let id = directory.insert(Journal::new("Players"));

    assert_eq!(directory.len(), 1);
    assert_eq!(directory.journal(id).unwrap().name, "Players");
    assert!(directory.journal(handouts_types::JournalId::new()).is_none());
}

#[test]
fn directory_mutable_resolution() {
    let mut directory = JournalDirectory::new();
    let id = directory.insert(Journal::new("Players"));

    directory
        .journal_mut(id)
        .unwrap()
        .insert(Page::new("Chapter 1", "text", SORT_STEP));

    assert_eq!(directory.journal(id).unwrap().len(), 1);
}
