use proptest::prelude::*;
use qc_users::UserStore;

#[test]
fn create_then_reopen_yields_same_users() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_data.json");

    let mut store = UserStore::open(&path);
    store.create("alice", "pw1").unwrap();
    store.create("bob", "pw2").unwrap();

    let reopened = UserStore::open(&path);
    assert_eq!(reopened.len(), 2);
    assert!(reopened.authenticate("alice", "pw1"));
    assert!(reopened.authenticate("bob", "pw2"));
}

#[test]
fn persisted_document_has_users_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_data.json");

    let mut store = UserStore::open(&path);
    store.create("alice", "pw1").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(doc["users"][0]["username"], "alice");
    assert_eq!(doc["users"][0]["password"], "pw1");
}

proptest! {
    // Any non-blank pair survives a create/reopen/authenticate round trip.
    #[test]
    fn create_reopen_authenticate(
        username in "[a-zA-Z0-9_]{1,16}",
        password in "[a-zA-Z0-9_]{1,16}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");

        let mut store = UserStore::open(&path);
        store.create(&username, &password).unwrap();

        let reopened = UserStore::open(&path);
        prop_assert!(reopened.authenticate(&username, &password));
        prop_assert_eq!(reopened.len(), 1);
    }
}
