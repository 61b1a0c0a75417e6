use super::*;

#[test]
fn memory_read_returns_written_value() {
    let storage = StorageHandle::memory();
    storage.write("token", "abc123");
    assert_eq!(storage.read("token"), Some("abc123".to_owned()));
}

#[test]
fn memory_read_missing_key_is_none() {
    let storage = StorageHandle::memory();
    assert_eq!(storage.read("token"), None);
}

#[test]
fn delete_removes_entry_and_is_idempotent() {
    let storage = StorageHandle::memory();
    storage.write("user", "{}");
    storage.delete("user");
    assert_eq!(storage.read("user"), None);
    storage.delete("user");
    assert_eq!(storage.read("user"), None);
}

#[test]
fn clones_share_the_same_backend() {
    let storage = StorageHandle::memory();
    let other = storage.clone();
    storage.write("token", "shared");
    assert_eq!(other.read("token"), Some("shared".to_owned()));
}

#[test]
fn separate_memory_handles_are_isolated() {
    let first = StorageHandle::memory();
    let second = StorageHandle::memory();
    first.write("token", "one");
    assert_eq!(second.read("token"), None);
}
