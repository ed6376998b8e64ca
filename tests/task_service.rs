//! Integration tests for the task service over a real task file

use std::fs;
use std::thread;

use taskcli::task::{CompleteOutcome, DeleteOutcome, ListFilter, Store, Task, TaskService};
use tempfile::TempDir;

fn setup() -> (TempDir, TaskService) {
    let temp = TempDir::new().unwrap();
    let service = TaskService::new(store(&temp));
    (temp, service)
}

fn store(temp: &TempDir) -> Store {
    Store::new(temp.path().join("tasks.json"))
}

fn snapshot(temp: &TempDir) -> Vec<(u32, String, bool)> {
    store(temp)
        .load()
        .unwrap()
        .into_iter()
        .map(|t| (t.id, t.title, t.done))
        .collect()
}

#[test]
fn test_walkthrough() {
    let (temp, service) = setup();

    let task = service.add("Buy milk").unwrap();
    assert_eq!(task.id, 1);
    assert_eq!(snapshot(&temp), vec![(1, "Buy milk".to_string(), false)]);

    service.add("Pay bills").unwrap();
    let ids: Vec<u32> = snapshot(&temp).iter().map(|t| t.0).collect();
    assert_eq!(ids, vec![1, 2]);

    assert_eq!(service.complete(1).unwrap(), CompleteOutcome::Completed);
    assert!(snapshot(&temp)[0].2);
    assert_eq!(service.complete(1).unwrap(), CompleteOutcome::AlreadyDone);

    assert_eq!(service.delete(1).unwrap(), DeleteOutcome::Deleted);
    assert_eq!(snapshot(&temp), vec![(1, "Pay bills".to_string(), false)]);

    let before = fs::read(store(&temp).path()).unwrap();
    assert_eq!(service.delete(5).unwrap(), DeleteOutcome::NotFound);
    assert_eq!(fs::read(store(&temp).path()).unwrap(), before);
}

#[test]
fn test_delete_from_middle_keeps_relative_order() {
    let (temp, service) = setup();
    let titles: Vec<String> = (1..=8).map(|n| format!("task {n}")).collect();
    for title in &titles {
        service.add(title).unwrap();
    }

    service.delete(4).unwrap();

    let after = snapshot(&temp);
    let ids: Vec<u32> = after.iter().map(|t| t.0).collect();
    assert_eq!(ids, (1..=7).collect::<Vec<u32>>());

    let expected: Vec<&String> = titles.iter().filter(|t| *t != "task 4").collect();
    let actual: Vec<&String> = after.iter().map(|t| &t.1).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_pending_listing_never_yields_done() {
    let (_temp, service) = setup();
    for n in 1..=6 {
        service.add(&format!("task {n}")).unwrap();
    }
    for id in [1, 3, 6] {
        service.complete(id).unwrap();
    }

    let pending: Vec<Task> = service.list(ListFilter::PendingOnly).unwrap().collect();
    assert_eq!(pending.len(), 3);
    assert!(pending.iter().all(|t| !t.done));
    assert_eq!(service.list(ListFilter::All).unwrap().count(), 6);
}

#[test]
fn test_save_load_roundtrip_is_stable() {
    let (temp, service) = setup();
    service.add("Übung macht den Meister").unwrap();
    service.add("寿司を買う").unwrap();
    service.add("quote \" and \\ backslash").unwrap();
    service.complete(2).unwrap();

    let task_store = store(&temp);
    let first = fs::read(task_store.path()).unwrap();
    let loaded = task_store.load().unwrap();
    task_store.save(&loaded).unwrap();

    assert_eq!(fs::read(task_store.path()).unwrap(), first);
    assert_eq!(task_store.load().unwrap(), loaded);

    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("寿司を買う"));
}

#[test]
fn test_file_written_by_hand_is_read() {
    let (temp, service) = setup();
    fs::write(
        store(&temp).path(),
        r#"[
  {
    "id": 1,
    "title": "Buy milk",
    "created_at": "2025-01-31T18:04:05",
    "done": false
  },
  {
    "id": 2,
    "title": "Pay bills",
    "created_at": "2025-02-01T09:00:00",
    "done": true
  }
]"#,
    )
    .unwrap();

    let lines: Vec<String> = service
        .list(ListFilter::All)
        .unwrap()
        .map(|t| t.to_list_line())
        .collect();
    assert_eq!(
        lines,
        vec![
            "⏳ [1] Buy milk (created 2025-01-31T18:04:05)",
            "✅ [2] Pay bills (created 2025-02-01T09:00:00)",
        ]
    );
}

#[test]
fn test_concurrent_adds_lose_nothing() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("tasks.json");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let path = path.clone();
            thread::spawn(move || {
                let service = TaskService::new(Store::new(path));
                for n in 0..10 {
                    service.add(&format!("worker {worker} task {n}")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let tasks = Store::new(&path).load().unwrap();
    assert_eq!(tasks.len(), 40);
    let ids: Vec<u32> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=40).collect::<Vec<u32>>());
}
