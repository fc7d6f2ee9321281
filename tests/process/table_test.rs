/*!
 * Process Table Tests
 * Pid allocation and ownership shared with queues
 */

use process_queue::{PriorityProcessQueue, ProcessError, ProcessTable, QueueConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_spawn_and_lookup() {
    let mut table = ProcessTable::new();
    let pid1 = table.spawn("app1").unwrap().pid();
    let pid2 = table.spawn("app2").unwrap().pid();
    let pid3 = table.spawn("app3").unwrap().pid();

    assert_eq!((pid1, pid2, pid3), (1, 2, 3));
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(pid2).unwrap().read().command(), "app2");
}

#[test]
fn test_lookup_missing_process() {
    let table = ProcessTable::new();
    assert_eq!(table.get(999).unwrap_err(), ProcessError::NotFound(999));
}

#[test]
fn test_removed_record_survives_in_queue() {
    let mut table = ProcessTable::with_config(&QueueConfig::new().with_default_priority(3));
    let mut queue = PriorityProcessQueue::new();

    let handle = table.spawn("long-running").unwrap();
    let pid = handle.pid();
    queue.push(handle);

    table.remove(pid).unwrap();
    assert!(!table.contains(pid));

    let popped = queue.pop().unwrap();
    assert_eq!(popped.pid(), pid);
    assert_eq!(popped.priority(), 3);
    assert_eq!(popped.holders(), 1);
}

#[test]
fn test_table_keeps_records_after_queue_dropped() {
    let mut table = ProcessTable::new();
    {
        let mut queue = PriorityProcessQueue::new();
        for command in ["a", "b", "c"] {
            queue.push(table.spawn(command).unwrap());
        }
        assert_eq!(queue.len(), 3);
    }

    for handle in table.handles() {
        assert_eq!(handle.holders(), 2);
    }
    assert_eq!(table.len(), 3);
}
