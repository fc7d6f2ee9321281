/*!
 * Process Record Tests
 * Construction defaults, usage accounting, and state changes
 */

use process_queue::{ProcessError, ProcessRecord, ProcessState};
use pretty_assertions::assert_eq;

#[test]
fn test_process_creation() {
    let command1 = "find . -name *.hpp -print";
    let process1 = ProcessRecord::new(1, command1).unwrap();

    assert_eq!(process1.pid(), 1);
    assert_eq!(process1.command(), command1);
    assert_eq!(process1.cpu_usage(), 0);
    assert_eq!(process1.state(), ProcessState::New);
    assert_eq!(process1.priority(), 0);

    // A second record is independent of the first
    let process2 = ProcessRecord::new(2, "grep hello *.txt").unwrap();
    assert_eq!(process2.pid(), 2);
    assert_eq!(process2.command(), "grep hello *.txt");
    assert_eq!(process1.pid(), 1);
    assert_eq!(process1.command(), command1);
}

#[test]
fn test_set_state() {
    let mut process1 = ProcessRecord::new(1, "find . -name *.hpp -print").unwrap();
    process1.set_state(ProcessState::Running);
    assert_eq!(process1.state(), ProcessState::Running);
    process1.set_state(ProcessState::Blocked);
    assert_eq!(process1.state(), ProcessState::Blocked);

    let mut process2 = ProcessRecord::new(2, "grep hello *.txt").unwrap();
    assert_eq!(process2.state(), ProcessState::New);
    process2.set_state(ProcessState::Terminated);
    assert_eq!(process2.state(), ProcessState::Terminated);

    assert_eq!(process1.state(), ProcessState::Blocked);
}

#[test]
fn test_update_usage() {
    let mut process1 = ProcessRecord::new(1, "find . -name *.hpp -print").unwrap();
    process1.add_usage(5).unwrap();
    assert_eq!(process1.cpu_usage(), 5);
    process1.add_usage(3).unwrap();
    assert_eq!(process1.cpu_usage(), 8);

    let mut process2 = ProcessRecord::new(2, "grep hello *.txt").unwrap();
    process2.add_usage(10).unwrap();
    assert_eq!(process2.cpu_usage(), 10);

    assert_eq!(process1.cpu_usage(), 8);
}

#[test]
fn test_negative_usage_rejected() {
    let mut process = ProcessRecord::new(1, "sleep 10").unwrap();
    process.add_usage(2).unwrap();

    let err = process.add_usage(-1).unwrap_err();
    assert!(matches!(err, ProcessError::InvalidArgument(_)));
    assert_eq!(process.cpu_usage(), 2);
}

#[test]
fn test_empty_command_rejected() {
    let err = ProcessRecord::new(1, "").unwrap_err();
    assert!(matches!(err, ProcessError::InvalidArgument(_)));
}

#[test]
fn test_priority_overwrite() {
    let mut process = ProcessRecord::new(1, "ls -alf").unwrap();
    process.set_priority(10);
    process.set_priority(-4);
    assert_eq!(process.priority(), -4);
}

#[test]
fn test_validated_lifecycle() {
    let mut process = ProcessRecord::new(1, "ls -alf").unwrap();
    for next in [
        ProcessState::Ready,
        ProcessState::Running,
        ProcessState::Blocked,
        ProcessState::Ready,
        ProcessState::Running,
        ProcessState::Terminated,
    ] {
        process.transition(next).unwrap();
    }
    assert!(process.state().is_terminated());
    assert!(process.transition(ProcessState::Ready).is_err());
}
