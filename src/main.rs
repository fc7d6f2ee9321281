/*!
 * Process Queue - Demo Entry Point
 *
 * Creates a handful of processes, queues them by priority and drains the
 * queue, printing each record as it comes off the top.
 */

use process_queue::{
    init_tracing, span_operation, Error, OutputFormat, PriorityProcessQueue, ProcessSnapshot,
    ProcessState, ProcessTable, QueueConfig,
};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let config = QueueConfig::from_env()?;
    info!(?config, "Process queue demo starting");

    let mut table = ProcessTable::with_config(&config);
    let mut queue = PriorityProcessQueue::from_config(&config);

    let commands = [
        ("ls -alf", 5),
        ("grep -v help", 10),
        ("find . -name *.cpp -print", 0),
        ("make test", 7),
    ];

    for (command, priority) in commands {
        let handle = table.spawn(command)?;
        {
            let mut record = handle.write();
            record.set_priority(priority);
            record.transition(ProcessState::Ready)?;
        }
        queue.push(handle);
    }

    let span = span_operation("drain_queue");
    let drained: Vec<ProcessSnapshot> = queue
        .drain()
        .map(|handle| {
            let mut record = handle.write();
            record.set_state(ProcessState::Terminated);
            record.snapshot()
        })
        .collect();
    span.record_items_processed(drained.len());
    drop(span);

    match config.output {
        OutputFormat::Text => {
            for snapshot in &drained {
                println!("{}", snapshot);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&drained).map_err(Error::from)?;
            println!("{}", json);
        }
    }

    info!(processes = table.len(), "Process queue demo finished");
    Ok(())
}
