use SafeQueueMini::core::log::append_logs;
use SafeQueueMini::core::buildcore::QueueSystem;
use std::thread;
use std::time::Duration;

fn main() {
    println!("Simple (thread) Safe Queue example.");

    // new queue system; clones share the same queue and log
    let queue = QueueSystem::<i32>::new("demo".to_string());

    println!("=========== Demo 1 ===========");

    // put three in
    queue.put(1);
    queue.put(2);
    queue.put(3);

    // get three out
    for _ in 0..3 {
        let item = queue.get().unwrap();
        println!("Item: {}", item);
    }

    println!("=========== Demo 2 ===========");

    // listen to the queue in a thread
    let consumer_queue = queue.clone();
    let consumer = thread::spawn(move || {
        // get runs until the queue is closed and drained
        while let Some(item) = consumer_queue.get() {
            println!("Item in thread: {} << queue size: {}", item, consumer_queue.size());
            // wait 1ms bit for demonstration purposes
            thread::sleep(Duration::from_millis(1));
        }
    });

    // put three in, waiting a bit in between
    for i in 0..3 {
        queue.put(i);
        thread::sleep(Duration::from_millis(500));
    }

    println!("=========== Demo 3 ===========");

    // If the queue is processed too slow and we want to stop
    // adding items if there are too many items already
    for i in 0..20 {
        if queue.size() < 3 {
            queue.put(i);
        }
    }
    // wait till completed, then close so the consumer can finish
    thread::sleep(Duration::from_millis(500));
    queue.close();
    consumer.join().unwrap();

    // Append the operation log as NDJSON
    append_logs(&queue.logs(), "output.ndjson").expect("Failed to append logs");
}
