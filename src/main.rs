use std::process::ExitCode;

use ringq::error::Error;
use ringq::{IntQueue, Serializer};

fn run() -> Result<(), Error> {
    let mut queue = IntQueue::new();

    for value in [10, 15, 12] {
        println!("enqueued {}", queue.enqueue(value)?);
    }

    println!("\n{queue}");
    println!("\nfront element: {}", queue.peek()?);
    println!("\ndequeued {}", queue.dequeue()?);
    println!("\n{queue}");

    let (front, rear) = queue.indices();
    println!("front: {front} / rear: {rear}");

    let json = queue.snapshot().encode(Serializer::Json)?;
    println!("{}", String::from_utf8_lossy(&json));

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERR! {e}");
            ExitCode::FAILURE
        }
    }
}
