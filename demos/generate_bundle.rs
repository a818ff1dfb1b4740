use acme_rsakeys::error::KeyResult;
use acme_rsakeys::spawn_generate;
use std::env;
use std::thread;
use std::time::Duration;

fn main() -> KeyResult<()> {
    let mut argv = env::args().skip(1);
    let bits = argv.next().and_then(|s| s.parse().ok());

    // Generate a key without blocking this thread
    let task = spawn_generate(bits, None)?;
    while !task.is_finished() {
        eprint!(".");
        thread::sleep(Duration::from_millis(200));
    }
    eprintln!();

    // Print it out
    let bundle = task.wait()?;
    println!("{}", bundle.to_json()?);
    Ok(())
}
