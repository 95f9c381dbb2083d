use std::io::stdin;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::unbounded;

pub mod assigner;
pub mod call;
pub mod config;
pub mod console;
pub mod direction;
pub mod dispatcher;
pub mod doors;
pub mod floor_queue;
pub mod fsm;
pub mod request_buffer;
pub mod simulator;

fn main() -> std::io::Result<()> {
    // READ CONFIGURATION
    let settings = config::Settings::get();

    // INITIALIZE CHANNELS
    let (event_tx, event_rx) = unbounded();
    let (shutdown_tx, shutdown_rx) = unbounded::<()>();

    // INITIALIZE CONSOLE SINK
    let console_handle = thread::spawn(move || console::main(event_rx));

    // INITIALIZE FLEET AND DISPATCHER
    let fleet = Arc::new(fsm::build_fleet(&settings, &event_tx, &shutdown_rx));
    let dispatcher = dispatcher::Dispatcher::new(
        settings.clone(),
        fleet.clone(),
        event_tx.clone(),
        shutdown_rx.clone(),
    );

    // INITIALIZE REQUEST SIMULATOR
    {
        let settings = settings.clone();
        let dispatcher = dispatcher.clone();
        let event_tx = event_tx.clone();
        let shutdown_rx = shutdown_rx.clone();
        thread::spawn(move || simulator::main(settings, dispatcher, event_tx, shutdown_rx));
    }

    let _ = event_tx.send(console::Event::Info(format!(
        "Elevator control started: {} elevators, floors {} to {}. Press enter to stop...",
        settings.elevator_count, settings.min_floor, settings.max_floor
    )));

    // Block until the operator presses enter or stdin closes.
    let mut line = String::new();
    stdin().read_line(&mut line)?;

    // Dropping the only shutdown sender disconnects every loop's receiver,
    // which each select arm treats as the stop signal.
    drop(shutdown_tx);
    drop(dispatcher);
    drop(fleet);
    drop(event_tx);

    // The console drains remaining events and exits once all senders are gone.
    let _ = console_handle.join();
    Ok(())
}
