use medilift::{
    Department, Drone, Engine, FloorPlan, format_fleet_panel, format_queue_panel,
    format_status_line,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let plan = FloorPlan::hospital();
    let fleet = vec![
        Drone::new(1, medilift::GridPos::new(1, 0)),
        Drone::new(2, medilift::GridPos::new(2, 1)),
        Drone::new(3, medilift::GridPos::new(1, 2)),
    ];
    let mut engine = Engine::new(plan, fleet);

    let batch = [
        ("Blood bag", Department::Icu, 4, 2, 2),
        ("Crash cart meds", Department::Er, 5, 1, 1),
        ("Infant warmer kit", Department::Maternity, 3, 3, 3),
        ("Surgical tray", Department::OperatingRoom, 2, 3, 4),
        ("Paperwork", Department::WaitingRoom, 1, 5, 1),
    ];
    for (item, dept, urgency, ctas, class) in batch {
        if let Err(err) = engine.submit_task(item, dept, urgency, ctas, class, 0.0) {
            eprintln!("rejected {item}: {err}");
        }
    }

    let mut ticks = 0u32;
    loop {
        let moving = engine.tick();
        ticks += 1;
        if !moving && engine.queue.is_empty() {
            break;
        }
        if ticks >= 1000 {
            eprintln!("giving up after {ticks} ticks");
            break;
        }
    }

    println!("Completed after {ticks} ticks");
    println!("{}", format_status_line(&engine));
    for line in format_fleet_panel(&engine.fleet) {
        println!("{line}");
    }
    for line in format_queue_panel(&engine.queue) {
        println!("{line}");
    }
    println!("[Events]");
    for line in engine.events.recent(20) {
        println!("{line}");
    }
}
