//! Maze Ball entry point
//!
//! Headless run: loads settings, carves a maze, registers it with the
//! in-memory body store and prints the layout. A rendering engine embeds the
//! library and drives `Session` from its own update loop instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Maze Ball (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build embeds the library; nothing to run here
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use maze_ball::world::{BodyLabel, BodyStore, Session};
    use maze_ball::{Cell, Settings};

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    let (session, maze) = Session::from_settings(BodyStore::new(), &settings)?;

    let reachable = maze.reachable_from(Cell::new(0, 0))?;
    log::info!(
        "Maze carved from {:?}: {} passages, {} walls, {}/{} cells reachable",
        maze.start(),
        maze.open_passage_count(),
        maze.wall_count(),
        reachable,
        maze.dimensions().cell_count()
    );

    let world = session.world();
    log::info!(
        "Registered {} bodies ({} walls)",
        world.len(),
        world.with_label(BodyLabel::Wall).count()
    );

    print!("{maze}");
    Ok(())
}
