mod audio;
mod config;
mod input;
mod library;
mod player;
mod runtime;
mod screen;
mod timefmt;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
