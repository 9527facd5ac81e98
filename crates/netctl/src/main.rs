use netctl_core::init_logging;

mod app;
mod commands;
mod table;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless -v/--verbose; errors are always logged
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    if let Err(e) = commands::run_command(&matches) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
