use clap::Parser;
use slate::cli::Cli;
use slate::io::config_io;
use slate::model::config::Config;
use slate::tui::App;

fn main() {
    let cli = Cli::parse();

    // A bad config is not fatal: fall back to defaults and note it in the
    // status row
    let (config, config_note) = match &cli.config {
        Some(path) => match config_io::read_config(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(format!("using defaults: {}", e))),
        },
        None => (Config::default(), None),
    };

    let mut app = App::new(&config);
    app.status_message = config_note;
    if cli.sample {
        app.seed_sample_items();
    }

    if let Err(e) = slate::tui::run(app) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
