use clap::Parser;
use synergy::app::SynergyApp;

fn main() {
    env_logger::init();
    let args = SynergyApp::parse();
    match args.run() {
        Ok(s) => {
            if !s.is_empty() {
                println!("{s}");
            }
        }
        Err(e) => {
            log::error!("synergy failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
