use billbuddy::cli::{output, run_cli};

fn main() {
    billbuddy::init();
    if let Err(err) = run_cli() {
        output::error(err);
        std::process::exit(1);
    }
}
