mod cli;

use console::style;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", style("[ERROR]").red().bold(), e);
        std::process::exit(1);
    }
}
