use std::error::Error;

use filterwand::{args, help};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    help::maybe_print_help_and_exit("fw-blur", help::BLUR_USAGE);
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_blur_args(arguments)?;
    plan.execute()?;
    Ok(())
}
