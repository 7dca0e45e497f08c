use std::error::Error;

use filterwand::{args, help};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    help::maybe_print_help_and_exit("fw-colorblind", help::COLORBLIND_USAGE);
    let arguments: Vec<_> = std::env::args_os().collect();
    let plan = args::parse_colorblind_args(arguments)?;
    plan.execute()?;
    println!(
        "color-vision simulation complete, output written to {}",
        plan.output.display()
    );
    Ok(())
}
