use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;

pub const BLUR_USAGE: &str = "\
Usage: fw-blur <gaussian|directional> <input> <output> [options]

Options:
  --blur_amount W H   Gaussian kernel width and height, positive odd integers (default: 21 21)
  --kernel_size N     directional streak length in pixels (default: 21)
  --angle DEG         directional streak angle, degrees counter-clockwise (default: 45)";

pub const COLORBLIND_USAGE: &str = "\
Usage: fw-colorblind -input PATH -output PATH -type <protanopia|deuteranopia|tritanopia> [-degree D]

Options:
  -degree D           simulation intensity between 0 and 1 (default: 1)";

/// Prints usage and exits when the binary is invoked with no arguments at
/// all, or with `--help`/`-help` as the first argument.
pub fn maybe_print_help_and_exit(bin_name: &str, usage: &str) {
    match std::env::args_os().nth(1) {
        None => print_help_and_exit(bin_name, usage),
        Some(arg) => {
            if arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help") {
                print_help_and_exit(bin_name, usage)
            }
        }
    }
}

fn print_help_and_exit(bin_name: &str, usage: &str) -> ! {
    println!("{bin_name} ({})", version_string());
    println!();
    println!("{usage}");
    std::process::exit(0);
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    format!(
        "filterwand {} {cpu} {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY")
    )
}
