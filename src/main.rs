use bucket_image_sync::{args, run_app};

fn main() {
    // Parse and validate command-line arguments; exits on invalid input
    let args = args::args_checks();

    if let Err(e) = run_app(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
