//! Demo driver: replays the worked example, printing one line per trial.

use gaussquad::quadrature::{ErrorNorm, OrderSearch};

fn main() {
    let f = |x: f64| x.powi(6) - x * x * (2.0 * x).sin();
    let (lo, hi) = (1.0, 3.0);
    let reference = 317.3442467;
    let tolerance = 1e-6;

    let search = match OrderSearch::new(reference, tolerance) {
        Ok(s) => s.with_norm(ErrorNorm::Absolute),
        Err(e) => {
            eprintln!("invalid search configuration: {e}");
            std::process::exit(1);
        }
    };

    match search.run_with(&f, lo, hi, |t| {
        println!("N = {}, Result = {:.8}, Error = {:.8e}", t.order, t.value, t.error);
    }) {
        Ok(result) => {
            println!();
            println!(
                "With N = {}, the reference value is matched: {:.8}",
                result.order, result.value
            );
        }
        Err(e) => {
            eprintln!("order search failed: {e}");
            std::process::exit(1);
        }
    }
}
