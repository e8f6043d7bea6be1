//! Console demo: runs each kernel on a small aligned array and prints the
//! results.

use std::error::Error;

use flexi_logger::Logger;
use simdstat::kernels::checked;
use simdstat::{
    add_vectors, compute_a_plus_bx, compute_abs_ratio, compute_rms_full, compute_rms_windowed,
    simd, square_vector, AlignedBuffer,
};

fn print_vector(name: &str, v: &[f64]) {
    println!("\n{name}");
    for (i, val) in v.iter().enumerate() {
        println!("result[{i}] = {val:.6}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    log::info!("lane backend: {}", simd::BACKEND);

    let n = 64;

    let mut a = AlignedBuffer::new(n)?;
    let mut b = AlignedBuffer::new(n)?;
    let mut result = AlignedBuffer::new(n)?;

    for i in 0..n {
        a[i] = i as f64;
        b[i] = (n - i) as f64;
    }

    add_vectors(&a, &b, &mut result);
    print_vector("ADD", &result);

    square_vector(&a, &mut result);
    print_vector("SQUARE", &result);

    compute_a_plus_bx(10000.0, 2.0, &a, &mut result);
    print_vector("A PLUS BX (a = 10000, b = 2)", &result);

    compute_abs_ratio(&a, &b, &mut result);
    print_vector("ABS RATIO", &result);

    println!("\nRMS (full) = {:.6}", compute_rms_full(&a));

    let windowed = compute_rms_windowed(&a, 10)?;
    print_vector("RMS (window = 10)", &windowed);

    if let Err(e) = checked::compute_rms_windowed(&a, 0) {
        log::warn!("checked call rejected as expected: {e}");
    }

    Ok(())
}
