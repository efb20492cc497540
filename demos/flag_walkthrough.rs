use binary_flag::MultipleBinaryFlag;
use tracing_subscriber::EnvFilter;

fn walk(length: u64) -> binary_flag::Result<()> {
    let mut flag = MultipleBinaryFlag::new(length, false)?;
    println!("{length:>3} bits in {:?} storage", flag.storage_kind());

    for position in (0..length).step_by(2) {
        flag.set_flag(position)?;
    }
    println!("    every other bit: {flag} (all set: {:?})", flag.get_flag());

    for position in 0..length {
        flag.set_flag(position)?;
    }
    println!("    every bit:       {flag} (all set: {:?})", flag.get_flag());

    if let Err(err) = flag.reset_flag(length) {
        println!("    rejected: {err}");
    }

    flag.dispose();
    println!("    disposed:        {flag} (all set: {:?})", flag.get_flag());
    Ok(())
}

fn main() -> binary_flag::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .init();

    for length in [5, 40, 70] {
        walk(length)?;
    }
    Ok(())
}
