use mode_order::{ParseConfig, open_report};

fn usage() -> ! {
    eprintln!("Usage: custom_config <REPORT.txt> <MARKER>");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| usage());
    let marker = args.next().unwrap_or_else(|| usage());

    let cfg = ParseConfig::builder()
        .marker(marker)
        .missing_token("--")
        .build()?;

    let report = open_report(&path, &cfg)?;

    println!("header line: {}", report.layout.header_line);
    println!("modes: {}", report.n());
    println!("order: {:?}", report.order);
    if let Some(check) = &report.validation {
        println!("permutation: {}", check.is_permutation());
    }
    Ok(())
}
