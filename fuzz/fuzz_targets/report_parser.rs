#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let config = mode_order::ParseConfig::default();
    if let Ok(report) = mode_order::analyze_report(text, &config) {
        assert_eq!(report.order.len(), report.n());
        assert!(report.order.iter().all(|&row| row < report.n()));
    }

    let lines: Vec<&str> = text.lines().collect();
    for line in &lines {
        if let Some(labels) = mode_order::parse_header_labels(line) {
            assert_eq!(labels.first(), Some(&0));
        }
    }
});
