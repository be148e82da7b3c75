use std::process::Command;

#[test]
fn test_full_benchmark_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpu-speed-test"))
        .args(["-q", "-j", "2"])
        .output()
        .expect("Failed to execute cpu-speed-test");

    if !output.status.success() {
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("cpu-speed-test failed");
    }

    let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10, "unexpected report: {stdout}");

    assert_eq!(lines[0], "CPU Speed Test");
    assert_eq!(lines[1], "Testing range: 2 to 1000000");
    assert!(lines[2].starts_with("Single-thread time: "));
    assert!(lines[2].ends_with(" seconds"));
    assert_eq!(lines[3], "");
    assert!(lines[4].starts_with("Number of physical cores: "));
    assert!(lines[5].starts_with("Number of logical cores (threads): "));
    assert!(lines[6].starts_with("Multi-thread time: "));
    assert_eq!(lines[7], "");
    // A sub-resolution parallel time would print "undefined" and fail above.
    assert!(lines[8].starts_with("Speedup: ") && lines[8].ends_with('x'));
    assert!(lines[9].starts_with("Efficiency: "));

    // Every value is printed to two decimal places.
    let seconds = lines[2]
        .trim_start_matches("Single-thread time: ")
        .trim_end_matches(" seconds");
    assert_eq!(seconds.split('.').nth(1).map(str::len), Some(2));
}

#[test]
fn test_zero_threads_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_cpu-speed-test"))
        .args(["-q", "-j", "0"])
        .output()
        .expect("Failed to execute cpu-speed-test");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid worker count"), "stderr: {stderr}");
    // Nothing is measured when configuration fails.
    assert!(output.stdout.is_empty());
}
