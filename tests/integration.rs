use std::{env, fs, path::PathBuf, process::Command, process::Output};

fn run_bin(args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_mendel"));

    Command::new(bin)
        .args(args)
        .output()
        .expect("failed to execute command")
}

fn run_bin_ok(args: &[&str]) -> String {
    let output = run_bin(args);

    let stdout_str =
        std::str::from_utf8(&output.stdout).expect("failed to convert stdout to string");
    let stderr_str =
        std::str::from_utf8(&output.stderr).expect("failed to convert stderr to string");

    assert!(
        output.status.success(),
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\nstderr:\n{stderr_str}\n"
    );

    stdout_str.to_string()
}

#[test]
fn inspection_commands() {
    let out = run_bin_ok(&["phenotype", "yyRr"]);
    assert!(out.contains("round-green"), "{out}");

    let out = run_bin_ok(&["gametes", "YyRr"]);
    assert!(out.contains("YR Yr yR yr"), "{out}");

    let out = run_bin_ok(&["cross", "YyRr", "YyRr"]);
    assert!(out.contains("56.25%"), "{out}");
    assert!(out.contains("6.25%"), "{out}");

    let out = run_bin_ok(&["catalog"]);
    assert!(out.contains("YYRR YyRR YYRr YyRr"), "{out}");
}

#[test]
fn malformed_genotype_fails() {
    for args in [
        &["phenotype", "RrYy"][..],
        &["gametes", "YyR"][..],
        &["cross", "YyRr", "yyxx"][..],
    ] {
        assert!(!run_bin(args).status.success(), "{args:?}");
    }
}

#[test]
fn basic_workflow() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("basic_workflow");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_path = test_dir.join("config.toml");
    let config_contents = String::new()
        + "[cross]\n"
        + "parent_1 = \"YyRr\"\n"
        + "parent_2 = \"yyrr\"\n"
        + "\n"
        + "[simulation]\n"
        + "seed = 42\n"
        + "batches = [1, 10, 100, 1000]\n";

    fs::write(&config_path, config_contents).expect("failed to write config file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");

    run_bin_ok(&["simulate", "--sim-dir", test_dir_str]);

    let results_path = test_dir.join("results.toml");
    let results = fs::read_to_string(&results_path).expect("failed to read results file");
    assert!(results.contains("total = 1111"), "{results}");
    assert!(results.contains("wrinkled-green"), "{results}");

    run_bin_ok(&["clean", "--sim-dir", test_dir_str]);
    assert!(!results_path.exists());

    fs::remove_dir_all(&test_dir).ok();
}

#[test]
fn invalid_config_fails() {
    let test_dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("invalid_config");

    fs::remove_dir_all(&test_dir).ok();
    fs::create_dir(&test_dir).expect("failed to create test directory");

    let config_contents = "[cross]\nparent_1 = \"YyRr\"\nparent_2 = \"yYYr\"\n\n\
                           [simulation]\nbatches = [10]\n";
    fs::write(test_dir.join("config.toml"), config_contents).expect("failed to write config file");

    let test_dir_str = test_dir
        .to_str()
        .expect("failed to convert test directory to string");
    assert!(!run_bin(&["simulate", "--sim-dir", test_dir_str]).status.success());

    fs::remove_dir_all(&test_dir).ok();
}
