//! Runs the `pizza-catalog-check` binary against fixture directories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pizza_data::{PIZZAS_FILE, SIZES_FILE, TOPPINGS_FILE};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data")
}

fn scratch_with_pizzas(
    name: &str,
    pizzas: &str,
) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pizza-check-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    for file in [SIZES_FILE, TOPPINGS_FILE] {
        fs::copy(fixture_dir().join(file), dir.join(file)).expect("copy fixture");
    }
    fs::write(dir.join(PIZZAS_FILE), pizzas).expect("write pizzas");
    dir
}

fn check(args: &[&str]) -> (Output, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_pizza-catalog-check"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run pizza-catalog-check");
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (output, stdout, stderr)
}

#[test]
fn test_fixture_catalog_passes() {
    let dir = fixture_dir();
    let (output, stdout, _) = check(&["--dir", dir.to_str().unwrap()]);

    assert!(output.status.success());
    assert!(stdout.contains("3 pizzas, 3 sizes, 12 toppings"));
    assert!(stdout.contains("Default size: Small"));
    assert!(!stdout.contains("Unpriced topping"));
    assert!(stdout.ends_with("Catalog OK.\n"));
}

#[test]
fn test_unpriced_topping_is_reported_and_fatal_only_when_strict() {
    let dir = scratch_with_pizzas("unpriced", "name,price,image,toppings\nPizza 9,9,,Ham;Truffle\n");
    let dir_arg = dir.to_str().unwrap();

    let (output, stdout, _) = check(&["--dir", dir_arg]);
    assert!(output.status.success());
    assert!(stdout.contains("Unpriced topping: 'Truffle' on 'Pizza 9'"));
    assert!(stdout.contains("Catalog OK."));

    let (output, stdout, stderr) = check(&["--dir", dir_arg, "--strict"]);
    assert!(!output.status.success());
    assert!(!stdout.contains("Catalog OK."));
    assert!(stderr.contains("1 permitted topping(s) have no price"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_invalid_catalog_fails() {
    let dir = scratch_with_pizzas(
        "duplicate",
        "name,price,image,toppings\nPizza 1,8,,Ham\nPizza 1,9,,Ham\n",
    );

    let (output, stdout, stderr) = check(&["--dir", dir.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(!stdout.contains("Catalog OK."));
    assert!(stderr.contains("Failed to load catalog from"));

    fs::remove_dir_all(&dir).ok();
}
