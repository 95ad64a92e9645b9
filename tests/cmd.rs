//! Command-line cases under `tests/cmd/`.

use std::path::PathBuf;

#[test]
fn cli_cases() {
    trycmd::TestCases::new()
        .register_bin("getidle", PathBuf::from(env!("CARGO_BIN_EXE_getidle")))
        .case("tests/cmd/*.toml");
}
