//! `.env` 加载测试
//!
//! 修改进程环境变量，单独放在一个测试二进制中

use std::fs;

use aoc_helper::config::{load_env_file, COOKIE_ENV_VAR};
use aoc_helper::{AppError, Config};
use tempfile::TempDir;

#[test]
fn test_cookie_from_env_file() {
    std::env::remove_var(COOKIE_ENV_VAR);
    std::env::remove_var("AOC_INPUT_FILE");

    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.env");
    assert!(!load_env_file(&missing));
    assert!(matches!(
        Config::from_env(),
        Err(AppError::MissingEnvVar { ref var_name }) if var_name == COOKIE_ENV_VAR
    ));

    let env_file = dir.path().join(".env");
    fs::write(
        &env_file,
        format!("{}=session=from-dotenv\nAOC_INPUT_FILE=day01.txt\n", COOKIE_ENV_VAR),
    )
    .unwrap();
    assert!(load_env_file(&env_file));

    let config = Config::from_env().unwrap();
    assert_eq!(config.session_cookie, "session=from-dotenv");
    assert_eq!(config.input_file, "day01.txt");

    // 进程中已有的变量优先
    std::env::set_var(COOKIE_ENV_VAR, "session=from-shell");
    assert!(load_env_file(&env_file));
    assert_eq!(Config::from_env().unwrap().session_cookie, "session=from-shell");
}
