use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A hermetic invocation: HOME pointed at a temp dir so no user config is
/// picked up, and no ambient token or cache override.
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fetcher").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("RIOT_API_TOKEN")
        .env_remove("FETCHER_CACHE_DIR")
        .env_remove("XDG_CACHE_HOME")
        .current_dir(home.path());
    cmd
}

/// A minimal but well-formed domain match entry, as the cache stores it.
fn seed_cache_entry(cache_dir: &std::path::Path, region: &str, id: i64) {
    let entry = format!(
        r#"{{
            "id": {id},
            "timestamp": 1463248380000,
            "version": "6.9.1",
            "platform_id": "EUW1",
            "region": "{region}",
            "queue_type": "RANKED_SOLO_5x5",
            "season": "SEASON2016",
            "detail": {{
                "map": "SUMMONERS_RIFT",
                "duration_secs": 2172,
                "teams": [
                    {{
                        "id": 100,
                        "winner": true,
                        "participants": [
                            {{
                                "id": 1,
                                "champion_id": 103,
                                "summoner": {{"id": 1001, "name": "Alice"}},
                                "statistics": {{"kills": 5, "deaths": 2, "assists": 9}}
                            }}
                        ]
                    }},
                    {{
                        "id": 200,
                        "winner": false,
                        "participants": [
                            {{
                                "id": 6,
                                "champion_id": 64,
                                "summoner": {{"id": 1002, "name": "Bob"}},
                                "statistics": {{"kills": 1, "deaths": 7, "assists": 3}}
                            }}
                        ]
                    }}
                ]
            }}
        }}"#
    );

    let dir = cache_dir.join("matches").join(region);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{}.json", id)), entry).unwrap();
}

#[test]
fn no_arguments_prints_usage_and_exits_nonzero() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_zero_and_lists_the_three_subcommands() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("match")
                .and(predicate::str::contains("summoner"))
                .and(predicate::str::contains("cache-to-csv")),
        );
}

#[test]
fn subcommand_help_paths_exist() {
    for sub in ["match", "summoner", "cache-to-csv"] {
        let home = TempDir::new().unwrap();
        cmd(&home).args([sub, "--help"]).assert().success();
    }
}

#[test]
fn match_without_token_fails_with_exit_one() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["match", "42", "--region", "euw"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("token"));
}

#[test]
fn match_with_unknown_region_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["match", "42", "--region", "atlantis"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown region"));
}

#[test]
fn cached_match_is_served_without_network_or_token() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    seed_cache_entry(cache.path(), "EUW", 42);

    cmd(&home)
        .args(["match", "42", "--region", "euw"])
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Match 42")
                .and(predicate::str::contains("Alice"))
                .and(predicate::str::contains("victory")),
        )
        .stderr(predicate::str::contains("cache"));
}

#[test]
fn cached_match_json_output_is_the_domain_document() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    seed_cache_entry(cache.path(), "EUW", 42);

    let assert = cmd(&home)
        .args(["match", "42", "--region", "euw", "--json"])
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["id"], 42);
    assert_eq!(value["region"], "EUW");
    assert_eq!(value["detail"]["teams"][0]["participants"][0]["summoner"]["name"], "Alice");
}

#[test]
fn cache_to_csv_on_empty_cache_emits_header_and_succeeds() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();

    cmd(&home)
        .arg("cache-to-csv")
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("match_id,region,queue_type"))
        .stderr(predicate::str::contains("0 cached matches"));
}

#[test]
fn cache_to_csv_flattens_each_participant() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    seed_cache_entry(cache.path(), "EUW", 42);
    seed_cache_entry(cache.path(), "NA", 7);

    let assert = cmd(&home)
        .arg("cache-to-csv")
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("4 participant rows"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    // ordered by region then match id, team order preserved
    assert!(lines[1].starts_with("42,EUW,"));
    assert!(lines[3].starts_with("7,NA,"));
    assert!(lines[1].contains("Alice"));
    assert!(lines[2].contains("Bob"));
}

#[test]
fn cache_to_csv_region_filter_and_output_file() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    seed_cache_entry(cache.path(), "EUW", 42);
    seed_cache_entry(cache.path(), "NA", 7);

    let out = cache.path().join("export.csv");
    cmd(&home)
        .args(["cache-to-csv", "--region", "na"])
        .arg("--output")
        .arg(&out)
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(!text.contains("EUW"));
}

#[test]
fn explicit_config_file_supplies_the_region_default() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    seed_cache_entry(cache.path(), "EUW", 42);

    let config_path = home.path().join("custom-config.json");
    std::fs::write(&config_path, r#"{"region": "euw"}"#).unwrap();

    cmd(&home)
        .args(["match", "42"])
        .arg("--config")
        .arg(&config_path)
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Match 42"));
}

#[test]
fn missing_explicit_config_file_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["match", "42"])
        .arg("--config")
        .arg(home.path().join("does-not-exist.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn corrupt_cache_entry_is_reported_not_refetched() {
    let home = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    let dir = cache.path().join("matches").join("EUW");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("42.json"), "{ not json").unwrap();

    cmd(&home)
        .args(["match", "42", "--region", "euw", "--token", "unused"])
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid cache entry"));
}
