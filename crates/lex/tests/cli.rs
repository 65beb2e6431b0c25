//! CLI integration tests for lex commands.
//!
//! These tests focus on exit codes and the facts the output reports, not on exact
//! formatting.

// Integration tests live outside cfg(test).
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Entry records shared by most tests.
const WORDS: &str = r#"[
  {"index": 1, "word": "кі́т", "pos": "noun", "freq": 120,
   "defs": ["tomcat", "domestic cat (male)"],
   "forms": {"singular": {"nominative": "кіт", "genitive": "кота"}, "plural": {"nominative": "коти"}}},
  {"index": 2, "word": "кітель", "pos": "noun", "freq": 5000, "defs": ["military tunic"]},
  {"index": 3, "word": "бігти", "pos": "verb", "freq": 300, "defs": ["to run"],
   "forms": ["біжу", "біжиш"]},
  {"index": 4, "word": "кішка", "pos": "noun", "freq": 80, "defs": ["cat", "domestic cat"]}
]"#;

/// Config pointing at `./data`, isolated from any parent or global config.
const CONFIG: &str = "root = true\n\n[data]\ndir = \"data\"\n";

/// A project directory with a dictionary and config, plus a separate home directory.
struct Project {
    /// Project root.
    dir: tempfile::TempDir,
    /// Isolated home directory.
    home: tempfile::TempDir,
}

impl Project {
    /// Creates a project with the fixture dictionary.
    fn new() -> Self {
        Self::with_config(CONFIG)
    }

    /// Creates a project with the fixture dictionary and the given config.
    fn with_config(config: &str) -> Self {
        let project = Self::empty();
        fs::create_dir_all(project.dir.path().join("data")).unwrap();
        fs::write(project.dir.path().join("data/words.json"), WORDS).unwrap();
        fs::write(project.dir.path().join(".lex.toml"), config).unwrap();
        project
    }

    /// Creates a project with no files at all.
    fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            home: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the project root.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns a `lex` command running in the project with HOME isolated.
    fn lex(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("lex").unwrap();
        cmd.current_dir(self.dir.path());
        cmd.env("HOME", self.home.path());
        cmd.env_remove("LEX_LOG");
        cmd
    }

    /// Runs `lex` with the arguments and returns stdout with ANSI escapes removed.
    fn stdout(&self, args: &[&str]) -> String {
        let assert = self.lex().args(args).assert().success();
        strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout))
    }

    /// Runs `lex` with the arguments and parses stdout as JSON.
    fn json(&self, args: &[&str]) -> Value {
        let assert = self.lex().args(args).assert().success();
        serde_json::from_slice(&assert.get_output().stdout).unwrap()
    }
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

/// Returns the `index` of every entry in a lookup's `data`.
fn indices(result: &Value) -> Vec<u64> {
    result["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["index"].as_u64().unwrap())
        .collect()
}

mod lookup {
    use super::*;

    #[test]
    fn exact_match_ignores_stress() {
        let project = Project::new();
        let out = project.stdout(&["lookup", "кіт"]);
        assert!(out.contains("tomcat"));
        assert!(!out.contains("кітель"));
        assert!(out.contains("1 of 1 matches"));
    }

    #[test]
    fn no_exact_matches_inside_terms() {
        let project = Project::new();
        let result = project.json(&["lookup", "--no-exact", "--json", "кіт"]);
        assert_eq!(indices(&result), vec![1, 2]);
        assert_eq!(result["totalMatches"], 2);
        assert_eq!(result["fuzzyWords"], serde_json::json!(["кіт"]));
        assert_eq!(result["literalPhrases"], serde_json::json!([]));
    }

    #[test]
    fn words_are_joined_into_one_query() {
        let project = Project::new();
        let result = project.json(&["lookup", "--no-exact", "--json", "domestic", "cat"]);
        assert_eq!(indices(&result), vec![4, 1]);
        assert_eq!(result["fuzzyWords"], serde_json::json!(["domestic", "cat"]));
    }

    #[test]
    fn quoted_phrase_matches_definitions() {
        let project = Project::new();
        let result = project.json(&["lookup", "--no-exact", "--json", "\"domestic cat\""]);
        assert_eq!(indices(&result), vec![4, 1]);
        assert_eq!(result["literalPhrases"], serde_json::json!(["domestic cat"]));
    }

    #[test]
    fn quoted_phrase_matches_forms() {
        let project = Project::new();
        let result = project.json(&["lookup", "--no-exact", "--json", "\"кота\""]);
        assert_eq!(indices(&result), vec![1]);
    }

    #[test]
    fn no_query_returns_everything() {
        let project = Project::new();
        let result = project.json(&["lookup", "--json"]);
        assert_eq!(indices(&result), vec![4, 1, 3, 2]);
        assert_eq!(result["literalPhrases"], Value::Null);
        assert_eq!(result["fuzzyWords"], Value::Null);
    }

    #[test]
    fn blank_query_is_not_an_absent_query() {
        let project = Project::new();
        for raw in ["   ", "\u{0301}"] {
            let result = project.json(&["lookup", "--json", raw]);
            assert_eq!(result["totalMatches"], 0, "query {raw:?}");
            assert_eq!(result["literalPhrases"], serde_json::json!([]));
            assert_eq!(result["fuzzyWords"], serde_json::json!([]));
        }
        let loose = project.json(&["lookup", "--no-exact", "--json", "   "]);
        assert_eq!(indices(&loose), vec![4, 1, 3, 2]);
    }

    #[test]
    fn sort_orders() {
        let project = Project::new();
        let alpha = project.json(&["lookup", "--json", "-s", "alpha"]);
        assert_eq!(indices(&alpha), vec![3, 1, 2, 4]);
        let rev = project.json(&["lookup", "--json", "--sort", "alpha_rev"]);
        assert_eq!(indices(&rev), vec![4, 2, 1, 3]);
    }

    #[test]
    fn fractional_and_negative_ranks() {
        let project = Project::new();
        fs::write(
            project.path().join("data/words.json"),
            r#"[{"index": 1, "word": "а", "freq": 2.5},
                {"index": 2, "word": "б", "freq": -1},
                {"index": 3, "word": "в", "freq": 2}]"#,
        )
        .unwrap();
        let result = project.json(&["lookup", "--json"]);
        assert_eq!(indices(&result), vec![2, 3, 1]);
        assert_eq!(result["data"][2]["freq"], 2.5);
        assert!(project.stdout(&["get", "2"]).contains("freq -1"));
    }

    #[test]
    fn pos_filter() {
        let project = Project::new();
        let result = project.json(&["lookup", "--json", "-p", "verb"]);
        assert_eq!(indices(&result), vec![3]);
        assert_eq!(result["data"][0]["word"], "бігти");
    }

    #[test]
    fn limit_truncates_but_counts_all() {
        let project = Project::new();
        let out = project.stdout(&["lookup", "--no-exact", "-n", "1", "кіт"]);
        assert!(out.contains("1 of 2 matches"));
    }

    #[test]
    fn no_matches() {
        let project = Project::new();
        let out = project.stdout(&["lookup", "собака"]);
        assert!(out.contains("No matches found."));
    }

    #[test]
    fn unknown_pos_lists_valid_values() {
        let project = Project::new();
        project
            .lex()
            .args(["lookup", "-p", "adverb", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "invalid pos value 'adverb'. Valid values: noun, verb",
            ));
    }

    #[test]
    fn unknown_sort_lists_valid_values() {
        let project = Project::new();
        project
            .lex()
            .args(["lookup", "-s", "random", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("freq, alpha, alpha_rev"));
    }

    #[test]
    fn limit_out_of_range() {
        let project = Project::new();
        for limit in ["0", "10001"] {
            project
                .lex()
                .args(["lookup", "-n", limit, "кіт"])
                .assert()
                .failure()
                .stderr(predicate::str::contains("invalid limit value"));
        }
    }

    #[test]
    fn config_supplies_defaults() {
        let project = Project::with_config(
            "root = true\n[data]\ndir = \"data\"\n[lookup]\nlimit = 2\nsort = \"alpha\"\nexact = false\n",
        );
        let result = project.json(&["lookup", "--json", "кі"]);
        assert_eq!(indices(&result), vec![1, 2]);
        assert_eq!(result["totalMatches"], 3);

        let flags_win = project.json(&["lookup", "--json", "-n", "5", "-s", "freq", "кі"]);
        assert_eq!(indices(&flags_win), vec![4, 1, 2]);
    }

    #[test]
    fn exact_flag_overrides_config() {
        let project = Project::with_config(
            "root = true\n[data]\ndir = \"data\"\n[lookup]\nexact = false\n",
        );
        let loose = project.json(&["lookup", "--json", "кіт"]);
        assert_eq!(indices(&loose), vec![1, 2]);

        let exact = project.json(&["lookup", "--json", "--exact", "кіт"]);
        assert_eq!(indices(&exact), vec![1]);
        assert_eq!(exact["totalMatches"], 1);
    }

    #[test]
    fn bad_configured_sort_is_fatal() {
        let project =
            Project::with_config("root = true\n[data]\ndir = \"data\"\n[lookup]\nsort = \"x\"\n");
        project
            .lex()
            .args(["lookup", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid sort value 'x'"));
    }

    #[test]
    fn persisted_terms_are_used() {
        let project = Project::new();
        fs::write(
            project.path().join("data/index.json"),
            r#"{"0": ["кітель", [2]]}"#,
        )
        .unwrap();
        let result = project.json(&["lookup", "--no-exact", "--json", "кіт"]);
        assert_eq!(indices(&result), vec![2]);
    }
}

mod data_errors {
    use super::*;

    #[test]
    fn no_config_means_no_data() {
        let project = Project::empty();
        project
            .lex()
            .args(["lookup", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no data directory configured"));
    }

    #[test]
    fn missing_words_file() {
        let project = Project::new();
        fs::remove_file(project.path().join("data/words.json")).unwrap();
        project
            .lex()
            .args(["lookup", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load dictionary"));
    }

    #[test]
    fn missing_configured_terms_file() {
        let project =
            Project::with_config("root = true\n[data]\ndir = \"data\"\nterms = \"terms.json\"\n");
        project
            .lex()
            .args(["lookup", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load dictionary"))
            .stderr(predicate::str::contains("terms.json"));
    }

    #[test]
    fn malformed_words_file() {
        let project = Project::new();
        fs::write(project.path().join("data/words.json"), "[{\"index\": ").unwrap();
        project
            .lex()
            .args(["lookup", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("words.json"));
    }

    #[test]
    fn duplicate_entry_index() {
        let project = Project::new();
        fs::write(
            project.path().join("data/words.json"),
            r#"[{"index": 1, "word": "a"}, {"index": 1, "word": "b"}]"#,
        )
        .unwrap();
        project
            .lex()
            .args(["lookup", "a"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load dictionary"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let project = Project::with_config("root = true\n[data\n");
        project
            .lex()
            .args(["lookup", "кіт"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }
}

mod get {
    use super::*;

    #[test]
    fn shows_entry_with_forms() {
        let project = Project::new();
        let out = project.stdout(&["get", "1"]);
        assert!(out.contains("кі́т"));
        assert!(out.contains("1. tomcat"));
        assert!(out.contains("singular / genitive кота"));
        assert!(out.contains("plural / nominative коти"));
    }

    #[test]
    fn forms_keep_source_order() {
        let project = Project::new();
        let out = project.stdout(&["get", "1"]);
        let at = |needle: &str| out.find(needle).unwrap();
        assert!(at("singular / nominative") < at("singular / genitive"));
        assert!(at("singular / genitive") < at("plural / nominative"));

        let assert = project.lex().args(["get", "1", "--json"]).assert().success();
        let raw = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
        let pos = |needle: &str| raw.find(needle).unwrap();
        assert!(pos("\"nominative\": \"кіт\"") < pos("\"genitive\""));
        assert!(pos("\"singular\"") < pos("\"plural\""));
    }

    #[test]
    fn json_output() {
        let project = Project::new();
        let entry = project.json(&["get", "3", "--json"]);
        assert_eq!(entry["word"], "бігти");
        assert_eq!(entry["forms"], serde_json::json!(["біжу", "біжиш"]));
    }

    #[test]
    fn unknown_index_fails() {
        let project = Project::new();
        project
            .lex()
            .args(["get", "99"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no entry with index 99"));
    }
}

mod tags {
    use super::*;

    #[test]
    fn lists_tags() {
        let project = Project::new();
        assert_eq!(project.stdout(&["tags"]), "noun\nverb\n");
    }

    #[test]
    fn long_listing_has_counts() {
        let project = Project::new();
        let out = project.stdout(&["tags", "--long"]);
        assert!(out.contains("Entries"));
        assert!(out.contains('3'));
    }

    #[test]
    fn json_listing() {
        let project = Project::new();
        let tags = project.json(&["tags", "--json"]);
        assert_eq!(
            tags,
            serde_json::json!([{"tag": "noun", "entries": 3}, {"tag": "verb", "entries": 1}])
        );
    }
}

mod status {
    use super::*;

    #[test]
    fn healthy_project() {
        let project = Project::new();
        let out = project.stdout(&["status"]);
        assert!(out.contains(".lex.toml"));
        assert!(out.contains("4 entries"));
        assert!(out.contains("(derived from entries)"));
        assert!(out.contains("No issues found."));
    }

    #[test]
    fn missing_data_dir_fails() {
        let project = Project::empty();
        fs::write(
            project.path().join(".lex.toml"),
            "root = true\n[data]\ndir = \"nowhere\"\n",
        )
        .unwrap();
        project
            .lex()
            .arg("status")
            .assert()
            .failure()
            .stdout(predicate::str::contains("data directory does not exist"));
    }

    #[test]
    fn missing_configured_terms_fails() {
        let project =
            Project::with_config("root = true\n[data]\ndir = \"data\"\nterms = \"terms.json\"\n");
        project
            .lex()
            .arg("status")
            .assert()
            .failure()
            .stdout(predicate::str::contains("configured term index does not exist"))
            .stdout(predicate::str::contains("terms.json"));
    }

    #[test]
    fn without_config() {
        let project = Project::empty();
        project
            .lex()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found."));
    }
}

mod config {
    use super::*;

    #[test]
    fn shows_effective_settings() {
        let project = Project::new();
        let out = project.stdout(&["config"]);
        assert!(out.contains("[lookup]"));
        assert!(out.contains("limit = 100"));
        assert!(out.contains("sort = \"freq\""));
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let project = Project::empty();
        project.lex().arg("init").assert().success();

        let contents = fs::read_to_string(project.path().join(".lex.toml")).unwrap();
        assert!(contents.contains("# [lookup]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let project = Project::empty();
        fs::write(project.path().join(".lex.toml"), "existing").unwrap();
        project
            .lex()
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));
    }

    #[test]
    fn force_overwrites_existing() {
        let project = Project::empty();
        fs::write(project.path().join(".lex.toml"), "old content").unwrap();
        project.lex().args(["init", "--force"]).assert().success();

        let contents = fs::read_to_string(project.path().join(".lex.toml")).unwrap();
        assert!(contents.contains("# [data]"));
    }

    #[test]
    fn global_writes_to_home() {
        let project = Project::empty();
        project.lex().args(["init", "--global"]).assert().success();
        assert!(project.home.path().join(".lex.toml").exists());
        assert!(!project.path().join(".lex.toml").exists());
    }

    #[test]
    fn works_with_broken_config() {
        let project = Project::empty();
        fs::write(project.path().join(".lex.toml"), "[broken").unwrap();
        project.lex().args(["init", "--force"]).assert().success();
    }

    #[test]
    fn written_template_loads() {
        let project = Project::empty();
        project.lex().arg("init").assert().success();
        project.lex().arg("config").assert().success();
    }
}
