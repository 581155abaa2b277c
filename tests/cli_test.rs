//! CLI contract tests
//!
//! Drives the keymetry binary end to end against temp project roots:
//! weight-table rendering, verdict-cache error handling, the grams/combine
//! pipeline, keylog analysis, and layout conversion.

use std::path::Path;
use std::process::{Command, Stdio};

fn keymetry_bin() -> String {
    env!("CARGO_BIN_EXE_keymetry").to_string()
}

fn setup_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("cfg")).unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    dir
}

fn run(root: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(keymetry_bin())
        .arg("--root")
        .arg(root)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run keymetry");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

// ============================================================================
// table
// ============================================================================

fn write_full_weights(root: &Path) {
    let fingers = ["index", "middle", "ring", "pinky"];
    let offsets = ["down2", "down1", "same", "up1", "up2"];
    let mut content = String::new();
    for f1 in fingers {
        for r in offsets {
            for f2 in fingers {
                if f1 == f2 && r == "same" {
                    continue;
                }
                content.push_str(&format!("{} {} {} 2.5\n", f1, r, f2));
            }
        }
    }
    std::fs::write(root.join("cfg/bigram_weights"), content).unwrap();
}

#[test]
fn test_table_renders_grid_with_stationary_defaults() {
    let dir = setup_root();
    write_full_weights(dir.path());

    let (code, stdout, _) = run(dir.path(), &["table"]);
    assert_eq!(code, 0);

    let blocks: Vec<&str> = stdout.trim_end().split("\n\n").collect();
    assert_eq!(blocks.len(), 4);
    // Each first-finger block starts with its same-finger row carrying the
    // 0.0 default in the "same" column
    assert!(stdout.contains("2.5\t2.5\t0.0\t2.5\t2.5"));
}

#[test]
fn test_table_missing_cell_fails() {
    let dir = setup_root();
    std::fs::write(dir.path().join("cfg/bigram_weights"), "index down1 middle 1.0\n").unwrap();

    let (code, _, stderr) = run(dir.path(), &["table"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no weight recorded"));
}

// ============================================================================
// rank
// ============================================================================

#[test]
fn test_rank_rejects_malformed_cache() {
    let dir = setup_root();
    std::fs::write(
        dir.path().join("cfg/bigram_cmp"),
        "index down1 middle <> middle down1 index\n",
    )
    .unwrap();

    let (code, _, stderr) = run(dir.path(), &["rank"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("malformed verdict-cache line 1"));
}

#[test]
fn test_rank_rejects_contradictory_cache() {
    let dir = setup_root();
    std::fs::write(
        dir.path().join("cfg/bigram_cmp"),
        "index down1 middle < middle down1 index\n\
         middle down1 index < index down1 middle\n",
    )
    .unwrap();

    let (code, _, stderr) = run(dir.path(), &["rank"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("contradictory verdicts"));
}

#[test]
fn test_rank_with_closed_stdin_fails_without_corrupting_cache() {
    let dir = setup_root();
    // Empty cache, no stdin: the first prompt fails and nothing is appended
    let (code, _, stderr) = run(dir.path(), &["rank"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("stdin closed"));
    assert!(!dir.path().join("cfg/bigram_cmp").exists());
}

// ============================================================================
// grams + combine
// ============================================================================

#[test]
fn test_grams_pipeline_writes_normalized_tables() {
    let dir = setup_root();
    let corpus = dir.path().join("corpus.txt");
    std::fs::write(&corpus, "abab").unwrap();
    std::fs::write(
        dir.path().join("data/filelist_test"),
        format!("{}\n{}\n", corpus.display(), dir.path().join("absent.txt").display()),
    )
    .unwrap();

    let (code, stdout, _) = run(dir.path(), &["grams", "test", "--layer", "layer0"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1 skipped"));

    let unigrams =
        std::fs::read_to_string(dir.path().join("data/unigrams_test_layer0.data")).unwrap();
    let mut lines = unigrams.lines();
    assert_eq!(lines.next().unwrap(), "4.000000000000000000");
    assert_eq!(lines.next().unwrap(), "a 0.500000000000000000");
    assert_eq!(lines.next().unwrap(), "b 0.500000000000000000");

    let bigrams =
        std::fs::read_to_string(dir.path().join("data/bigrams_test_layer0.data")).unwrap();
    assert!(bigrams.starts_with("3.000000000000000000\n"));
    assert!(bigrams.contains("a b 0.666666666666666"));
    assert!(bigrams.contains("b a 0.333333333333333"));

    let trigrams =
        std::fs::read_to_string(dir.path().join("data/trigrams_test_layer0.data")).unwrap();
    assert!(trigrams.contains("a b a 0.5"));
    assert!(trigrams.contains("b a b 0.5"));
}

#[test]
fn test_combine_averages_two_distributions() {
    let dir = setup_root();
    let data = dir.path().join("data");
    for (suffix, uni, bi, tri) in [
        ("one_layer0", "1.0\na 1.000000000000000000\n", "1.0\na a 1.0\n", "1.0\na a a 1.0\n"),
        ("two_layer0", "1.0\nb 1.000000000000000000\n", "1.0\na a 0.5\nb b 0.5\n", "1.0\nb b b 1.0\n"),
    ] {
        std::fs::write(data.join(format!("unigrams_{}.data", suffix)), uni).unwrap();
        std::fs::write(data.join(format!("bigrams_{}.data", suffix)), bi).unwrap();
        std::fs::write(data.join(format!("trigrams_{}.data", suffix)), tri).unwrap();
    }

    let (code, _, _) = run(dir.path(), &["combine", "layer0", "one", "two"]);
    assert_eq!(code, 0);

    let unigrams =
        std::fs::read_to_string(data.join("unigrams_combined_layer0.data")).unwrap();
    let mut lines = unigrams.lines();
    assert_eq!(lines.next().unwrap(), "1.000000000000000000");
    assert_eq!(lines.next().unwrap(), "a 0.500000000000000000");
    assert_eq!(lines.next().unwrap(), "b 0.500000000000000000");

    let bigrams = std::fs::read_to_string(data.join("bigrams_combined_layer0.data")).unwrap();
    assert!(bigrams.contains("a a 0.750000000000000000"));
    assert!(bigrams.contains("b b 0.250000000000000000"));
}

#[test]
fn test_combine_fails_on_malformed_table() {
    let dir = setup_root();
    let data = dir.path().join("data");
    for suffix in ["one_layer0", "two_layer0"] {
        std::fs::write(data.join(format!("unigrams_{}.data", suffix)), "1.0\na\n").unwrap();
        std::fs::write(data.join(format!("bigrams_{}.data", suffix)), "1.0\n").unwrap();
        std::fs::write(data.join(format!("trigrams_{}.data", suffix)), "1.0\n").unwrap();
    }

    let (code, _, stderr) = run(dir.path(), &["combine", "layer0", "one", "two"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("malformed line"));
}

// ============================================================================
// keylog
// ============================================================================

#[test]
fn test_keylog_modes() {
    let dir = setup_root();
    let log = dir.path().join("keys_time.data");
    std::fs::write(
        &log,
        "1000000 H 1\n1100000 I 1\n1150000 I 0\n1200000 DOT 1\nnot a line\n",
    )
    .unwrap();
    let log_str = log.to_str().unwrap();

    let (code, stdout, _) = run(dir.path(), &["keylog", log_str, "clean"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "h\ni\n.\n");

    let (code, stdout, _) = run(dir.path(), &["keylog", log_str, "histogram"]);
    assert_eq!(code, 0);
    let first = stdout.lines().next().unwrap();
    assert!(first.starts_with("1 "));

    let (code, stdout, _) = run(dir.path(), &["keylog", log_str, "press-times"]);
    assert_eq!(code, 0);
    // H's gap from t=0 is a full second, over threshold; I and DOT get 100ms
    assert!(stdout.contains("DOT 100"));
    assert!(stdout.contains("I 100"));
    assert!(!stdout.contains("H "));
}

// ============================================================================
// convert
// ============================================================================

#[test]
fn test_convert_fills_template() {
    let dir = setup_root();
    let mut keys = vec![serde_json::json!({"primary": 97, "shift": 65})];
    for _ in 0..30 {
        keys.push(serde_json::json!({"primary": 0, "shift": 0}));
    }
    let template = serde_json::json!({ "keys": keys });
    let template_path = dir.path().join("analyzer.json");
    std::fs::write(&template_path, serde_json::to_string(&template).unwrap()).unwrap();

    let layout_path = dir.path().join("layout.txt");
    std::fs::write(
        &layout_path,
        "z r d f v / u , . q\nx n s t p y e a o g\nw m c l b k i ; h j\n",
    )
    .unwrap();

    let (code, stdout, _) = run(
        dir.path(),
        &["convert", template_path.to_str().unwrap(), layout_path.to_str().unwrap()],
    );
    assert_eq!(code, 0);

    let filled: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let slots = filled["keys"].as_array().unwrap();
    assert_eq!(slots[0]["primary"], 97); // untouched
    assert_eq!(slots[1]["primary"], 'z' as u32);
    assert_eq!(slots[1]["shift"], 'Z' as u32);
    assert_eq!(slots[30]["primary"], 'j' as u32);

    // A 29-key layout must fail
    std::fs::write(&layout_path, "a b c\n").unwrap();
    let (code, _, stderr) = run(
        dir.path(),
        &["convert", template_path.to_str().unwrap(), layout_path.to_str().unwrap()],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("expected 30"));
}
