//! Command-Line Interface Tests
//!
//! Runs the `spectral-match` binary against temporary FASTA files and checks
//! labels, offsets, output formats, and configuration errors.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fasta_file(contents: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".fa").expect("Failed to create temp file");
    temp.write_all(contents.as_bytes())
        .expect("Failed to write FASTA");
    temp.flush().expect("Failed to flush FASTA");
    temp
}

fn cmd() -> Command {
    Command::cargo_bin("spectral-match").expect("binary should be built")
}

#[test]
fn test_search_prints_label_and_offsets() {
    let genome = fasta_file(">genome1\nABCDABCD\nABCDABCD\n");

    cmd()
        .arg("search")
        .arg("ABCD")
        .arg(genome.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("genome1: [0, 4, 8, 12]"));
}

#[test]
fn test_search_multiple_inputs_in_order() {
    let first = fasta_file(">a\nABCD\n>b\nABC\n");
    let second = fasta_file(">c\nABCDD\n");

    cmd()
        .args(["search", "--chunking", "auto", "DD"])
        .arg(first.path())
        .arg(second.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("a: []\nb: []\nc: [3]\n"));
}

#[test]
fn test_search_scan_algorithm() {
    let genome = fasta_file(">g\nAAAAAABBC\n");

    cmd()
        .args(["search", "--algorithm", "scan", "BC"])
        .arg(genome.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("g: [7]"));
}

#[test]
fn test_search_json_output() {
    let genome = fasta_file(">chrT\nGATTACAGATTACA\n");

    let output = cmd()
        .args(["--format", "json", "search", "TACA"])
        .arg(genome.path())
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json[0]["label"], "chrT");
    assert_eq!(json[0]["length"], 14);
    assert_eq!(json[0]["offsets"], serde_json::json!([3, 10]));
}

#[test]
fn test_search_tsv_output() {
    let genome = fasta_file(">chrT\nGATTACAGATTACA\n");

    cmd()
        .args(["--format", "tsv", "search", "--chunking", "8", "TACA"])
        .arg(genome.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chrT\t14\t2\t3,10"));
}

#[test]
fn test_search_reads_stdin() {
    cmd()
        .args(["search", "AC", "-"])
        .write_stdin(">piped\nACGTAC\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("piped: [0, 4]"));
}

#[test]
fn test_invalid_chunking_rejected() {
    let genome = fasta_file(">g\nACGT\n");

    for bad in ["0", "1.5", "wide"] {
        cmd()
            .args(["search", "--chunking", bad, "AC"])
            .arg(genome.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid chunk width"));
    }
}

#[test]
fn test_chunk_width_smaller_than_pattern_rejected() {
    let genome = fasta_file(">g\nACGTACGT\n");

    cmd()
        .args(["search", "--chunking", "2", "ACGT"])
        .arg(genome.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("smaller than the pattern length"));
}

#[test]
fn test_pattern_longer_than_texts_is_not_an_error() {
    let genome = fasta_file(">short\nACG\n");

    cmd()
        .args(["search", "ACGTACGT"])
        .arg(genome.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("short: []"));
}

#[test]
fn test_verify_agrees() {
    let genome = fasta_file(">x\nACGTTGCAACGTTGCA\n>y\nTTTT\n");

    cmd()
        .args(["verify", "--chunking", "auto", "TGCA"])
        .arg(genome.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("x: OK (2 matches)"))
        .stdout(predicate::str::contains("y: OK (0 matches)"));
}

#[test]
fn test_alphabet_restriction() {
    let genome = fasta_file(">g\nACGTX\n");

    cmd()
        .args(["search", "--alphabet", "dna", "AC"])
        .arg(genome.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not part of the alphabet"));
}

#[test]
fn test_oversized_alphabet_rejected() {
    let genome = fasta_file(">g\nACGT\n");
    let symbols: String = (b'!'..=b'~').map(char::from).collect();

    cmd()
        .args(["search", "--alphabet", &symbols, "AC"])
        .arg(genome.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 64 are supported"));
}

#[test]
fn test_non_fasta_input_rejected() {
    let mut temp = NamedTempFile::with_suffix(".txt").expect("Failed to create temp file");
    temp.write_all(b">g\nACGT\n").expect("Failed to write file");
    temp.flush().expect("Failed to flush file");

    cmd()
        .args(["search", "AC"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a FASTA file"));
}

#[test]
fn test_missing_input_file() {
    cmd()
        .args(["search", "AC", "/nonexistent/genome.fa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
