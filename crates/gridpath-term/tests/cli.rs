//! Headless runs of the `gridpath` binary: output, exit codes, map errors.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A map written to a temporary directory that lives as long as the value.
struct MapFile {
    _dir: TempDir,
    path: PathBuf,
}

impl MapFile {
    fn new(text: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("map.txt");
        fs::write(&path, text).expect("write map");
        Self { _dir: dir, path }
    }
}

fn gridpath() -> Command {
    Command::cargo_bin("gridpath").expect("binary exists")
}

fn headless(map: &MapFile, algorithm: &str) -> Command {
    let mut cmd = gridpath();
    cmd.args(["--headless", "--algorithm", algorithm, "--map"])
        .arg(&map.path);
    cmd
}

#[test]
fn finds_a_path_and_prints_the_marked_grid() {
    let map = MapFile::new("S....\n.###.\n....E\n");
    headless(&map, "bfs")
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS: found path of length 6"))
        .stdout(predicate::str::contains("*"));
}

#[test]
fn every_optimal_algorithm_agrees() {
    let map = MapFile::new(
        "S..#......
         .#.#.####.
         .#...#....
         .####.#.#.
         ......#..E",
    );
    for algo in ["bfs", "ids", "ucs", "dijkstra", "astar"] {
        headless(&map, algo)
            .assert()
            .success()
            .stdout(predicate::str::contains("found path of length 17"));
    }
}

#[test]
fn unreachable_end_exits_with_two() {
    let map = MapFile::new("S.#..\n..#.E\n");
    headless(&map, "dfs")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("DFS: no path"))
        .stdout(predicate::str::contains("*").not());
}

#[test]
fn missing_end_is_an_error_exit() {
    let map = MapFile::new("S...\n....\n");
    headless(&map, "ucs")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("start or end not set"));
}

#[test]
fn ids_depth_bound_is_honoured() {
    let map = MapFile::new("S.....E\n");
    headless(&map, "ids")
        .args(["--ids-max-depth", "5"])
        .assert()
        .code(2);
    headless(&map, "ids")
        .args(["--ids-max-depth", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found path of length 6"));
}

#[test]
fn generated_grid_uses_corner_endpoints() {
    gridpath()
        .args(["--headless", "--rows", "5", "--cols", "5", "-a", "astar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("S"))
        .stdout(predicate::str::contains("A*: found path of length 8"));
}

#[test]
fn seeded_walls_are_reproducible() {
    let run = || {
        gridpath()
            .args([
                "--headless", "--rows", "12", "--cols", "20", "--walls", "0.3", "--seed", "42",
            ])
            .output()
            .expect("run gridpath")
    };
    let (a, b) = (run(), run());
    assert!(!a.stdout.is_empty());
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(a.status.code(), b.status.code());
}

#[test]
fn bad_glyph_is_reported() {
    let map = MapFile::new("S.?\n..E\n");
    headless(&map, "bfs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown glyph '?'"));
}

#[test]
fn missing_map_file_is_reported() {
    gridpath()
        .args(["--headless", "--map", "/nonexistent/gridpath/map.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read map"));
}

#[test]
fn unknown_algorithm_is_rejected() {
    gridpath()
        .args(["--headless", "--algorithm", "greedy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown algorithm"));
}
